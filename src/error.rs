use crate::models::ValidationResult;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("Invalid idea")]
    InvalidIdea,

    #[error("Groq key missing")]
    CredentialMissing,

    #[error("Upstream error: {0}")]
    Upstream(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ValidateError {
    fn into_response(self) -> Response {
        match self {
            ValidateError::InvalidIdea => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            // Live data unavailable: answer with the static demo result.
            ValidateError::CredentialMissing | ValidateError::Upstream(_) => {
                (StatusCode::OK, Json(ValidationResult::demo())).into_response()
            }
        }
    }
}
