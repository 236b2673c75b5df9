use crate::config::Config;
use crate::error::ValidateError;
use crate::models::{ValidateRequest, ValidationResult};
use crate::tasks::{build_prompt, gather_discussions, parse_analysis};
use crate::tools::{
    hacker_news::HackerNewsSearch, llm::GroqClient, reddit::RedditSearch, DiscussionSource,
};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};
use uuid::Uuid;

const MIN_IDEA_CHARS: usize = 5;

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    sources: Arc<[Box<dyn DiscussionSource>]>,
    llm: GroqClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let sources: Vec<Box<dyn DiscussionSource>> = vec![
            Box::new(HackerNewsSearch::new(client.clone(), &config.hn_base_url)),
            Box::new(RedditSearch::new(client.clone(), &config.reddit_base_url)),
        ];
        let llm = GroqClient::new(client, &config.groq_base_url, &config.groq_model);

        Ok(Self {
            config: Arc::new(config),
            sources: sources.into(),
            llm,
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/validate",
            post(validate).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn validate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ValidationResult>, ValidateError> {
    let idea = parse_idea(&body)?;
    info!("Validating idea ({} chars)", idea.chars().count());

    run_pipeline(&state, &idea)
        .await
        .inspect_err(|e| error!("Validation failed, serving demo result: {:#}", e))
        .map(Json)
}

fn parse_idea(body: &[u8]) -> Result<String, ValidateError> {
    let request: ValidateRequest =
        serde_json::from_slice(body).map_err(|_| ValidateError::InvalidIdea)?;
    if request.idea.trim().chars().count() < MIN_IDEA_CHARS {
        return Err(ValidateError::InvalidIdea);
    }
    Ok(request.idea)
}

async fn run_pipeline(state: &AppState, idea: &str) -> Result<ValidationResult, ValidateError> {
    let api_key = state
        .config
        .groq_api_key()
        .ok_or(ValidateError::CredentialMissing)?;

    let discussions = gather_discussions(&state.sources, idea).await;
    let prompt = build_prompt(idea, &discussions);
    info!(
        discussions = discussions.len(),
        prompt_len = prompt.len(),
        "Built analysis prompt"
    );

    let content = state.llm.complete(api_key, &prompt).await?;
    info!(
        content_len = content.as_ref().map_or(0, String::len),
        "Received completion"
    );
    let analysis = parse_analysis(content.as_deref());

    Ok(ValidationResult::new(discussions, analysis))
}
