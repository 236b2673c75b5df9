mod config;
mod error;
mod models;
mod routes;
mod tasks;
mod tools;

use anyhow::Result;
use clap::Parser;
use config::Config;
use routes::{create_router, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("idea_validator=debug,tower_http=info")),
        )
        .init();

    let config = Config::parse();
    let addr = config.listen_addr;
    if config.groq_api_key().is_none() {
        warn!("GROQ_API_KEY is not set; /api/validate will serve the demo result");
    }

    let app = create_router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Idea validator running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
