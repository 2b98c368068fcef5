use anyhow::Error as AnyhowError;
use oxford_client::{OxfordClient, OxfordConfig};
use server::{AppState, routes};
use speechlet::SkillConfig;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Debug, Error)]
pub enum WordLookupError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] AnyhowError),
}

#[tokio::main]
async fn main() -> Result<(), WordLookupError> {
    // Load environment variables from `.env` if present so local development picks up API keys
    dotenv::dotenv().ok();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_string = format!(
        "warn,server={level},speechlet={level},oxford_client={level}",
        level = log_level
    );
    let env_filter = EnvFilter::try_new(filter_string).expect("Failed to create tracing filter");
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let skill_config = SkillConfig::from_env();
    if skill_config.application_id.is_none() {
        tracing::warn!(
            "SKILL_APPLICATION_ID not set - accepting requests from any application"
        );
    }

    let oxford = match OxfordConfig::from_env() {
        Some(config) => Some(OxfordClient::new(config)),
        None => {
            tracing::warn!(
                "OXFORD_APP_ID / OXFORD_APP_KEY not set - lookups will fail closed with an apology"
            );
            None
        }
    };

    let app_router = routes::router(AppState::new(skill_config, oxford));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.trim().parse::<u16>().ok())
        .unwrap_or(8080);
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;

    tracing::info!("Server running on http://{host}:{port}");

    axum::serve(listener, app_router).await?;
    Ok(())
}
