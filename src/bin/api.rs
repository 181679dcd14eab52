use summarizer::api::serve;
use summarizer::core::config::AppConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    summarizer::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;
    info!(
        order = ?config.provider_order,
        timeout_secs = config.provider_timeout.as_secs(),
        "Starting AI Summarizer API"
    );

    serve(&config).await?;
    Ok(())
}
