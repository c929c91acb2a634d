use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use posture_api::{build_landmark_source, ApiConfig, ApiServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1);
    let config = ApiConfig::load(config_path.as_deref()).context("failed to load configuration")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    tracing::info!("Starting Posture Detection API");

    let source = build_landmark_source(&config).context("failed to set up landmark source")?;
    ApiServer::new(config, source).run().await
}
