//! Recipe Box - main entry point

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipe_box::{run_server, shutdown_signal, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,recipe_box=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Recipe Box");

    let config = AppConfig::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let server = run_server(&config).await?;
    tracing::info!("Serving {} recipes", server.store().len().await);

    shutdown_signal().await;
    server.close().await
}
