//! Binary entry point: loads configuration and serves the session routes.
//!
//! ```bash
//! JWT_SECRET=change-me cargo run
//! curl http://localhost:3000/ping
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use uigen_session::{config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();

    tracing::info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    // A missing signing secret stops the process here.
    let config = Config::from_env().context("failed to load configuration")?;

    server::start(config).await
}
