//! Conduit API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p conduit-api
//! ```
//!
//! Configuration is loaded from environment variables (see `AppConfig`).

use conduit_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("starting conduit api server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.server.port,
        "configuration loaded"
    );

    // Run the server
    conduit_api::run(config).await?;

    Ok(())
}
