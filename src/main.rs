//! podscope
//!
//! A diagnostic HTTP server for containerized processes, built with Tokio
//! and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                  PODSCOPE                     │
//!                     │                                               │
//!   Client Request    │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   ──────────────────┼─▶│  http   │───▶│ handlers │───▶│ inspect │  │
//!                     │  │ server  │    │          │    │ env /   │  │
//!                     │  └─────────┘    └────┬─────┘    │ secrets │  │
//!                     │                      │          └─────────┘  │
//!                     │                      ▼                       │
//!   Client Response   │                ┌──────────┐                  │
//!   ◀─────────────────┼────────────────│  render  │                  │
//!                     │                └──────────┘                  │
//!                     │                                               │
//!                     │  ┌─────────────────────────────────────────┐ │
//!                     │  │          Cross-Cutting Concerns          │ │
//!                     │  │  ┌─────────┐  ┌───────────────────────┐ │ │
//!                     │  │  │ config  │  │      lifecycle         │ │ │
//!                     │  │  │         │  │  signals / shutdown    │ │ │
//!                     │  │  └─────────┘  └───────────────────────┘ │ │
//!                     │  └─────────────────────────────────────────┘ │
//!                     └──────────────────────────────────────────────┘
//! ```
//!
//! Routes:
//! - `/env` renders the process environment as an HTML table
//! - `/secrets` renders mounted secrets from the secrets root
//! - everything else answers `200 OK` (health catch-all)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podscope::config::ServerConfig;
use podscope::lifecycle;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podscope=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("podscope v{} starting", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::from_env()?;

    tracing::info!(
        bind_address = %config.bind_address,
        secrets_root = %config.secrets_root.display(),
        drain_timeout_secs = config.drain_timeout_secs,
        "Configuration loaded"
    );

    // Arm signals, bind, serve, wait, drain. Any error here is fatal.
    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
