//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the diagnostic handlers
//! - Wire up middleware (tracing, request timeout)
//! - Serve on a bound listener until the shutdown signal fires
//! - Drain in-flight requests on shutdown (deadline enforced by lifecycle)

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::handlers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

/// HTTP server for the diagnostic endpoints.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let request_timeout = config.request_timeout();
        let state = AppState {
            config: Arc::new(config),
        };

        let router = Self::build_router(state, request_timeout);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// `/env` and `/secrets` are exact matches; the fallback catches every
    /// other path, `/` included. No method restriction on any of them.
    fn build_router(state: AppState, request_timeout: Duration) -> Router {
        Router::new()
            .route("/env", any(handlers::env_handler))
            .route("/secrets", any(handlers::secrets_handler))
            .fallback(handlers::default_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` fires and in-flight requests have finished,
    /// or with an error if the accept loop fails.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
