//! Startup and run orchestration.
//!
//! # Responsibilities
//! - Arm signal handlers, then bind, then serve (in that order)
//! - Block until a termination signal arrives
//! - Bound the drain with the configured timeout, forcing close after it
//!
//! # Design Decisions
//! - Fail fast: any bind or serve error is fatal
//! - The serve loop only stops when told to; stopping on its own is an error
//! - Forced close after the drain deadline is a clean exit, not a failure

use std::io;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::Termination;

/// Error type for lifecycle failures. Every variant is fatal.
#[derive(Debug)]
pub enum LifecycleError {
    /// Could not arm the signal handlers.
    Signals(io::Error),
    /// Could not bind the listen address.
    Bind(io::Error),
    /// The serve loop failed, or stopped before any signal.
    Serve(io::Error),
}

impl std::fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleError::Signals(e) => write!(f, "failed to arm signal handlers: {e}"),
            LifecycleError::Bind(e) => write!(f, "failed to bind: {e}"),
            LifecycleError::Serve(e) => write!(f, "server error: {e}"),
        }
    }
}

impl std::error::Error for LifecycleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LifecycleError::Signals(e) | LifecycleError::Bind(e) | LifecycleError::Serve(e) => {
                Some(e)
            }
        }
    }
}

/// Run the server to completion: bind, serve, wait for a signal, drain.
///
/// Returns `Ok(())` on clean shutdown, including a drain cut short by the
/// deadline. Any other exit is a `LifecycleError`.
pub async fn run(config: ServerConfig) -> Result<(), LifecycleError> {
    let mut termination = Termination::arm().map_err(LifecycleError::Signals)?;

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(LifecycleError::Bind)?;
    let addr = listener.local_addr().map_err(LifecycleError::Bind)?;
    tracing::info!(address = %addr, "Listener bound");

    let shutdown = Shutdown::new();
    let drain_timeout = config.drain_timeout();
    let server = HttpServer::new(config);

    let serve_rx = shutdown.subscribe();
    let mut serve_task = tokio::spawn(async move { server.run(listener, serve_rx).await });

    tokio::select! {
        result = &mut serve_task => {
            return Err(LifecycleError::Serve(flatten_serve_exit(result)));
        }
        _ = termination.recv() => {}
    }

    shutdown.trigger();

    match tokio::time::timeout(drain_timeout, &mut serve_task).await {
        Ok(Ok(Ok(()))) => {
            tracing::info!("Graceful shutdown complete");
            Ok(())
        }
        Ok(result) => Err(LifecycleError::Serve(flatten_serve_exit(result))),
        Err(_) => {
            serve_task.abort();
            tracing::warn!(
                timeout_secs = drain_timeout.as_secs(),
                "Drain deadline exceeded, forcing close"
            );
            Ok(())
        }
    }
}

/// Collapse the spawned serve task's exit into one error.
///
/// A clean return without a shutdown trigger still maps to an error here:
/// the accept loop has no legitimate reason to stop on its own.
fn flatten_serve_exit(result: Result<Result<(), io::Error>, tokio::task::JoinError>) -> io::Error {
    match result {
        Ok(Ok(())) => io::Error::other("server stopped unexpectedly"),
        Ok(Err(err)) => err,
        Err(join_err) => io::Error::other(join_err),
    }
}
