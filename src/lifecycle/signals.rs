//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGINT, SIGTERM, SIGQUIT)
//! - Translate the first termination signal into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Streams are armed at construction time, before the listener binds, so
//!   a signal delivered during startup is not lost

use tokio::signal::unix::{signal, Signal, SignalKind};

/// Armed termination-signal streams.
pub struct Termination {
    interrupt: Signal,
    terminate: Signal,
    quit: Signal,
}

impl Termination {
    /// Arm handlers for SIGINT, SIGTERM and SIGQUIT.
    pub fn arm() -> std::io::Result<Self> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
            quit: signal(SignalKind::quit())?,
        })
    }

    /// Wait for the first termination signal.
    pub async fn recv(&mut self) {
        tokio::select! {
            _ = self.interrupt.recv() => {
                tracing::info!(signal = "SIGINT", "Termination signal received");
            }
            _ = self.terminate.recv() => {
                tracing::info!(signal = "SIGTERM", "Termination signal received");
            }
            _ = self.quit.recv() => {
                tracing::info!(signal = "SIGQUIT", "Termination signal received");
            }
        }
    }
}
