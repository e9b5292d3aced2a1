//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Arm signal handlers → Bind listener → Serve on background task
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM/SIGQUIT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Signals are armed before the listener exists, so a signal delivered
//!   during startup is not lost
//! - Ordered shutdown: stop accept, drain, close
//! - Shutdown has a deadline: remaining connections are forced closed
//!   after the configured drain timeout

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use signals::Termination;
pub use startup::{run, LifecycleError};
