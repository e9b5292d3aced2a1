//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → handlers.rs (env / secrets / default)
//!     → inspect::* (read environment or secret mounts)
//!     → render (HTML table body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;

pub use server::HttpServer;
