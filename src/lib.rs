//! podscope library.
//!
//! Diagnostic HTTP server for containerized processes. Exposes the process
//! environment and mounted secret files for inspection, plus a catch-all
//! health endpoint.

pub mod config;
pub mod http;
pub mod inspect;
pub mod lifecycle;
pub mod render;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
