//! Process inspection subsystem.
//!
//! # Data Flow
//! ```text
//! /env request
//!     → env.rs (snapshot process environment)
//!     → render (HTML table)
//!
//! /secrets request
//!     → secrets.rs (enumerate secret mount directories)
//!     → render (HTML table)
//! ```
//!
//! # Design Decisions
//! - Everything is re-read per request; no caching, no shared state
//! - Readers never panic on odd input (non-UTF-8 names, missing files)

pub mod env;
pub mod secrets;

pub use env::EnvEntry;
pub use secrets::Secret;
