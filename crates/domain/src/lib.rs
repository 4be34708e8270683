//! Types shared by every watch-actions crate: the TOML configuration
//! model, the common error type and structured trace events.

pub mod config;
pub mod error;
pub mod trace;
