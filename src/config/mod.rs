//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (remote site paths, defaults, timeouts)
//! - Endpoint construction for the two outbound calls
//! - Library `Config`, its validation, and the CLI option type

mod constants;
mod endpoints;
mod types;

// Re-export all constants
pub use constants::*;
pub use endpoints::Endpoints;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, Opt};
