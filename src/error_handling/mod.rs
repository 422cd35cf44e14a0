//! Error handling.
//!
//! This module provides:
//! - The fatal pipeline error taxonomy (`ScrapeError`)
//! - Initialization errors
//! - Error categorization for log tagging
//!
//! A missing detail element is not an error anywhere in this module: it
//! becomes a `null` field in the record.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{ErrorType, InitializationError, MissingFieldError, ScrapeError};
