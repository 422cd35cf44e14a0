//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Text extraction and log preview helpers

mod selector;
mod text;

pub use selector::{parse_selector_unsafe, try_parse_selector};
pub use text::{preview, stripped_text};
