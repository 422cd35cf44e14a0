//! Outbound HTTP for the two pipeline stages.
//!
//! This module provides:
//! - `fetch_job_ids`: one GET to the search page, session handle → identifiers
//! - `fetch_job_detail`: one POST per identifier → `JobRecord`
//! - `ScrapeContext`: the shared client, endpoints, and field table
//!
//! Parsing lives in `crate::parse`; this module only moves bytes and maps
//! failures onto `ScrapeError`.

mod context;
mod detail;
mod request;
mod resolve;

// Re-export public API
#[cfg(test)]
pub(crate) use context::create_test_context;
pub use context::ScrapeContext;
pub use detail::fetch_job_detail;
pub use resolve::fetch_job_ids;
