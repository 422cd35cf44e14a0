//! HTML and JSON parsing.
//!
//! Pure functions with no network access:
//! - Job identifiers from the search page's hidden field
//! - The detail fragment from the web-service JSON
//! - Job records from a detail fragment, driven by the field table
//!
//! All HTML parsing is done using CSS selectors via the `scraper` crate.

mod detail;
pub mod fields;
mod job_ids;

// Re-export public API
pub use detail::{extract_job_record, parse_detail_response};
pub use fields::{CompiledFieldTable, Extraction, FieldRule, FieldTable, JobField};
pub use job_ids::{parse_job_ids, split_job_ids};
