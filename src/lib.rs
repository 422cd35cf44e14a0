//! jobserve_scraper library: saved-search scraping for JobServe.
//!
//! One invocation resolves a saved search (session handle) into job
//! identifiers, fetches each job's detail from the site's web service, and
//! returns the records as a JSON envelope for the invoking platform.
//!
//! # Example
//!
//! ```no_run
//! use jobserve_scraper::{handle, init_context, Config, Invocation};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = init_context(&Config::default())?;
//! let envelope = handle(&ctx, Invocation::with_shid("8B48E22B1865559DA4EB")).await?;
//! println!("{}", envelope.body);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Requests are issued one at a time.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod fetch;
mod handler;
pub mod initialization;
mod models;
pub mod parse;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ErrorType, InitializationError, MissingFieldError, ScrapeError};
pub use fetch::{fetch_job_detail, fetch_job_ids, ScrapeContext};
pub use handler::{handle, handle_event};
pub use initialization::init_context;
pub use models::{Invocation, JobRecord, ResultEnvelope};
