//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_SESSION_HANDLE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for log shippers
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use jobserve_scraper::Config;
///
/// let config = Config {
///     timeout_seconds: 10,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the job board (scheme, host, optional port)
    pub base_url: String,

    /// Session handle used when the invocation does not carry one
    pub default_shid: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// JSON file replacing the built-in field table
    pub field_table: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_shid: DEFAULT_SESSION_HANDLE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            field_table: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what would be accepted
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks the configuration before any resource is built.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }
        if self.default_shid.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "default_shid",
                message: "must not be empty".to_string(),
            });
        }
        match url::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            Ok(url) => Err(ConfigValidationError {
                field: "base_url",
                message: format!("scheme must be http or https, got '{}'", url.scheme()),
            }),
            Err(e) => Err(ConfigValidationError {
                field: "base_url",
                message: format!("'{}' is not an absolute URL ({})", self.base_url, e),
            }),
        }
    }
}

/// Command-line options for the local invoker.
///
/// # Examples
///
/// ```bash
/// # Default saved search
/// jobserve_scraper
///
/// # Explicit handle
/// jobserve_scraper --shid 8B48E22B1865559DA4EB
///
/// # Platform-style event from stdin
/// echo '{"shid":"8B48E22B1865559DA4EB"}' | jobserve_scraper --event -
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "jobserve_scraper",
    about = "Resolves a JobServe saved search and prints the job details as a JSON envelope."
)]
pub struct Opt {
    /// Session handle of the saved search (defaults to the built-in handle)
    #[arg(long, conflicts_with = "event")]
    pub shid: Option<String>,

    /// Invocation event as a JSON file, or `-` for stdin
    #[arg(long, value_parser)]
    pub event: Option<PathBuf>,

    /// Base URL of the job board
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Session handle used when the event has no `shid`
    #[arg(long, default_value = DEFAULT_SESSION_HANDLE)]
    pub default_shid: String,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// JSON field table replacing the built-in selectors
    #[arg(long, value_parser)]
    pub field_table: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            base_url: opt.base_url.clone(),
            default_shid: opt.default_shid.clone(),
            user_agent: opt.user_agent.clone(),
            timeout_seconds: opt.timeout_seconds,
            field_table: opt.field_table.clone(),
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
        }
    }
}
