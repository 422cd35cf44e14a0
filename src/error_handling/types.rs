//! Error type definitions.
//!
//! This module defines the fatal pipeline errors, initialization errors, and
//! the `ErrorType` categories used when logging a failed invocation.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::ConfigValidationError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Configuration rejected by `Config::validate`.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigValidationError),

    /// Base URL could not be turned into endpoints.
    #[error("Invalid base URL: {0}")]
    BaseUrlError(#[from] url::ParseError),

    /// Field table file could not be read.
    #[error("Failed to read field table {}: {source}", path.display())]
    FieldTableReadError {
        /// Path of the table file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Field table file is not a valid table.
    #[error("Failed to parse field table {}: {source}", path.display())]
    FieldTableParseError {
        /// Path of the table file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A field table rule carries a selector `scraper` cannot parse.
    #[error("Invalid selector '{selector}' for field '{field}': {message}")]
    SelectorError {
        /// Record field the rule fills
        field: String,
        /// The rejected selector
        selector: String,
        /// Parser message
        message: String,
    },
}

/// The identifier-bearing element is absent from the search page.
///
/// Signals that the page structure changed or the session handle is invalid
/// or expired. Unlike a missing detail element this is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no element matches `{selector}` on the search page")]
pub struct MissingFieldError {
    /// Selector that found nothing
    pub selector: String,
}

/// Fatal errors of one invocation. None of them is retried or recovered.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Network failure or non-2xx status on either outbound call.
    #[error("transport error for {url}: {source}")]
    Transport {
        /// Request URL
        url: String,
        /// Underlying reqwest error (carries the status for non-2xx responses)
        source: ReqwestError,
    },

    /// The search page has no job identifier field.
    #[error("missing field on {url}: {source}")]
    MissingField {
        /// Search page URL
        url: String,
        /// Which element was missing
        source: MissingFieldError,
    },

    /// The detail response lacks `d.JobDetailHtml` or is not JSON at all.
    #[error("unexpected response shape from {url}: {source}")]
    ResponseShape {
        /// Detail service URL
        url: String,
        /// Deserialization failure describing the missing path
        source: serde_json::Error,
    },

    /// The invocation event is not a `{ "shid"?: string }` object.
    #[error("invalid invocation input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    /// The collected records could not be serialized.
    #[error("failed to serialize job records: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Categories of invocation failures, used to tag error logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    /// Request could not be built
    HttpRequestBuilderError,
    /// Redirect policy violated
    HttpRequestRedirectError,
    /// Other non-2xx status
    HttpRequestStatusError,
    /// Request timed out
    HttpRequestTimeoutError,
    /// Request failed to send
    HttpRequestRequestError,
    /// Connection could not be established
    HttpRequestConnectError,
    /// Response body could not be read
    HttpRequestBodyError,
    /// Response body could not be decoded
    HttpRequestDecodeError,
    /// Uncategorized transport failure
    HttpRequestOtherError,
    /// 429 Too Many Requests
    HttpRequestTooManyRequests,
    /// 403 Forbidden, typically bot detection
    HttpRequestBotDetectionError,
    /// 404 Not Found
    HttpRequestNotFound,
    /// 500 Internal Server Error
    HttpRequestInternalServerError,
    /// 503 Service Unavailable
    HttpRequestServiceUnavailable,
    // Remote contract errors
    /// Search page has no job id field
    MissingJobIdsField,
    /// Detail response lacks the fragment
    DetailResponseShapeError,
    // Local errors
    /// Invocation event is malformed
    InvalidInvocationError,
    /// Records could not be serialized
    SerializationError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable label for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::MissingJobIdsField => "Missing job identifier field",
            ErrorType::DetailResponseShapeError => "Unexpected detail response shape",
            ErrorType::InvalidInvocationError => "Invalid invocation input",
            ErrorType::SerializationError => "Serialization error",
        }
    }
}
