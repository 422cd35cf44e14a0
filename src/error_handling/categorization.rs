//! Error categorization.
//!
//! Maps `reqwest::Error`s and pipeline errors onto `ErrorType` for logging.

use super::types::{ErrorType, ScrapeError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// HTTP status codes are checked first (they come from `error_for_status`),
/// then the reqwest error kind.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        match status.as_u16() {
            403 => return ErrorType::HttpRequestBotDetectionError,
            404 => return ErrorType::HttpRequestNotFound,
            429 => return ErrorType::HttpRequestTooManyRequests,
            500 => return ErrorType::HttpRequestInternalServerError,
            503 => return ErrorType::HttpRequestServiceUnavailable,
            _ if status.is_client_error() || status.is_server_error() => {
                return ErrorType::HttpRequestStatusError;
            }
            _ => {}
        }
    }

    // Timeout and connect errors also report is_request(), so they go first
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

impl ScrapeError {
    /// Category used to tag this error in logs.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ScrapeError::Transport { source, .. } => categorize_reqwest_error(source),
            ScrapeError::MissingField { .. } => ErrorType::MissingJobIdsField,
            ScrapeError::ResponseShape { .. } => ErrorType::DetailResponseShapeError,
            ScrapeError::InvalidInput(_) => ErrorType::InvalidInvocationError,
            ScrapeError::Serialization(_) => ErrorType::SerializationError,
        }
    }
}
