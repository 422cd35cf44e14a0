//! HTTP request building and response handling.

use reqwest::header::{CONTENT_TYPE, ORIGIN, REFERER};
use serde::Serialize;

use crate::config::{Endpoints, DETAIL_CONTENT_TYPE};
use crate::error_handling::ScrapeError;

/// JSON body of a detail request: `{"id": "<job id>"}`.
#[derive(Debug, Serialize)]
pub(crate) struct DetailRequest<'a> {
    pub(crate) id: &'a str,
}

/// Headers the detail web service checks before answering.
///
/// The service only responds to requests that look like they come from its own
/// search page, so `Origin` and `Referer` point back at the site (the referer
/// opens the same job). The User-Agent is set on the client.
pub(crate) struct DetailRequestHeaders;

impl DetailRequestHeaders {
    /// Returns headers as a vector of (name, value) tuples for debug logging.
    pub(crate) fn as_vec(endpoints: &Endpoints, job_id: &str) -> Vec<(String, String)> {
        vec![
            ("content-type".to_string(), DETAIL_CONTENT_TYPE.to_string()),
            ("origin".to_string(), endpoints.origin().to_string()),
            (
                "referer".to_string(),
                endpoints.referer_url(job_id).to_string(),
            ),
        ]
    }

    /// Applies the detail headers to a `reqwest::RequestBuilder`.
    ///
    /// Must run before `.json()`, which only sets `Content-Type` when absent.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
        endpoints: &Endpoints,
        job_id: &str,
    ) -> reqwest::RequestBuilder {
        builder
            .header(CONTENT_TYPE, DETAIL_CONTENT_TYPE)
            .header(ORIGIN, endpoints.origin())
            .header(REFERER, endpoints.referer_url(job_id).as_str())
    }
}

/// Sends a request and returns the body of a 2xx response.
///
/// Connection failures, non-2xx statuses, and body read failures all become
/// `ScrapeError::Transport` tagged with `url`.
pub(crate) async fn send_for_text(
    builder: reqwest::RequestBuilder,
    url: &str,
) -> Result<String, ScrapeError> {
    let transport = |source: reqwest::Error| ScrapeError::Transport {
        url: url.to_string(),
        source,
    };

    let response = builder.send().await.map_err(transport)?;
    let status = response.status();
    log::debug!("HTTP {} from {}", status, url);

    let response = response.error_for_status().map_err(transport)?;
    response.text().await.map_err(transport)
}
