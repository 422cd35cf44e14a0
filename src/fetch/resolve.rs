//! Identifier resolution: session handle → job identifiers.

use log::{debug, info};

use crate::error_handling::ScrapeError;
use crate::fetch::context::ScrapeContext;
use crate::fetch::request::send_for_text;
use crate::parse::parse_job_ids;

/// Resolves a session handle into the job identifiers of its saved search.
///
/// Issues one GET to the search page and reads the hidden `input#jobIDs`
/// field. Only the first results page is read.
///
/// # Errors
///
/// - `ScrapeError::Transport` if the request fails or the status is not 2xx
/// - `ScrapeError::MissingField` if the page has no identifier field
pub async fn fetch_job_ids(ctx: &ScrapeContext, shid: &str) -> Result<Vec<String>, ScrapeError> {
    let url = ctx.endpoints.search_url(shid);
    debug!("Fetching search page {}", url);

    let body = send_for_text(ctx.client.get(url.clone()), url.as_str()).await?;
    let job_ids = parse_job_ids(&body).map_err(|source| ScrapeError::MissingField {
        url: url.to_string(),
        source,
    })?;

    info!("Resolved {} job id(s) for shid {}", job_ids.len(), shid);
    Ok(job_ids)
}
