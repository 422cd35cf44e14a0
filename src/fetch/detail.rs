//! Detail fetching: job identifier → `JobRecord`.

use log::debug;

use crate::config::MAX_BODY_PREVIEW_CHARS;
use crate::error_handling::ScrapeError;
use crate::fetch::context::ScrapeContext;
use crate::fetch::request::{send_for_text, DetailRequest, DetailRequestHeaders};
use crate::models::JobRecord;
use crate::parse::{extract_job_record, parse_detail_response};
use crate::utils::preview;

/// Fetches and parses the detail of one job.
///
/// POSTs `{"id": job_id}` to the detail web service, unescapes the returned
/// `d.JobDetailHtml` fragment, and applies the field table. Missing detail
/// elements become `None` fields, never errors.
///
/// # Errors
///
/// - `ScrapeError::Transport` if the request fails or the status is not 2xx
/// - `ScrapeError::ResponseShape` if the body has no `d.JobDetailHtml` string
pub async fn fetch_job_detail(ctx: &ScrapeContext, job_id: &str) -> Result<JobRecord, ScrapeError> {
    let url = ctx.endpoints.detail_url();
    debug!(
        "Fetching detail for job {} with headers {:?}",
        job_id,
        DetailRequestHeaders::as_vec(&ctx.endpoints, job_id)
    );

    let builder = DetailRequestHeaders::apply_to_request_builder(
        ctx.client.post(url.clone()),
        &ctx.endpoints,
        job_id,
    )
    .json(&DetailRequest { id: job_id });
    let body = send_for_text(builder, url.as_str()).await?;

    let fragment = parse_detail_response(&body).map_err(|source| {
        debug!(
            "Unexpected detail response for job {}: {}",
            job_id,
            preview(&body, MAX_BODY_PREVIEW_CHARS)
        );
        ScrapeError::ResponseShape {
            url: url.to_string(),
            source,
        }
    })?;

    Ok(extract_job_record(job_id, &fragment, &ctx.fields))
}
