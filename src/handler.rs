//! Invocation entry point.
//!
//! Resolves the session handle, fetches every job's detail in resolution
//! order, and wraps the records in a `ResultEnvelope`. Requests are awaited
//! one at a time; the first failure aborts the invocation and no partial
//! result is returned.

use log::{debug, error, info};

use crate::config::SUCCESS_STATUS_CODE;
use crate::error_handling::ScrapeError;
use crate::fetch::{fetch_job_detail, fetch_job_ids, ScrapeContext};
use crate::models::{Invocation, JobRecord, ResultEnvelope};

/// Runs one invocation.
///
/// Uses `input.shid`, or the context's default session handle when absent.
///
/// # Errors
///
/// Any `ScrapeError` from resolution or from a detail fetch, unchanged. There
/// is no error envelope: the invoking platform reports the failure.
pub async fn handle(ctx: &ScrapeContext, input: Invocation) -> Result<ResultEnvelope, ScrapeError> {
    let shid = input.shid.unwrap_or_else(|| ctx.default_shid.clone());

    let result = collect_records(ctx, &shid).await.and_then(|records| {
        let body = serde_json::to_string_pretty(&records).map_err(ScrapeError::Serialization)?;
        let body = escape_non_ascii(&body);
        Ok((records.len(), body))
    });

    match result {
        Ok((count, body)) => {
            info!("Returning {} job record(s) for shid {}", count, shid);
            Ok(ResultEnvelope {
                status_code: SUCCESS_STATUS_CODE,
                body,
            })
        }
        Err(e) => {
            error!("Invocation for shid {} failed [{}]: {}", shid, e.error_type(), e);
            Err(e)
        }
    }
}

/// Runs one invocation from a raw platform event object.
///
/// # Errors
///
/// `ScrapeError::InvalidInput` if the event is not a `{ "shid"?: string }`
/// object; otherwise whatever `handle` returns.
pub async fn handle_event(
    ctx: &ScrapeContext,
    event: serde_json::Value,
) -> Result<ResultEnvelope, ScrapeError> {
    let input: Invocation = serde_json::from_value(event).map_err(ScrapeError::InvalidInput)?;
    handle(ctx, input).await
}

async fn collect_records(ctx: &ScrapeContext, shid: &str) -> Result<Vec<JobRecord>, ScrapeError> {
    let job_ids = fetch_job_ids(ctx, shid).await?;

    let mut records = Vec::with_capacity(job_ids.len());
    for job_id in &job_ids {
        let record = fetch_job_detail(ctx, job_id).await?;
        if record.missing_field_count() > 0 {
            debug!(
                "Job {}: {} field(s) not found in detail",
                job_id,
                record.missing_field_count()
            );
        }
        records.push(record);
    }
    Ok(records)
}

/// Rewrites every character above `~` as a `\uXXXX` escape (UTF-16 units).
///
/// serde_json only emits non-ASCII inside string literals, so this yields the
/// same JSON value with an ASCII-only body.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if (c as u32) < 0x7F {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}
