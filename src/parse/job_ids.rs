//! Job identifier extraction from the search page.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::{JOB_IDS_SELECTOR, JOB_ID_DELIMITER};
use crate::error_handling::MissingFieldError;

static JOB_IDS_ELEMENT: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(JOB_IDS_SELECTOR, "JOB_IDS_ELEMENT"));

/// Extracts the job identifiers from a search page.
///
/// Reads the `value` of the hidden `input#jobIDs` field (empty if the
/// attribute is absent), trims it, and splits on `#`. An empty value yields
/// `[""]`, not an empty list: the caller will attempt one detail fetch for the
/// empty identifier.
///
/// # Errors
///
/// Returns `MissingFieldError` if the page has no `input#jobIDs` element.
pub fn parse_job_ids(html: &str) -> Result<Vec<String>, MissingFieldError> {
    let document = Html::parse_document(html);
    let element = document
        .select(&JOB_IDS_ELEMENT)
        .next()
        .ok_or_else(|| MissingFieldError {
            selector: JOB_IDS_SELECTOR.to_string(),
        })?;

    let value = element.value().attr("value").unwrap_or_default();
    Ok(split_job_ids(value))
}

/// Splits a raw `#`-delimited field value into identifiers.
pub fn split_job_ids(value: &str) -> Vec<String> {
    value
        .trim()
        .split(JOB_ID_DELIMITER)
        .map(str::to_string)
        .collect()
}
