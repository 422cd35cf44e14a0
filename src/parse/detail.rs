//! Detail web-service response parsing and record extraction.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use scraper::Html;
use serde::Deserialize;

use crate::models::JobRecord;
use crate::parse::fields::CompiledFieldTable;

/// `{"d": {"JobDetailHtml": "..."}}` as returned by the ASMX service.
#[derive(Debug, Deserialize)]
struct DetailResponse {
    d: DetailPayload,
}

#[derive(Debug, Deserialize)]
struct DetailPayload {
    #[serde(rename = "JobDetailHtml")]
    job_detail_html: String,
}

static NUMERIC_CHARREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&#(?:([0-9]+)|[xX]([0-9a-fA-F]+));?")
        .unwrap_or_else(|e| panic!("numeric character reference pattern must compile: {}", e))
});

/// Pulls the detail fragment out of a web-service response body.
///
/// The fragment arrives entity-escaped; the returned string is unescaped and
/// ready for HTML parsing. Numeric references in the C1 range (`&#128;` to
/// `&#159;`) decode to their Windows-1252 characters, as browsers do.
///
/// # Errors
///
/// Returns the `serde_json::Error` if the body is not JSON or has no string
/// at `d.JobDetailHtml`.
pub fn parse_detail_response(body: &str) -> Result<String, serde_json::Error> {
    let response: DetailResponse = serde_json::from_str(body)?;
    let fragment = replace_windows_1252_charrefs(&response.d.job_detail_html);
    Ok(html_escape::decode_html_entities(&fragment).into_owned())
}

fn replace_windows_1252_charrefs(html: &str) -> Cow<'_, str> {
    NUMERIC_CHARREF.replace_all(html, |caps: &Captures<'_>| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(dec), _) => dec.as_str().parse::<u32>().ok(),
            (_, Some(hex)) => u32::from_str_radix(hex.as_str(), 16).ok(),
            _ => None,
        };
        match code.and_then(windows_1252_char) {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        }
    })
}

/// Windows-1252 character for a C1 code point; `None` where it has none.
fn windows_1252_char(code: u32) -> Option<char> {
    let c = match code {
        0x80 => '\u{20AC}',
        0x82 => '\u{201A}',
        0x83 => '\u{0192}',
        0x84 => '\u{201E}',
        0x85 => '\u{2026}',
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{02C6}',
        0x89 => '\u{2030}',
        0x8A => '\u{0160}',
        0x8B => '\u{2039}',
        0x8C => '\u{0152}',
        0x8E => '\u{017D}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201C}',
        0x94 => '\u{201D}',
        0x95 => '\u{2022}',
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x98 => '\u{02DC}',
        0x99 => '\u{2122}',
        0x9A => '\u{0161}',
        0x9B => '\u{203A}',
        0x9C => '\u{0153}',
        0x9E => '\u{017E}',
        0x9F => '\u{0178}',
        _ => return None,
    };
    Some(c)
}

/// Builds a `JobRecord` from an (unescaped) detail fragment.
///
/// Each rule is applied independently; a rule whose selector matches nothing
/// leaves its field `None`. `id` is always the given identifier.
pub fn extract_job_record(id: &str, fragment: &str, fields: &CompiledFieldTable) -> JobRecord {
    let document = Html::parse_document(fragment);
    let root = document.root_element();
    let mut record = JobRecord::new(id);

    for rule in fields.rules() {
        if record.get(rule.field).is_some() {
            continue;
        }
        let value = rule.apply(&root);
        if value.is_none() {
            log::debug!(
                "Job {}: no value for '{}' (selector '{}')",
                id,
                rule.field.name(),
                rule.selector_str
            );
        }
        record.set(rule.field, value);
    }

    record
}
