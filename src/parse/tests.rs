// Parse module tests.

use super::*;
use crate::error_handling::MissingFieldError;

fn search_page(input: &str) -> String {
    format!(
        r#"<html><head><title>Job Search</title></head><body>
        <form id="aspnetForm">
            <input type="hidden" name="__VIEWSTATE" value="abc" />
            {}
        </form></body></html>"#,
        input
    )
}

const FULL_DETAIL: &str = r#"
<div class="jobdetail">
    <h1 class="positiontitle">
        Senior Rust Engineer
    </h1>
    <span id="md_location"> London </span>
    <span id="md_rate">£600 - £700 per day</span>
    <span id="md_duration">6 months</span>
    <span id="md_recruiter">Acme Recruitment</span>
    <span id="md_posted_date">16/10/2026 09:12:44</span>
    <span id="md_ref">JS-REF-42</span>
    <a id="md_permalink" href="https://jobserve.com/Abc123">Permalink</a>
    <div class="main_detail_content">
        <p>Build async services.</p>
    </div>
</div>"#;

fn compiled() -> CompiledFieldTable {
    FieldTable::default().compile().expect("built-in table compiles")
}

#[test]
fn test_parse_job_ids_splits_in_order() {
    let html = search_page(r#"<input type="hidden" id="jobIDs" value="A#B#C" />"#);
    assert_eq!(parse_job_ids(&html).unwrap(), vec!["A", "B", "C"]);
}

#[test]
fn test_parse_job_ids_trims_surrounding_whitespace() {
    let html = search_page(r#"<input type="hidden" id="jobIDs" value="  101#102 " />"#);
    assert_eq!(parse_job_ids(&html).unwrap(), vec!["101", "102"]);
}

#[test]
fn test_parse_job_ids_empty_value_yields_one_empty_id() {
    // Literal split behavior: an empty field still produces one identifier
    let html = search_page(r#"<input type="hidden" id="jobIDs" value="" />"#);
    assert_eq!(parse_job_ids(&html).unwrap(), vec![String::new()]);
}

#[test]
fn test_parse_job_ids_missing_value_attribute() {
    let html = search_page(r#"<input type="hidden" id="jobIDs" />"#);
    assert_eq!(parse_job_ids(&html).unwrap(), vec![String::new()]);
}

#[test]
fn test_parse_job_ids_missing_field() {
    let html = search_page(r#"<input type="hidden" id="somethingElse" value="A#B" />"#);
    assert_eq!(
        parse_job_ids(&html),
        Err(MissingFieldError {
            selector: "input#jobIDs".to_string()
        })
    );
}

#[test]
fn test_parse_job_ids_ignores_non_input_with_same_id() {
    let html = search_page(r#"<div id="jobIDs">A#B</div>"#);
    assert!(parse_job_ids(&html).is_err());
}

#[test]
fn test_split_job_ids_keeps_empty_segments() {
    assert_eq!(split_job_ids("A##B"), vec!["A", "", "B"]);
    assert_eq!(split_job_ids("A#"), vec!["A", ""]);
}

#[test]
fn test_extract_job_record_all_fields() {
    let record = extract_job_record("999", FULL_DETAIL, &compiled());
    assert_eq!(record.id, "999");
    assert_eq!(record.title.as_deref(), Some("Senior Rust Engineer"));
    assert_eq!(record.location.as_deref(), Some("London"));
    assert_eq!(record.rate.as_deref(), Some("£600 - £700 per day"));
    assert_eq!(record.duration.as_deref(), Some("6 months"));
    assert_eq!(record.agency.as_deref(), Some("Acme Recruitment"));
    assert_eq!(record.posted_date.as_deref(), Some("16/10/2026 09:12:44"));
    assert_eq!(record.reference.as_deref(), Some("JS-REF-42"));
    assert_eq!(
        record.permalink.as_deref(),
        Some("https://jobserve.com/Abc123")
    );
    assert_eq!(record.description.as_deref(), Some("Build async services."));
    assert_eq!(record.missing_field_count(), 0);
}

#[test]
fn test_extract_job_record_id_is_never_scraped() {
    let fragment = format!(r#"<span id="id">SCRAPED</span><input id="jid" value="777"/>{}"#, FULL_DETAIL);
    let record = extract_job_record("101", &fragment, &compiled());
    assert_eq!(record.id, "101");
}

#[test]
fn test_extract_job_record_missing_rate_only() {
    let fragment = FULL_DETAIL.replace(r#"<span id="md_rate">£600 - £700 per day</span>"#, "");
    let record = extract_job_record("1", &fragment, &compiled());
    assert_eq!(record.rate, None);
    assert_eq!(record.missing_field_count(), 1);
    assert_eq!(record.title.as_deref(), Some("Senior Rust Engineer"));
    assert_eq!(record.agency.as_deref(), Some("Acme Recruitment"));
    assert!(record.permalink.is_some());
    assert!(record.description.is_some());
}

#[test]
fn test_extract_job_record_description_ignores_embedded_css_and_js() {
    let fragment = r#"<div class="main_detail_content"><style>p { color: red; }</style><p>Role</p><script>var x = 1;</script></div>"#;
    let record = extract_job_record("1", fragment, &compiled());
    assert_eq!(record.description.as_deref(), Some("Role"));
}

#[test]
fn test_extract_job_record_empty_fragment() {
    let record = extract_job_record("1", "", &compiled());
    assert_eq!(record, crate::models::JobRecord::new("1"));
}

#[test]
fn test_permalink_without_href_is_absent() {
    let fragment = FULL_DETAIL.replace(r#" href="https://jobserve.com/Abc123""#, "");
    let record = extract_job_record("1", &fragment, &compiled());
    assert_eq!(record.permalink, None);
}

#[test]
fn test_empty_element_gives_empty_string_not_null() {
    let fragment = FULL_DETAIL.replace("6 months", "   ");
    let record = extract_job_record("1", &fragment, &compiled());
    assert_eq!(record.duration.as_deref(), Some(""));
}

#[test]
fn test_title_requires_positiontitle_class() {
    let fragment = FULL_DETAIL.replace(r#"class="positiontitle""#, r#"class="heading""#);
    let record = extract_job_record("1", &fragment, &compiled());
    assert_eq!(record.title, None);
}

#[test]
fn test_extraction_is_deterministic() {
    let table = compiled();
    let first = serde_json::to_string(&extract_job_record("5", FULL_DETAIL, &table)).unwrap();
    let second = serde_json::to_string(&extract_job_record("5", FULL_DETAIL, &table)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fallback_rules_first_value_wins() {
    let table = FieldTable::new(vec![
        FieldRule {
            field: JobField::Rate,
            selector: "#new_rate".to_string(),
            extract: Extraction::Text,
        },
        FieldRule {
            field: JobField::Rate,
            selector: "#md_rate".to_string(),
            extract: Extraction::Text,
        },
    ])
    .compile()
    .unwrap();

    let old_layout = extract_job_record("1", FULL_DETAIL, &table);
    assert_eq!(old_layout.rate.as_deref(), Some("£600 - £700 per day"));

    let new_layout = format!(r#"<b id="new_rate">£800</b>{}"#, FULL_DETAIL);
    let record = extract_job_record("1", &new_layout, &table);
    assert_eq!(record.rate.as_deref(), Some("£800"));
    // Fields without a rule stay absent
    assert_eq!(record.title, None);
}

#[test]
fn test_parse_detail_response_unescapes_fragment() {
    let body = serde_json::json!({
        "d": {
            "__type": "JobSearch.JobDetail",
            "JobDetailHtml": "&lt;span id=&quot;md_rate&quot;&gt;£500 &amp; benefits&lt;/span&gt;"
        }
    })
    .to_string();
    let fragment = parse_detail_response(&body).unwrap();
    assert_eq!(fragment, r#"<span id="md_rate">£500 & benefits</span>"#);

    let record = extract_job_record("1", &fragment, &compiled());
    assert_eq!(record.rate.as_deref(), Some("£500 & benefits"));
}

#[test]
fn test_parse_detail_response_c1_references_use_windows_1252() {
    let body = serde_json::json!({
        "d": { "JobDetailHtml": "&lt;p&gt;9am &#150; 5pm, &#x93;hybrid&#x94; &#8364;600&lt;/p&gt;" }
    })
    .to_string();
    let fragment = parse_detail_response(&body).unwrap();
    assert_eq!(fragment, "<p>9am \u{2013} 5pm, \u{201C}hybrid\u{201D} \u{20AC}600</p>");
}

#[test]
fn test_parse_detail_response_plain_html_passes_through() {
    let body = serde_json::json!({ "d": { "JobDetailHtml": FULL_DETAIL } }).to_string();
    let fragment = parse_detail_response(&body).unwrap();
    assert_eq!(fragment, FULL_DETAIL);
}

#[test]
fn test_parse_detail_response_missing_path() {
    assert!(parse_detail_response(r#"{"d": {}}"#).is_err());
    assert!(parse_detail_response(r#"{"JobDetailHtml": "<p></p>"}"#).is_err());
    assert!(parse_detail_response(r#"{"d": {"JobDetailHtml": null}}"#).is_err());
    assert!(parse_detail_response("<html>Service Unavailable</html>").is_err());
}
