//! Configuration constants.
//!
//! Remote site locations, the default saved search, and HTTP client limits.

/// Base URL of the job board. Overridable through `Config::base_url`.
pub const DEFAULT_BASE_URL: &str = "https://jobserve.com";

/// Search page path; the session handle is appended as the `shid` query parameter.
pub const SEARCH_PAGE_PATH: &str = "/gb/en/JobSearch.aspx";

/// Web-service method returning the detail fragment for one job.
pub const DETAIL_SERVICE_PATH: &str = "/WebServices/JobSearch.asmx/RetrieveSingleJobDetail";

/// Query parameter carrying the session handle on the search page.
pub const SESSION_HANDLE_PARAM: &str = "shid";

/// Query parameter carrying the job identifier in the detail `Referer`.
pub const JOB_ID_PARAM: &str = "jid";

/// Saved search used when the invocation does not name one.
pub const DEFAULT_SESSION_HANDLE: &str = "8B48E22B1865559DA4EB";

/// User-Agent sent on every request.
///
/// The site only checks for a browser-like prefix, so the bare product token
/// is enough.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Content type of the detail web-service request body.
pub const DETAIL_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Delimiter between job identifiers in the search page's hidden field.
pub const JOB_ID_DELIMITER: char = '#';

/// Element holding the `#`-delimited job identifiers on the search page.
pub const JOB_IDS_SELECTOR: &str = "input#jobIDs";

/// Per-request timeout in seconds (default)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP status code of a successful invocation envelope.
pub const SUCCESS_STATUS_CODE: u16 = 200;

/// Maximum number of characters of a response body echoed into debug logs.
pub const MAX_BODY_PREVIEW_CHARS: usize = 500;
