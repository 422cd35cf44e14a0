//! Outbound endpoint construction.
//!
//! Both calls hang off one base URL so the whole pipeline can be pointed at a
//! mock server.

use url::Url;

use crate::config::constants::{
    DETAIL_SERVICE_PATH, JOB_ID_PARAM, SEARCH_PAGE_PATH, SESSION_HANDLE_PARAM,
};

/// Resolved URLs for the search page and the detail web service.
#[derive(Debug, Clone)]
pub struct Endpoints {
    search_page: Url,
    detail_service: Url,
    origin: String,
}

impl Endpoints {
    /// Builds the endpoint set from a base URL such as `https://jobserve.com`.
    ///
    /// # Errors
    ///
    /// Returns a `url::ParseError` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(base_url)?;
        let search_page = base.join(SEARCH_PAGE_PATH)?;
        let detail_service = base.join(DETAIL_SERVICE_PATH)?;
        let origin = base.origin().ascii_serialization();
        Ok(Self {
            search_page,
            detail_service,
            origin,
        })
    }

    /// Search page URL for a session handle.
    pub fn search_url(&self, shid: &str) -> Url {
        let mut url = self.search_page.clone();
        url.query_pairs_mut().append_pair(SESSION_HANDLE_PARAM, shid);
        url
    }

    /// Detail web-service URL (same for every job).
    pub fn detail_url(&self) -> &Url {
        &self.detail_service
    }

    /// `Referer` the site expects on a detail request: the search page opened on that job.
    pub fn referer_url(&self, job_id: &str) -> Url {
        let mut url = self.search_page.clone();
        url.query_pairs_mut().append_pair(JOB_ID_PARAM, job_id);
        url
    }

    /// Serialized origin (`scheme://host[:port]`) for the `Origin` header.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}
