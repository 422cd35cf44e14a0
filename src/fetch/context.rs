//! Shared resources for one or more invocations.
//!
//! `ScrapeContext` groups the HTTP client, endpoints, and compiled field table
//! so the pipeline functions take one argument instead of four. Nothing in it
//! is mutated during an invocation.

use std::sync::Arc;

use crate::config::Endpoints;
use crate::parse::CompiledFieldTable;

/// Context containing everything the resolver and detail fetcher need.
#[derive(Debug, Clone)]
pub struct ScrapeContext {
    /// HTTP client (carries the User-Agent and timeouts)
    pub client: Arc<reqwest::Client>,
    /// Search page and detail service URLs
    pub endpoints: Endpoints,
    /// Selectors for the detail fields
    pub fields: Arc<CompiledFieldTable>,
    /// Session handle used when the invocation has none
    pub default_shid: String,
}

impl ScrapeContext {
    /// Creates a new `ScrapeContext` from already-built resources.
    pub fn new(
        client: Arc<reqwest::Client>,
        endpoints: Endpoints,
        fields: Arc<CompiledFieldTable>,
        default_shid: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoints,
            fields,
            default_shid: default_shid.into(),
        }
    }
}

#[cfg(test)]
pub(crate) fn create_test_context(base_url: &str) -> ScrapeContext {
    let client = Arc::new(
        reqwest::Client::builder()
            .user_agent(crate::config::DEFAULT_USER_AGENT)
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .expect("Failed to create HTTP client"),
    );
    ScrapeContext::new(
        client,
        Endpoints::new(base_url).expect("test base URL should parse"),
        Arc::new(CompiledFieldTable::default()),
        crate::config::DEFAULT_SESSION_HANDLE,
    )
}
