//! Provider trait and error types

use crate::network::HttpClient;
use crate::results::SearchResult;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching from a search provider
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search endpoint returned HTTP {0}")]
    Http(u16),

    #[error("failed to parse search response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One capability both providers implement: fetch an ordered list of
/// results for a query
///
/// Fallible on purpose: the orchestrator inspects the error and selects the
/// next provider, so no provider ever has to absorb its own failures.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name, used in log lines
    fn name(&self) -> &str;

    /// Fetch up to `limit` results for `query`
    async fn fetch(
        &self,
        client: &HttpClient,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, SearchError>;
}
