//! Provider selection and degradation
//!
//! The orchestrator is total: every provider failure is absorbed into the
//! next rung of the chain, ending at a locally synthesized result, so
//! `search` never fails and never returns an empty list.

use crate::config::Credentials;
use crate::network::HttpClient;
use crate::providers::{DuckDuckGo, GoogleSearch, SearchProvider};
use crate::results::{SearchResult, Source};
use tracing::{info, warn};

/// Selects a search provider from the configured credentials and guarantees
/// a non-empty result list
pub struct SearchOrchestrator {
    client: HttpClient,
    google: Option<GoogleSearch>,
    duckduckgo: DuckDuckGo,
}

impl SearchOrchestrator {
    /// Build an orchestrator; Google is only wired up when both the API key
    /// and the engine id are configured
    pub fn new(credentials: &Credentials, client: HttpClient) -> Self {
        let google = match (&credentials.search_api_key, &credentials.search_engine_id) {
            (Some(key), Some(cx)) => Some(GoogleSearch::new(key, cx)),
            _ => None,
        };

        Self {
            client,
            google,
            duckduckgo: DuckDuckGo::new(),
        }
    }

    /// Replace the primary provider (used by tests)
    pub fn with_google(mut self, google: Option<GoogleSearch>) -> Self {
        self.google = google;
        self
    }

    /// Replace the secondary provider (used by tests)
    pub fn with_duckduckgo(mut self, duckduckgo: DuckDuckGo) -> Self {
        self.duckduckgo = duckduckgo;
        self
    }

    /// Fetch up to `limit` results for `query`
    ///
    /// Tries Google when configured, falls back to DuckDuckGo on failure,
    /// and synthesizes a single Fallback result when both are unreachable.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        if let Some(ref google) = self.google {
            match google.fetch(&self.client, query, limit).await {
                Ok(results) => {
                    info!(count = results.len(), provider = google.name(), "search completed");
                    return results;
                }
                Err(e) => {
                    warn!(provider = google.name(), error = %e, "primary search failed, falling back");
                }
            }
        }

        match self.duckduckgo.fetch(&self.client, query, limit).await {
            Ok(results) => {
                info!(
                    count = results.len(),
                    provider = self.duckduckgo.name(),
                    "search completed"
                );
                results
            }
            Err(e) => {
                warn!(provider = self.duckduckgo.name(), error = %e, "secondary search failed");
                vec![fallback_result(query)]
            }
        }
    }
}

/// The last rung of the chain: a synthetic result produced when every live
/// provider has failed
fn fallback_result(query: &str) -> SearchResult {
    SearchResult::new(
        format!("Search: {query}"),
        format!("Unable to fetch live search results. This would normally search for: {query}"),
        format!("https://www.google.com/search?q={}", query.replace(' ', "+")),
        Source::Fallback,
    )
}
