//! Google Custom Search provider (primary)

use super::traits::{SearchError, SearchProvider};
use crate::network::HttpClient;
use crate::results::{SearchResult, Source};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Keyed Google Custom Search JSON API provider
pub struct GoogleSearch {
    api_key: String,
    engine_id: String,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}

impl GoogleSearch {
    pub fn new(api_key: impl Into<String>, engine_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            engine_id: engine_id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the provider at a different endpoint (used by tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl SearchProvider for GoogleSearch {
    fn name(&self) -> &str {
        "google"
    }

    async fn fetch(
        &self,
        client: &HttpClient,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        // The API rejects num > 10
        let num = limit.min(crate::GOOGLE_MAX_RESULTS).to_string();
        let params = [
            ("key", self.api_key.as_str()),
            ("cx", self.engine_id.as_str()),
            ("q", query),
            ("num", num.as_str()),
        ];

        let response = client.get_with_params(&self.endpoint, &params).await?;
        if !response.is_success() {
            return Err(SearchError::Http(response.status));
        }

        let body: SearchResponse = response.json()?;
        debug!(count = body.items.len(), "Google search response parsed");

        Ok(body
            .items
            .into_iter()
            .map(|item| SearchResult::new(item.title, item.snippet, item.link, Source::Google))
            .collect())
    }
}
