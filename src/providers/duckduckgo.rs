//! DuckDuckGo Instant Answer provider (secondary)
//!
//! Keyless JSON API. Results are assembled from the abstract (when present)
//! plus related topics, with a synthetic placeholder when the response
//! carries neither.

use super::traits::{SearchError, SearchProvider};
use crate::network::HttpClient;
use crate::results::{SearchResult, Source};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://api.duckduckgo.com/";

/// DuckDuckGo Instant Answer API provider
pub struct DuckDuckGo {
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "Heading", default)]
    heading: String,
    #[serde(rename = "Abstract", default)]
    abstract_text: String,
    #[serde(rename = "AbstractURL", default)]
    abstract_url: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

/// A related topic entry; topic-group entries deserialize with an empty
/// `text` and are skipped
#[derive(Debug, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "Text", default)]
    text: String,
    #[serde(rename = "FirstURL", default)]
    first_url: String,
}

impl DuckDuckGo {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the provider at a different endpoint (used by tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build_results(&self, answer: InstantAnswer, query: &str, limit: usize) -> Vec<SearchResult> {
        let mut results = Vec::new();

        if !answer.abstract_text.is_empty() {
            let title = if answer.heading.is_empty() {
                query.to_string()
            } else {
                answer.heading
            };
            results.push(SearchResult::new(
                title,
                truncate_with_ellipsis(&answer.abstract_text, crate::SNIPPET_MAX_CHARS),
                answer.abstract_url,
                Source::DuckDuckGo,
            ));
        }

        // The abstract slot is reserved, so a limit of 1 takes no topics
        let max_topics = limit.saturating_sub(1);
        for topic in answer
            .related_topics
            .into_iter()
            .take(max_topics)
            .filter(|t| !t.text.is_empty())
        {
            results.push(SearchResult::new(
                truncate_with_ellipsis(&topic.text, crate::TITLE_MAX_CHARS),
                truncate_with_ellipsis(&topic.text, crate::SNIPPET_MAX_CHARS),
                topic.first_url,
                Source::DuckDuckGo,
            ));
        }

        if results.is_empty() {
            results.push(SearchResult::new(
                format!("Search results for: {query}"),
                format!(
                    "Found search query about {query}. More detailed results may \
                     require additional search APIs."
                ),
                format!("{}?q={}", DEFAULT_ENDPOINT, query.replace(' ', "+")),
                Source::DuckDuckGo,
            ));
        }

        results
    }
}

impl Default for DuckDuckGo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGo {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn fetch(
        &self,
        client: &HttpClient,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let params = [
            ("q", query),
            ("format", "json"),
            ("no_html", "1"),
            ("skip_disambig", "1"),
        ];

        let response = client.get_with_params(&self.endpoint, &params).await?;
        if !response.is_success() {
            return Err(SearchError::Http(response.status));
        }

        let answer: InstantAnswer = response.json()?;
        debug!(
            has_abstract = !answer.abstract_text.is_empty(),
            topics = answer.related_topics.len(),
            "DuckDuckGo response parsed"
        );

        Ok(self.build_results(answer, query, limit))
    }
}

/// Cut `text` to at most `max` characters and append an ellipsis
///
/// The ellipsis is appended even when the text is already shorter than the
/// cut; downstream display relies on that exact shape.
fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    let mut cut: String = text.chars().take(max).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn instant_answer(json: serde_json::Value) -> InstantAnswer {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_truncation_appends_ellipsis_to_short_text() {
        assert_eq!(truncate_with_ellipsis("Paris", 200), "Paris...");
    }

    #[test]
    fn test_truncation_cuts_long_text_by_chars() {
        let long = "x".repeat(300);
        let out = truncate_with_ellipsis(&long, 200);
        assert_eq!(out.len(), 203);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let text = "é".repeat(250);
        let out = truncate_with_ellipsis(&text, 200);
        assert_eq!(out.chars().count(), 203);
    }

    #[test]
    fn test_abstract_becomes_first_result() {
        let ddg = DuckDuckGo::new();
        let answer = instant_answer(serde_json::json!({
            "Heading": "Paris",
            "Abstract": "Paris is the capital of France.",
            "AbstractURL": "https://en.wikipedia.org/wiki/Paris",
            "RelatedTopics": []
        }));

        let results = ddg.build_results(answer, "capital of France", 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Paris");
        assert_eq!(results[0].snippet, "Paris is the capital of France....");
        assert_eq!(results[0].link, "https://en.wikipedia.org/wiki/Paris");
        assert_eq!(results[0].source, Source::DuckDuckGo);
    }

    #[test]
    fn test_heading_falls_back_to_query() {
        let ddg = DuckDuckGo::new();
        let answer = instant_answer(serde_json::json!({
            "Abstract": "Some summary.",
            "AbstractURL": "https://example.com"
        }));

        let results = ddg.build_results(answer, "my question", 5);
        assert_eq!(results[0].title, "my question");
    }

    #[test]
    fn test_limit_one_takes_no_related_topics() {
        let ddg = DuckDuckGo::new();
        let answer = instant_answer(serde_json::json!({
            "Heading": "Paris",
            "Abstract": "Paris is the capital of France.",
            "AbstractURL": "https://en.wikipedia.org/wiki/Paris",
            "RelatedTopics": [
                {"Text": "Eiffel Tower - a tower in Paris", "FirstURL": "https://example.com/eiffel"}
            ]
        }));

        let results = ddg.build_results(answer, "capital of France", 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Paris");
    }

    #[test]
    fn test_topic_group_entries_are_skipped() {
        let ddg = DuckDuckGo::new();
        let answer = instant_answer(serde_json::json!({
            "RelatedTopics": [
                {"Name": "Related categories", "Topics": [{"Text": "nested"}]},
                {"Text": "A real topic entry", "FirstURL": "https://example.com/topic"}
            ]
        }));

        let results = ddg.build_results(answer, "q", 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "A real topic entry...");
    }

    #[test]
    fn test_empty_response_yields_synthetic_placeholder() {
        let ddg = DuckDuckGo::new();
        let answer = instant_answer(serde_json::json!({}));

        let results = ddg.build_results(answer, "obscure query", 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Search results for: obscure query");
        assert_eq!(
            results[0].link,
            "https://api.duckduckgo.com/?q=obscure+query"
        );
        assert_eq!(results[0].source, Source::DuckDuckGo);
    }

    #[tokio::test]
    async fn test_fetch_sends_instant_answer_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "rust"))
            .and(query_param("format", "json"))
            .and(query_param("no_html", "1"))
            .and(query_param("skip_disambig", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Heading": "Rust",
                "Abstract": "A systems programming language.",
                "AbstractURL": "https://www.rust-lang.org"
            })))
            .mount(&server)
            .await;

        let ddg = DuckDuckGo::new().with_endpoint(server.uri());
        let client = HttpClient::new().unwrap();

        let results = ddg.fetch(&client, "rust", 5).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Rust");
    }

    #[tokio::test]
    async fn test_fetch_surfaces_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let ddg = DuckDuckGo::new().with_endpoint(server.uri());
        let client = HttpClient::new().unwrap();

        let err = ddg.fetch(&client, "rust", 5).await.unwrap_err();
        assert!(matches!(err, SearchError::Http(500)));
    }
}
