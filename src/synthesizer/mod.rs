//! Answer synthesis
//!
//! Turns a query plus its search results into a prose answer through a
//! generative-model completion, with a deterministic degraded form when the
//! model is unreachable.

mod gemini;

pub use gemini::GeminiModel;

use crate::results::SearchResult;
use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during a completion call
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion endpoint returned HTTP {0}")]
    Http(u16),

    #[error("failed to parse completion response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("completion response contained no text")]
    EmptyCompletion,
}

/// A single-prompt text completion capability
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, SynthesisError>;
}

/// Builds the grounding prompt and runs the completion; total, never fails
pub struct AnswerSynthesizer {
    model: Box<dyn CompletionModel>,
}

impl AnswerSynthesizer {
    pub fn new(model: Box<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Produce an answer for `query` grounded in `results`
    ///
    /// A failed completion degrades to an error marker plus a bullet list of
    /// every result, so the caller always receives informative text.
    pub async fn synthesize(&self, query: &str, results: &[SearchResult]) -> String {
        let prompt = build_prompt(query, results);

        match self.model.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "completion failed, returning raw results");
                degraded_answer(&e, results)
            }
        }
    }
}

/// Serialize results into the numbered context block the prompt embeds
fn format_context(results: &[SearchResult]) -> String {
    let mut context = String::from("Here are the search results:\n\n");
    for (i, result) in results.iter().enumerate() {
        context.push_str(&format!(
            "{}. **{}**\n   {}\n   Source: {}\n\n",
            i + 1,
            result.title,
            result.snippet,
            result.link
        ));
    }
    context
}

fn build_prompt(query: &str, results: &[SearchResult]) -> String {
    format!(
        "You are a helpful AI assistant. Based on the following search results, \
         provide a comprehensive and accurate answer to the user's question.\n\
         \n\
         User Question: {query}\n\
         \n\
         {context}\
         Please provide a well-structured response that:\n\
         1. Directly answers the user's question\n\
         2. Synthesizes information from the search results\n\
         3. Mentions sources when relevant\n\
         4. Is clear and easy to understand\n\
         5. Acknowledges if information is limited or uncertain\n\
         \n\
         Response:",
        context = format_context(results),
    )
}

fn degraded_answer(error: &SynthesisError, results: &[SearchResult]) -> String {
    let listing = results
        .iter()
        .map(|r| format!("• {}: {}", r.title, r.snippet))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Error generating response: {error}\n\nHere are the raw search results:\n{listing}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::Source;

    struct StubModel {
        reply: Option<String>,
    }

    #[async_trait]
    impl CompletionModel for StubModel {
        async fn complete(&self, _prompt: &str) -> Result<String, SynthesisError> {
            self.reply.clone().ok_or(SynthesisError::EmptyCompletion)
        }
    }

    fn sample_results() -> Vec<SearchResult> {
        vec![
            SearchResult::new("Paris", "Capital of France...", "https://a", Source::DuckDuckGo),
            SearchResult::new("Eiffel Tower", "A tower in Paris...", "https://b", Source::DuckDuckGo),
        ]
    }

    #[test]
    fn test_prompt_embeds_query_and_numbered_results() {
        let prompt = build_prompt("capital of France", &sample_results());
        assert!(prompt.contains("User Question: capital of France"));
        assert!(prompt.contains("1. **Paris**"));
        assert!(prompt.contains("2. **Eiffel Tower**"));
        assert!(prompt.contains("Source: https://a"));
        assert!(prompt.contains("Acknowledges if information is limited"));
    }

    #[tokio::test]
    async fn test_returns_model_text_verbatim() {
        let synthesizer = AnswerSynthesizer::new(Box::new(StubModel {
            reply: Some("Paris is the capital of France.".to_string()),
        }));

        let answer = synthesizer
            .synthesize("capital of France", &sample_results())
            .await;
        assert_eq!(answer, "Paris is the capital of France.");
    }

    #[tokio::test]
    async fn test_degrades_to_bullet_list_on_failure() {
        let synthesizer = AnswerSynthesizer::new(Box::new(StubModel { reply: None }));

        let answer = synthesizer
            .synthesize("capital of France", &sample_results())
            .await;
        assert!(!answer.is_empty());
        assert!(answer.starts_with("Error generating response:"));
        assert!(answer.contains("• Paris: Capital of France..."));
        assert!(answer.contains("• Eiffel Tower: A tower in Paris..."));
    }
}
