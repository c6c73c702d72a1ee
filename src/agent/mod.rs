//! Agent facade composing search and synthesis

use crate::config::Credentials;
use crate::network::HttpClient;
use crate::results::AnswerBundle;
use crate::search::SearchOrchestrator;
use crate::synthesizer::{AnswerSynthesizer, GeminiModel};
use chrono::Utc;
use tracing::info;

/// One `answer` call runs the whole pipeline: search, synthesize, timestamp.
///
/// Both inner stages are total, so the facade cannot observe a partial
/// failure.
pub struct Agent {
    orchestrator: SearchOrchestrator,
    synthesizer: AnswerSynthesizer,
}

impl Agent {
    /// Wire up the pipeline from credentials
    pub fn new(credentials: &Credentials) -> reqwest::Result<Self> {
        let client = HttpClient::new()?;
        let orchestrator = SearchOrchestrator::new(credentials, client.clone());
        let synthesizer = AnswerSynthesizer::new(Box::new(GeminiModel::new(
            client,
            &credentials.gemini_api_key,
        )));

        Ok(Self::from_parts(orchestrator, synthesizer))
    }

    /// Compose a facade from already-built stages
    pub fn from_parts(orchestrator: SearchOrchestrator, synthesizer: AnswerSynthesizer) -> Self {
        Self {
            orchestrator,
            synthesizer,
        }
    }

    /// Answer `query` using up to `limit` search results
    pub async fn answer(&self, query: &str, limit: usize) -> AnswerBundle {
        info!(query = %query, "searching");
        let results = self.orchestrator.search(query, limit).await;

        info!(count = results.len(), "generating answer");
        let answer = self.synthesizer.synthesize(query, &results).await;

        AnswerBundle {
            query: query.to_string(),
            results,
            answer,
            generated_at: Utc::now(),
        }
    }
}
