//! Result type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which provider produced a search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    /// Google Custom Search (primary, keyed)
    Google,
    /// DuckDuckGo Instant Answers (secondary, keyless)
    DuckDuckGo,
    /// Synthesized locally after every live provider failed
    Fallback,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Google => write!(f, "Google"),
            Self::DuckDuckGo => write!(f, "DuckDuckGo"),
            Self::Fallback => write!(f, "Fallback"),
        }
    }
}

/// A single search result
///
/// Constructed by a provider (or the orchestrator's fallback) and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result
    pub title: String,
    /// Content snippet
    pub snippet: String,
    /// The URL of the result
    pub link: String,
    /// Provider that returned this result
    pub source: Source,
}

impl SearchResult {
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        link: impl Into<String>,
        source: Source,
    ) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            link: link.into(),
            source,
        }
    }
}

/// The structured output of one query cycle
///
/// Never mutated after construction and not persisted anywhere; the shell
/// prints it and moves on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerBundle {
    /// The original user question
    pub query: String,
    /// Search results the answer was synthesized from; never empty
    pub results: Vec<SearchResult>,
    /// The synthesized (or degraded) answer text
    pub answer: String,
    /// When the bundle was produced
    pub generated_at: DateTime<Utc>,
}
