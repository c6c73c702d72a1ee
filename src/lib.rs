//! Websearch Agent: a command-line research assistant
//!
//! Answers natural-language questions by fetching live web search results
//! (Google Custom Search when keyed, DuckDuckGo Instant Answers otherwise)
//! and asking a generative model to synthesize them into a prose answer.

pub mod agent;
pub mod config;
pub mod network;
pub mod providers;
pub mod results;
pub mod search;
pub mod synthesizer;

pub use agent::Agent;
pub use config::Credentials;
pub use results::{AnswerBundle, SearchResult, Source};
pub use search::SearchOrchestrator;
pub use synthesizer::AnswerSynthesizer;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of results requested per query
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Google Custom Search caps `num` at 10 results per request
pub const GOOGLE_MAX_RESULTS: usize = 10;

/// Snippets are cut to this many characters before the ellipsis
pub const SNIPPET_MAX_CHARS: usize = 200;

/// Related-topic titles are cut to this many characters before the ellipsis
pub const TITLE_MAX_CHARS: usize = 50;

/// Default timeout for outbound HTTP requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;
