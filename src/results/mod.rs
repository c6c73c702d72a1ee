//! Result types shared across the pipeline

mod types;

pub use types::{AnswerBundle, SearchResult, Source};
