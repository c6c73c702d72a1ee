//! Search provider module
//!
//! Defines the SearchProvider trait and the two live implementations.

mod traits;

pub mod duckduckgo;
pub mod google;

pub use duckduckgo::DuckDuckGo;
pub use google::GoogleSearch;
pub use traits::{SearchError, SearchProvider};
