//! Search orchestration: provider selection and the fallback chain

mod orchestrator;

pub use orchestrator::SearchOrchestrator;
