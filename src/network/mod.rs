//! HTTP client for talking to search providers and the model API

mod client;

pub use client::{HttpClient, ProviderResponse};
