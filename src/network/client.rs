//! Thin wrapper around reqwest with agent-wide defaults

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("websearch-agent/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper with shared timeout and header configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client with the default request timeout
    pub fn new() -> reqwest::Result<Self> {
        Self::with_timeout(Duration::from_secs(crate::DEFAULT_TIMEOUT))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// GET with query parameters
    pub async fn get_with_params(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> reqwest::Result<ProviderResponse> {
        let response = self.client.get(url).query(params).send().await?;
        Self::read_response(response).await
    }

    /// POST a JSON body
    pub async fn post_json(
        &self,
        url: &str,
        params: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> reqwest::Result<ProviderResponse> {
        let response = self
            .client
            .post(url)
            .query(params)
            .json(body)
            .send()
            .await?;
        Self::read_response(response).await
    }

    async fn read_response(response: Response) -> reqwest::Result<ProviderResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(ProviderResponse { status, url, text })
    }
}

/// HTTP response captured as status plus body text
#[derive(Debug)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Final URL after redirects
    pub url: String,
    /// Response body as text
    pub text: String,
}

impl ProviderResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }
}
