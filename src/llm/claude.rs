use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::config::Config;
use crate::constants::llm::{API_URL, API_VERSION, MAX_TOKENS};
use crate::error::{AppError, Result};
use crate::llm::{InferenceClient, Message, MessagesRequest, MessagesResponse};

/// Claude Messages API client
pub struct AnthropicClient {
    client: Client,
    endpoint: String,
}

impl AnthropicClient {
    /// Client for the public Anthropic endpoint.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(API_URL)
    }

    /// Client for a custom endpoint (mock servers, proxies).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request(config: &Config, prompt: &str) -> MessagesRequest {
        MessagesRequest {
            model: config.model.clone(),
            messages: vec![Message::user(prompt)],
            max_tokens: MAX_TOKENS,
        }
    }
}

#[async_trait]
impl InferenceClient for AnthropicClient {
    async fn generate(&self, config: &Config, prompt: &str) -> Result<String> {
        let request = Self::build_request(config, prompt);

        tracing::debug!(
            "Sending request to {} (model: {}, prompt: {} chars)",
            self.endpoint,
            request.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header("x-api-key", &config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("API request failed: {}", e);
                AppError::Transport(e)
            })?;

        // `text()` consumes the response, so the connection is released on every path below.
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to read error response body: {}", e);
                String::new()
            });
            return Err(AppError::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        tracing::debug!("API response body: {}", body);

        let parsed: MessagesResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::parse("error parsing API response", e))?;

        parsed
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or(AppError::EmptyResponse)
    }
}
