//! Remote inference: request/response types, the client trait and prompts.

/// Anthropic Messages API client.
pub mod claude;
/// Supported model catalogue.
pub mod models;
/// Commit prompt template.
pub mod prompt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use claude::AnthropicClient;

/// Messages API request body.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Messages API response body; fields other than `content` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: String,
}

/// Sends one prompt and returns the generated text.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Returns the text of the first content segment, untrimmed.
    ///
    /// Makes exactly one request; there is no retry.
    async fn generate(&self, config: &Config, prompt: &str) -> Result<String>;
}
