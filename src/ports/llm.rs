/// Completion service port trait
///
/// Defines the interface to the remote text-generation endpoint.
/// Implementation: Anthropic messages API.
use crate::domain::models::Prompt;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model identifier sent in the request body
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens in the response
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "claude-3-sonnet-20240229".to_string(),
            temperature: 0.7,
            max_tokens: 4096,
        }
    }
}

/// Port trait for completion services
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send a composed prompt pair and return the generated text.
    ///
    /// One synchronous call, no retry; failures are classified into the
    /// application error taxonomy by the implementation.
    async fn complete(&self, prompt: &Prompt, config: &LlmConfig) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
