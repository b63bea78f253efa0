//! Anthropic completion service adapter
//!
//! Implements the CompletionPort against Anthropic's messages API. One
//! synchronous call per request, bounded by a fixed timeout, no retry.

use crate::domain::models::Prompt;
use crate::error::{AppError, Result};
use crate::ports::llm::{CompletionPort, LlmConfig};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Anthropic service implementation
pub struct AnthropicService {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    system: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Classify a non-success response by status code. The error body is
/// parsed for a structured message when possible; an unparseable body is
/// passed through as-is.
fn classify_failure(status: StatusCode, body: String) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => AppError::InvalidCredentials,
        StatusCode::TOO_MANY_REQUESTS => AppError::RateLimited,
        _ => {
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            AppError::Api {
                status: status.as_u16(),
                detail,
            }
        }
    }
}

impl AnthropicService {
    /// Create a new Anthropic service with the given API key
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, ANTHROPIC_API_BASE, REQUEST_TIMEOUT)
    }

    /// Create a service against a custom endpoint and timeout.
    pub fn with_endpoint(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CompletionPort for AnthropicService {
    async fn complete(&self, prompt: &Prompt, config: &LlmConfig) -> Result<String> {
        let request_body = MessagesRequest {
            model: &config.model,
            system: &prompt.system,
            messages: vec![Message {
                role: "user",
                content: &prompt.user,
            }],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        log::info!("Calling Anthropic messages API with model: {}", config.model);

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::CompletionTimeout
                } else {
                    AppError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Completion endpoint returned {}: {}", status, body);
            return Err(classify_failure(status, body));
        }

        let messages_response: MessagesResponse = response.json().await?;

        let first = messages_response
            .content
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Api {
                status: status.as_u16(),
                detail: "no content blocks in response".to_string(),
            })?;

        log::info!(
            "Completion successful, generated {} characters ({})",
            first.text.len(),
            first.block_type
        );

        Ok(first.text)
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::Router;

    fn prompt() -> Prompt {
        Prompt {
            system: "You are a note-taker.".to_string(),
            user: "Transcript.".to_string(),
        }
    }

    /// Spawn a one-route endpoint that always answers with the given
    /// status and body, returning its base URL.
    async fn spawn_endpoint(status: u16, body: &'static str) -> String {
        let status = axum::http::StatusCode::from_u16(status).unwrap();
        let router = Router::new().route("/messages", post(move || async move { (status, body) }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn service_for(base_url: String) -> AnthropicService {
        AnthropicService::with_endpoint("test_api_key", base_url, Duration::from_secs(2))
    }

    #[test]
    fn test_service_creation() {
        let service = AnthropicService::new("test_api_key".to_string());
        assert_eq!(service.provider_name(), "anthropic");
        assert!(service.is_configured());
    }

    #[test]
    fn test_service_not_configured() {
        let service = AnthropicService::new("".to_string());
        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn test_success_returns_first_text_block() {
        let base = spawn_endpoint(
            200,
            r#"{"content":[{"type":"text","text":"Generated notes"},{"type":"text","text":"ignored"}]}"#,
        )
        .await;

        let text = service_for(base)
            .complete(&prompt(), &LlmConfig::default())
            .await
            .unwrap();
        assert_eq!(text, "Generated notes");
    }

    #[tokio::test]
    async fn test_rate_limit_classification() {
        let base = spawn_endpoint(429, r#"{"error":{"message":"rate limited"}}"#).await;

        let err = service_for(base)
            .complete(&prompt(), &LlmConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RateLimited));
    }

    #[tokio::test]
    async fn test_bad_credentials_classification() {
        let base = spawn_endpoint(401, r#"{"error":{"message":"invalid x-api-key"}}"#).await;

        let err = service_for(base)
            .complete(&prompt(), &LlmConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_other_status_carries_structured_detail() {
        let base = spawn_endpoint(529, r#"{"error":{"message":"Overloaded"}}"#).await;

        let err = service_for(base)
            .complete(&prompt(), &LlmConfig::default())
            .await
            .unwrap_err();
        match err {
            AppError::Api { status, detail } => {
                assert_eq!(status, 529);
                assert_eq!(detail, "Overloaded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_is_kept_verbatim() {
        let base = spawn_endpoint(500, "upstream exploded").await;

        let err = service_for(base)
            .complete(&prompt(), &LlmConfig::default())
            .await
            .unwrap_err();
        match err {
            AppError::Api { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, "upstream exploded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_classification() {
        // Bound but never accepted: the request hangs until the client
        // timeout fires.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let service = AnthropicService::with_endpoint(
            "test_api_key",
            format!("http://{addr}"),
            Duration::from_millis(200),
        );

        let err = service
            .complete(&prompt(), &LlmConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CompletionTimeout));
    }

    #[tokio::test]
    async fn test_empty_content_is_an_error() {
        let base = spawn_endpoint(200, r#"{"content":[]}"#).await;

        let err = service_for(base)
            .complete(&prompt(), &LlmConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Api { .. }));
    }
}
