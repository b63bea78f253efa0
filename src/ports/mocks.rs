//! Mock implementations for testing

use crate::domain::models::Prompt;
use crate::error::{AppError, Result};
use crate::ports::llm::{CompletionPort, LlmConfig};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock completion service that records every prompt it receives
#[derive(Clone, Default)]
pub struct MockCompletion {
    reply: String,
    fail_rate_limited: bool,
    pub calls: Arc<Mutex<Vec<Prompt>>>,
}

impl MockCompletion {
    /// Mock that answers every prompt with the given text.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            ..Self::default()
        }
    }

    /// Mock that fails every call with a rate-limit classification.
    pub fn rate_limited() -> Self {
        Self {
            fail_rate_limited: true,
            ..Self::default()
        }
    }

    pub fn last_prompt(&self) -> Option<Prompt> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionPort for MockCompletion {
    async fn complete(&self, prompt: &Prompt, _config: &LlmConfig) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.clone());
        if self.fail_rate_limited {
            return Err(AppError::RateLimited);
        }
        Ok(self.reply.clone())
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        true
    }
}
