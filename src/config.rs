//! Runtime configuration
//!
//! Settings come from the environment at startup. The completion-endpoint
//! credential is mandatory; the process refuses to start without it.

use crate::error::{AppError, Result};

const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
const BIND_VAR: &str = "NOTESMART_BIND";
const DEFAULT_BIND: &str = "127.0.0.1:8787";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub bind_addr: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .unwrap_or_default()
            .trim()
            .to_string();
        if api_key.is_empty() {
            return Err(AppError::Config(format!(
                "{API_KEY_VAR} is not set; the completion endpoint credential is required"
            )));
        }

        let bind_addr = std::env::var(BIND_VAR).unwrap_or_else(|_| DEFAULT_BIND.to_string());

        Ok(Self { api_key, bind_addr })
    }
}
