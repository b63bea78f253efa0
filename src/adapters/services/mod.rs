//! Remote service adapters
//!
//! Implementations of the CompletionPort trait.

pub mod anthropic;

pub use anthropic::AnthropicService;
