/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod extraction;
pub mod llm;

#[cfg(test)]
pub mod mocks;

pub use extraction::DocumentReaderPort;
pub use llm::{CompletionPort, LlmConfig};
