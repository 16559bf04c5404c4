//! Retrieval-and-generation provider abstractions and implementations.
//!
//! The processor talks to the generation service only through
//! [`RetrievalGenerator`], so the Bedrock client can be swapped for the mock
//! in tests.

pub mod bedrock;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a retrieve-and-generate call.
#[derive(Debug, Clone, Default)]
pub struct GenerationOutput {
    /// Generated text. `None` when the service returned no output block.
    pub text: Option<String>,

    /// Session the service allocated for this call, if any.
    pub session_id: Option<String>,

    /// Number of knowledge base citations backing the text.
    pub citation_count: usize,
}

/// Trait for knowledge-base backed generation (e.g., Bedrock RetrieveAndGenerate).
///
/// Knowledge base and model are fixed by the implementation's configuration.
#[async_trait]
pub trait RetrievalGenerator: Send + Sync {
    /// Generate a response for `text`.
    async fn generate(&self, text: &str) -> Result<GenerationOutput, GeneratorError>;
}
