//! Advice generation error types.

use financeflow_core::errors::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    /// Request failed validation; nothing was sent to a provider.
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Model output could not be coerced into recommendations.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (from rig-core or API).
    #[error("Provider error: {0}")]
    Provider(String),
}

impl AiError {
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Whether the failure happened while producing advice, as opposed to
    /// rejecting the request up front.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            AiError::Generation(_) | AiError::MissingApiKey(_) | AiError::Provider(_)
        )
    }
}

/// Error code for programmatic handling.
impl AiError {
    pub fn code(&self) -> &'static str {
        match self {
            AiError::Validation(_) => "VALIDATION_ERROR",
            AiError::Generation(_) => "GENERATION_ERROR",
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::Provider(_) => "PROVIDER_ERROR",
        }
    }
}
