//! Text generation seam used by the advisor.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::AiError;

/// External text-generation capability.
///
/// Implementations make a single best-effort attempt and return the raw
/// model text; coercion into a typed result happens in [`crate::output`].
#[async_trait]
pub trait AdviceGeneratorTrait: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

// ============================================================================
// Fake Generator for Testing
// ============================================================================

/// A fake generator that returns a fixed reply and records every prompt.
pub struct FakeAdviceGenerator {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeAdviceGenerator {
    /// Returns `raw` verbatim as the model output.
    pub fn with_reply(raw: impl Into<String>) -> Self {
        Self {
            reply: Ok(raw.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Returns a well-formed recommendations object.
    pub fn with_recommendations(text: &str) -> Self {
        Self::with_reply(serde_json::json!({ "recommendations": text }).to_string())
    }

    /// Fails every call with a provider error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|prompts| prompts.len()).unwrap_or(0)
    }
}

#[async_trait]
impl AdviceGeneratorTrait for FakeAdviceGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.reply.clone().map_err(AiError::Provider)
    }
}
