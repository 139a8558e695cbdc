//! AI provider catalog and connection settings.

use financeflow_core::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    OpenAi,
    Anthropic,
    Gemini,
    Groq,
    Ollama,
}

impl AiProvider {
    pub const ALL: [AiProvider; 5] = [
        AiProvider::OpenAi,
        AiProvider::Anthropic,
        AiProvider::Gemini,
        AiProvider::Groq,
        AiProvider::Ollama,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "openai",
            AiProvider::Anthropic => "anthropic",
            AiProvider::Gemini => "gemini",
            AiProvider::Groq => "groq",
            AiProvider::Ollama => "ollama",
        }
    }

    /// Model used when none is configured.
    pub fn default_model(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "gpt-4o-mini",
            AiProvider::Anthropic => "claude-3-5-haiku-latest",
            AiProvider::Gemini => "gemini-1.5-flash",
            AiProvider::Groq => "llama-3.1-8b-instant",
            AiProvider::Ollama => "llama3.2",
        }
    }

    /// Local providers run without credentials.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, AiProvider::Ollama)
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiProvider {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(AiProvider::OpenAi),
            "anthropic" => Ok(AiProvider::Anthropic),
            "gemini" | "google" => Ok(AiProvider::Gemini),
            "groq" => Ok(AiProvider::Groq),
            "ollama" => Ok(AiProvider::Ollama),
            other => Err(ValidationError::InvalidField {
                field: "provider",
                message: format!("Unknown AI provider '{}'", other),
            }),
        }
    }
}

/// Connection settings for one provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub provider: AiProvider,
    pub model: String,
    pub api_key: Option<String>,
    /// Custom endpoint, only honored for Ollama.
    pub base_url: Option<String>,
}

impl ProviderConfig {
    pub fn new(provider: AiProvider) -> Self {
        Self {
            provider,
            model: provider.default_model().to_string(),
            api_key: None,
            base_url: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
