//! rig-core backed advice generation.

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use rig::{
    client::{CompletionClient, Nothing},
    completion::Prompt,
    providers::{anthropic, gemini, groq, ollama, openai},
};

use crate::error::AiError;
use crate::generator::AdviceGeneratorTrait;
use crate::provider_model::{AiProvider, ProviderConfig};

/// Sends the prompt to the configured provider in a single completion call.
pub struct RigAdviceGenerator {
    config: ProviderConfig,
}

impl RigAdviceGenerator {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str, AiError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AiError::MissingApiKey(self.config.provider.to_string()))
    }
}

#[async_trait]
impl AdviceGeneratorTrait for RigAdviceGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let model_id = self.config.model.as_str();
        debug!(
            "Requesting advice from provider {} model {}",
            self.config.provider, model_id
        );

        let response = match self.config.provider {
            AiProvider::Anthropic => {
                let client: anthropic::Client<HttpClient> = anthropic::Client::new(self.api_key()?)
                    .map_err(|e| AiError::provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| AiError::provider(e.to_string()))?
            }
            AiProvider::Gemini => {
                let client: gemini::Client<HttpClient> = gemini::Client::new(self.api_key()?)
                    .map_err(|e| AiError::provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| AiError::provider(e.to_string()))?
            }
            AiProvider::Groq => {
                let client: groq::Client<HttpClient> = groq::Client::new(self.api_key()?)
                    .map_err(|e| AiError::provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| AiError::provider(e.to_string()))?
            }
            AiProvider::Ollama => {
                let mut builder = ollama::Client::<HttpClient>::builder().api_key(Nothing);
                if let Some(url) = self.config.base_url.as_deref() {
                    builder = builder.base_url(url);
                }
                let client = builder
                    .build()
                    .map_err(|e| AiError::provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| AiError::provider(e.to_string()))?
            }
            AiProvider::OpenAi => {
                let client: openai::Client<HttpClient> = openai::Client::new(self.api_key()?)
                    .map_err(|e| AiError::provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| AiError::provider(e.to_string()))?
            }
        };

        Ok(response)
    }
}
