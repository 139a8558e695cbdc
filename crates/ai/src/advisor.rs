use log::{debug, warn};
use std::sync::Arc;

use crate::advice_model::{SavingsAdvice, SavingsAdviceRequest};
use crate::error::AiError;
use crate::generator::AdviceGeneratorTrait;
use crate::output::parse_advice_output;
use crate::prompt_template::render_advice_prompt;

/// Turns advisor form input into savings recommendations.
#[derive(Clone)]
pub struct SavingsAdvisor {
    generator: Arc<dyn AdviceGeneratorTrait>,
}

impl SavingsAdvisor {
    pub fn new(generator: Arc<dyn AdviceGeneratorTrait>) -> Self {
        Self { generator }
    }

    /// Validates the request, then makes a single generation attempt.
    ///
    /// Invalid requests are rejected without contacting the generator.
    pub async fn request_advice(
        &self,
        request: &SavingsAdviceRequest,
    ) -> Result<SavingsAdvice, AiError> {
        request.validate()?;
        self.generate_validated(request).await
    }

    pub(crate) async fn generate_validated(
        &self,
        request: &SavingsAdviceRequest,
    ) -> Result<SavingsAdvice, AiError> {
        let prompt = render_advice_prompt(request);
        debug!("Dispatching advice prompt ({} chars)", prompt.len());

        let raw = self.generator.generate(&prompt).await.map_err(|e| {
            warn!("Advice generation failed: {}", e);
            e
        })?;
        parse_advice_output(&raw).map_err(|e| {
            warn!("Discarding advice output: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FakeAdviceGenerator;
    use rust_decimal_macros::dec;

    fn advisor(generator: &Arc<FakeAdviceGenerator>) -> SavingsAdvisor {
        SavingsAdvisor::new(generator.clone())
    }

    #[tokio::test]
    async fn test_returns_generated_text_unmodified() {
        let generator = Arc::new(FakeAdviceGenerator::with_recommendations("Save 20%..."));
        let request = SavingsAdviceRequest::new(dec!(5000), dec!(3000), "Save for a house down payment");

        let advice = advisor(&generator).request_advice(&request).await.unwrap();

        assert_eq!(advice.recommendations, "Save 20%...");
        assert_eq!(generator.call_count(), 1);
        assert!(generator.prompts()[0].contains("Financial Goals: Save for a house down payment"));
    }

    #[tokio::test]
    async fn test_invalid_request_is_never_dispatched() {
        let generator = Arc::new(FakeAdviceGenerator::with_recommendations("unused"));
        let request = SavingsAdviceRequest::new(dec!(5000), dec!(3000), "A house");

        let err = advisor(&generator).request_advice(&request).await.unwrap_err();

        assert!(matches!(err, AiError::Validation(_)));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_sixteen_character_goals_are_dispatched() {
        let generator = Arc::new(FakeAdviceGenerator::with_recommendations("Start small"));
        let request = SavingsAdviceRequest::new(dec!(5000), dec!(3000), "Save for a house");

        let advice = advisor(&generator).request_advice(&request).await.unwrap();

        assert_eq!(advice.recommendations, "Start small");
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_is_generation_failure() {
        let generator = Arc::new(FakeAdviceGenerator::failing("503 Service Unavailable"));
        let request = SavingsAdviceRequest::new(dec!(5000), dec!(3000), "Save for a house down payment");

        let err = advisor(&generator).request_advice(&request).await.unwrap_err();
        assert!(err.is_generation_failure());
    }

    #[tokio::test]
    async fn test_bad_output_shape_is_generation_error() {
        let generator = Arc::new(FakeAdviceGenerator::with_reply("Just save more money!"));
        let request = SavingsAdviceRequest::new(dec!(5000), dec!(3000), "Save for a house down payment");

        let err = advisor(&generator).request_advice(&request).await.unwrap_err();
        assert!(matches!(err, AiError::Generation(_)));
    }
}
