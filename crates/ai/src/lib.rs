//! FinanceFlow AI - savings advice generation using rig-core.
//!
//! # Architecture
//!
//! - `advice_model`: request/response DTOs and request validation
//! - `prompt_template`: the advisor prompt
//! - `generator`: text-generation seam plus a deterministic fake
//! - `provider_model` / `providers`: provider catalog and the rig-core backend
//! - `output`: coercion of raw model text into [`SavingsAdvice`]
//! - `advisor`: validate, render, generate, coerce
//! - `session`: advice request lifecycle with stale-result protection
//!
//! # Example
//!
//! ```ignore
//! use financeflow_ai::{ProviderConfig, RigAdviceGenerator, SavingsAdvisor};
//!
//! let generator = RigAdviceGenerator::new(ProviderConfig::new(AiProvider::OpenAi).with_api_key(key));
//! let advisor = SavingsAdvisor::new(Arc::new(generator));
//! let advice = advisor.request_advice(&request).await?;
//! println!("{}", advice.recommendations);
//! ```

pub mod advice_model;
pub mod advisor;
pub mod error;
pub mod generator;
pub mod output;
pub mod prompt_template;
pub mod provider_model;
pub mod providers;
pub mod session;

pub use advice_model::{SavingsAdvice, SavingsAdviceRequest, MIN_FINANCIAL_GOALS_CHARS};
pub use advisor::SavingsAdvisor;
pub use error::AiError;
pub use generator::{AdviceGeneratorTrait, FakeAdviceGenerator};
pub use output::parse_advice_output;
pub use prompt_template::render_advice_prompt;
pub use provider_model::{AiProvider, ProviderConfig};
pub use providers::RigAdviceGenerator;
pub use session::{AdviceSession, AdviceState, ADVICE_FAILURE_MESSAGE};
