//! Advice request lifecycle.
//!
//! A session moves `Idle -> Pending -> Succeeded | Failed`, and back to
//! `Pending` on every new submission. Each submission takes a ticket; a
//! finished request only updates the session while its ticket is still the
//! pending one. Superseded requests and requests that finish after
//! [`AdviceSession::discard`] are dropped.

use log::{debug, warn};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

use crate::advice_model::{SavingsAdvice, SavingsAdviceRequest};
use crate::advisor::SavingsAdvisor;
use crate::error::AiError;

/// Message shown whenever advice could not be produced.
pub const ADVICE_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't generate recommendations at this time. Please try again later.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AdviceState {
    Idle,
    Pending {
        ticket: u64,
    },
    Succeeded {
        ticket: u64,
        recommendations: String,
    },
    Failed {
        ticket: u64,
        code: String,
        message: String,
    },
}

impl AdviceState {
    pub fn is_pending(&self) -> bool {
        matches!(self, AdviceState::Pending { .. })
    }
}

struct SessionInner {
    state: AdviceState,
    last_ticket: u64,
}

pub struct AdviceSession {
    advisor: SavingsAdvisor,
    inner: Mutex<SessionInner>,
}

impl AdviceSession {
    pub fn new(advisor: SavingsAdvisor) -> Self {
        Self {
            advisor,
            inner: Mutex::new(SessionInner {
                state: AdviceState::Idle,
                last_ticket: 0,
            }),
        }
    }

    pub fn state(&self) -> AdviceState {
        self.lock().state.clone()
    }

    /// Validates and runs one advice request through the session.
    ///
    /// Returns this submission's own result; the session state is only
    /// updated if no newer submission or discard happened meanwhile.
    ///
    /// If the returned future is dropped before generation finishes, the
    /// session goes back to `Idle` unless a newer submission took over.
    pub async fn submit(&self, request: &SavingsAdviceRequest) -> Result<SavingsAdvice, AiError> {
        request.validate()?;
        let pending = PendingRequest {
            session: self,
            ticket: self.begin(),
            settled: false,
        };
        let result = self.advisor.generate_validated(request).await;
        pending.settle(&result);
        result
    }

    /// Marks a new request as pending and returns its ticket.
    ///
    /// Any earlier pending request is superseded.
    pub fn begin(&self) -> u64 {
        let mut inner = self.lock();
        inner.last_ticket += 1;
        let ticket = inner.last_ticket;
        if inner.state.is_pending() {
            debug!("Advice request {} supersedes a pending request", ticket);
        }
        inner.state = AdviceState::Pending { ticket };
        ticket
    }

    /// Applies the result of request `ticket`. Returns `false` when the
    /// ticket is stale and the result was dropped.
    pub fn complete(&self, ticket: u64, result: &Result<SavingsAdvice, AiError>) -> bool {
        let mut inner = self.lock();
        if inner.state != (AdviceState::Pending { ticket }) {
            debug!("Dropping stale advice result for request {}", ticket);
            return false;
        }
        inner.state = match result {
            Ok(advice) => AdviceState::Succeeded {
                ticket,
                recommendations: advice.recommendations.clone(),
            },
            Err(e) => {
                warn!("Advice request {} failed: {}", ticket, e);
                AdviceState::Failed {
                    ticket,
                    code: e.code().to_string(),
                    message: ADVICE_FAILURE_MESSAGE.to_string(),
                }
            }
        };
        true
    }

    /// Returns to `Idle` if `ticket` is still the pending request.
    ///
    /// Used when a request is cancelled before it produced a result.
    pub fn abandon(&self, ticket: u64) -> bool {
        let mut inner = self.lock();
        if inner.state != (AdviceState::Pending { ticket }) {
            return false;
        }
        debug!("Advice request {} was cancelled", ticket);
        inner.state = AdviceState::Idle;
        true
    }

    /// Returns to `Idle`; results of outstanding requests will be dropped.
    pub fn discard(&self) {
        let mut inner = self.lock();
        inner.state = AdviceState::Idle;
        debug!("Advice session discarded");
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        // The guarded state is replaced wholesale, so a poisoned lock still holds a valid value.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Ticket held by an in-flight [`AdviceSession::submit`].
struct PendingRequest<'a> {
    session: &'a AdviceSession,
    ticket: u64,
    settled: bool,
}

impl PendingRequest<'_> {
    fn settle(mut self, result: &Result<SavingsAdvice, AiError>) {
        self.settled = true;
        self.session.complete(self.ticket, result);
    }
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.session.abandon(self.ticket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{AdviceGeneratorTrait, FakeAdviceGenerator};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::time::Duration;

    /// Never answers, like a provider that hangs until the client gives up.
    struct HangingGenerator;

    #[async_trait]
    impl AdviceGeneratorTrait for HangingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
            std::future::pending().await
        }
    }

    fn session(generator: FakeAdviceGenerator) -> (Arc<FakeAdviceGenerator>, AdviceSession) {
        let generator = Arc::new(generator);
        let session = AdviceSession::new(SavingsAdvisor::new(generator.clone()));
        (generator, session)
    }

    fn request() -> SavingsAdviceRequest {
        SavingsAdviceRequest::new(dec!(5000), dec!(3000), "Save for a house down payment")
    }

    fn advice(text: &str) -> Result<SavingsAdvice, AiError> {
        Ok(SavingsAdvice {
            recommendations: text.to_string(),
        })
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let (_, session) = session(FakeAdviceGenerator::with_recommendations("Save 20%..."));
        assert_eq!(session.state(), AdviceState::Idle);

        let advice = session.submit(&request()).await.unwrap();
        assert_eq!(advice.recommendations, "Save 20%...");
        assert_eq!(
            session.state(),
            AdviceState::Succeeded {
                ticket: 1,
                recommendations: "Save 20%...".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_failed_submission_shows_generic_message() {
        let (_, session) = session(FakeAdviceGenerator::failing("timeout"));

        assert!(session.submit(&request()).await.is_err());
        match session.state() {
            AdviceState::Failed { message, code, .. } => {
                assert_eq!(message, ADVICE_FAILURE_MESSAGE);
                assert_eq!(code, "PROVIDER_ERROR");
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_submission_leaves_state_alone() {
        let (generator, session) = session(FakeAdviceGenerator::with_recommendations("unused"));
        let bad = SavingsAdviceRequest::new(dec!(5000), dec!(3000), "Too short");

        assert!(matches!(session.submit(&bad).await, Err(AiError::Validation(_))));
        assert_eq!(session.state(), AdviceState::Idle);
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_retry_after_failure_goes_pending_again() {
        let (_, session) = session(FakeAdviceGenerator::with_recommendations("ok"));
        let first = session.begin();
        session.complete(first, &Err(AiError::generation("bad shape")));

        let second = session.begin();
        assert_eq!(session.state(), AdviceState::Pending { ticket: second });
    }

    #[tokio::test]
    async fn test_cancelled_submission_returns_to_idle() {
        let session = AdviceSession::new(SavingsAdvisor::new(Arc::new(HangingGenerator)));

        let outcome =
            tokio::time::timeout(Duration::from_millis(20), session.submit(&request())).await;
        assert!(outcome.is_err());
        assert_eq!(session.state(), AdviceState::Idle);
    }

    #[test]
    fn test_abandon_ignores_superseded_ticket() {
        let (_, session) = session(FakeAdviceGenerator::with_recommendations("unused"));
        let older = session.begin();
        let newer = session.begin();

        assert!(!session.abandon(older));
        assert_eq!(session.state(), AdviceState::Pending { ticket: newer });
        assert!(session.abandon(newer));
        assert_eq!(session.state(), AdviceState::Idle);
    }

    #[test]
    fn test_result_after_discard_is_dropped() {
        let (_, session) = session(FakeAdviceGenerator::with_recommendations("unused"));
        let ticket = session.begin();
        session.discard();

        assert!(!session.complete(ticket, &advice("late")));
        assert_eq!(session.state(), AdviceState::Idle);
    }

    #[test]
    fn test_superseded_result_is_dropped() {
        let (_, session) = session(FakeAdviceGenerator::with_recommendations("unused"));
        let older = session.begin();
        let newer = session.begin();

        assert!(!session.complete(older, &advice("old")));
        assert_eq!(session.state(), AdviceState::Pending { ticket: newer });

        assert!(session.complete(newer, &advice("new")));
        assert_eq!(
            session.state(),
            AdviceState::Succeeded {
                ticket: newer,
                recommendations: "new".to_string()
            }
        );
    }

    #[test]
    fn test_state_serializes_with_status_tag() {
        let value = serde_json::to_value(AdviceState::Pending { ticket: 3 }).unwrap();
        assert_eq!(value, serde_json::json!({"status": "pending", "ticket": 3}));
        let idle = serde_json::to_value(AdviceState::Idle).unwrap();
        assert_eq!(idle, serde_json::json!({"status": "idle"}));
    }
}
