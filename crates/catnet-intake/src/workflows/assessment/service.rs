use std::sync::Arc;

use chrono::Local;
use serde::Serialize;
use tracing::warn;

use super::dispatch::{DeliveryStatus, SubmissionPayload, SubmissionSink};
use super::domain::{AssessmentError, IntakeStage};
use super::scoring::{RiskTier, ScoringConfig};
use super::session::IntakeSession;

/// Service composing finalization, payload build, and the one-way dispatch.
pub struct AssessmentService<S> {
    sink: Arc<S>,
    scoring: ScoringConfig,
}

impl<S> AssessmentService<S>
where
    S: SubmissionSink + 'static,
{
    pub fn new(sink: Arc<S>) -> Self {
        Self::with_scoring(sink, ScoringConfig::default())
    }

    pub fn with_scoring(sink: Arc<S>, scoring: ScoringConfig) -> Self {
        Self { sink, scoring }
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Explicit submit out of `Confirmation`. The score and tier are computed
    /// locally, so a failed webhook delivery downgrades to a warning on the
    /// receipt and the session still reaches `Submitted`.
    pub async fn submit(
        &self,
        session: &mut IntakeSession,
    ) -> Result<SubmissionReceipt, AssessmentError> {
        if session.stage() == IntakeStage::Submitted {
            return Err(AssessmentError::AlreadySubmitted);
        }

        let assessment = session.finalize(&self.scoring)?;
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let payload = SubmissionPayload::build(&assessment, timestamp);

        let delivery = match self.sink.deliver(&payload).await {
            Ok(()) => DeliveryStatus::Delivered,
            Err(err) => {
                warn!(%err, "submission webhook dispatch failed");
                DeliveryStatus::Failed {
                    reason: err.to_string(),
                }
            }
        };

        session.mark_submitted();

        Ok(SubmissionReceipt {
            total_score: assessment.total_score,
            tier: assessment.tier,
            max_score: self.scoring.max_score,
            delivery,
            payload,
        })
    }
}

/// What the caller gets back from a submit: the derived result plus the
/// delivery outcome. The raw payload is kept for callers that want to audit
/// what left the process; it is not serialized onto the wire receipt.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub total_score: u8,
    pub tier: RiskTier,
    pub max_score: u8,
    pub delivery: DeliveryStatus,
    #[serde(skip)]
    pub payload: SubmissionPayload,
}
