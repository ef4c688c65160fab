use super::session::FinalizedAssessment;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Flat record posted once to the intake webhook. Key names are the wire
/// contract with the receiving sheet and must not change with the locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub timestamp: String,
    pub address: String,
    pub floor: String,
    pub building_type: String,
    pub window_count: String,
    pub door_count: String,
    pub heaviest_cat_weight: String,
    pub q3_score: u8,
    pub q5_score: u8,
    pub q6_score: u8,
    pub q7_score: u8,
    pub q8_score: u8,
    pub q9_score: u8,
    pub total_score: u8,
    pub risk_level: String,
}

impl SubmissionPayload {
    pub fn build(assessment: &FinalizedAssessment, timestamp: String) -> Self {
        Self {
            timestamp,
            address: assessment.address.clone(),
            floor: assessment.floor_level.clone(),
            building_type: assessment.building_type.payload_label().to_string(),
            window_count: assessment.window_count.clone(),
            door_count: assessment.door_count.clone(),
            heaviest_cat_weight: assessment.heaviest_cat_weight.clone(),
            q3_score: assessment.answers.cat_count,
            q5_score: assessment.answers.window_behavior,
            q6_score: assessment.answers.window_structure,
            q7_score: assessment.answers.personality,
            q8_score: assessment.answers.environment,
            q9_score: assessment.answers.expectation,
            total_score: assessment.total_score,
            risk_level: assessment.tier.label().to_string(),
        }
    }
}

/// Error raised while handing the payload to the transport.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DispatchError {
    #[error("webhook transport failed: {0}")]
    Transport(String),
}

/// Outbound hook for the one-way submission post. Best-effort by contract:
/// callers make exactly one delivery attempt per explicit submit action.
pub trait SubmissionSink: Send + Sync {
    fn deliver(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<(), DispatchError>> + Send;
}

/// Production sink posting to the configured webhook endpoint. The response
/// status and body are intentionally not inspected; a send that leaves the
/// process without a transport error counts as delivered.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SubmissionSink for WebhookSink {
    async fn deliver(&self, payload: &SubmissionPayload) -> Result<(), DispatchError> {
        self.client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map(|_response| ())
            .map_err(|err| DispatchError::Transport(err.to_string()))
    }
}

/// Outcome of the single delivery attempt, carried on the receipt so the
/// caller can surface a non-blocking warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DeliveryStatus {
    Delivered,
    Failed { reason: String },
}

impl DeliveryStatus {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered)
    }
}
