use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::i18n::Locale;
use crate::workflows::assessment::dispatch::{DispatchError, SubmissionPayload, SubmissionSink};
use crate::workflows::assessment::domain::BuildingType;
use crate::workflows::assessment::questions::ScoredQuestion;
use crate::workflows::assessment::router::IntakeGateway;
use crate::workflows::assessment::service::AssessmentService;
use crate::workflows::assessment::session::{BasicInfoUpdate, IntakeSession};

#[derive(Default)]
pub(super) struct RecordingSink {
    deliveries: Mutex<Vec<SubmissionPayload>>,
}

impl RecordingSink {
    pub(super) fn deliveries(&self) -> Vec<SubmissionPayload> {
        self.deliveries.lock().expect("sink mutex poisoned").clone()
    }
}

impl SubmissionSink for RecordingSink {
    async fn deliver(&self, payload: &SubmissionPayload) -> Result<(), DispatchError> {
        self.deliveries
            .lock()
            .expect("sink mutex poisoned")
            .push(payload.clone());
        Ok(())
    }
}

pub(super) struct FailingSink;

impl SubmissionSink for FailingSink {
    async fn deliver(&self, _payload: &SubmissionPayload) -> Result<(), DispatchError> {
        Err(DispatchError::Transport("connection refused".to_string()))
    }
}

pub(super) fn basic_info() -> BasicInfoUpdate {
    BasicInfoUpdate {
        address: Some("Flat 12B, Harbour View Court".to_string()),
        building_type: Some(BuildingType::Apartment),
        floor_level: Some("15".to_string()),
        window_count: Some("6".to_string()),
        door_count: Some("2".to_string()),
        heaviest_cat_weight: Some("5.5".to_string()),
    }
}

/// The boundary-inclusive answer set from the questionnaire contract: the
/// values sum to 6, landing exactly on the low/medium cut point.
pub(super) fn low_boundary_answers() -> [(ScoredQuestion, i64); 6] {
    [
        (ScoredQuestion::CatCount, 2),
        (ScoredQuestion::WindowBehavior, 1),
        (ScoredQuestion::WindowStructure, 0),
        (ScoredQuestion::Personality, 2),
        (ScoredQuestion::Environment, 0),
        (ScoredQuestion::Expectation, 1),
    ]
}

pub(super) fn session_at_questions(locale: Locale) -> IntakeSession {
    let mut session = IntakeSession::new(locale);
    session.update_basic(basic_info()).expect("basic info applies");
    session.advance().expect("advances to scored questions");
    session
}

pub(super) fn confirmed_session(locale: Locale) -> IntakeSession {
    let mut session = session_at_questions(locale);
    for (question, value) in low_boundary_answers() {
        session.answer(question, value).expect("answer accepted");
    }
    session.advance().expect("advances to confirmation");
    session
}

pub(super) fn recording_gateway() -> (Arc<IntakeGateway<RecordingSink>>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let service = AssessmentService::new(sink.clone());
    (Arc::new(IntakeGateway::new(service)), sink)
}

pub(super) fn failing_gateway() -> Arc<IntakeGateway<FailingSink>> {
    Arc::new(IntakeGateway::new(AssessmentService::new(Arc::new(
        FailingSink,
    ))))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
