use std::sync::Arc;

use serde_json::Value;

use super::common::*;
use crate::i18n::Locale;
use crate::workflows::assessment::dispatch::{DeliveryStatus, SubmissionPayload};
use crate::workflows::assessment::domain::{AssessmentError, IntakeStage};
use crate::workflows::assessment::scoring::{RiskTier, ScoringConfig};
use crate::workflows::assessment::service::AssessmentService;

#[test]
fn payload_serializes_with_the_exact_wire_keys() {
    let session = confirmed_session(Locale::Zh);
    let assessment = session
        .finalize(&ScoringConfig::default())
        .expect("finalizes");
    let payload = SubmissionPayload::build(&assessment, "2026-08-07 10:00:00".to_string());

    let value = serde_json::to_value(&payload).expect("serializes");
    let object = value.as_object().expect("flat object");

    let expected = [
        "timestamp",
        "address",
        "floor",
        "buildingType",
        "windowCount",
        "doorCount",
        "heaviestCatWeight",
        "q3Score",
        "q5Score",
        "q6Score",
        "q7Score",
        "q8Score",
        "q9Score",
        "totalScore",
        "riskLevel",
    ];
    assert_eq!(object.len(), expected.len());
    for key in expected {
        assert!(object.contains_key(key), "payload missing key {key}");
    }

    assert_eq!(object["buildingType"], Value::from("Apartment"));
    assert_eq!(object["totalScore"], Value::from(6));
    assert_eq!(object["riskLevel"], Value::from("Stable Protection"));
}

#[tokio::test]
async fn submit_records_the_payload_and_marks_the_session() {
    let sink = Arc::new(RecordingSink::default());
    let service = AssessmentService::new(sink.clone());
    let mut session = confirmed_session(Locale::Zh);

    let receipt = service.submit(&mut session).await.expect("submit succeeds");

    assert_eq!(session.stage(), IntakeStage::Submitted);
    assert_eq!(receipt.total_score, 6);
    assert_eq!(receipt.tier, RiskTier::Low);
    assert!(receipt.delivery.is_delivered());

    let deliveries = sink.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].q3_score, 2);
    assert_eq!(deliveries[0].door_count, "2");
    assert_eq!(deliveries[0].risk_level, "Stable Protection");
}

#[tokio::test]
async fn transport_failure_does_not_block_the_submitted_transition() {
    let service = AssessmentService::new(Arc::new(FailingSink));
    let mut session = confirmed_session(Locale::Zh);

    let receipt = service.submit(&mut session).await.expect("submit succeeds");

    assert_eq!(session.stage(), IntakeStage::Submitted);
    assert_eq!(receipt.total_score, 6);
    assert_eq!(receipt.tier, RiskTier::Low);
    match receipt.delivery {
        DeliveryStatus::Failed { reason } => {
            assert!(reason.contains("connection refused"));
        }
        other => panic!("expected failed delivery, got {other:?}"),
    }
}

#[tokio::test]
async fn a_session_cannot_be_submitted_twice() {
    let sink = Arc::new(RecordingSink::default());
    let service = AssessmentService::new(sink.clone());
    let mut session = confirmed_session(Locale::Zh);

    service.submit(&mut session).await.expect("first submit");
    match service.submit(&mut session).await {
        Err(AssessmentError::AlreadySubmitted) => {}
        other => panic!("expected already-submitted error, got {other:?}"),
    }
    assert_eq!(sink.deliveries().len(), 1);
}

#[tokio::test]
async fn submit_requires_the_confirmation_stage() {
    let service = AssessmentService::new(Arc::new(RecordingSink::default()));
    let mut session = session_at_questions(Locale::Zh);

    match service.submit(&mut session).await {
        Err(AssessmentError::StageMismatch { .. }) => {}
        other => panic!("expected stage mismatch, got {other:?}"),
    }
    assert_eq!(session.stage(), IntakeStage::ScoredQuestions);
}
