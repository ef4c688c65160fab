use std::sync::{Arc, Mutex};

use catnet_intake::i18n::Locale;
use catnet_intake::workflows::assessment::{
    compose_report, AssessmentService, BasicInfoUpdate, BuildingType, DispatchError, IntakeSession,
    IntakeStage, ReportPage, RiskTier, ScoredQuestion, ScoringConfig, SubmissionPayload,
    SubmissionSink,
};
use chrono::NaiveDate;

#[derive(Default)]
struct MemorySink {
    deliveries: Mutex<Vec<SubmissionPayload>>,
}

impl SubmissionSink for MemorySink {
    async fn deliver(&self, payload: &SubmissionPayload) -> Result<(), DispatchError> {
        self.deliveries
            .lock()
            .expect("sink mutex poisoned")
            .push(payload.clone());
        Ok(())
    }
}

fn filled_session() -> IntakeSession {
    let mut session = IntakeSession::new(Locale::Zh);
    session
        .update_basic(BasicInfoUpdate {
            address: Some("Flat 3A, 88 Catwalk Road".to_string()),
            building_type: Some(BuildingType::HouseVilla),
            floor_level: Some("2".to_string()),
            window_count: Some("8".to_string()),
            door_count: Some(String::new()),
            heaviest_cat_weight: Some("6.2".to_string()),
        })
        .expect("basic info applies");
    session.advance().expect("to scored questions");

    for (question, value) in [
        (ScoredQuestion::CatCount, 3),
        (ScoredQuestion::WindowBehavior, 3),
        (ScoredQuestion::WindowStructure, 2),
        (ScoredQuestion::Personality, 3),
        (ScoredQuestion::Environment, 2),
        (ScoredQuestion::Expectation, 2),
    ] {
        session.answer(question, value).expect("answer accepted");
    }
    session.advance().expect("to confirmation");
    session
}

#[tokio::test]
async fn wizard_submission_produces_score_payload_and_report() {
    let sink = Arc::new(MemorySink::default());
    let service = AssessmentService::new(sink.clone());
    let mut session = filled_session();

    let receipt = service.submit(&mut session).await.expect("submit succeeds");

    assert_eq!(session.stage(), IntakeStage::Submitted);
    assert_eq!(receipt.total_score, 15);
    assert_eq!(receipt.tier, RiskTier::High);

    let deliveries = sink.deliveries.lock().expect("sink mutex poisoned");
    assert_eq!(deliveries.len(), 1);
    let payload = &deliveries[0];
    assert_eq!(payload.building_type, "House/Villa");
    assert_eq!(payload.door_count, "0");
    assert_eq!(payload.total_score, 15);
    assert_eq!(payload.risk_level, "Critical Risk");

    let assessment = session
        .finalize(service.scoring())
        .expect("finalized view stays available after submit");
    let report = compose_report(
        &assessment,
        Locale::En,
        service.scoring(),
        NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date"),
    );

    assert_eq!(report.page_count(), 4);
    match &report.pages[0] {
        ReportPage::Summary(summary) => {
            assert_eq!(summary.total_score, 15);
            assert_eq!(summary.max_score, ScoringConfig::default().max_score);
            // Every answer in this draft is at or past its flag threshold.
            assert!(summary.scores.iter().all(|row| row.flagged));
        }
        other => panic!("expected summary first, got {other:?}"),
    }
    assert!(report.file_name.ends_with("_2026-08-07.pdf"));
}

#[test]
fn reset_after_submission_allows_a_fresh_run() {
    let mut session = filled_session();
    session.reset();

    assert_eq!(session.stage(), IntakeStage::BasicInfo);
    assert!(session.draft().address.is_empty());
    assert_eq!(session.draft().answers.unanswered().len(), 6);
}
