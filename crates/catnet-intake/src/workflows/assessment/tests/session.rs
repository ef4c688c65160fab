use super::common::*;
use crate::i18n::Locale;
use crate::workflows::assessment::domain::{AssessmentError, BasicField, IntakeStage};
use crate::workflows::assessment::questions::ScoredQuestion;
use crate::workflows::assessment::scoring::ScoringConfig;
use crate::workflows::assessment::session::{BasicInfoUpdate, IntakeSession};

#[test]
fn advance_is_blocked_while_a_required_field_is_empty() {
    let mut session = IntakeSession::new(Locale::Zh);
    let mut update = basic_info();
    update.window_count = Some(String::new());
    session.update_basic(update).expect("update applies");

    match session.advance() {
        Err(AssessmentError::MissingBasicFields(fields)) => {
            assert_eq!(fields, vec![BasicField::WindowCount]);
        }
        other => panic!("expected missing-field error, got {other:?}"),
    }
    assert_eq!(session.stage(), IntakeStage::BasicInfo);
}

#[test]
fn whitespace_only_input_counts_as_empty() {
    let mut session = IntakeSession::new(Locale::Zh);
    let mut update = basic_info();
    update.address = Some("   ".to_string());
    session.update_basic(update).expect("update applies");

    match session.advance() {
        Err(AssessmentError::MissingBasicFields(fields)) => {
            assert_eq!(fields, vec![BasicField::Address]);
        }
        other => panic!("expected missing-field error, got {other:?}"),
    }
}

#[test]
fn missing_field_error_maps_to_fill_all_notice() {
    let error = AssessmentError::MissingBasicFields(vec![BasicField::Address]);
    assert_eq!(error.notice_key(), Some("toast.fillAll"));

    let error = AssessmentError::UnansweredQuestions(vec![ScoredQuestion::CatCount]);
    assert_eq!(error.notice_key(), Some("toast.completeAll"));
}

#[test]
fn advance_is_blocked_until_every_question_is_answered() {
    let mut session = session_at_questions(Locale::Zh);
    for (question, value) in low_boundary_answers().into_iter().take(5) {
        session.answer(question, value).expect("answer accepted");
    }

    match session.advance() {
        Err(AssessmentError::UnansweredQuestions(questions)) => {
            assert_eq!(questions, vec![ScoredQuestion::Expectation]);
        }
        other => panic!("expected unanswered-question error, got {other:?}"),
    }
    assert_eq!(session.stage(), IntakeStage::ScoredQuestions);
}

#[test]
fn cat_count_rejects_zero_because_its_minimum_option_is_one() {
    let mut session = session_at_questions(Locale::Zh);

    match session.answer(ScoredQuestion::CatCount, 0) {
        Err(AssessmentError::OptionOutOfRange { question, value }) => {
            assert_eq!(question, ScoredQuestion::CatCount);
            assert_eq!(value, 0);
        }
        other => panic!("expected out-of-range error, got {other:?}"),
    }
    assert_eq!(session.draft().answers.get(ScoredQuestion::CatCount), None);
}

#[test]
fn rejected_value_leaves_previous_answer_in_place() {
    let mut session = session_at_questions(Locale::Zh);
    session
        .answer(ScoredQuestion::WindowBehavior, 2)
        .expect("valid answer accepted");

    session
        .answer(ScoredQuestion::WindowBehavior, 9)
        .expect_err("out-of-domain value rejected");
    assert_eq!(
        session.draft().answers.get(ScoredQuestion::WindowBehavior),
        Some(2)
    );
}

#[test]
fn wire_sentinel_is_not_an_acceptable_answer() {
    let mut session = session_at_questions(Locale::Zh);
    session
        .answer(ScoredQuestion::Personality, -1)
        .expect_err("sentinel rejected");
}

#[test]
fn back_navigation_preserves_collected_data() {
    let mut session = confirmed_session(Locale::Zh);

    session.back().expect("back to scored questions");
    session.back().expect("back to basic info");
    assert_eq!(session.stage(), IntakeStage::BasicInfo);
    assert_eq!(session.draft().address, "Flat 12B, Harbour View Court");
    assert_eq!(
        session.draft().answers.get(ScoredQuestion::CatCount),
        Some(2)
    );

    session.advance().expect("forward again");
    session.advance().expect("answers survived the round trip");
    assert_eq!(session.stage(), IntakeStage::Confirmation);
}

#[test]
fn back_is_rejected_at_the_initial_stage() {
    let mut session = IntakeSession::new(Locale::Zh);
    match session.back() {
        Err(AssessmentError::NoBackwardTransition) => {}
        other => panic!("expected no-backward error, got {other:?}"),
    }
}

#[test]
fn reset_restores_a_pristine_draft_from_any_stage() {
    let mut session = confirmed_session(Locale::En);
    session.reset();
    assert_eq!(session.stage(), IntakeStage::BasicInfo);
    assert!(session.draft().address.is_empty());
    assert!(session.draft().answers.unanswered().len() == 6);
    // Locale is a display preference, not draft data.
    assert_eq!(session.locale(), Locale::En);
}

#[test]
fn finalize_defaults_an_empty_door_count_to_zero() {
    let mut session = IntakeSession::new(Locale::Zh);
    let mut update = basic_info();
    update.door_count = Some(String::new());
    session.update_basic(update).expect("update applies");
    session.advance().expect("to scored questions");
    for (question, value) in low_boundary_answers() {
        session.answer(question, value).expect("answer accepted");
    }
    session.advance().expect("to confirmation");

    let assessment = session
        .finalize(&ScoringConfig::default())
        .expect("finalizes");
    assert_eq!(assessment.door_count, "0");
}

#[test]
fn finalize_requires_reaching_confirmation() {
    let session = session_at_questions(Locale::Zh);
    match session.finalize(&ScoringConfig::default()) {
        Err(AssessmentError::StageMismatch { expected, actual }) => {
            assert_eq!(expected, IntakeStage::Confirmation);
            assert_eq!(actual, IntakeStage::ScoredQuestions);
        }
        other => panic!("expected stage mismatch, got {other:?}"),
    }
}

#[test]
fn partial_updates_merge_without_clearing_other_fields() {
    let mut session = IntakeSession::new(Locale::Zh);
    session.update_basic(basic_info()).expect("full update");
    session
        .update_basic(BasicInfoUpdate {
            floor_level: Some("22".to_string()),
            ..BasicInfoUpdate::default()
        })
        .expect("partial update");

    assert_eq!(session.draft().floor_level, "22");
    assert_eq!(session.draft().window_count, "6");
}
