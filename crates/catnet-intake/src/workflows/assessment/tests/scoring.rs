use super::common::*;
use crate::i18n::Locale;
use crate::workflows::assessment::questions::{maximum_total, ScoredQuestion};
use crate::workflows::assessment::scoring::{total_score, RiskTier, ScoringConfig};

#[test]
fn score_is_the_arithmetic_sum_of_all_six_answers() {
    let session = confirmed_session(Locale::Zh);
    let answers = session
        .draft()
        .answers
        .completed()
        .expect("all questions answered");

    assert_eq!(total_score(&answers), 6);
}

#[test]
fn score_is_invariant_to_answer_order() {
    let mut forward = session_at_questions(Locale::Zh);
    for (question, value) in low_boundary_answers() {
        forward.answer(question, value).expect("answer accepted");
    }

    let mut reversed = session_at_questions(Locale::Zh);
    for (question, value) in low_boundary_answers().into_iter().rev() {
        reversed.answer(question, value).expect("answer accepted");
    }

    let forward_answers = forward.draft().answers.completed().expect("complete");
    let reversed_answers = reversed.draft().answers.completed().expect("complete");
    assert_eq!(total_score(&forward_answers), total_score(&reversed_answers));
}

#[test]
fn default_config_matches_the_question_domains() {
    assert_eq!(maximum_total(), ScoringConfig::default().max_score);
}

#[test]
fn classification_is_boundary_inclusive_on_the_low_cutoff() {
    let config = ScoringConfig::default();
    assert_eq!(config.classify(0), RiskTier::Low);
    assert_eq!(config.classify(6), RiskTier::Low);
    assert_eq!(config.classify(7), RiskTier::Medium);
    assert_eq!(config.classify(13), RiskTier::Medium);
    assert_eq!(config.classify(14), RiskTier::High);
    assert_eq!(config.classify(19), RiskTier::High);
}

#[test]
fn raising_cat_count_crosses_into_the_medium_tier() {
    let config = ScoringConfig::default();

    let mut session = session_at_questions(Locale::Zh);
    for (question, value) in low_boundary_answers() {
        session.answer(question, value).expect("answer accepted");
    }
    let answers = session.draft().answers.completed().expect("complete");
    assert_eq!(config.classify(total_score(&answers)), RiskTier::Low);

    session
        .answer(ScoredQuestion::CatCount, 4)
        .expect("raised answer accepted");
    let answers = session.draft().answers.completed().expect("complete");
    assert_eq!(total_score(&answers), 8);
    assert_eq!(config.classify(total_score(&answers)), RiskTier::Medium);
}

#[test]
fn classification_is_monotonic_in_every_question() {
    let config = ScoringConfig::default();

    for question in ScoredQuestion::ordered() {
        let mut session = session_at_questions(Locale::Zh);
        for (base_question, value) in low_boundary_answers() {
            session.answer(base_question, value).expect("answer accepted");
        }

        let mut previous_tier = RiskTier::Low;
        for option in question.options() {
            session
                .answer(question, i64::from(option.value))
                .expect("option value accepted");
            let answers = session.draft().answers.completed().expect("complete");
            let tier = config.classify(total_score(&answers));
            assert!(
                tier >= previous_tier,
                "tier regressed on {question:?} at value {}",
                option.value
            );
            previous_tier = tier;
        }
    }
}

#[test]
fn every_question_flags_at_its_declared_threshold() {
    for question in ScoredQuestion::ordered() {
        let threshold = question.flag_threshold();
        assert!(
            question.accepts(i64::from(threshold)),
            "{question:?} flag threshold must be a reachable option value"
        );
    }
    assert_eq!(ScoredQuestion::CatCount.flag_threshold(), 3);
    assert_eq!(ScoredQuestion::WindowBehavior.flag_threshold(), 2);
}
