use super::super::questions::ScoredQuestion;
use super::super::scoring::ScoringConfig;
use super::super::session::FinalizedAssessment;
use super::views::{InfoRow, ScoreRow, SummaryPage};
use crate::i18n::{text, Locale};
use chrono::NaiveDate;

pub(super) fn build_summary_page(
    assessment: &FinalizedAssessment,
    locale: Locale,
    scoring: &ScoringConfig,
    today: NaiveDate,
) -> SummaryPage {
    let tier = assessment.tier;

    let pieces = text(locale, "unit.pieces");
    let basic_info = vec![
        InfoRow {
            label: text(locale, "result.address").to_string(),
            value: assessment.address.clone(),
        },
        InfoRow {
            label: text(locale, "result.buildingType").to_string(),
            value: text(locale, assessment.building_type.label_key()).to_string(),
        },
        InfoRow {
            label: text(locale, "result.floor").to_string(),
            value: assessment.floor_level.clone(),
        },
        InfoRow {
            label: text(locale, "result.windowCount").to_string(),
            value: format!("{} {}", assessment.window_count, pieces),
        },
        InfoRow {
            label: text(locale, "result.doorCount").to_string(),
            value: format!("{} {}", assessment.door_count, pieces),
        },
        InfoRow {
            label: text(locale, "result.heaviestCat").to_string(),
            value: format!(
                "{} {}",
                assessment.heaviest_cat_weight,
                text(locale, "unit.kg")
            ),
        },
    ];

    let scores = ScoredQuestion::ordered()
        .into_iter()
        .map(|question| {
            let value = assessment.answers.value(question);
            ScoreRow {
                question,
                label: text(locale, question.summary_label_key()).to_string(),
                value,
                unit: text(locale, "unit.points").to_string(),
                flagged: value >= question.flag_threshold(),
            }
        })
        .collect();

    SummaryPage {
        title: text(locale, "result.title").to_string(),
        date_label: text(locale, "result.date").to_string(),
        date: today.format("%Y-%m-%d").to_string(),
        tier,
        tier_label: text(locale, tier.banner_key()).to_string(),
        total_score: assessment.total_score,
        max_score: scoring.max_score,
        assessment_heading: text(locale, "result.assessment").to_string(),
        assessment: text(locale, tier.assessment_key()).to_string(),
        recommendation_heading: text(locale, "result.recommendation").to_string(),
        recommendation: text(locale, tier.recommendation_key()).to_string(),
        advice_heading: text(locale, "result.advice").to_string(),
        advice: text(locale, tier.advice_key()).to_string(),
        details_heading: text(locale, "result.details").to_string(),
        basic_info_heading: text(locale, "result.basicInfo").to_string(),
        basic_info,
        score_heading: text(locale, "result.scoreBreakdown").to_string(),
        scores,
        thanks: text(locale, "result.thanks").to_string(),
        thanks_detail: text(locale, "result.thanksDesc").to_string(),
        thanks_highlight: text(locale, "result.thanksHighlight").to_string(),
        thanks_note: text(locale, "result.thanksNote").to_string(),
    }
}
