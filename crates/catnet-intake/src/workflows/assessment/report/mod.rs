mod reference;
mod summary;
pub mod views;

pub use views::{ReportDocument, ReportPage};

use super::scoring::ScoringConfig;
use super::session::FinalizedAssessment;
use crate::i18n::Locale;
use chrono::NaiveDate;

/// Compose the full report for a finalized assessment: the personalized
/// summary first, then the three locale-keyed reference pages. The order is
/// the export order and never changes.
pub fn compose_report(
    assessment: &FinalizedAssessment,
    locale: Locale,
    scoring: &ScoringConfig,
    today: NaiveDate,
) -> ReportDocument {
    let pages = vec![
        ReportPage::Summary(summary::build_summary_page(
            assessment, locale, scoring, today,
        )),
        ReportPage::BreedReference(reference::build_breed_page(locale)),
        ReportPage::MultiCatReference(reference::build_multi_cat_page(locale)),
        ReportPage::ImpactReference(reference::build_impact_page(locale)),
    ];

    ReportDocument {
        locale,
        file_name: export_file_name(&assessment.address, today),
        pages,
    }
}

/// Download name for the exported document: sanitized contact field plus the
/// assessment date.
pub fn export_file_name(address: &str, date: NaiveDate) -> String {
    let mut cleaned = String::with_capacity(address.len());
    let mut last_dash = true;
    for ch in address.chars() {
        if ch.is_alphanumeric() {
            cleaned.push(ch);
            last_dash = false;
        } else if !last_dash {
            cleaned.push('-');
            last_dash = true;
        }
    }
    let cleaned = cleaned.trim_end_matches('-');
    let stem = if cleaned.is_empty() {
        "assessment"
    } else {
        cleaned
    };

    format!(
        "cat-home-safety-assessment_{}_{}.pdf",
        stem,
        date.format("%Y-%m-%d")
    )
}
