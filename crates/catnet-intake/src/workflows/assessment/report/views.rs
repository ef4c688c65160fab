use super::super::questions::ScoredQuestion;
use super::super::scoring::RiskTier;
use crate::i18n::Locale;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreRow {
    pub question: ScoredQuestion,
    pub label: String,
    pub value: u8,
    pub unit: String,
    /// True when the value meets this question's flag threshold; drives the
    /// highlighted styling in the rendered row.
    pub flagged: bool,
}

/// Page 1: the personalized summary.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryPage {
    pub title: String,
    pub date_label: String,
    pub date: String,
    pub tier: RiskTier,
    pub tier_label: String,
    pub total_score: u8,
    pub max_score: u8,
    pub assessment_heading: String,
    pub assessment: String,
    pub recommendation_heading: String,
    pub recommendation: String,
    pub advice_heading: String,
    pub advice: String,
    pub details_heading: String,
    pub basic_info_heading: String,
    pub basic_info: Vec<InfoRow>,
    pub score_heading: String,
    pub scores: Vec<ScoreRow>,
    pub thanks: String,
    pub thanks_detail: String,
    pub thanks_highlight: String,
    pub thanks_note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreedGroup {
    pub title: String,
    pub breeds: Vec<&'static str>,
}

/// Page 2: breed-risk categorization. Draft-independent reference material.
#[derive(Debug, Clone, Serialize)]
pub struct BreedReferencePage {
    pub title: String,
    pub description: String,
    pub groups: Vec<BreedGroup>,
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HouseholdSection {
    pub title: String,
    pub points: Vec<String>,
}

/// Page 3: multi-cat household behavior notes.
#[derive(Debug, Clone, Serialize)]
pub struct MultiCatReferencePage {
    pub title: String,
    pub description: String,
    pub sections: Vec<HouseholdSection>,
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactRow {
    pub behavior: String,
    pub multiplier: &'static str,
    pub impact: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactCallout {
    pub title: String,
    pub detail: String,
}

/// Page 4: physical impact-force reference table.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactReferencePage {
    pub title: String,
    pub description: String,
    pub basis: String,
    pub columns: [String; 4],
    pub rows: Vec<ImpactRow>,
    pub callouts: Vec<ImpactCallout>,
    pub disclaimer: String,
    pub footer: String,
}

/// One self-contained renderable unit handed to the export pipeline.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportPage {
    Summary(SummaryPage),
    BreedReference(BreedReferencePage),
    MultiCatReference(MultiCatReferencePage),
    ImpactReference(ImpactReferencePage),
}

impl ReportPage {
    pub const fn kind(&self) -> &'static str {
        match self {
            ReportPage::Summary(_) => "summary",
            ReportPage::BreedReference(_) => "breed_reference",
            ReportPage::MultiCatReference(_) => "multi_cat_reference",
            ReportPage::ImpactReference(_) => "impact_reference",
        }
    }
}

/// The composed report: pages in the fixed export order.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub locale: Locale,
    pub file_name: String,
    pub pages: Vec<ReportPage>,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
