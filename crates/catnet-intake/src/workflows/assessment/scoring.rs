use super::domain::CompletedAnswers;
use super::questions::ScoredQuestion;
use serde::{Deserialize, Serialize};

/// Sum the six scored answers. Pure; completeness is guaranteed by the
/// `CompletedAnswers` type, so no validation happens here.
pub fn total_score(answers: &CompletedAnswers) -> u8 {
    ScoredQuestion::ordered()
        .into_iter()
        .map(|question| answers.value(question))
        .sum()
}

/// Tier cut points and the score ceiling, applied uniformly to
/// classification and the report denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub low_cutoff: u8,
    pub high_cutoff: u8,
    pub max_score: u8,
}

impl ScoringConfig {
    pub fn classify(&self, score: u8) -> RiskTier {
        if score <= self.low_cutoff {
            RiskTier::Low
        } else if score <= self.high_cutoff {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }
}

impl Default for ScoringConfig {
    // Canonical configuration: 19 is the sum of the per-question maxima,
    // 6/13 are the tier boundaries.
    fn default() -> Self {
        Self {
            low_cutoff: 6,
            high_cutoff: 13,
            max_score: 19,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Locale-independent label posted in the submission payload.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Stable Protection",
            Self::Medium => "High Attention",
            Self::High => "Critical Risk",
        }
    }

    pub const fn banner_key(self) -> &'static str {
        match self {
            Self::Low => "result.riskLow",
            Self::Medium => "result.riskMedium",
            Self::High => "result.riskHigh",
        }
    }

    pub const fn assessment_key(self) -> &'static str {
        match self {
            Self::Low => "risk.low.assessment",
            Self::Medium => "risk.medium.assessment",
            Self::High => "risk.high.assessment",
        }
    }

    pub const fn recommendation_key(self) -> &'static str {
        match self {
            Self::Low => "risk.low.recommendation",
            Self::Medium => "risk.medium.recommendation",
            Self::High => "risk.high.recommendation",
        }
    }

    pub const fn advice_key(self) -> &'static str {
        match self {
            Self::Low => "risk.low.advice",
            Self::Medium => "risk.medium.advice",
            Self::High => "risk.high.advice",
        }
    }
}
