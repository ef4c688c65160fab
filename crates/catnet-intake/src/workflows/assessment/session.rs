use super::domain::{
    AssessmentError, BuildingType, CompletedAnswers, IntakeDraft, IntakeStage,
};
use super::questions::ScoredQuestion;
use super::scoring::{total_score, RiskTier, ScoringConfig};
use crate::i18n::Locale;
use serde::Deserialize;

/// Field-level merge applied to the draft's basic-info stage. Absent fields
/// are left untouched so the wizard can save one input at a time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BasicInfoUpdate {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub building_type: Option<BuildingType>,
    #[serde(default)]
    pub floor_level: Option<String>,
    #[serde(default)]
    pub window_count: Option<String>,
    #[serde(default)]
    pub door_count: Option<String>,
    #[serde(default)]
    pub heaviest_cat_weight: Option<String>,
}

/// Session-scoped context for one questionnaire run: the active locale, the
/// wizard stage, and the mutable draft. Nothing here survives the session.
#[derive(Debug, Clone)]
pub struct IntakeSession {
    locale: Locale,
    stage: IntakeStage,
    draft: IntakeDraft,
}

impl IntakeSession {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            stage: IntakeStage::BasicInfo,
            draft: IntakeDraft::default(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Locale switching re-keys display text only; the draft is untouched.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn stage(&self) -> IntakeStage {
        self.stage
    }

    pub fn draft(&self) -> &IntakeDraft {
        &self.draft
    }

    pub fn update_basic(&mut self, update: BasicInfoUpdate) -> Result<(), AssessmentError> {
        if self.stage == IntakeStage::Submitted {
            return Err(AssessmentError::AlreadySubmitted);
        }

        let BasicInfoUpdate {
            address,
            building_type,
            floor_level,
            window_count,
            door_count,
            heaviest_cat_weight,
        } = update;

        if let Some(address) = address {
            self.draft.address = address;
        }
        if let Some(building_type) = building_type {
            self.draft.building_type = Some(building_type);
        }
        if let Some(floor_level) = floor_level {
            self.draft.floor_level = floor_level;
        }
        if let Some(window_count) = window_count {
            self.draft.window_count = window_count;
        }
        if let Some(door_count) = door_count {
            self.draft.door_count = door_count;
        }
        if let Some(heaviest_cat_weight) = heaviest_cat_weight {
            self.draft.heaviest_cat_weight = heaviest_cat_weight;
        }

        Ok(())
    }

    pub fn answer(
        &mut self,
        question: ScoredQuestion,
        value: i64,
    ) -> Result<(), AssessmentError> {
        if self.stage == IntakeStage::Submitted {
            return Err(AssessmentError::AlreadySubmitted);
        }

        self.draft.answers.record(question, value)
    }

    /// Guarded forward transition. Submission out of `Confirmation` is a
    /// distinct operation on the service, not a plain advance.
    pub fn advance(&mut self) -> Result<IntakeStage, AssessmentError> {
        let next = match self.stage {
            IntakeStage::BasicInfo => {
                let missing = self.draft.missing_basic_fields();
                if !missing.is_empty() {
                    return Err(AssessmentError::MissingBasicFields(missing));
                }
                IntakeStage::ScoredQuestions
            }
            IntakeStage::ScoredQuestions => {
                let unanswered = self.draft.answers.unanswered();
                if !unanswered.is_empty() {
                    return Err(AssessmentError::UnansweredQuestions(unanswered));
                }
                IntakeStage::Confirmation
            }
            stage => return Err(AssessmentError::NoForwardTransition(stage)),
        };

        self.stage = next;
        Ok(next)
    }

    /// Backward navigation never clears field values.
    pub fn back(&mut self) -> Result<IntakeStage, AssessmentError> {
        let previous = match self.stage {
            IntakeStage::BasicInfo => return Err(AssessmentError::NoBackwardTransition),
            IntakeStage::ScoredQuestions => IntakeStage::BasicInfo,
            IntakeStage::Confirmation => IntakeStage::ScoredQuestions,
            IntakeStage::Submitted => IntakeStage::Confirmation,
        };

        self.stage = previous;
        Ok(previous)
    }

    /// Restart from any stage with a pristine draft. The locale selection is
    /// deliberately kept.
    pub fn reset(&mut self) {
        self.stage = IntakeStage::BasicInfo;
        self.draft = IntakeDraft::default();
    }

    /// Snapshot the draft into an immutable, fully validated record with the
    /// derived score and tier. Available once the wizard has reached
    /// `Confirmation` (and afterwards, for re-composing the report).
    pub fn finalize(
        &self,
        config: &ScoringConfig,
    ) -> Result<FinalizedAssessment, AssessmentError> {
        if !matches!(
            self.stage,
            IntakeStage::Confirmation | IntakeStage::Submitted
        ) {
            return Err(AssessmentError::StageMismatch {
                expected: IntakeStage::Confirmation,
                actual: self.stage,
            });
        }

        let missing = self.draft.missing_basic_fields();
        if !missing.is_empty() {
            return Err(AssessmentError::MissingBasicFields(missing));
        }

        let answers = match self.draft.answers.completed() {
            Some(answers) => answers,
            None => {
                return Err(AssessmentError::UnansweredQuestions(
                    self.draft.answers.unanswered(),
                ))
            }
        };

        let building_type = self.draft.building_type.ok_or_else(|| {
            AssessmentError::MissingBasicFields(vec![super::domain::BasicField::BuildingType])
        })?;

        let score = total_score(&answers);

        Ok(FinalizedAssessment {
            address: self.draft.address.trim().to_string(),
            building_type,
            floor_level: self.draft.floor_level.trim().to_string(),
            window_count: self.draft.window_count.trim().to_string(),
            door_count: self.draft.door_count_or_default().to_string(),
            heaviest_cat_weight: self.draft.heaviest_cat_weight.trim().to_string(),
            answers,
            total_score: score,
            tier: config.classify(score),
        })
    }

    pub(crate) fn mark_submitted(&mut self) {
        self.stage = IntakeStage::Submitted;
    }
}

/// Validated snapshot handed to the dispatcher and the report composer.
#[derive(Debug, Clone)]
pub struct FinalizedAssessment {
    pub address: String,
    pub building_type: BuildingType,
    pub floor_level: String,
    pub window_count: String,
    pub door_count: String,
    pub heaviest_cat_weight: String,
    pub answers: CompletedAnswers,
    pub total_score: u8,
    pub tier: RiskTier,
}
