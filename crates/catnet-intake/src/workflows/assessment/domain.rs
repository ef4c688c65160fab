use super::questions::ScoredQuestion;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    Apartment,
    HouseVilla,
}

impl BuildingType {
    pub const fn ordered() -> [Self; 2] {
        [Self::Apartment, Self::HouseVilla]
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Apartment => "form.buildingType.building",
            Self::HouseVilla => "form.buildingType.house",
        }
    }

    /// Locale-independent label used in the submission payload.
    pub const fn payload_label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::HouseVilla => "House/Villa",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStage {
    BasicInfo,
    ScoredQuestions,
    Confirmation,
    Submitted,
}

impl IntakeStage {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::BasicInfo,
            Self::ScoredQuestions,
            Self::Confirmation,
            Self::Submitted,
        ]
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::BasicInfo => "step.basic",
            Self::ScoredQuestions => "step.risk",
            Self::Confirmation => "step.confirm",
            Self::Submitted => "step.submitted",
        }
    }
}

/// The five fields that must be non-empty before leaving the first stage.
/// Door count is deliberately absent: it defaults to "0" at payload time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicField {
    Address,
    BuildingType,
    FloorLevel,
    WindowCount,
    HeaviestCatWeight,
}

impl BasicField {
    pub const fn required() -> [Self; 5] {
        [
            Self::Address,
            Self::BuildingType,
            Self::FloorLevel,
            Self::WindowCount,
            Self::HeaviestCatWeight,
        ]
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Address => "result.address",
            Self::BuildingType => "result.buildingType",
            Self::FloorLevel => "result.floor",
            Self::WindowCount => "result.windowCount",
            Self::HeaviestCatWeight => "result.heaviestCat",
        }
    }
}

/// The mutable draft collected by the wizard. Unanswered scored questions are
/// simply absent; the historical `-1` sentinel exists only on the wire.
#[derive(Debug, Clone, Default)]
pub struct IntakeDraft {
    pub address: String,
    pub building_type: Option<BuildingType>,
    pub floor_level: String,
    pub window_count: String,
    pub door_count: String,
    pub heaviest_cat_weight: String,
    pub answers: ScoredAnswers,
}

impl IntakeDraft {
    pub fn missing_basic_fields(&self) -> Vec<BasicField> {
        BasicField::required()
            .into_iter()
            .filter(|field| match field {
                BasicField::Address => self.address.trim().is_empty(),
                BasicField::BuildingType => self.building_type.is_none(),
                BasicField::FloorLevel => self.floor_level.trim().is_empty(),
                BasicField::WindowCount => self.window_count.trim().is_empty(),
                BasicField::HeaviestCatWeight => self.heaviest_cat_weight.trim().is_empty(),
            })
            .collect()
    }

    pub fn door_count_or_default(&self) -> &str {
        let trimmed = self.door_count.trim();
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoredAnswers {
    cat_count: Option<u8>,
    window_behavior: Option<u8>,
    window_structure: Option<u8>,
    personality: Option<u8>,
    environment: Option<u8>,
    expectation: Option<u8>,
}

impl ScoredAnswers {
    pub fn get(&self, question: ScoredQuestion) -> Option<u8> {
        match question {
            ScoredQuestion::CatCount => self.cat_count,
            ScoredQuestion::WindowBehavior => self.window_behavior,
            ScoredQuestion::WindowStructure => self.window_structure,
            ScoredQuestion::Personality => self.personality,
            ScoredQuestion::Environment => self.environment,
            ScoredQuestion::Expectation => self.expectation,
        }
    }

    /// Record an answer, rejecting values outside the question's declared
    /// option domain. A rejected value leaves the previous answer in place.
    pub fn record(
        &mut self,
        question: ScoredQuestion,
        value: i64,
    ) -> Result<(), AssessmentError> {
        if !question.accepts(value) {
            return Err(AssessmentError::OptionOutOfRange { question, value });
        }

        let stored = Some(value as u8);
        match question {
            ScoredQuestion::CatCount => self.cat_count = stored,
            ScoredQuestion::WindowBehavior => self.window_behavior = stored,
            ScoredQuestion::WindowStructure => self.window_structure = stored,
            ScoredQuestion::Personality => self.personality = stored,
            ScoredQuestion::Environment => self.environment = stored,
            ScoredQuestion::Expectation => self.expectation = stored,
        }

        Ok(())
    }

    pub fn unanswered(&self) -> Vec<ScoredQuestion> {
        ScoredQuestion::ordered()
            .into_iter()
            .filter(|question| self.get(*question).is_none())
            .collect()
    }

    pub fn completed(&self) -> Option<CompletedAnswers> {
        Some(CompletedAnswers {
            cat_count: self.cat_count?,
            window_behavior: self.window_behavior?,
            window_structure: self.window_structure?,
            personality: self.personality?,
            environment: self.environment?,
            expectation: self.expectation?,
        })
    }
}

/// A fully answered question set. Constructed only via
/// [`ScoredAnswers::completed`], so the unanswered sentinel cannot leak into
/// a finalized record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedAnswers {
    pub cat_count: u8,
    pub window_behavior: u8,
    pub window_structure: u8,
    pub personality: u8,
    pub environment: u8,
    pub expectation: u8,
}

impl CompletedAnswers {
    pub fn value(&self, question: ScoredQuestion) -> u8 {
        match question {
            ScoredQuestion::CatCount => self.cat_count,
            ScoredQuestion::WindowBehavior => self.window_behavior,
            ScoredQuestion::WindowStructure => self.window_structure,
            ScoredQuestion::Personality => self.personality,
            ScoredQuestion::Environment => self.environment,
            ScoredQuestion::Expectation => self.expectation,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoredQuestion, u8)> + '_ {
        ScoredQuestion::ordered()
            .into_iter()
            .map(move |question| (question, self.value(question)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentError {
    MissingBasicFields(Vec<BasicField>),
    UnansweredQuestions(Vec<ScoredQuestion>),
    OptionOutOfRange { question: ScoredQuestion, value: i64 },
    NoForwardTransition(IntakeStage),
    NoBackwardTransition,
    StageMismatch { expected: IntakeStage, actual: IntakeStage },
    AlreadySubmitted,
}

impl AssessmentError {
    /// Localization key for the user-visible validation notice, when the
    /// error corresponds to one.
    pub fn notice_key(&self) -> Option<&'static str> {
        match self {
            AssessmentError::MissingBasicFields(_) => Some("toast.fillAll"),
            AssessmentError::UnansweredQuestions(_)
            | AssessmentError::OptionOutOfRange { .. } => Some("toast.completeAll"),
            _ => None,
        }
    }
}

impl fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentError::MissingBasicFields(fields) => {
                write!(f, "required basic fields are empty: {:?}", fields)
            }
            AssessmentError::UnansweredQuestions(questions) => {
                write!(f, "scored questions left unanswered: {:?}", questions)
            }
            AssessmentError::OptionOutOfRange { question, value } => {
                write!(f, "value {} is not an option of {:?}", value, question)
            }
            AssessmentError::NoForwardTransition(stage) => {
                write!(f, "no forward transition from {:?}", stage)
            }
            AssessmentError::NoBackwardTransition => {
                write!(f, "already at the first stage")
            }
            AssessmentError::StageMismatch { expected, actual } => {
                write!(f, "expected stage {:?}, session is at {:?}", expected, actual)
            }
            AssessmentError::AlreadySubmitted => {
                write!(f, "session has already been submitted")
            }
        }
    }
}

impl std::error::Error for AssessmentError {}
