use serde::{Deserialize, Serialize};

/// The six scored multiple-choice questions. An option's `value` is the point
/// weight that gets stored and summed; it is never an index into the option
/// list (cat count starts at 1, not 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoredQuestion {
    CatCount,
    WindowBehavior,
    WindowStructure,
    Personality,
    Environment,
    Expectation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOption {
    pub value: u8,
    pub label_key: &'static str,
}

impl ScoredQuestion {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::CatCount,
            Self::WindowBehavior,
            Self::WindowStructure,
            Self::Personality,
            Self::Environment,
            Self::Expectation,
        ]
    }

    /// Flat key this question occupies in the submission payload. The keys
    /// keep the historical questionnaire numbering the intake sheet expects.
    pub const fn payload_key(self) -> &'static str {
        match self {
            Self::CatCount => "q3Score",
            Self::WindowBehavior => "q5Score",
            Self::WindowStructure => "q6Score",
            Self::Personality => "q7Score",
            Self::Environment => "q8Score",
            Self::Expectation => "q9Score",
        }
    }

    pub const fn title_key(self) -> &'static str {
        match self {
            Self::CatCount => "q3.title",
            Self::WindowBehavior => "q5.title",
            Self::WindowStructure => "q6.title",
            Self::Personality => "q7.title",
            Self::Environment => "q8.title",
            Self::Expectation => "q9.title",
        }
    }

    /// Short row label used in the report's score breakdown.
    pub const fn summary_label_key(self) -> &'static str {
        match self {
            Self::CatCount => "result.catCount",
            Self::WindowBehavior => "result.windowBehavior",
            Self::WindowStructure => "result.windowStructure",
            Self::Personality => "result.catPersonality",
            Self::Environment => "result.highRisk",
            Self::Expectation => "result.expectation",
        }
    }

    pub const fn options(self) -> &'static [QuestionOption] {
        match self {
            Self::CatCount => &[
                QuestionOption { value: 1, label_key: "q3.opt1" },
                QuestionOption { value: 2, label_key: "q3.opt2" },
                QuestionOption { value: 3, label_key: "q3.opt3" },
                QuestionOption { value: 4, label_key: "q3.opt4" },
            ],
            Self::WindowBehavior => &[
                QuestionOption { value: 0, label_key: "q5.opt1" },
                QuestionOption { value: 1, label_key: "q5.opt2" },
                QuestionOption { value: 2, label_key: "q5.opt3" },
                QuestionOption { value: 3, label_key: "q5.opt4" },
            ],
            Self::WindowStructure => &[
                QuestionOption { value: 0, label_key: "q6.opt1" },
                QuestionOption { value: 1, label_key: "q6.opt2" },
                QuestionOption { value: 2, label_key: "q6.opt3" },
                QuestionOption { value: 3, label_key: "q6.opt4" },
            ],
            Self::Personality => &[
                QuestionOption { value: 0, label_key: "q7.opt1" },
                QuestionOption { value: 1, label_key: "q7.opt2" },
                QuestionOption { value: 2, label_key: "q7.opt3" },
                QuestionOption { value: 3, label_key: "q7.opt4" },
            ],
            Self::Environment => &[
                QuestionOption { value: 0, label_key: "q8.opt1" },
                QuestionOption { value: 1, label_key: "q8.opt2" },
                QuestionOption { value: 2, label_key: "q8.opt3" },
                QuestionOption { value: 3, label_key: "q8.opt4" },
            ],
            Self::Expectation => &[
                QuestionOption { value: 0, label_key: "q9.opt1" },
                QuestionOption { value: 1, label_key: "q9.opt2" },
                QuestionOption { value: 2, label_key: "q9.opt3" },
                QuestionOption { value: 3, label_key: "q9.opt4" },
            ],
        }
    }

    /// Value at or above which this question's row is highlighted in the
    /// report. Independent of the tier cut points.
    pub const fn flag_threshold(self) -> u8 {
        match self {
            Self::CatCount => 3,
            _ => 2,
        }
    }

    pub fn min_value(self) -> u8 {
        self.options()[0].value
    }

    pub fn max_value(self) -> u8 {
        self.options()[self.options().len() - 1].value
    }

    pub fn accepts(self, value: i64) -> bool {
        self.options()
            .iter()
            .any(|option| i64::from(option.value) == value)
    }
}

/// Sum of every question's highest-scoring option.
pub fn maximum_total() -> u8 {
    ScoredQuestion::ordered()
        .into_iter()
        .map(|question| question.max_value())
        .sum()
}
