use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IntegrityViolation, Result};
use crate::graph::QuestionGraph;
use crate::question::{AnswerOption, Question, QuestionId};
use crate::resolver::RuleDefinition;

/// Largest number of labels a rating scale may expand into
pub const MAX_RATING_LABELS: u32 = 100;

fn default_root() -> QuestionId {
    1
}

/// Serializable description of a questionnaire
///
/// ```yaml
/// root: 1
/// questions:
///   - id: 1
///     text: 体の痛みはありますか？
///     options:
///       - { label: はい, next: 2 }
///       - { label: いいえ }
///   - id: 2
///     text: 痛みの度合いを教えてください（1〜10）。
///     rating: { min: 1, max: 10 }
/// normalization:
///   - { pattern: "いち|1", value: "1" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireDefinition {
    #[serde(default = "default_root")]
    pub root: QuestionId,
    pub questions: Vec<QuestionDefinition>,
    /// Ordered normalization rules; the built-in digit rules apply when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalization: Option<Vec<RuleDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: QuestionId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingScale>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDefinition {
    pub label: String,
    #[serde(default)]
    pub next: Option<QuestionId>,
}

/// Numeric scale expanded into the labels `min..=max`, all leading to `next`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingScale {
    pub min: u32,
    pub max: u32,
    #[serde(default)]
    pub next: Option<QuestionId>,
}

impl QuestionnaireDefinition {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Reading questionnaire definition");
        Self::from_yaml_str(&source)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl QuestionDefinition {
    /// Expand into a [`Question`], turning a rating scale into its labels
    pub fn to_question(&self) -> Result<Question> {
        let options = match (&self.rating, self.options.is_empty()) {
            (Some(_), false) => return Err(IntegrityViolation::AmbiguousOptions(self.id).into()),
            (Some(scale), true) => {
                if scale.min > scale.max {
                    return Err(IntegrityViolation::EmptyRating {
                        question_id: self.id,
                        min: scale.min,
                        max: scale.max,
                    }
                    .into());
                }
                if scale.max - scale.min >= MAX_RATING_LABELS {
                    return Err(IntegrityViolation::RatingTooLarge {
                        question_id: self.id,
                        min: scale.min,
                        max: scale.max,
                        limit: MAX_RATING_LABELS,
                    }
                    .into());
                }
                (scale.min..=scale.max)
                    .map(|value| AnswerOption::new(value.to_string(), scale.next))
                    .collect()
            }
            (None, _) => self
                .options
                .iter()
                .map(|option| AnswerOption::new(option.label.clone(), option.next))
                .collect(),
        };

        Ok(Question::new(self.id, self.text.clone(), options))
    }
}

impl QuestionGraph {
    pub fn from_definition(definition: &QuestionnaireDefinition) -> Result<Self> {
        let questions = definition
            .questions
            .iter()
            .map(QuestionDefinition::to_question)
            .collect::<Result<Vec<_>>>()?;
        Self::new(definition.root, questions)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Self::from_definition(&QuestionnaireDefinition::from_yaml_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_definition(&QuestionnaireDefinition::from_path(path)?)
    }

    /// Definition equivalent to this graph, with every option spelled out
    pub fn to_definition(&self) -> QuestionnaireDefinition {
        QuestionnaireDefinition {
            root: self.root(),
            questions: self
                .questions()
                .map(|question| QuestionDefinition {
                    id: question.id(),
                    text: question.text().to_string(),
                    options: question
                        .options()
                        .iter()
                        .map(|option| OptionDefinition {
                            label: option.label().to_string(),
                            next: option.next(),
                        })
                        .collect(),
                    rating: None,
                })
                .collect(),
            normalization: None,
        }
    }
}
