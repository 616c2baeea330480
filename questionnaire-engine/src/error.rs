use error_common::IntakeError;
use thiserror::Error;

use crate::question::QuestionId;

/// Reasons a questionnaire graph is rejected at construction time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    #[error("option '{label}' of question {question_id} points at missing question {target}")]
    DanglingReference {
        question_id: QuestionId,
        label: String,
        target: QuestionId,
    },

    #[error("question id 0 is reserved")]
    ZeroId,

    #[error("question {0} is defined more than once")]
    DuplicateQuestion(QuestionId),

    #[error("question {question_id} offers the label '{label}' more than once")]
    DuplicateLabel { question_id: QuestionId, label: String },

    #[error("question {0} has no answer options")]
    NoOptions(QuestionId),

    #[error("root question {0} does not exist")]
    MissingRoot(QuestionId),

    #[error("question {0} defines both explicit options and a rating scale")]
    AmbiguousOptions(QuestionId),

    #[error("rating scale of question {question_id} is empty ({min}..={max})")]
    EmptyRating {
        question_id: QuestionId,
        min: u32,
        max: u32,
    },

    #[error("rating scale of question {question_id} spans {min}..={max}, more than {limit} labels")]
    RatingTooLarge {
        question_id: QuestionId,
        min: u32,
        max: u32,
        limit: u32,
    },
}

#[derive(Error, Debug)]
pub enum QuestionnaireError {
    #[error("Graph integrity error: {0}")]
    GraphIntegrity(#[from] IntegrityViolation),

    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Answer not recognized for question {question_id}")]
    Unresolved { question_id: QuestionId, input: String },

    #[error("Invalid session state: {0}")]
    InvalidState(String),

    #[error("Option '{label}' is not offered by question {question_id}")]
    OptionNotOffered { question_id: QuestionId, label: String },

    #[error("Invalid normalization pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Questionnaire definition could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("Questionnaire definition could not be parsed: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl QuestionnaireError {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved { .. })
    }
}

impl From<QuestionnaireError> for IntakeError {
    fn from(err: QuestionnaireError) -> Self {
        match err {
            QuestionnaireError::GraphIntegrity(violation) => {
                IntakeError::GraphIntegrity(violation.to_string())
            }
            QuestionnaireError::Unresolved { question_id, input } => {
                IntakeError::Unresolved { input, question_id }
            }
            err @ (QuestionnaireError::QuestionNotFound(_)
            | QuestionnaireError::InvalidState(_)
            | QuestionnaireError::OptionNotOffered { .. }) => {
                IntakeError::InvalidState(err.to_string())
            }
            err @ (QuestionnaireError::InvalidPattern { .. }
            | QuestionnaireError::Io(_)
            | QuestionnaireError::Parse(_)) => IntakeError::Definition(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuestionnaireError>;
