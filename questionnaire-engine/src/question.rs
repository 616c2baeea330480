use serde::{Deserialize, Serialize};

/// Identifier of a question; always greater than zero in a valid graph
pub type QuestionId = u32;

/// A labeled edge to the next question, or to the end of the intake
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerOption {
    label: String,
    next: Option<QuestionId>,
}

impl AnswerOption {
    pub fn new(label: impl Into<String>, next: Option<QuestionId>) -> Self {
        Self {
            label: label.into(),
            next,
        }
    }

    /// Option that continues with question `next`
    pub fn to(label: impl Into<String>, next: QuestionId) -> Self {
        Self::new(label, Some(next))
    }

    /// Option that ends the questionnaire
    pub fn terminal(label: impl Into<String>) -> Self {
        Self::new(label, None)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn next(&self) -> Option<QuestionId> {
        self.next
    }

    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }
}

/// A prompt with its ordered answer options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(id: QuestionId, text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id,
            text: text.into(),
            options,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Option whose label is exactly `label` (case-sensitive)
    pub fn option(&self, label: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(AnswerOption::label)
    }
}
