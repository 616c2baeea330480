use std::collections::{BTreeMap, HashSet};

use crate::error::{IntegrityViolation, QuestionnaireError, Result};
use crate::question::{Question, QuestionId};

/// Validated, immutable registry of questions
///
/// Construction checks that every option either ends the intake or points at
/// a question that exists, so navigation never has to handle a dangling edge.
/// Cycles are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionGraph {
    root: QuestionId,
    questions: BTreeMap<QuestionId, Question>,
}

impl QuestionGraph {
    pub fn new(root: QuestionId, questions: impl IntoIterator<Item = Question>) -> Result<Self> {
        let mut registry = BTreeMap::new();
        for question in questions {
            if question.id() == 0 {
                return Err(IntegrityViolation::ZeroId.into());
            }
            let id = question.id();
            if registry.insert(id, question).is_some() {
                return Err(IntegrityViolation::DuplicateQuestion(id).into());
            }
        }

        for question in registry.values() {
            if question.options().is_empty() {
                return Err(IntegrityViolation::NoOptions(question.id()).into());
            }

            let mut seen = HashSet::new();
            for option in question.options() {
                if !seen.insert(option.label()) {
                    return Err(IntegrityViolation::DuplicateLabel {
                        question_id: question.id(),
                        label: option.label().to_string(),
                    }
                    .into());
                }

                if let Some(target) = option.next() {
                    if !registry.contains_key(&target) {
                        return Err(IntegrityViolation::DanglingReference {
                            question_id: question.id(),
                            label: option.label().to_string(),
                            target,
                        }
                        .into());
                    }
                }
            }
        }

        if !registry.contains_key(&root) {
            return Err(IntegrityViolation::MissingRoot(root).into());
        }

        tracing::debug!(root, questions = registry.len(), "Question graph validated");

        Ok(Self {
            root,
            questions: registry,
        })
    }

    pub fn root(&self) -> QuestionId {
        self.root
    }

    pub fn lookup(&self, id: QuestionId) -> Result<&Question> {
        self.questions
            .get(&id)
            .ok_or(QuestionnaireError::QuestionNotFound(id))
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.contains_key(&id)
    }

    /// Questions in ascending id order
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
