use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::question::QuestionId;

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "question_id", rename_all = "snake_case")]
pub enum Position {
    AtQuestion(QuestionId),
    /// Absorbing; a new session is needed to continue
    Terminated,
}

/// One answered question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question_text: String,
    pub answer_label: String,
}

/// One patient's run through the questionnaire
///
/// Sessions are values: advancing produces a new session and leaves the
/// previous one untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    position: Position,
    history: Vec<HistoryEntry>,
}

impl Session {
    pub(crate) fn new(root: QuestionId) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            position: Position::AtQuestion(root),
            history: Vec::new(),
        }
    }

    pub(crate) fn advanced(&self, entry: HistoryEntry, position: Position) -> Self {
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(entry);

        Self {
            id: self.id,
            started_at: self.started_at,
            position,
            history,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn current_question_id(&self) -> Option<QuestionId> {
        match self.position {
            Position::AtQuestion(id) => Some(id),
            Position::Terminated => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.position == Position::Terminated
    }

    /// Answers in the order they were given
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            started_at: self.started_at,
            completed: self.is_terminated(),
            entries: self.history.clone(),
        }
    }
}

/// Transcript export of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub completed: bool,
    pub entries: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_at_root() {
        let session = Session::new(1);
        assert_eq!(session.position(), Position::AtQuestion(1));
        assert_eq!(session.current_question_id(), Some(1));
        assert!(session.history().is_empty());
        assert!(!session.is_terminated());
    }

    #[test]
    fn test_advanced_leaves_original_untouched() {
        let session = Session::new(1);
        let entry = HistoryEntry {
            question_text: "体の痛みはありますか？".to_string(),
            answer_label: "はい".to_string(),
        };

        let next = session.advanced(entry.clone(), Position::AtQuestion(2));
        assert!(session.history().is_empty());
        assert_eq!(next.history(), &[entry]);
        assert_eq!(next.id(), session.id());
        assert_eq!(next.started_at(), session.started_at());
    }

    #[test]
    fn test_summary_serializes() {
        let session = Session::new(1).advanced(
            HistoryEntry {
                question_text: "q".to_string(),
                answer_label: "a".to_string(),
            },
            Position::Terminated,
        );
        let summary = session.summary();
        assert!(summary.completed);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["entries"][0]["answer_label"], "a");

        let position = serde_json::to_value(Position::AtQuestion(3)).unwrap();
        assert_eq!(position, serde_json::json!({ "state": "at_question", "question_id": 3 }));
    }
}
