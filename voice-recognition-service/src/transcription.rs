use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// Final text recognized during one activation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub id: Uuid,
    pub text: String,
    pub confidence: f32,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

impl Transcript {
    pub fn new(text: impl Into<String>, confidence: f32, language: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            confidence: confidence.clamp(0.0, 1.0),
            language: language.into(),
            created_at: Utc::now(),
        }
    }
}

/// Result of exactly one activation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecognitionOutcome {
    Recognized(Transcript),
    Failed { reason: String },
}

impl RecognitionOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed { reason: reason.into() }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Recognized(transcript) => Some(&transcript.text),
            Self::Failed { .. } => None,
        }
    }
}
