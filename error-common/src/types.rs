use thiserror::Error;

use crate::codes;

/// Workspace-wide error taxonomy for the intake questionnaire
#[derive(Error, Debug)]
pub enum IntakeError {
    /// The questionnaire graph could not be constructed
    #[error("Questionnaire integrity error: {0}")]
    GraphIntegrity(String),

    /// The questionnaire definition could not be read or parsed
    #[error("Questionnaire definition error: {0}")]
    Definition(String),

    /// Raw input matched none of the current question's options
    #[error("Answer not recognized for question {question_id}")]
    Unresolved { input: String, question_id: u32 },

    /// Operation on a terminated or otherwise invalid session
    #[error("Invalid session state: {0}")]
    InvalidState(String),

    /// Speech input adapter failure
    #[error("Speech input error: {0}")]
    Adapter(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Terminal or file IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntakeError {
    /// Stable error code for logs and exports
    pub fn code(&self) -> &'static str {
        match self {
            Self::GraphIntegrity(_) => codes::graph::INTEGRITY_VIOLATION,
            Self::Definition(_) => codes::graph::DEFINITION_UNREADABLE,
            Self::Unresolved { .. } => codes::answer::UNRESOLVED,
            Self::InvalidState(_) => codes::session::INVALID_STATE,
            Self::Adapter(_) => codes::voice::ADAPTER_FAILURE,
            Self::Configuration(_) => codes::config::INVALID_CONFIGURATION,
            Self::Io(_) => codes::internal::IO,
        }
    }

    /// Short category name used as a structured log field
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::GraphIntegrity(_) => "graph_integrity",
            Self::Definition(_) => "definition",
            Self::Unresolved { .. } => "unresolved",
            Self::InvalidState(_) => "invalid_state",
            Self::Adapter(_) => "adapter",
            Self::Configuration(_) => "configuration",
            Self::Io(_) => "io",
        }
    }

    /// Whether the user can simply try again.
    ///
    /// Unresolved answers and speech failures leave the session untouched;
    /// everything else is either fatal at startup or a contract violation
    /// by the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Unresolved { .. } | Self::Adapter(_))
    }
}

/// Result type alias for intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        let unresolved = IntakeError::Unresolved {
            input: "なな".to_string(),
            question_id: 4,
        };
        assert!(unresolved.is_recoverable());
        assert!(IntakeError::Adapter("microphone unavailable".to_string()).is_recoverable());
        assert!(!IntakeError::InvalidState("terminated".to_string()).is_recoverable());
        assert!(!IntakeError::GraphIntegrity("dangling".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            IntakeError::GraphIntegrity(String::new()).code(),
            "GRAPH_1001"
        );
        assert_eq!(
            IntakeError::InvalidState(String::new()).code(),
            "SESSION_3001"
        );
        let io = IntakeError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(io.code(), "INTERNAL_9002");
        assert_eq!(io.error_type(), "io");
        assert!(!io.is_recoverable());
    }
}
