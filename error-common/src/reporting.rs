// Error reporting utilities
// Errors are reported as structured tracing events; the presentation layer
// decides what, if anything, the patient sees.

use crate::context::ErrorContext;
use crate::types::IntakeError;

#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorReporter;

impl ErrorReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, error: &IntakeError, context: &ErrorContext) {
        let fields = serde_json::to_string(&context.additional).unwrap_or_default();
        if error.is_recoverable() {
            tracing::warn!(
                error_code = error.code(),
                error_type = error.error_type(),
                session_id = context.session_id.as_deref().unwrap_or("-"),
                question_id = context.question_id,
                context = %fields,
                "Recoverable intake error: {}",
                error
            );
        } else {
            tracing::error!(
                error_code = error.code(),
                error_type = error.error_type(),
                session_id = context.session_id.as_deref().unwrap_or("-"),
                question_id = context.question_id,
                context = %fields,
                "Intake error: {}",
                error
            );
        }
    }
}
