pub mod redactor;
pub mod config;

pub use redactor::*;
pub use config::*;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Logging for the intake questionnaire
///
/// Answers given during an intake session and raw speech transcripts are
/// protected health information. They are never written to logs verbatim:
/// call sites pass them through a [`TranscriptRedactor`] first, which swaps
/// the value for a short correlation hash (`ANSWER[3q2+7w==]`) or a mask.
///
/// # Example
///
/// ```rust
/// use logger_redacted::{LoggerConfig, TranscriptRedactor};
///
/// let config = LoggerConfig::default();
/// let redactor = TranscriptRedactor::new(config.redaction.clone());
///
/// let safe = redactor.redact_answer("頭痛");
/// assert!(safe.starts_with("ANSWER["));
///
/// tracing::info!(answer = %safe, "Answer recorded");
/// ```
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Global subscriber already installed")]
    AlreadyInitialized,
}

impl From<LoggerError> for error_common::IntakeError {
    fn from(err: LoggerError) -> Self {
        error_common::IntakeError::Configuration(err.to_string())
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides `config.log_level` when present. Logs go to stderr
/// so they never interleave with the questionnaire on stdout.
pub fn init_logging(config: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| LoggerError::InvalidFilter {
            directive: config.log_level.clone(),
            reason: e.to_string(),
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|_| LoggerError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggerConfig {
            log_level: "monshin=notalevel".to_string(),
            ..Default::default()
        };
        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidFilter { .. }));
    }
}
