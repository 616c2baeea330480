use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use logger_redacted::{LogFormat, LoggerConfig, RedactionConfig};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::validation;

/// Environment variable prefix for every setting
pub const ENV_PREFIX: &str = "INTAKE_";

/// Application settings for an intake terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Questionnaire definition to load instead of the built-in one
    pub questionnaire_path: Option<PathBuf>,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Hash answers and transcripts before they reach the logs
    pub redact_answers: bool,
    /// Where to write the finished transcript as JSON
    pub export_path: Option<PathBuf>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            questionnaire_path: None,
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            redact_answers: true,
            export_path: None,
        }
    }
}

impl IntakeConfig {
    /// Load defaults, then `file` (if given), then `INTAKE_*` variables.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(file)?.extract()?;
        validation::validate(&config)?;

        tracing::debug!(
            questionnaire = ?config.questionnaire_path,
            log_level = %config.log_level,
            redact_answers = config.redact_answers,
            "Intake configuration loaded"
        );
        Ok(config)
    }

    /// Build the provider chain without extracting it
    pub fn figment(file: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = file {
            if !path.exists() {
                return Err(ConfigError::SourceNotFound(path.display().to_string()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            log_level: self.log_level.clone(),
            format: self.log_format,
            redaction: RedactionConfig {
                redact_answers: self.redact_answers,
                ..RedactionConfig::default()
            },
        }
    }
}
