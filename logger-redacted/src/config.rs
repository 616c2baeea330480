// Logger configuration
use serde::{Deserialize, Serialize};

use crate::redactor::RedactionConfig;

/// Output format of the fmt subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set
    pub log_level: String,
    pub format: LogFormat,
    pub redaction: RedactionConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: LogFormat::Pretty,
            redaction: RedactionConfig::default(),
        }
    }
}
