//! Layered configuration for the intake questionnaire
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults ([`IntakeConfig::default`])
//! 2. An optional YAML file (`monshin --config intake.yaml`)
//! 3. Environment variables with the `INTAKE_` prefix
//!
//! ```yaml
//! questionnaire_path: /etc/rustcare/intake.yaml
//! log_level: info
//! log_format: json
//! redact_answers: true
//! export_path: /var/lib/rustcare/last-intake.json
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use config_engine::IntakeConfig;
//!
//! let config = IntakeConfig::load(Some("intake.yaml".as_ref()))?;
//! let logger = config.logger_config();
//! # Ok::<(), config_engine::ConfigError>(())
//! ```

pub mod settings;
pub mod validation;
pub mod error;

pub use settings::*;
pub use error::*;
