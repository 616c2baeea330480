use crate::error::{ConfigError, Result};
use crate::settings::IntakeConfig;

pub fn validate(config: &IntakeConfig) -> Result<()> {
    if config.log_level.trim().is_empty() {
        return Err(ConfigError::ValidationError("log_level must not be empty".to_string()));
    }

    if let Some(path) = &config.questionnaire_path {
        if !path.is_file() {
            return Err(ConfigError::ValidationError(format!(
                "questionnaire_path {} is not a readable file",
                path.display()
            )));
        }
    }

    if let Some(path) = &config.export_path {
        if path.is_dir() {
            return Err(ConfigError::ValidationError(format!(
                "export_path {} is a directory",
                path.display()
            )));
        }
    }

    Ok(())
}
