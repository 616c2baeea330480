use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    SourceNotFound(String),

    #[error("Configuration parsing failed: {0}")]
    ParseError(#[from] Box<figment::Error>),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::ParseError(Box::new(err))
    }
}

impl From<ConfigError> for error_common::IntakeError {
    fn from(err: ConfigError) -> Self {
        error_common::IntakeError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
