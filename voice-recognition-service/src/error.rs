use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Voice input is disabled")]
    Disabled,

    #[error("A recognition is already in progress")]
    AlreadyActive,

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Input closed before anything was recognized")]
    InputClosed,

    #[error("Script error: {0}")]
    Script(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<VoiceError> for error_common::IntakeError {
    fn from(err: VoiceError) -> Self {
        match err {
            VoiceError::Config(_) | VoiceError::Script(_) => {
                error_common::IntakeError::Configuration(err.to_string())
            }
            _ => error_common::IntakeError::Adapter(err.to_string()),
        }
    }
}

pub type VoiceResult<T> = Result<T, VoiceError>;
