pub mod line;
pub mod scripted;

pub use line::{shared_lines, LineProvider, SharedLines};
pub use scripted::{ScriptStep, ScriptedProvider};

use async_trait::async_trait;
use crate::error::VoiceResult;
use crate::transcription::RecognitionOutcome;

/// Trait for speech recognition providers
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Listen once and report what was heard
    async fn recognize(&self, language: &str) -> VoiceResult<RecognitionOutcome>;
}
