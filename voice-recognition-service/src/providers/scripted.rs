//! Scripted provider
//!
//! Replays a fixed sequence of recognition outcomes. Scripts are YAML:
//!
//! ```yaml
//! - recognized: はい
//! - recognized: あたま
//!   confidence: 0.62
//! - failed: microphone permission denied
//! ```

use std::collections::VecDeque;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::{VoiceError, VoiceResult};
use crate::providers::SpeechProvider;
use crate::transcription::{RecognitionOutcome, Transcript};

fn default_confidence() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Recognized {
        recognized: String,
        #[serde(default = "default_confidence")]
        confidence: f32,
    },
    Failed {
        failed: String,
    },
}

impl ScriptStep {
    pub fn recognized(text: impl Into<String>) -> Self {
        Self::Recognized {
            recognized: text.into(),
            confidence: default_confidence(),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed { failed: reason.into() }
    }
}

pub struct ScriptedProvider {
    steps: Mutex<VecDeque<ScriptStep>>,
}

impl ScriptedProvider {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            steps: Mutex::new(steps.into_iter().collect()),
        }
    }

    pub fn from_yaml_str(source: &str) -> VoiceResult<Self> {
        let steps: Vec<ScriptStep> = serde_yaml::from_str(source)?;
        Ok(Self::new(steps))
    }

    pub fn from_path(path: impl AsRef<Path>) -> VoiceResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    pub async fn remaining(&self) -> usize {
        self.steps.lock().await.len()
    }
}

#[async_trait]
impl SpeechProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn recognize(&self, language: &str) -> VoiceResult<RecognitionOutcome> {
        let step = self
            .steps
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| VoiceError::Provider("voice script exhausted".to_string()))?;

        Ok(match step {
            ScriptStep::Recognized { recognized, confidence } => {
                RecognitionOutcome::Recognized(Transcript::new(recognized, confidence, language))
            }
            ScriptStep::Failed { failed } => RecognitionOutcome::failed(failed),
        })
    }
}
