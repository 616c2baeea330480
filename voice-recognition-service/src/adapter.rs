use std::sync::atomic::{AtomicBool, Ordering};

use logger_redacted::TranscriptRedactor;
use tracing::{debug, info, warn};

use crate::config::VoiceConfig;
use crate::error::{VoiceError, VoiceResult};
use crate::providers::SpeechProvider;
use crate::transcription::RecognitionOutcome;

/// Single-activation wrapper around a speech provider
pub struct SpeechInputAdapter {
    config: VoiceConfig,
    provider: Box<dyn SpeechProvider>,
    active: AtomicBool,
    redactor: TranscriptRedactor,
}

/// Clears the busy flag when the activation ends or is dropped mid-flight
struct ActivationGuard<'a>(&'a AtomicBool);

impl Drop for ActivationGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SpeechInputAdapter {
    pub fn new(config: VoiceConfig, provider: Box<dyn SpeechProvider>) -> Self {
        Self {
            config,
            provider,
            active: AtomicBool::new(false),
            redactor: TranscriptRedactor::default(),
        }
    }

    pub fn with_redactor(mut self, redactor: TranscriptRedactor) -> Self {
        self.redactor = redactor;
        self
    }

    pub fn config(&self) -> &VoiceConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.voice_enabled
    }

    /// True while an activation is awaiting its result
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Listen once.
    ///
    /// Returns `Err` only when the activation itself is refused; anything
    /// that goes wrong while listening comes back as
    /// [`RecognitionOutcome::Failed`].
    pub async fn activate(&self) -> VoiceResult<RecognitionOutcome> {
        if !self.config.voice_enabled {
            return Err(VoiceError::Disabled);
        }

        if self
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(provider = self.provider.name(), "Activation ignored, recognition in progress");
            return Err(VoiceError::AlreadyActive);
        }
        let _guard = ActivationGuard(&self.active);

        info!(
            provider = self.provider.name(),
            language = %self.config.language,
            "Speech recognition started"
        );

        let outcome = match self.provider.recognize(&self.config.language).await {
            Ok(outcome) => outcome,
            Err(err) => RecognitionOutcome::failed(err.to_string()),
        };

        match &outcome {
            RecognitionOutcome::Recognized(transcript) => info!(
                provider = self.provider.name(),
                transcript_id = %transcript.id,
                transcript = %self.redactor.redact_answer(&transcript.text),
                confidence = transcript.confidence,
                "Speech recognized"
            ),
            RecognitionOutcome::Failed { reason } => warn!(
                provider = self.provider.name(),
                reason = %self.redactor.scrub(reason),
                "Speech recognition failed"
            ),
        }

        Ok(outcome)
    }
}
