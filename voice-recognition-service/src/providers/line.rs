//! Line based provider
//!
//! Treats each line read from an async source as one utterance. The reader
//! is shared so the terminal can use the same stdin for typed answers and
//! for dictation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::Mutex;

use crate::error::{VoiceError, VoiceResult};
use crate::providers::SpeechProvider;
use crate::transcription::{RecognitionOutcome, Transcript};

pub type SharedLines<R> = Arc<Mutex<Lines<R>>>;

pub fn shared_lines<R: AsyncBufRead + Unpin>(reader: R) -> SharedLines<R> {
    Arc::new(Mutex::new(reader.lines()))
}

pub struct LineProvider<R> {
    source: SharedLines<R>,
}

impl<R> LineProvider<R> {
    pub fn new(source: SharedLines<R>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<R> SpeechProvider for LineProvider<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    fn name(&self) -> &'static str {
        "console"
    }

    async fn recognize(&self, language: &str) -> VoiceResult<RecognitionOutcome> {
        let line = self.source.lock().await.next_line().await?;
        match line {
            None => Err(VoiceError::InputClosed),
            Some(text) if text.trim().is_empty() => Ok(RecognitionOutcome::failed("no speech detected")),
            Some(text) => Ok(RecognitionOutcome::Recognized(Transcript::new(text, 1.0, language))),
        }
    }
}
