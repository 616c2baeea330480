//! Speech input for the intake questionnaire
//!
//! The questionnaire core only ever sees recognized text. This crate owns
//! everything between the microphone button and that text:
//!
//! - [`SpeechInputAdapter`] wraps one provider and enforces a single
//!   outstanding activation. A second `activate()` while one is in flight is
//!   rejected with [`VoiceError::AlreadyActive`].
//! - Every activation ends in exactly one [`RecognitionOutcome`]:
//!   `Recognized` with a [`Transcript`], or `Failed` with a reason. Provider
//!   errors are reported as `Failed`, never retried.
//! - Locale and interim-result settings live in [`VoiceConfig`] and never
//!   reach the questionnaire core.
//!
//! # Providers
//!
//! - [`providers::LineProvider`]: one line of text per activation from a
//!   shared async reader (the terminal uses it to simulate dictation)
//! - [`providers::ScriptedProvider`]: pre-recorded outcomes, loadable from a
//!   YAML script, for demos and tests
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use voice_recognition_service::{
//!     providers::ScriptedProvider, RecognitionOutcome, SpeechInputAdapter, VoiceConfig,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VoiceConfig::from_env()?;
//! let provider = ScriptedProvider::from_path("voice-script.yaml")?;
//! let adapter = SpeechInputAdapter::new(config, Box::new(provider));
//!
//! match adapter.activate().await? {
//!     RecognitionOutcome::Recognized(transcript) => println!("heard: {}", transcript.text),
//!     RecognitionOutcome::Failed { reason } => println!("recognition failed: {reason}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod providers;
pub mod error;
pub mod transcription;

pub use adapter::*;
pub use config::*;
pub use error::*;
pub use transcription::*;
