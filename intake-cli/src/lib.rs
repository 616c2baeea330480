//! Terminal front end for the intake questionnaire
//!
//! The `monshin` binary is the presentation layer: it renders the current
//! question, forwards typed answers and dictation to the questionnaire
//! engine, and shows what the engine reports back.
//!
//! # Example Usage
//!
//! ```bash
//! # Built-in questionnaire, typed answers only
//! monshin run
//!
//! # Custom questionnaire with dictation, transcript written on completion
//! VOICE_PROVIDER=console monshin run --questionnaire intake.yaml --voice --export out.json
//!
//! # Check a questionnaire definition without running it
//! monshin validate intake.yaml
//! monshin show intake.yaml
//! ```
//!
//! While a session runs, these commands are available besides answers:
//!
//! - `:v` / `:voice` activate speech input for the current question
//! - `:h` / `:history` show the answers given so far
//! - `:r` / `:restart` discard the session and start over
//! - `:q` / `:quit` leave without finishing

pub mod cli;
pub mod render;
pub mod runner;

pub use cli::*;
pub use runner::*;
