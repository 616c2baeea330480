//! Question graph navigation for the RustCare intake questionnaire
//!
//! The engine walks a patient through a directed graph of questions. Each
//! answer option either points at the next question or ends the intake.
//! Answers arrive as raw text, typed or recognized from speech, and are
//! resolved against the options of the current question before the session
//! advances.
//!
//! - [`QuestionGraph`]: immutable, validated registry of questions
//! - [`AnswerResolver`]: ordered normalization rules plus exact label lookup
//! - [`NavigationEngine`]: pure state machine producing new [`Session`]s
//!
//! # Example
//!
//! ```rust
//! use questionnaire_engine::NavigationEngine;
//!
//! # fn main() -> Result<(), questionnaire_engine::QuestionnaireError> {
//! let engine = NavigationEngine::reference()?;
//! let session = engine.start();
//!
//! let session = engine.answer(&session, "はい")?;
//! assert_eq!(engine.current_question(&session)?.id(), 2);
//!
//! let session = engine.answer(&session, "頭")?;
//! let session = engine.answer(&session, " しち ")?;
//! assert!(session.is_terminated());
//! assert_eq!(session.history().len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod question;
pub mod graph;
pub mod definition;
pub mod reference;
pub mod resolver;
pub mod session;
pub mod engine;
pub mod error;

pub use question::*;
pub use graph::*;
pub use definition::*;
pub use resolver::*;
pub use session::*;
pub use engine::*;
pub use error::*;
