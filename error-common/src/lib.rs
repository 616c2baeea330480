//! Common error handling utilities for the RustCare intake questionnaire
//!
//! Every crate in the workspace keeps its own `thiserror` enum for the
//! failures it can produce, and converts into [`IntakeError`] at the
//! boundary where errors reach the presentation layer. This keeps the
//! caller-facing taxonomy small:
//!
//! - **GraphIntegrity**: a questionnaire definition that cannot be built
//! - **Unresolved**: an answer that matched none of the offered options
//! - **InvalidState**: an operation on a finished or otherwise invalid session
//! - **Adapter**: speech input failures reported by the recognizer
//! - **Configuration**: unreadable or invalid settings
//!
//! # Example
//!
//! ```rust
//! use error_common::{IntakeError, ErrorContext};
//!
//! fn check_answer(raw: &str) -> Result<(), IntakeError> {
//!     if raw.trim().is_empty() {
//!         return Err(IntakeError::Unresolved {
//!             input: raw.to_string(),
//!             question_id: 4,
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_answer("  ").unwrap_err();
//! assert!(err.is_recoverable());
//! assert_eq!(err.code(), error_common::codes::answer::UNRESOLVED);
//!
//! let context = ErrorContext::new().with_question_id(4);
//! assert_eq!(context.question_id, Some(4));
//! ```

pub mod types;
pub mod context;
pub mod codes;
pub mod reporting;

pub use types::*;
pub use context::*;
pub use reporting::*;
