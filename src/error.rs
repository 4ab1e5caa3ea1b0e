//! Error types for MiniLombok generation.
//!
//! Every fallible public API returns [`LombokResult<T>`], an alias for
//! `Result<T, LombokError>`. The generation core itself performs no I/O, so
//! the only errors it produces are internal-logic faults; everything else
//! comes from the TOML front end, the validator or an output sink.
//!
//! # Example
//!
//! ```
//! use minilombok::error::{LombokError, LombokResult};
//!
//! fn load() -> LombokResult<()> {
//!     Err(LombokError::Configuration("missing [[class]] table".to_string()))
//! }
//!
//! match load() {
//!     Err(LombokError::Configuration(msg)) => assert!(msg.contains("class")),
//!     _ => unreachable!(),
//! }
//! ```

use crate::schema::ValidationError;
use thiserror::Error;

/// Result type alias for MiniLombok operations.
pub type LombokResult<T> = Result<T, LombokError>;

/// The main error type for MiniLombok operations.
#[derive(Error, Debug)]
pub enum LombokError {
    /// A schema file could not be read or parsed.
    #[error("Configuration Error: {0}")]
    Configuration(String),

    /// The input descriptors violate the marker contract.
    #[error("Validation failed with {} error(s): {}", .0.len(), join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// A generation request named a field the class does not declare.
    #[error("Internal Error: class '{class}' has no instance field '{field}'")]
    UnknownField { class: String, field: String },

    /// Two generated members of one class occupy the same slot.
    #[error("Internal Error: class '{class}' received member '{member}' twice")]
    DuplicateMember { class: String, member: String },

    /// A companion helper would touch a field the companion cannot see.
    #[error("Field '{field}' of class '{class}' is private; companion helpers need package access")]
    InaccessibleField { class: String, field: String },

    /// Augmenting cannot re-declare a nested class as a top-level unit.
    #[error("Class '{0}' is nested; nested classes need the companion strategy")]
    NestedClass(String),

    /// Two classes of the same round map onto one output unit.
    #[error("Duplicate output unit: {0}")]
    DuplicateUnit(String),

    /// Writing an output unit failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
