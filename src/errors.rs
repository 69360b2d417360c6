//! Error Types
//!
//! This module defines the error types used throughout the importer.
//!
//! # Overview
//!
//! The main error type [`VisageError`] covers all failure modes of a facial
//! animation import:
//! - Source document I/O failures
//! - Document syntax errors
//! - Schema violations during raw-model binding
//! - Structural invariant violations in the parsed animation data
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, VisageError>`.
//!
//! Every error is fatal for the import that raised it: the pipeline performs
//! no retries and never returns a partial animation definition.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for facial animation import.
///
/// Each variant provides specific context about what went wrong; the
/// import aborts on the first error encountered.
#[derive(Error, Debug)]
pub enum VisageError {
    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// The source document could not be read.
    #[error("failed to load {}: {source}", .path.display())]
    FileLoadFailed {
        /// Path of the document that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// The source text is not a valid JSON document.
    #[error("failed to parse {context}: {source}")]
    DocumentParseFailed {
        /// Path of the document, or a marker for in-memory input
        context: String,
        /// Underlying syntax error
        source: serde_json::Error,
    },

    /// A required field is missing or has an incompatible type.
    #[error("facial animation schema violation: {0}")]
    SchemaViolation(#[source] serde_json::Error),

    // ========================================================================
    // Animation Data Errors
    // ========================================================================
    /// A structural invariant of the animation data is violated.
    ///
    /// The message names the violated invariant: zero frames, a frame-time
    /// array that does not match the frame count, a weight row shorter than
    /// the blend shape's morph-target count, or a non-positive duration.
    #[error("malformed facial animation: {0}")]
    MalformedAnimation(String),
}

/// Alias for `Result<T, VisageError>`.
pub type Result<T> = std::result::Result<T, VisageError>;
