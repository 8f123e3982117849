//! # Error Types — Document Loading Failures
//!
//! Errors raised while loading a document, before schema validation runs.
//! All of these are fatal to a validation run. Schema violations are not
//! errors in this sense — they are accumulated exhaustively into a
//! [`crate::ValidationReport`] and reported as a batch.

use std::path::PathBuf;

use thiserror::Error;

use crate::kind::ValueKind;

/// Failure to produce a validatable document from a file path.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read (missing, unreadable, not UTF-8).
    #[error("cannot read file '{}': {source}", path.display())]
    Read {
        /// Path that was passed on the command line.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The file content is not syntactically valid JSON. The source error
    /// carries the parser's line/column position.
    #[error("{}: invalid JSON syntax: {source}", path.display())]
    Parse {
        /// Path that was passed on the command line.
        path: PathBuf,
        /// Parser diagnostic with position information.
        source: serde_json::Error,
    },

    /// The document parsed, but its root is not an object, so key
    /// enumeration (and therefore mode detection) is impossible.
    #[error("root JSON value must be an object, found {found}")]
    RootNotObject {
        /// Kind of the root value that was actually found.
        found: ValueKind,
    },
}
