//! # Document Loading — Parse and Root-Shape Check
//!
//! Turns a file path into a validatable document: read the file, parse it
//! as JSON, and require an object root. Each step fails fast; there is no
//! retry path in a one-shot CLI run.
//!
//! The root-shape check must run before mode detection, since detection
//! assumes the document's keys can be enumerated.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::DocumentError;
use crate::kind::ValueKind;

/// Read and parse a JSON file.
///
/// # Errors
///
/// Returns [`DocumentError::Read`] if the file is missing or unreadable,
/// and [`DocumentError::Parse`] (carrying the parser's position) if the
/// content is not valid JSON.
pub fn load_json(path: &Path) -> Result<Value, DocumentError> {
    let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Require an object root, unwrapping the value into its key-value map.
///
/// # Errors
///
/// Returns [`DocumentError::RootNotObject`] naming the actual kind when
/// the root is an array, string, number, boolean, or null.
pub fn into_object(value: Value) -> Result<Map<String, Value>, DocumentError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DocumentError::RootNotObject {
            found: ValueKind::of(&other),
        }),
    }
}

/// Load a document ready for mode detection: parse the file at `path` and
/// check the root shape in one step.
pub fn load_document(path: &Path) -> Result<Map<String, Value>, DocumentError> {
    into_object(load_json(path)?)
}
