//! # JSON Value Kinds — Closed Type Tags
//!
//! A closed tag over the six JSON value kinds. Every "actual type name"
//! surfaced in a validation message is produced from this tag, never from
//! a runtime type-name facility.

use std::fmt;

use serde_json::Value;

/// Tag for one of the six JSON value kinds.
///
/// Display names are part of the error-message contract: `"str"` and
/// `"list"` are the names that appear in type-mismatch messages; the
/// remaining kinds use plain JSON vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// JSON `null`.
    Null,
    /// JSON `true`/`false`.
    Bool,
    /// JSON number (integer or float).
    Number,
    /// JSON string.
    Str,
    /// JSON array.
    List,
    /// JSON object.
    Object,
}

impl ValueKind {
    /// Tag a parsed JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::Str,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::Object,
        }
    }

    /// Name used in validation messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::Str => "str",
            Self::List => "list",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
