//! # Schema Validators — Violation Accumulation
//!
//! Walks the detected schema's required-field list and accumulates one
//! violation per missing or mistyped field, in declaration order. There is
//! no early exit: every field is checked regardless of earlier failures,
//! so a report covers the whole document in one pass.
//!
//! List fields are only checked to be lists; element types are not
//! inspected.

use std::fmt;

use serde_json::{Map, Value};

use crate::detect::Mode;
use crate::kind::ValueKind;
use crate::schema::{GLOBAL_REQUIRED_KEYS, THREAD_LIST_KEYS, THREAD_STRING_KEYS};

/// Expected shape of a required field, as worded in violation messages.
///
/// The global schema's messages use the `a list (array)` wording while the
/// thread schema's list fields use plain `a list`; both wordings are part
/// of the output contract and kept distinct here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// Field must hold a string.
    Str,
    /// Field must hold a list (thread schema wording).
    List,
    /// Field must hold a list (global schema wording, with qualifier).
    ListArray,
}

impl Expectation {
    fn noun(self) -> &'static str {
        match self {
            Self::Str => "a string",
            Self::List => "a list",
            Self::ListArray => "a list (array)",
        }
    }

    fn accepts(self, kind: ValueKind) -> bool {
        match self {
            Self::Str => kind == ValueKind::Str,
            Self::List | Self::ListArray => kind == ValueKind::List,
        }
    }
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required key is absent from the document.
    Missing {
        /// The missing key.
        key: &'static str,
    },
    /// A required key is present but holds a value of the wrong kind.
    WrongKind {
        /// The mistyped key.
        key: &'static str,
        /// What the schema requires.
        expected: Expectation,
        /// What the document actually holds.
        found: ValueKind,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { key } => write!(f, "Missing required key: {key}"),
            Self::WrongKind {
                key,
                expected,
                found,
            } => write!(f, "Key '{key}' must be {}, found {found}", expected.noun()),
        }
    }
}

/// Ordered collection of violations for one document.
///
/// Order reflects schema declaration order; entries are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when the document passed validation.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations, in check order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Rendered message strings, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

/// Outcome of one validation pass: the detected mode plus its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Schema the document was validated against.
    pub mode: Mode,
    /// Violations found, empty on success.
    pub report: ValidationReport,
}

impl ValidationOutcome {
    /// Pair a detected mode with its report.
    pub fn new(mode: Mode, report: ValidationReport) -> Self {
        Self { mode, report }
    }

    /// True when the report is empty.
    pub fn is_valid(&self) -> bool {
        self.report.is_empty()
    }
}

fn check_field(
    document: &Map<String, Value>,
    key: &'static str,
    expected: Expectation,
    report: &mut ValidationReport,
) {
    match document.get(key) {
        None => report.violations.push(Violation::Missing { key }),
        Some(value) => {
            let found = ValueKind::of(value);
            if !expected.accepts(found) {
                report.violations.push(Violation::WrongKind {
                    key,
                    expected,
                    found,
                });
            }
        }
    }
}

/// Validate against the GLOBAL schema: all 8 keys required, all lists.
pub fn validate_global(document: &Map<String, Value>) -> ValidationReport {
    let mut report = ValidationReport::default();
    for key in GLOBAL_REQUIRED_KEYS {
        check_field(document, key, Expectation::ListArray, &mut report);
    }
    report
}

/// Validate against the THREAD schema: 3 string fields, then 4 list fields.
pub fn validate_thread(document: &Map<String, Value>) -> ValidationReport {
    let mut report = ValidationReport::default();
    for key in THREAD_STRING_KEYS {
        check_field(document, key, Expectation::Str, &mut report);
    }
    for key in THREAD_LIST_KEYS {
        check_field(document, key, Expectation::List, &mut report);
    }
    report
}

/// Validate `document` against the schema for `mode`.
pub fn validate(mode: Mode, document: &Map<String, Value>) -> ValidationReport {
    match mode {
        Mode::Global => validate_global(document),
        Mode::Thread => validate_thread(document),
    }
}
