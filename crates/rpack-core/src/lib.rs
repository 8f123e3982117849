//! # rpack-core — Reasoning-Pack Validation Logic
//!
//! Core library for validating reasoning-pack JSON documents against the
//! two hard-coded flat schemas: the GLOBAL reasoning-pack shape (8 keys,
//! all list-valued) and the THREAD-specific shape (7 keys, mixed
//! string/list values).
//!
//! ## Pipeline
//!
//! 1. [`document::load_json`] — parse a JSON file from disk.
//! 2. [`document::into_object`] — require an object root.
//! 3. [`detect::detect_mode`] — decide GLOBAL vs THREAD from the key set.
//! 4. [`validate::validate`] — walk the schema descriptor and accumulate
//!    violations in declaration order.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `rpack-*` crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Mode detection is a pure function of the document's key set; all
//!   terminal output belongs to the CLI crate.

pub mod detect;
pub mod document;
pub mod error;
pub mod kind;
pub mod schema;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use detect::{detect_mode, Detection, DetectionFallback, Mode};
pub use document::{into_object, load_document, load_json};
pub use error::DocumentError;
pub use kind::ValueKind;
pub use schema::{GLOBAL_REQUIRED_KEYS, THREAD_LIST_KEYS, THREAD_REQUIRED_KEYS, THREAD_STRING_KEYS};
pub use validate::{validate, Expectation, ValidationOutcome, ValidationReport, Violation};
