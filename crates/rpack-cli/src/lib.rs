//! # rpack-cli — Reasoning-Pack Validator CLI
//!
//! Provides the `rpack` command-line interface. One invocation validates
//! one JSON document end to end: load, root-shape check, mode detection,
//! schema validation, and a human-readable report.
//!
//! ## Usage
//!
//! ```bash
//! rpack path/to/pack.json
//! ```
//!
//! Exit code 0 means the document conforms to the detected schema; exit
//! code 1 covers every failure (usage, I/O, parse, shape, or schema
//! violations). Success output goes to stdout; warnings and errors go to
//! stderr.

pub mod check;
pub mod report;
