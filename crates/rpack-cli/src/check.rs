//! # Check Pipeline — Load, Detect, Validate, Report
//!
//! Orchestrates one validation pass. The pipeline is strictly linear:
//! loader → root-shape check → mode detection → schema validation →
//! report. Load and shape failures abort with an error; schema violations
//! are accumulated exhaustively and reported as a batch.

use std::path::Path;

use anyhow::Result;

use rpack_core::{detect_mode, load_document, validate, ValidationOutcome};

use crate::report;

/// Run one validation pass over the document at `path`.
///
/// Returns the process exit code: 0 when the document conforms to the
/// detected schema, 1 when violations were found. Read, parse, and
/// root-shape failures propagate as `Err` and are fatal to the run.
pub fn run_check(path: &Path) -> Result<u8> {
    let document = load_document(path)?;

    let detection = detect_mode(&document);
    if let Some(fallback) = detection.fallback {
        tracing::warn!("{fallback}");
    }
    tracing::debug!(mode = %detection.mode, "schema detected");

    let report = validate(detection.mode, &document);
    let outcome = ValidationOutcome::new(detection.mode, report);

    Ok(report::emit(path, &outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn valid_thread_document_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "thread.json",
            r#"{
                "thread_name": "X",
                "primary_goal": "Y",
                "niche_or_topic": "Z",
                "tasks_for_grok": [],
                "hard_constraints": [],
                "output_requirements": [],
                "priority_rules": []
            }"#,
        );
        assert_eq!(run_check(&path).unwrap(), 0);
    }

    #[test]
    fn invalid_global_document_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "global.json",
            r#"{"context_you_should_have_used": "not a list"}"#,
        );
        assert_eq!(run_check(&path).unwrap(), 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "bad.json", r#"{"trailing": 1,}"#);
        let err = run_check(&path).unwrap_err();
        assert!(err.to_string().contains("invalid JSON syntax"), "got: {err}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = run_check(&path).unwrap_err();
        assert!(err.to_string().contains("cannot read file"), "got: {err}");
    }

    #[test]
    fn array_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "array.json", "[1, 2, 3]");
        let err = run_check(&path).unwrap_err();
        assert!(
            err.to_string().contains("must be an object, found list"),
            "got: {err}"
        );
    }

    #[test]
    fn repeated_runs_give_identical_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "repeat.json",
            r#"{"context_you_should_have_used": []}"#,
        );
        let first = run_check(&path).unwrap();
        let second = run_check(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, 1);
    }
}
