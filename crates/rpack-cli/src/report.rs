//! # Reporter — Terminal Output for Validation Outcomes
//!
//! Renders a [`ValidationOutcome`] for a human: a single success line on
//! stdout, or a failure header plus one indented bullet per violation on
//! stderr. Returns the exit code for the run.

use std::path::Path;

use rpack_core::ValidationOutcome;

/// Print the outcome and return the process exit code.
///
/// - Empty report: `[OK] <path> is valid <MODE> JSON.` on stdout, code 0.
/// - Violations: `[FAIL] <path> failed <MODE> validation:` on stderr,
///   followed by `  - <message>` per violation in report order, code 1.
pub fn emit(path: &Path, outcome: &ValidationOutcome) -> u8 {
    if outcome.is_valid() {
        println!(
            "[OK] {} is valid {} JSON.",
            path.display(),
            outcome.mode.label()
        );
        0
    } else {
        eprintln!(
            "[FAIL] {} failed {} validation:",
            path.display(),
            outcome.mode.label()
        );
        for violation in outcome.report.violations() {
            eprintln!("  - {violation}");
        }
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpack_core::{validate, Mode};
    use serde_json::{Map, Value};

    fn empty_doc() -> Map<String, Value> {
        Map::new()
    }

    #[test]
    fn empty_report_maps_to_exit_zero() {
        let outcome = ValidationOutcome::new(Mode::Thread, Default::default());
        assert_eq!(emit(Path::new("ok.json"), &outcome), 0);
    }

    #[test]
    fn violations_map_to_exit_one() {
        let report = validate(Mode::Global, &empty_doc());
        assert_eq!(report.len(), 8);
        let outcome = ValidationOutcome::new(Mode::Global, report);
        assert_eq!(emit(Path::new("bad.json"), &outcome), 1);
    }
}
