//! # Mode Detection — GLOBAL vs THREAD
//!
//! Decides which of the two schemas applies to a document by testing its
//! key set against the two required-key lists. This is a pure function of
//! the key set: it never inspects field values or types, and its result
//! does not depend on key iteration order.
//!
//! Ambiguous documents fall back to GLOBAL. The fallback condition is
//! returned as data so the caller can emit the warning; nothing here
//! writes to the terminal.

use std::fmt;

use serde_json::{Map, Value};

use crate::schema::{GLOBAL_REQUIRED_KEYS, THREAD_REQUIRED_KEYS};

/// The detected schema variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The 8-key reasoning-pack shape, all fields list-valued.
    Global,
    /// The 7-key thread-specific shape, mixed string/list fields.
    Thread,
}

impl Mode {
    /// Lower-case name, as used in detection logic and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Thread => "thread",
        }
    }

    /// Upper-case name, as printed in the success and failure lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Global => "GLOBAL",
            Self::Thread => "THREAD",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why detection fell back to the GLOBAL default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionFallback {
    /// The document contains keys from both schemas.
    MixedSchemas,
    /// The document contains keys from neither schema.
    Undetermined,
}

impl fmt::Display for DetectionFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MixedSchemas => f.write_str(
                "document contains keys from both GLOBAL and THREAD schemas; \
                 treating as GLOBAL for validation",
            ),
            Self::Undetermined => {
                f.write_str("could not determine schema type; assuming GLOBAL")
            }
        }
    }
}

/// Result of mode detection: the mode to validate against, plus the
/// fallback condition when the key set did not identify a single schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// Schema to validate against.
    pub mode: Mode,
    /// Set when the GLOBAL default was applied rather than detected.
    pub fallback: Option<DetectionFallback>,
}

/// Detect which schema applies to `document`.
///
/// Decision table, where `has_global`/`has_thread` mean "contains at
/// least one key from that schema's required list":
///
/// | has_global | has_thread | mode   | fallback       |
/// |------------|------------|--------|----------------|
/// | true       | false      | global | none           |
/// | false      | true       | thread | none           |
/// | true       | true       | global | mixed schemas  |
/// | false      | false      | global | undetermined   |
pub fn detect_mode(document: &Map<String, Value>) -> Detection {
    let has_global = GLOBAL_REQUIRED_KEYS.iter().any(|k| document.contains_key(*k));
    let has_thread = THREAD_REQUIRED_KEYS.iter().any(|k| document.contains_key(*k));

    match (has_global, has_thread) {
        (true, false) => Detection {
            mode: Mode::Global,
            fallback: None,
        },
        (false, true) => Detection {
            mode: Mode::Thread,
            fallback: None,
        },
        (true, true) => Detection {
            mode: Mode::Global,
            fallback: Some(DetectionFallback::MixedSchemas),
        },
        (false, false) => Detection {
            mode: Mode::Global,
            fallback: Some(DetectionFallback::Undetermined),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn doc_with_keys(keys: &[&str]) -> Map<String, Value> {
        let mut map = Map::new();
        for key in keys {
            map.insert((*key).to_string(), json!([]));
        }
        map
    }

    #[test]
    fn global_keys_only_detect_global() {
        let detection = detect_mode(&doc_with_keys(&["failure_patterns"]));
        assert_eq!(detection.mode, Mode::Global);
        assert_eq!(detection.fallback, None);
    }

    #[test]
    fn thread_keys_only_detect_thread() {
        let detection = detect_mode(&doc_with_keys(&["thread_name", "priority_rules"]));
        assert_eq!(detection.mode, Mode::Thread);
        assert_eq!(detection.fallback, None);
    }

    #[test]
    fn mixed_keys_fall_back_to_global_with_warning() {
        let detection = detect_mode(&doc_with_keys(&["failure_patterns", "thread_name"]));
        assert_eq!(detection.mode, Mode::Global);
        assert_eq!(detection.fallback, Some(DetectionFallback::MixedSchemas));
    }

    #[test]
    fn unrecognized_keys_fall_back_to_global_with_warning() {
        let detection = detect_mode(&doc_with_keys(&["something_else", "another"]));
        assert_eq!(detection.mode, Mode::Global);
        assert_eq!(detection.fallback, Some(DetectionFallback::Undetermined));
    }

    #[test]
    fn empty_document_is_undetermined() {
        let detection = detect_mode(&Map::new());
        assert_eq!(detection.mode, Mode::Global);
        assert_eq!(detection.fallback, Some(DetectionFallback::Undetermined));
    }

    #[test]
    fn detection_ignores_field_values() {
        // Detection is a function of the key set; wildly mistyped values
        // must not change the result.
        let mut map = Map::new();
        map.insert("thread_name".to_string(), json!({"nested": [1, 2]}));
        map.insert("primary_goal".to_string(), json!(null));
        let detection = detect_mode(&map);
        assert_eq!(detection.mode, Mode::Thread);
        assert_eq!(detection.fallback, None);
    }

    #[test]
    fn mode_names() {
        assert_eq!(Mode::Global.as_str(), "global");
        assert_eq!(Mode::Thread.as_str(), "thread");
        assert_eq!(Mode::Global.label(), "GLOBAL");
        assert_eq!(Mode::Thread.label(), "THREAD");
    }

    proptest! {
        /// Detection matches the decision table for arbitrary key subsets,
        /// regardless of insertion order or extra unrecognized keys.
        #[test]
        fn detection_matches_decision_table(
            global_subset in proptest::sample::subsequence(GLOBAL_REQUIRED_KEYS.to_vec(), 0..=8),
            thread_subset in proptest::sample::subsequence(THREAD_REQUIRED_KEYS.to_vec(), 0..=7),
            extra_keys in proptest::collection::vec("[a-z_]{1,12}", 0..4),
            shuffle_seed in any::<u64>(),
        ) {
            let mut keys: Vec<String> = global_subset
                .iter()
                .chain(thread_subset.iter())
                .map(|k| (*k).to_string())
                .chain(extra_keys.iter().cloned())
                .collect();

            // Deterministic pseudo-shuffle: rotate by the seed so insertion
            // order varies across cases without an RNG dependency here.
            if !keys.is_empty() {
                let pivot = (shuffle_seed as usize) % keys.len();
                keys.rotate_left(pivot);
            }

            let mut map = Map::new();
            for key in &keys {
                map.insert(key.clone(), json!([]));
            }

            let has_global = GLOBAL_REQUIRED_KEYS.iter().any(|k| map.contains_key(*k));
            let has_thread = THREAD_REQUIRED_KEYS.iter().any(|k| map.contains_key(*k));
            let detection = detect_mode(&map);

            let (expected_mode, expected_fallback) = match (has_global, has_thread) {
                (true, false) => (Mode::Global, None),
                (false, true) => (Mode::Thread, None),
                (true, true) => (Mode::Global, Some(DetectionFallback::MixedSchemas)),
                (false, false) => (Mode::Global, Some(DetectionFallback::Undetermined)),
            };

            prop_assert_eq!(detection.mode, expected_mode);
            prop_assert_eq!(detection.fallback, expected_fallback);
        }
    }
}
