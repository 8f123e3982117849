//! # Schema Descriptors — The Two Hard-Coded Pack Shapes
//!
//! Static required-key lists for the GLOBAL reasoning-pack schema and the
//! THREAD-specific schema. Declaration order is the order fields are
//! checked, and therefore the order violations appear in a report.
//!
//! The two key sets are disjoint. Documents mixing keys from both are
//! still handled — the mode detector resolves them to GLOBAL with a
//! warning rather than rejecting them.

/// Required keys of the GLOBAL reasoning-pack schema. Every one of these
/// must hold a list; element types are not checked.
pub const GLOBAL_REQUIRED_KEYS: [&str; 8] = [
    "context_you_should_have_used",
    "thought_process_failures",
    "failure_patterns",
    "grok_strengths_and_limitations",
    "multi_llm_roles",
    "power_user_best_practices",
    "team_of_models_architecture",
    "reasoning_strategy_pack",
];

/// String-valued keys of the THREAD schema, checked first.
pub const THREAD_STRING_KEYS: [&str; 3] = ["thread_name", "primary_goal", "niche_or_topic"];

/// List-valued keys of the THREAD schema, checked after the string group.
pub const THREAD_LIST_KEYS: [&str; 4] = [
    "tasks_for_grok",
    "hard_constraints",
    "output_requirements",
    "priority_rules",
];

/// All required keys of the THREAD schema, in check order.
pub const THREAD_REQUIRED_KEYS: [&str; 7] = [
    "thread_name",
    "primary_goal",
    "niche_or_topic",
    "tasks_for_grok",
    "hard_constraints",
    "output_requirements",
    "priority_rules",
];
