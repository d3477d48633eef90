//! Substitution rules for resub.
//!
//! This module handles:
//! - Compiled regex rules and ordered rule sets
//! - Tab-separated rule file parsing
//! - Backslash-style replacement templates

pub mod loader;
pub mod rule;
pub mod template;

pub use loader::{parse_rule_file, parse_rule_str};
pub use rule::{Rule, RuleSet};
pub use template::translate_template;
