//! Output formatters for lift command results.
//!
//! Provides two output modes:
//! - **Human** (default): one line per violation plus a summary
//! - **JSON** (`--json`): machine-readable structured output

pub mod human;
pub mod json;

use lift_rules::types::{CheckResult, FixResult, RuleInfo};

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckResult) -> String;
    fn format_fix(&self, result: &FixResult) -> String;
    fn format_rules(&self, rules: &[RuleInfo]) -> String;
}
