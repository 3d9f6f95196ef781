use crate::OutputFormatter;
use lift_rules::types::{CheckResult, FixResult, RuleInfo};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_fix(&self, result: &FixResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_rules(&self, rules: &[RuleInfo]) -> String {
        serde_json::to_string_pretty(rules).unwrap_or_default()
    }
}
