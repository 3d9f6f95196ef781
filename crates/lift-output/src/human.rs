use crate::OutputFormatter;
use lift_rules::types::{CheckResult, FixResult, RuleInfo, Violation};

pub struct HumanFormatter;

fn format_violation(v: &Violation) -> String {
    let fixable = if v.fixable { " (fixable)" } else { "" };
    format!(
        "{}:{}:{} {} {} [{}]{}\n",
        v.file, v.line, v.column, v.severity, v.message, v.rule, fixable,
    )
}

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        if result.errors.is_empty() && result.warnings.is_empty() && result.failures.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();

        for v in result.errors.iter().chain(&result.warnings) {
            out.push_str(&format_violation(v));
        }
        for f in &result.failures {
            out.push_str(&format!("{}: {}\n", f.file, f.error));
        }

        out.push_str(&format!(
            "\n{} error(s), {} warning(s) in {} file(s)\n",
            result.errors.len(),
            result.warnings.len(),
            result.files_analyzed.len(),
        ));
        if !result.failures.is_empty() {
            out.push_str(&format!(
                "{} file(s) could not be analyzed\n",
                result.failures.len()
            ));
        }

        out
    }

    fn format_fix(&self, result: &FixResult) -> String {
        let mut out = String::new();
        let verb = if result.dry_run { "would fix" } else { "fixed" };

        for file in result.files.iter().filter(|f| f.changed) {
            out.push_str(&format!(
                "{} {} ({} fix(es), {} pass(es))\n",
                verb, file.file, file.fixes_applied, file.passes,
            ));
        }
        for v in result.files.iter().flat_map(|f| &f.remaining) {
            out.push_str(&format_violation(v));
        }
        for f in &result.failures {
            out.push_str(&format!("{}: {}\n", f.file, f.error));
        }

        let changed = result.files.iter().filter(|f| f.changed).count();
        let remaining: usize = result.files.iter().map(|f| f.remaining.len()).sum();
        out.push_str(&format!(
            "\n{} of {} file(s) {}, {} violation(s) remaining\n",
            changed,
            result.files.len() + result.failures.len(),
            if result.dry_run { "would change" } else { "changed" },
            remaining,
        ));
        out
    }

    fn format_rules(&self, rules: &[RuleInfo]) -> String {
        let width = rules
            .iter()
            .map(|r| r.id.as_str().len())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for rule in rules {
            out.push_str(&format!(
                "{:<width$}  {:<5}  {}\n",
                rule.id.as_str(),
                rule.severity.as_str(),
                rule.description,
            ));
        }
        out
    }
}
