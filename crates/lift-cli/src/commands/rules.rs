use lift_output::OutputFormatter;
use lift_rules::engine::LintEngine;

use super::common;
use super::Settings;

/// Run `lift rules`: list the built-in rules with their effective severity.
pub fn run(formatter: &dyn OutputFormatter, settings: &Settings<'_>) -> i32 {
    let cwd = match common::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("lift rules: {}", e);
            return 2;
        }
    };
    let config = match common::load_config(settings, &cwd) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("lift rules: {}", e);
            return 2;
        }
    };

    let engine = LintEngine::new(config);
    common::emit(&formatter.format_rules(&engine.rule_infos()));
    0
}
