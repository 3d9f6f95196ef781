// Tests for multi-file runs: walking, parallel checking, fixing in place.

use std::fs;

use lift_core::config::LiftConfig;
use lift_parsers::walker::FileWalker;
use lift_rules::engine::LintEngine;

use super::common;

fn project() -> (tempfile::TempDir, std::path::PathBuf) {
    common::create_project(&[
        ("src/api.ts", "export function get(): {ok: boolean} { return { ok: true }; }\n"),
        ("src/view.tsx", "export const View = ({ title }: Props) => { return <h1>{title}</h1>; };\n"),
        ("src/clean.ts", "export type Props = { title: string };\n"),
        ("src/generated/schema.d.ts", "export declare function parse(input: {raw: string}): void;\n"),
        ("vendor/lib.ts", "export function v({a}) { return a; }\n"),
        (".liftignore", "vendor/\n"),
    ])
}

fn files(root: &std::path::Path, config: &LiftConfig) -> Vec<std::path::PathBuf> {
    FileWalker::new(root)
        .with_ignore_patterns(&config.ignore_patterns)
        .unwrap()
        .walk()
        .into_iter()
        .map(|e| e.path)
        .collect()
}

#[test]
fn test_check_project() {
    let (_dir, root) = project();
    let config = LiftConfig {
        ignore_patterns: vec!["**/*.d.ts".to_string()],
        ..LiftConfig::default()
    };
    let files = files(&root, &config);
    assert_eq!(files.len(), 3);

    let result = LintEngine::new(config).check_files(&root, &files);

    assert_eq!(result.status, "error");
    assert_eq!(result.errors.len(), 2);
    let flagged: Vec<_> = result.errors.iter().map(|v| v.file.as_str()).collect();
    assert!(flagged.iter().any(|f| f.ends_with("api.ts")));
    assert!(flagged.iter().any(|f| f.ends_with("view.tsx")));
    assert!(result.failures.is_empty());
}

#[test]
fn test_fix_project_in_place() {
    let (_dir, root) = project();
    let config = LiftConfig {
        ignore_patterns: vec!["**/*.d.ts".to_string()],
        ..LiftConfig::default()
    };
    let files = files(&root, &config);
    let engine = LintEngine::new(config);

    let result = engine.fix_files(&root, &files, false);
    assert!(result.failures.is_empty());
    assert_eq!(result.files.iter().filter(|f| f.changed).count(), 2);

    assert_eq!(
        fs::read_to_string(root.join("src/api.ts")).unwrap(),
        "interface GetResult {ok: boolean}\n\nexport function get(): GetResult { return { ok: true }; }\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("src/view.tsx")).unwrap(),
        "export const View = (payload: Props) => {\n\tconst { title } = payload;\n return <h1>{title}</h1>; };\n"
    );
    // Ignored by .liftignore.
    assert_eq!(
        fs::read_to_string(root.join("vendor/lib.ts")).unwrap(),
        "export function v({a}) { return a; }\n"
    );

    let recheck = engine.check_files(&root, &files);
    assert_eq!(recheck.status, "ok");
}

#[test]
fn test_declaration_files_are_checked_unless_ignored() {
    let (_dir, root) = project();
    let config = LiftConfig::default();
    let files = files(&root, &config);
    assert_eq!(files.len(), 4);

    let result = LintEngine::new(config).check_files(&root, &files);
    assert!(result
        .errors
        .iter()
        .any(|v| v.file.ends_with("schema.d.ts")));
}

#[test]
fn test_unparsable_file_is_a_failure_not_a_panic() {
    let (_dir, root) = common::create_project(&[
        ("a.ts", "let a: {x: 1};\n"),
        ("b.ts", "function (\n"),
    ]);
    let files = files(&root, &LiftConfig::default());
    let result = LintEngine::new(LiftConfig::default()).fix_files(&root, &files, false);

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].file, "b.ts");
    assert_eq!(fs::read_to_string(root.join("b.ts")).unwrap(), "function (\n");
}
