// Tests for `lift check` output and exit codes.

use std::process::Command;

use super::common;

#[test]
/// Exit code 0 and empty stdout on a clean project.
fn test_check_clean_project() {
    let (_dir, root) = common::create_project(&[(
        "src/types.ts",
        "export interface User { id: string }\nexport function get(payload: User) { return payload.id; }\n",
    )]);
    let out = Command::new(common::lift_bin())
        .arg("check")
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
/// Exit code 1 with one line per violation.
fn test_check_reports_violations() {
    let (_dir, root) = common::create_project(&[(
        "src/load.ts",
        "export function load(): {id: string} { return { id: '1' }; }\n",
    )]);
    let out = Command::new(common::lift_bin())
        .arg("check")
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("src/load.ts:1:25 error Unexpected type literal was provided. Replace it with type definition [avoid-type-literals]"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("1 error(s), 0 warning(s) in 1 file(s)"));
}

#[test]
/// Warnings alone do not fail the run.
fn test_check_warnings_exit_zero() {
    let (_dir, root) = common::create_project(&[(
        "a.ts",
        "function f({a}) { return a; }\n",
    )]);
    let out = Command::new(common::lift_bin())
        .args(["check", "--rule", "args-destructing=warn"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("a.ts:1:12 warn"));
}

#[test]
/// `--json` prints a parseable result.
fn test_check_json() {
    let (_dir, root) = common::create_project(&[("a.ts", "let a: {x: 1};\n")]);
    let out = Command::new(common::lift_bin())
        .args(["check", "--json"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["command"], "check");
    assert_eq!(json["status"], "error");
    assert_eq!(json["errors"][0]["rule"], "avoid-type-literals");
    assert_eq!(json["errors"][0]["file"], "a.ts");
}

#[test]
/// Config file severities are honored.
fn test_check_reads_config() {
    let (_dir, root) = common::create_project(&[
        ("a.ts", "let a: {x: 1};\n"),
        ("lift.json", r#"{ "rules": { "avoid-type-literals": "off" } }"#),
    ]);
    let out = Command::new(common::lift_bin())
        .arg("check")
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
}

#[test]
/// Exit code 2 on a malformed config file.
fn test_check_bad_config() {
    let (_dir, root) = common::create_project(&[
        ("a.ts", "let a = 1;\n"),
        ("lift.json", "{ not json"),
    ]);
    let out = Command::new(common::lift_bin())
        .arg("check")
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("lift check:"));
}

#[test]
/// Exit code 2 when a file cannot be parsed.
fn test_check_syntax_error() {
    let (_dir, root) = common::create_project(&[("a.ts", "function (\n")]);
    let out = Command::new(common::lift_bin())
        .arg("check")
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stdout).contains("a.ts: syntax error"));
}
