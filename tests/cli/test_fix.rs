// Tests for `lift fix`.

use std::fs;
use std::process::Command;

use super::common;

const SOURCE: &str = "export function load({ id }: { id: string }) {\n  return id;\n}\n";
const FIXED: &str = "interface LoadPayload { id: string }\n\nexport function load(payload: LoadPayload) {\n\tconst { id } = payload;\n\n  return id;\n}\n";

#[test]
/// Files are rewritten and the exit code reflects what is left.
fn test_fix_writes_files() {
    let (_dir, root) = common::create_project(&[("src/load.ts", SOURCE)]);
    let out = Command::new(common::lift_bin())
        .arg("fix")
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(fs::read_to_string(root.join("src/load.ts")).unwrap(), FIXED);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("fixed src/load.ts"), "stdout: {stdout}");
}

#[test]
/// `--dry-run` reports but never writes.
fn test_fix_dry_run() {
    let (_dir, root) = common::create_project(&[("src/load.ts", SOURCE)]);
    let out = Command::new(common::lift_bin())
        .args(["fix", "--dry-run"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(fs::read_to_string(root.join("src/load.ts")).unwrap(), SOURCE);
    assert!(String::from_utf8_lossy(&out.stdout).contains("would fix src/load.ts"));
}

#[test]
/// Only the named paths are touched.
fn test_fix_explicit_path() {
    let (_dir, root) = common::create_project(&[("a.ts", SOURCE), ("b.ts", SOURCE)]);
    let out = Command::new(common::lift_bin())
        .args(["fix", "a.ts"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(fs::read_to_string(root.join("a.ts")).unwrap(), FIXED);
    assert_eq!(fs::read_to_string(root.join("b.ts")).unwrap(), SOURCE);
}

#[test]
/// Unfixable errors keep the exit code at 1.
fn test_fix_unfixable_left() {
    let (_dir, root) = common::create_project(&[("a.ts", "function f(x, {a}) { return a; }\n")]);
    let out = Command::new(common::lift_bin())
        .arg("fix")
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("1 violation(s) remaining"));
}
