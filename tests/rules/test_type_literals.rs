// Tests for type-literal lifting and intersection merging over realistic sources.

use std::path::Path;

use lift_core::config::LiftConfig;
use lift_core::types::{MessageKind, RuleId, Severity};
use lift_rules::engine::LintEngine;

use super::common;

fn check(source: &str) -> Vec<lift_core::types::Diagnostic> {
    LintEngine::new(LiftConfig::default())
        .check_source(Path::new("input.ts"), source)
        .unwrap()
}

#[test]
/// Return annotation of a function becomes `<Name>Result`.
fn test_return_annotation_lifted() {
    let fixed = common::fix("function load(): {id: string} { return { id: '1' }; }");
    assert_eq!(
        fixed.output,
        "interface LoadResult {id: string}\n\nfunction load(): LoadResult { return { id: '1' }; }"
    );
}

#[test]
/// Lifted declarations land before the module-level statement, not the nested one.
fn test_insertion_before_top_level_statement() {
    let src = "import { api } from './api';\n\nexport const handlers = {\n  load(): void {},\n};\n\nexport async function fetchUser(id: string): Promise<{ name: string }> {\n  return api.get(id);\n}\n";
    let fixed = common::fix(src);
    assert_eq!(
        fixed.output,
        "import { api } from './api';\n\nexport const handlers = {\n  load(): void {},\n};\n\ninterface FetchUserGeneric { name: string }\n\nexport async function fetchUser(id: string): Promise<FetchUserGeneric> {\n  return api.get(id);\n}\n"
    );
}

#[test]
/// Names taken anywhere at module scope are avoided.
fn test_imported_name_is_avoided() {
    let src = "import { LoadResult } from './types';\nfunction load(): {id: string} { return x; }\n";
    let fixed = common::fix(src);
    assert!(fixed
        .output
        .contains("interface LoadResult1 {id: string}\n\nfunction load(): LoadResult1"));
}

#[test]
/// Every literal in a type alias body except the value itself is reported.
fn test_alias_nested_literals_reported() {
    let src = "type Order = {\n  customer: { name: string };\n  lines: { sku: string }[];\n};\n";
    let diagnostics = check(src);
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics
        .iter()
        .all(|d| d.message == MessageKind::TypeLiteral));
    assert_eq!(diagnostics[0].start.line, 2);
    assert_eq!(diagnostics[1].start.line, 3);
}

#[test]
/// Property literals take the property name; array elements take `Item`.
fn test_alias_nested_literals_fixed() {
    let src = "type Order = {\n  customer: { name: string };\n  lines: { sku: string }[];\n};\n";
    let fixed = common::fix(src);
    assert_eq!(
        fixed.output,
        "interface OrderCustomer { name: string }\n\ninterface OrderItem { sku: string }\n\ntype Order = {\n  customer: OrderCustomer;\n  lines: OrderItem[];\n};\n"
    );
}

#[test]
/// Two literals plus a reference: merged into one literal and the reference kept.
fn test_intersection_merge() {
    let diagnostics = check("type T = {a: number} & {b: string} & U;");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, MessageKind::IntersectionLiteral);
    assert_eq!(
        diagnostics[0].fix.as_ref().unwrap().edits[0].replacement,
        "{a: number,b: string,} & U"
    );
}

#[test]
/// Three literals between references: members merged in order, references kept in order.
fn test_intersection_merge_interleaved() {
    let diagnostics = check("type T = {a: 1} & A & {b: 2; c: 3} & B & {d: 4};");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].fix.as_ref().unwrap().edits[0].replacement,
        "{a: 1,b: 2,c: 3,d: 4,} & A & B"
    );
}

#[test]
/// Named type declarations are already fine.
fn test_named_declarations_are_clean() {
    let src = "interface A { a: string }\ntype B = { b: number };\nexport type C = { c: A };\ndeclare type D = { d: B };\n";
    assert!(check(src).is_empty());
}

#[test]
/// Severity override does not change what is reported.
fn test_severity_override_keeps_detection() {
    let mut config = LiftConfig::default();
    config.set_rule(RuleId::AvoidTypeLiterals, Severity::Warn);
    let diagnostics = LintEngine::new(config)
        .check_source(Path::new("input.ts"), "let a: {x: 1};")
        .unwrap();
    assert_eq!(diagnostics.len(), 1);
}

#[test]
/// tsx sources are analyzed with the tsx grammar.
fn test_tsx_source() {
    let src = "export function Card(props: { title: string }) {\n  return <div>{props.title}</div>;\n}\n";
    let fixed = LintEngine::new(LiftConfig::default())
        .fix_source(
            &mut lift_parsers::treesitter::TreeSitterParser::new(),
            Path::new("Card.tsx"),
            src,
        )
        .unwrap();
    assert_eq!(
        fixed.output,
        "interface CardPayload { title: string }\n\nexport function Card(props: CardPayload) {\n  return <div>{props.title}</div>;\n}\n"
    );
}
