//! `args-destructing`: functions take their argument object whole.
//!
//! `function f({a, b}: T) { ... }` becomes
//! `function f(payload: T) {\n\tconst {a, b} = payload;\n ... }`.
//! Methods and constructors are treated like functions. Arrow functions
//! with an expression body have nowhere to put the destructuring and are
//! not reported.

use tracing::debug;

use lift_core::span::Span;
use lift_core::tree::{FieldKind, NodeId, NodeKind, SyntaxTree};
use lift_core::types::{Fix, MessageKind, Reporter, RuleId, TextEdit};

use crate::registry::NameRegistry;
use crate::rule::{FileContext, Rule};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArgsDestructing;

impl Rule for ArgsDestructing {
    fn id(&self) -> RuleId {
        RuleId::ArgsDestructing
    }

    fn description(&self) -> &'static str {
        "Replace object-destructuring parameters with a placeholder destructured in the body"
    }

    fn check_node(
        &self,
        ctx: &FileContext<'_>,
        node: NodeId,
        _names: &mut NameRegistry,
        out: &mut dyn Reporter,
    ) {
        let tree = ctx.tree;
        if tree.kind(node) != NodeKind::ObjectPattern {
            return;
        }
        let Some(function) = owning_function(tree, node) else {
            return;
        };
        let Some(body) = block_body(tree, function) else {
            return;
        };
        let fix = destructuring_fix(ctx, node, function, body);
        out.report(ctx.diagnostic(
            RuleId::ArgsDestructing,
            MessageKind::Destructuring,
            node,
            fix,
        ));
    }
}

/// The function whose parameter list directly holds `pattern`.
fn owning_function(tree: &SyntaxTree, pattern: NodeId) -> Option<NodeId> {
    let parameter = tree.parent(pattern)?;
    if tree.kind(parameter) != NodeKind::Parameter {
        return None;
    }
    let parameters = tree.parent(parameter)?;
    if tree.kind(parameters) != NodeKind::FormalParameters {
        return None;
    }
    let function = tree.parent(parameters)?;
    match tree.kind(function) {
        NodeKind::FunctionDeclaration
        | NodeKind::FunctionExpression
        | NodeKind::ArrowFunction
        | NodeKind::MethodDefinition => Some(function),
        _ => None,
    }
}

fn block_body(tree: &SyntaxTree, function: NodeId) -> Option<NodeId> {
    let body = tree
        .child_by_field(function, FieldKind::Body)
        .or_else(|| tree.children(function).last().copied())?;
    (tree.kind(body) == NodeKind::StatementBlock).then_some(body)
}

/// Pattern text without a type annotation some hosts attach to the pattern.
fn binding_text<'t>(tree: &'t SyntaxTree, pattern: NodeId) -> &'t str {
    let span = tree.span(pattern);
    match tree.children_of_kind(pattern, NodeKind::TypeAnnotation).next() {
        Some(annotation) => tree
            .slice(Span::new(span.start, tree.span(annotation).start))
            .trim_end(),
        None => tree.text(pattern),
    }
}

fn destructuring_fix(
    ctx: &FileContext<'_>,
    pattern: NodeId,
    function: NodeId,
    body: NodeId,
) -> Option<Fix> {
    let tree = ctx.tree;

    // The placeholder keeps one name; with siblings it would shadow or collide.
    let parameters = tree.parent(tree.parent(pattern)?)?;
    let arity = tree
        .children(parameters)
        .iter()
        .filter(|&&p| tree.kind(p) != NodeKind::Comment)
        .count();
    if arity != 1 {
        debug!(arity, "destructured parameter has siblings, no fix");
        return None;
    }

    let placeholder = &ctx.config.placeholder;
    if tree
        .descendants(pattern)
        .any(|n| tree.kind(n) == NodeKind::Identifier && tree.text(n) == placeholder.as_str())
    {
        debug!(placeholder = %placeholder, "pattern already uses the placeholder, no fix");
        return None;
    }

    let pattern_span = tree.span(pattern);
    let body_span = tree.span(body);
    let head = Span::new(tree.span(function).start, body_span.start);
    let binding = binding_text(tree, pattern);
    if binding.is_empty() || !head.contains(pattern_span) || !tree.slice(head).contains(binding) {
        debug!(span = %pattern_span, "pattern not found in function head, no fix");
        return None;
    }

    Some(Fix::new(vec![
        TextEdit::replace(pattern_span, placeholder.clone()),
        TextEdit::insert(
            body_span.start + 1,
            format!("\n\tconst {binding} = {placeholder};\n"),
        ),
    ]))
}
