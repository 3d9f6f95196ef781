//! Text edits for the type-literal rule.

use tracing::debug;

use lift_core::config::UnclassifiedPolicy;
use lift_core::tree::{NodeId, NodeKind, SyntaxTree};
use lift_core::types::{Fix, TextEdit};

use crate::registry::NameRegistry;
use crate::rule::FileContext;

use super::classify::{action_name, action_node, classify_role, unwrap_parens};
use super::naming::{candidate_name, postfix};

/// Lift `literal` into a named declaration placed before its module-level
/// statement and replace the literal with the new name.
///
/// The name is reserved in `names` as soon as it is chosen. Returns `None`
/// when the literal's position has no naming rule and the policy is
/// [`UnclassifiedPolicy::Skip`].
pub fn lift_fix(ctx: &FileContext<'_>, literal: NodeId, names: &mut NameRegistry) -> Option<Fix> {
    let tree = ctx.tree;
    let action = action_node(tree, literal);
    let role = classify_role(tree, literal);

    let postfix = match postfix(action.kind, &role) {
        Some(postfix) => postfix,
        None if ctx.config.unclassified == UnclassifiedPolicy::Skip => {
            debug!(span = %tree.span(literal), "unclassified type literal, no fix");
            return None;
        }
        None => String::new(),
    };

    let name = names.reserve(&candidate_name(&action_name(tree, &action), &postfix));
    let body = tree.text(literal);
    let declaration = if is_mapped_type(tree, literal) {
        // Mapped types cannot be the body of an interface.
        format!("type {name} = {body};\n\n")
    } else {
        format!("interface {name} {body}\n\n")
    };

    Some(Fix::new(vec![
        TextEdit::insert(tree.span(action.statement).start, declaration),
        TextEdit::replace(tree.span(literal), name),
    ]))
}

fn is_mapped_type(tree: &SyntaxTree, literal: NodeId) -> bool {
    tree.children(literal).iter().any(|&member| {
        tree.children(member)
            .iter()
            .any(|&c| tree.kind(c) == NodeKind::Other("mapped_type_clause"))
    })
}

/// Members of `intersection` that are type literals, parentheses stripped.
pub fn literal_members(tree: &SyntaxTree, intersection: NodeId) -> Vec<NodeId> {
    tree.children(intersection)
        .iter()
        .map(|&m| unwrap_parens(tree, m))
        .filter(|&m| tree.kind(m) == NodeKind::ObjectType)
        .collect()
}

/// Merge every literal member of `intersection` into a single literal:
/// `{a: 1} & B & {c: 2}` → `{a: 1,c: 2,} & B`.
pub fn merge_fix(tree: &SyntaxTree, intersection: NodeId) -> Fix {
    let mut merged = String::from("{");
    let mut rest = Vec::new();

    for &member in tree.children(intersection) {
        if tree.kind(member) == NodeKind::Comment {
            continue;
        }
        let inner = unwrap_parens(tree, member);
        if tree.kind(inner) != NodeKind::ObjectType {
            rest.push(tree.text(member));
            continue;
        }
        for &property in tree.children(inner) {
            if tree.kind(property) != NodeKind::Comment {
                merged.push_str(tree.text(property));
                merged.push(',');
            }
        }
    }
    merged.push('}');

    let replacement = if rest.is_empty() {
        merged
    } else {
        format!("{merged} & {}", rest.join(" & "))
    };
    Fix::new(vec![TextEdit::replace(tree.span(intersection), replacement)])
}
