//! Names bound at module scope.
//!
//! A lifted declaration lands at module level, so its name must not shadow
//! or collide with anything declared there.

use lift_core::tree::{FieldKind, NodeId, NodeKind, SyntaxTree};

/// Source of names a fix must not reuse.
pub trait ScopeIndex: Send + Sync {
    fn bound_names(&self, tree: &SyntaxTree) -> Vec<String>;
}

/// Names bound by the top-level statements of one file: declarations,
/// variable bindings (including destructured ones), and imports.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleScope;

impl ScopeIndex for ModuleScope {
    fn bound_names(&self, tree: &SyntaxTree) -> Vec<String> {
        let mut names = Vec::new();
        for &statement in tree.children(tree.root()) {
            collect_statement(tree, statement, &mut names);
        }
        names
    }
}

fn collect_statement(tree: &SyntaxTree, statement: NodeId, names: &mut Vec<String>) {
    match tree.kind(statement) {
        NodeKind::ExportStatement | NodeKind::AmbientDeclaration => {
            for &child in tree.children(statement) {
                collect_statement(tree, child, names);
            }
        }
        NodeKind::VariableDeclaration => {
            for declarator in tree.children_of_kind(statement, NodeKind::VariableDeclarator) {
                if let Some(binding) = tree.child_by_field(declarator, FieldKind::Name) {
                    collect_identifiers(tree, binding, names);
                }
            }
        }
        NodeKind::ImportStatement => collect_identifiers(tree, statement, names),
        _ => {
            if let Some(name) = tree.child_by_field(statement, FieldKind::Name) {
                if tree.kind(name) == NodeKind::Identifier {
                    names.push(tree.text(name).to_string());
                }
            }
        }
    }
}

fn collect_identifiers(tree: &SyntaxTree, node: NodeId, names: &mut Vec<String>) {
    names.extend(
        tree.descendants(node)
            .filter(|&n| tree.kind(n) == NodeKind::Identifier)
            .map(|n| tree.text(n).to_string()),
    );
}
