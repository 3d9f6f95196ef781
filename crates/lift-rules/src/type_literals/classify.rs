//! Where a type literal sits, and what it belongs to.
//!
//! The *action node* is the top-level statement that owns a literal; lifted
//! declarations are inserted right before it and named after it. The *role*
//! is the literal's syntactic position, which picks the name's postfix.

use lift_core::tree::{FieldKind, NodeId, NodeKind, SyntaxTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Variable,
    Function,
    TypeAlias,
    Interface,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionNode {
    /// The declaration that names the action. For `export`/`declare`
    /// statements this is the wrapped declaration.
    pub node: NodeId,
    /// The module-level statement; insertion point for lifted declarations.
    pub statement: NodeId,
    pub kind: ActionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    ParameterAnnotation,
    VariableAnnotation,
    ReturnAnnotation,
    /// Any other `: T` annotation (class fields, method signatures, ...).
    Annotation,
    /// `f<{...}>()` or `new C<{...}>()`.
    CallTypeArgument,
    /// `Foo<{...}>` in type position.
    TypeArgument,
    /// `return x as {...}` / `return x satisfies {...}`.
    ReturnCast,
    /// Constraint or default of a type parameter.
    GenericConstraint,
    /// Type of the named property of an enclosing object type or interface.
    PropertyType(String),
    IntersectionMember,
    ArrayElement,
    TupleElement,
    Unclassified,
}

/// Walk up from `node` to the module-level statement containing it.
pub fn action_node(tree: &SyntaxTree, node: NodeId) -> ActionNode {
    let root = tree.root();
    let mut statement = node;
    for ancestor in tree.ancestors(node) {
        if ancestor == root {
            break;
        }
        statement = ancestor;
    }

    let mut declaration = statement;
    while let Some(inner) = unwrap_declaration(tree, declaration) {
        declaration = inner;
    }

    let kind = match tree.kind(declaration) {
        NodeKind::VariableDeclaration => ActionKind::Variable,
        NodeKind::FunctionDeclaration | NodeKind::FunctionSignature => ActionKind::Function,
        NodeKind::TypeAliasDeclaration => ActionKind::TypeAlias,
        NodeKind::InterfaceDeclaration => ActionKind::Interface,
        _ => ActionKind::Other,
    };

    ActionNode {
        node: declaration,
        statement,
        kind,
    }
}

fn unwrap_declaration(tree: &SyntaxTree, node: NodeId) -> Option<NodeId> {
    match tree.kind(node) {
        NodeKind::ExportStatement => tree.child_by_field(node, FieldKind::Declaration),
        NodeKind::AmbientDeclaration => tree
            .children(node)
            .iter()
            .copied()
            .find(|&c| tree.kind(c) != NodeKind::Comment),
        _ => None,
    }
}

/// The action's own name: the declared identifier, or the first binding of
/// a variable statement. Empty when the statement declares nothing.
pub fn action_name(tree: &SyntaxTree, action: &ActionNode) -> String {
    match action.kind {
        ActionKind::Variable => tree
            .children_of_kind(action.node, NodeKind::VariableDeclarator)
            .filter_map(|d| tree.child_by_field(d, FieldKind::Name))
            .flat_map(|binding| tree.descendants(binding))
            .find(|&n| tree.kind(n) == NodeKind::Identifier)
            .map(|n| tree.text(n).to_string())
            .unwrap_or_default(),
        _ => tree
            .child_by_field(action.node, FieldKind::Name)
            .filter(|&n| tree.kind(n) == NodeKind::Identifier)
            .map(|n| tree.text(n).to_string())
            .unwrap_or_default(),
    }
}

/// Nearest ancestor that is not a parenthesized type.
pub fn effective_parent(tree: &SyntaxTree, node: NodeId) -> Option<NodeId> {
    tree.ancestors(node)
        .find(|&a| tree.kind(a) != NodeKind::ParenthesizedType)
}

/// Strip any parentheses around a type: `(({ a: 1 }))` → `{ a: 1 }`.
pub fn unwrap_parens(tree: &SyntaxTree, mut node: NodeId) -> NodeId {
    while tree.kind(node) == NodeKind::ParenthesizedType {
        match tree
            .children(node)
            .iter()
            .copied()
            .find(|&c| tree.kind(c) != NodeKind::Comment)
        {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

pub fn classify_role(tree: &SyntaxTree, literal: NodeId) -> Role {
    let Some(parent) = effective_parent(tree, literal) else {
        return Role::Unclassified;
    };
    let grandparent = tree.parent(parent);
    let grandparent_kind = grandparent.map(|g| tree.kind(g));

    match tree.kind(parent) {
        NodeKind::TypeAnnotation => match grandparent_kind {
            Some(NodeKind::Parameter) => Role::ParameterAnnotation,
            Some(NodeKind::VariableDeclarator) => Role::VariableAnnotation,
            Some(NodeKind::PropertySignature) => {
                Role::PropertyType(grandparent.map(|g| property_name(tree, g)).unwrap_or_default())
            }
            Some(kind) if kind.is_function() => Role::ReturnAnnotation,
            _ => Role::Annotation,
        },
        NodeKind::TypeArguments => match grandparent_kind {
            Some(NodeKind::CallExpression | NodeKind::NewExpression) => Role::CallTypeArgument,
            _ => Role::TypeArgument,
        },
        NodeKind::Constraint | NodeKind::DefaultType => match grandparent_kind {
            Some(NodeKind::TypeParameter) => Role::GenericConstraint,
            _ => Role::Unclassified,
        },
        NodeKind::AsExpression | NodeKind::SatisfiesExpression => match grandparent_kind {
            Some(NodeKind::ReturnStatement) => Role::ReturnCast,
            _ => Role::Unclassified,
        },
        NodeKind::IntersectionType => Role::IntersectionMember,
        NodeKind::ArrayType => Role::ArrayElement,
        NodeKind::TupleType => Role::TupleElement,
        _ => Role::Unclassified,
    }
}

fn property_name(tree: &SyntaxTree, property: NodeId) -> String {
    tree.child_by_field(property, FieldKind::Name)
        .map(|n| tree.text(n).to_string())
        .unwrap_or_default()
}
