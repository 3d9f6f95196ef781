//! Arena-backed syntax tree.
//!
//! Nodes live in one `Vec` and address each other by [`NodeId`]; the parent
//! link is an index, so upward walks cost O(depth) and nothing is reference
//! counted. Only named grammar nodes are stored. A host builds the tree with
//! [`TreeBuilder`]; rules only read it.

use crate::span::{LineIndex, Position, Span};

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Node kinds the rules distinguish. Everything else is `Other(grammar_name)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    ExportStatement,
    AmbientDeclaration,
    FunctionDeclaration,
    FunctionSignature,
    FunctionExpression,
    ArrowFunction,
    MethodDefinition,
    FormalParameters,
    Parameter,
    ObjectPattern,
    StatementBlock,
    ReturnStatement,
    VariableDeclaration,
    VariableDeclarator,
    TypeAliasDeclaration,
    InterfaceDeclaration,
    InterfaceBody,
    PropertySignature,
    TypeAnnotation,
    ObjectType,
    IntersectionType,
    ParenthesizedType,
    ArrayType,
    TupleType,
    TypeArguments,
    TypeParameters,
    TypeParameter,
    Constraint,
    DefaultType,
    CallExpression,
    NewExpression,
    AsExpression,
    SatisfiesExpression,
    ImportStatement,
    Identifier,
    PropertyIdentifier,
    Comment,
    Other(&'static str),
}

impl NodeKind {
    /// Function-like nodes that own a parameter list.
    pub fn is_function(self) -> bool {
        matches!(
            self,
            NodeKind::FunctionDeclaration
                | NodeKind::FunctionSignature
                | NodeKind::FunctionExpression
                | NodeKind::ArrowFunction
                | NodeKind::MethodDefinition
        )
    }
}

/// The grammar field a node occupies inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Parameters,
    Parameter,
    ReturnType,
    Body,
    Pattern,
    Type,
    Value,
    Constraint,
    TypeArguments,
    TypeParameters,
    Declaration,
    Function,
    Arguments,
    Other(&'static str),
}

#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub field: Option<FieldKind>,
    pub span: Span,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Errors raised while assembling a tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("tree has no root node")]
    Empty,

    #[error("unbalanced tree builder: {0} node(s) left open")]
    Unbalanced(usize),

    #[error("node span {span} is outside the source ({len} bytes) or splits a character")]
    SpanOutOfBounds { span: Span, len: usize },
}

/// One file's syntax tree together with the source it was parsed from.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    source: String,
    nodes: Vec<SyntaxNode>,
    lines: LineIndex,
}

impl SyntaxTree {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    pub fn field(&self, id: NodeId) -> Option<FieldKind> {
        self.node(id).field
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.node(id).span
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Source text covered by `id`.
    pub fn text(&self, id: NodeId) -> &str {
        self.slice(self.span(id))
    }

    /// Source text covered by `span`; empty when the span is not a valid slice.
    pub fn slice(&self, span: Span) -> &str {
        self.source.get(span.start..span.end).unwrap_or_default()
    }

    pub fn position(&self, offset: usize) -> Position {
        self.lines.position(&self.source, offset)
    }

    /// First child occupying `field`.
    pub fn child_by_field(&self, id: NodeId, field: FieldKind) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| self.field(c) == Some(field))
    }

    /// Children of `id` with the given kind, in source order.
    pub fn children_of_kind(&self, id: NodeId, kind: NodeKind) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |&c| self.kind(c) == kind)
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// `id` and all of its descendants in pre-order (document order).
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// Every node in the tree in pre-order.
    pub fn preorder(&self) -> Descendants<'_> {
        self.descendants(self.root())
    }
}

pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

pub struct Descendants<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(current).iter().rev().copied());
        Some(current)
    }
}

/// Stack-based builder: `start_node` opens a child of the currently open
/// node, `finish_node` closes it. The first node opened is the root.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<SyntaxNode>,
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_node(&mut self, kind: NodeKind, field: Option<FieldKind>, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let parent = self.stack.last().copied();
        if let Some(p) = parent {
            self.nodes[p.index()].children.push(id);
        }
        self.nodes.push(SyntaxNode {
            kind,
            field,
            span,
            parent,
            children: Vec::new(),
        });
        self.stack.push(id);
        id
    }

    pub fn finish_node(&mut self) {
        self.stack.pop();
    }

    /// Close the builder. Every span must be a valid slice of `source`.
    pub fn finish(self, source: String) -> Result<SyntaxTree, TreeError> {
        if self.nodes.is_empty() {
            return Err(TreeError::Empty);
        }
        if !self.stack.is_empty() {
            return Err(TreeError::Unbalanced(self.stack.len()));
        }
        if let Some(bad) = self
            .nodes
            .iter()
            .find(|n| source.get(n.span.start..n.span.end).is_none())
        {
            return Err(TreeError::SpanOutOfBounds {
                span: bad.span,
                len: source.len(),
            });
        }
        let lines = LineIndex::new(&source);
        Ok(SyntaxTree {
            source,
            nodes: self.nodes,
            lines,
        })
    }
}
