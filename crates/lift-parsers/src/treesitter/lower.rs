//! Lowering tree-sitter-typescript's concrete tree into the lift arena.
//!
//! Anonymous tokens are dropped. Left-nested `intersection_type` nodes
//! (`(A & B) & C` in the grammar) are flattened so every intersection
//! carries all of its members as direct children.

use lift_core::span::Span;
use lift_core::tree::{FieldKind, NodeKind, SyntaxTree, TreeBuilder, TreeError};
use tree_sitter::Node;

pub(super) fn lower(root: Node<'_>, source: &str) -> Result<SyntaxTree, TreeError> {
    let mut builder = TreeBuilder::new();
    builder.start_node(NodeKind::Program, None, Span::new(0, source.len()));
    lower_children(&mut builder, root);
    builder.finish_node();
    builder.finish(source.to_string())
}

fn lower_children(builder: &mut TreeBuilder, node: Node<'_>) {
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return;
    }
    loop {
        let child = cursor.node();
        if child.is_named() {
            if node.kind() == "intersection_type" && child.kind() == "intersection_type" {
                lower_children(builder, child);
            } else {
                let field = cursor.field_name().map(field_kind);
                builder.start_node(
                    node_kind(child.kind()),
                    field,
                    Span::new(child.start_byte(), child.end_byte()),
                );
                lower_children(builder, child);
                builder.finish_node();
            }
        }
        if !cursor.goto_next_sibling() {
            break;
        }
    }
}

pub(super) fn node_kind(kind: &'static str) -> NodeKind {
    match kind {
        "program" => NodeKind::Program,
        "export_statement" => NodeKind::ExportStatement,
        "ambient_declaration" => NodeKind::AmbientDeclaration,
        "function_declaration" | "generator_function_declaration" => {
            NodeKind::FunctionDeclaration
        }
        "function_signature" => NodeKind::FunctionSignature,
        "function_expression" | "function" | "generator_function" => {
            NodeKind::FunctionExpression
        }
        "arrow_function" => NodeKind::ArrowFunction,
        "method_definition" => NodeKind::MethodDefinition,
        "formal_parameters" => NodeKind::FormalParameters,
        "required_parameter" | "optional_parameter" => NodeKind::Parameter,
        "object_pattern" => NodeKind::ObjectPattern,
        "statement_block" => NodeKind::StatementBlock,
        "return_statement" => NodeKind::ReturnStatement,
        "lexical_declaration" | "variable_declaration" => NodeKind::VariableDeclaration,
        "variable_declarator" => NodeKind::VariableDeclarator,
        "type_alias_declaration" => NodeKind::TypeAliasDeclaration,
        "interface_declaration" => NodeKind::InterfaceDeclaration,
        "interface_body" => NodeKind::InterfaceBody,
        "property_signature" => NodeKind::PropertySignature,
        "type_annotation" => NodeKind::TypeAnnotation,
        "object_type" => NodeKind::ObjectType,
        "intersection_type" => NodeKind::IntersectionType,
        "parenthesized_type" => NodeKind::ParenthesizedType,
        "array_type" => NodeKind::ArrayType,
        "tuple_type" => NodeKind::TupleType,
        "type_arguments" => NodeKind::TypeArguments,
        "type_parameters" => NodeKind::TypeParameters,
        "type_parameter" => NodeKind::TypeParameter,
        "constraint" => NodeKind::Constraint,
        "default_type" => NodeKind::DefaultType,
        "call_expression" => NodeKind::CallExpression,
        "new_expression" => NodeKind::NewExpression,
        "as_expression" => NodeKind::AsExpression,
        "satisfies_expression" => NodeKind::SatisfiesExpression,
        "import_statement" => NodeKind::ImportStatement,
        "identifier" | "type_identifier" | "shorthand_property_identifier_pattern" => {
            NodeKind::Identifier
        }
        "property_identifier" => NodeKind::PropertyIdentifier,
        "comment" => NodeKind::Comment,
        other => NodeKind::Other(other),
    }
}

pub(super) fn field_kind(name: &'static str) -> FieldKind {
    match name {
        "name" => FieldKind::Name,
        "parameters" => FieldKind::Parameters,
        "parameter" => FieldKind::Parameter,
        "return_type" => FieldKind::ReturnType,
        "body" => FieldKind::Body,
        "pattern" => FieldKind::Pattern,
        "type" => FieldKind::Type,
        "value" => FieldKind::Value,
        "constraint" => FieldKind::Constraint,
        "type_arguments" => FieldKind::TypeArguments,
        "type_parameters" => FieldKind::TypeParameters,
        "declaration" => FieldKind::Declaration,
        "function" => FieldKind::Function,
        "arguments" => FieldKind::Arguments,
        other => FieldKind::Other(other),
    }
}
