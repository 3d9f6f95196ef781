//! `avoid-type-literals`: inline object types must be named.
//!
//! A literal outside a type alias value or interface body is reported and
//! lifted into an `interface` declared before the enclosing module-level
//! statement. An intersection with two or more literal members is reported
//! once, at the intersection, and its literals are merged; the literals
//! themselves are left alone.

pub mod classify;
pub mod naming;
pub mod patch;

use lift_core::tree::{NodeId, NodeKind};
use lift_core::types::{MessageKind, Reporter, RuleId};

use crate::registry::NameRegistry;
use crate::rule::{FileContext, Rule};

use classify::effective_parent;
use patch::{lift_fix, literal_members, merge_fix};

#[derive(Debug, Clone, Copy, Default)]
pub struct AvoidTypeLiterals;

impl AvoidTypeLiterals {
    fn check_intersection(&self, ctx: &FileContext<'_>, node: NodeId, out: &mut dyn Reporter) {
        if literal_members(ctx.tree, node).len() < 2 {
            return;
        }
        let fix = merge_fix(ctx.tree, node);
        out.report(ctx.diagnostic(
            RuleId::AvoidTypeLiterals,
            MessageKind::IntersectionLiteral,
            node,
            Some(fix),
        ));
    }

    fn check_literal(
        &self,
        ctx: &FileContext<'_>,
        node: NodeId,
        names: &mut NameRegistry,
        out: &mut dyn Reporter,
    ) {
        let tree = ctx.tree;
        if let Some(parent) = effective_parent(tree, node) {
            match tree.kind(parent) {
                NodeKind::IntersectionType if literal_members(tree, parent).len() >= 2 => return,
                NodeKind::TypeAliasDeclaration | NodeKind::InterfaceDeclaration => return,
                _ => {}
            }
        }
        let fix = lift_fix(ctx, node, names);
        out.report(ctx.diagnostic(
            RuleId::AvoidTypeLiterals,
            MessageKind::TypeLiteral,
            node,
            fix,
        ));
    }
}

impl Rule for AvoidTypeLiterals {
    fn id(&self) -> RuleId {
        RuleId::AvoidTypeLiterals
    }

    fn description(&self) -> &'static str {
        "Lift inline object types into named interfaces and merge intersections of object types"
    }

    fn check_node(
        &self,
        ctx: &FileContext<'_>,
        node: NodeId,
        names: &mut NameRegistry,
        out: &mut dyn Reporter,
    ) {
        match ctx.tree.kind(node) {
            NodeKind::IntersectionType => self.check_intersection(ctx, node, out),
            NodeKind::ObjectType => self.check_literal(ctx, node, names, out),
            _ => {}
        }
    }
}
