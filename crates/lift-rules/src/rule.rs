use lift_core::config::LiftConfig;
use lift_core::tree::{NodeId, SyntaxTree};
use lift_core::types::{Diagnostic, Fix, MessageKind, Reporter, RuleId};

use crate::registry::NameRegistry;

/// Read-only view of the file a rule is checking.
pub struct FileContext<'a> {
    pub tree: &'a SyntaxTree,
    pub config: &'a LiftConfig,
}

impl FileContext<'_> {
    pub fn diagnostic(
        &self,
        rule: RuleId,
        message: MessageKind,
        node: NodeId,
        fix: Option<Fix>,
    ) -> Diagnostic {
        let span = self.tree.span(node);
        Diagnostic {
            rule,
            message,
            span,
            start: self.tree.position(span.start),
            end: self.tree.position(span.end),
            fix,
        }
    }
}

/// A lint rule. The engine hands every node of the file to
/// [`Rule::check_node`] in document order; the rule filters on kind.
pub trait Rule: Send + Sync {
    fn id(&self) -> RuleId;
    fn description(&self) -> &'static str;
    fn check_node(
        &self,
        ctx: &FileContext<'_>,
        node: NodeId,
        names: &mut NameRegistry,
        out: &mut dyn Reporter,
    );
}
