//! Naming lifted declarations: `capitalize(action name + postfix)`.

use crate::registry::{capitalize, pascal_case};

use super::classify::{ActionKind, Role};

/// Used when neither the action nor the postfix contributes a name.
pub const NEUTRAL_NAME: &str = "Lifted";

/// Postfix for a literal with `role` under an action of `kind`.
/// `None` means the position has no naming rule.
pub fn postfix(kind: ActionKind, role: &Role) -> Option<String> {
    let fixed = match (kind, role) {
        (
            ActionKind::Variable | ActionKind::Function,
            Role::ParameterAnnotation | Role::VariableAnnotation | Role::CallTypeArgument,
        ) => "Payload",
        (ActionKind::Variable | ActionKind::Function, Role::ReturnAnnotation | Role::ReturnCast) => {
            "Result"
        }
        (_, Role::PropertyType(name)) => return Some(pascal_case(name)),
        (_, role) => return role_postfix(role),
    };
    Some(fixed.to_string())
}

/// Postfixes that hold whatever the action is.
fn role_postfix(role: &Role) -> Option<String> {
    let fixed = match role {
        Role::TypeArgument | Role::CallTypeArgument | Role::GenericConstraint => "Generic",
        Role::ParameterAnnotation
        | Role::VariableAnnotation
        | Role::ReturnAnnotation
        | Role::Annotation
        | Role::ReturnCast
        | Role::TupleElement => "",
        Role::IntersectionMember => "Type",
        Role::ArrayElement => "Item",
        Role::PropertyType(name) => return Some(pascal_case(name)),
        Role::Unclassified => return None,
    };
    Some(fixed.to_string())
}

/// Candidate name before uniqueness is applied. Never empty and always a
/// valid identifier start.
pub fn candidate_name(base: &str, postfix: &str) -> String {
    let candidate = capitalize(&format!("{base}{postfix}"));
    if candidate.starts_with(|c: char| c.is_alphabetic() || c == '_' || c == '$') {
        candidate
    } else {
        format!("{NEUTRAL_NAME}{candidate}")
    }
}
