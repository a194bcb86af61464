//! Positional exemptions for literals.
//!
//! Each predicate looks only at the literal and its ancestor chain. None of them
//! reads configuration; the classifier decides which ones apply.

use crate::syntax::{DeclarationKind, NodeKind, NodeRef, Role};

const PARSE_INT: &str = "parseInt";
const NUMBER_NAMESPACE: &str = "Number";
const TO_STRING: &str = "toString";
const REQUIRE: &str = "require";

/// Nodes the constant-declaration ascent passes through.
const fn is_transparent_wrapper(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::VariableDeclarator | NodeKind::UnaryExpression | NodeKind::Property
    )
}

/// Bound, through declarators, sign operators and object properties, to a
/// `const` declaration.
#[must_use]
pub fn is_within_constant_declaration(node: NodeRef<'_>) -> bool {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if ancestor.is(&NodeKind::VariableDeclaration)
            && ancestor.declaration_kind() == Some(DeclarationKind::Const)
        {
            return true;
        }
        if !is_transparent_wrapper(ancestor.kind()) {
            break;
        }
        current = ancestor.parent();
    }
    false
}

#[must_use]
pub fn is_enum_member(node: NodeRef<'_>) -> bool {
    node.ancestors()
        .any(|ancestor| ancestor.is(&NodeKind::EnumMember))
}

/// `function f(x = 10)` and destructuring defaults.
#[must_use]
pub fn is_default_parameter_value(node: NodeRef<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| parent.is(&NodeKind::AssignmentPattern))
        && node.role() == Role::Right
}

/// `arr[0]`
#[must_use]
pub fn is_array_index_access(node: NodeRef<'_>) -> bool {
    node.parent().is_some_and(|parent| {
        parent.is(&NodeKind::MemberExpression) && parent.is_computed()
    }) && node.role() == Role::Property
}

#[must_use]
pub fn is_type_annotation_context(node: NodeRef<'_>) -> bool {
    node.ancestors()
        .any(|ancestor| ancestor.kind().is_type_construct())
}

/// `parseInt(s, 16)`, `Number.parseInt(s, 16)` and `n.toString(16)`.
#[must_use]
pub fn is_radix_or_base_argument(node: NodeRef<'_>) -> bool {
    let Some(call) = node.parent().filter(|p| p.is(&NodeKind::CallExpression)) else {
        return false;
    };
    let Some(callee) = call.child_with_role(Role::Callee) else {
        return false;
    };
    let role = node.role();

    if role == Role::Argument(1) && is_identifier_named(callee, PARSE_INT) {
        return true;
    }

    if !callee.is(&NodeKind::MemberExpression) {
        return false;
    }
    let Some(property) = callee
        .child_with_role(Role::Property)
        .filter(|p| p.is(&NodeKind::Identifier))
    else {
        return false;
    };

    if role == Role::Argument(1)
        && property.name() == Some(PARSE_INT)
        && callee
            .child_with_role(Role::Object)
            .is_some_and(|object| is_identifier_named(object, NUMBER_NAMESPACE))
    {
        return true;
    }

    role == Role::Argument(0) && property.name() == Some(TO_STRING)
}

#[must_use]
pub fn is_import_or_export_context(node: NodeRef<'_>) -> bool {
    node.ancestors()
        .any(|ancestor| ancestor.kind().is_module_syntax())
}

/// Key of a non-computed `key: value` pair, or of a method or accessor
/// written inside an object literal (`{ "run"() {} }`). Class member keys
/// do not count.
#[must_use]
pub fn is_object_key(node: NodeRef<'_>) -> bool {
    node.role() == Role::Key
        && node.parent().is_some_and(|parent| {
            !parent.is_computed()
                && (parent.is(&NodeKind::Property) || is_object_literal_method(parent))
        })
}

fn is_object_literal_method(node: NodeRef<'_>) -> bool {
    node.is(&NodeKind::MethodDefinition)
        && node
            .parent()
            .is_some_and(|parent| parent.is(&NodeKind::ObjectExpression))
}

/// `require("module")`
#[must_use]
pub fn is_require_call_argument(node: NodeRef<'_>) -> bool {
    node.parent().is_some_and(|parent| {
        parent.is(&NodeKind::CallExpression)
            && parent
                .child_with_role(Role::Callee)
                .is_some_and(|callee| is_identifier_named(callee, REQUIRE))
    }) && matches!(node.role(), Role::Argument(_))
}

/// `<a href="..." />`
#[must_use]
pub fn is_jsx_attribute_value(node: NodeRef<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| parent.is(&NodeKind::JsxAttribute))
}

/// A string that is an entire statement, such as `"use strict";`.
///
/// Any bare string statement qualifies, not only recognized directives.
#[must_use]
pub fn is_directive_prologue_statement(node: NodeRef<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| parent.is(&NodeKind::ExpressionStatement))
}

fn is_identifier_named(node: NodeRef<'_>, name: &str) -> bool {
    node.is(&NodeKind::Identifier) && node.name() == Some(name)
}

#[cfg(test)]
#[path = "predicates_tests.rs"]
mod tests;
