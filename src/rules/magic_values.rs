//! Magic value classification: one literal, its ancestors and the options in,
//! a verdict out.

use serde::Deserialize;

use crate::syntax::{LiteralValue, NodeRef};

use super::predicates::{
    is_array_index_access, is_default_parameter_value, is_directive_prologue_statement,
    is_enum_member, is_import_or_export_context, is_jsx_attribute_value, is_object_key,
    is_radix_or_base_argument, is_require_call_argument, is_type_annotation_context,
    is_within_constant_declaration,
};
use super::{MessageId, Rule, RuleContext, RuleMeta};

pub(super) static VALUES_META: RuleMeta = RuleMeta {
    id: "human-first/no-magic-values",
    description: "Disallow magic numbers and strings that should be named constants",
    docs_url: Some(docs_url!("no-magic-values")),
    fixable: false,
    recommended: true,
};

pub(super) static NUMBERS_META: RuleMeta = RuleMeta {
    id: "human-first/no-magic-numbers",
    description: "Disallow magic numbers that should be named constants",
    docs_url: Some(docs_url!("no-magic-numbers")),
    fixable: false,
    recommended: false,
};

fn default_ignore_numbers() -> Vec<f64> {
    vec![-1.0, 0.0, 1.0, 2.0]
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MagicValueOptions {
    #[serde(default = "default_ignore_numbers")]
    pub ignore_numbers: Vec<f64>,

    #[serde(default = "default_true")]
    pub ignore_array_indexes: bool,

    #[serde(default = "default_true")]
    pub ignore_default_values: bool,
}

impl Default for MagicValueOptions {
    fn default() -> Self {
        Self {
            ignore_numbers: default_ignore_numbers(),
            ignore_array_indexes: true,
            ignore_default_values: true,
        }
    }
}

impl MagicValueOptions {
    fn ignores_number(&self, value: f64) -> bool {
        self.ignore_numbers.iter().any(|&ignored| ignored == value)
    }
}

/// Which literal kinds a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKinds {
    Numbers,
    NumbersAndStrings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Magic { kind: ValueKind, display: String },
    Exempt,
}

impl Verdict {
    #[must_use]
    pub const fn is_magic(&self) -> bool {
        matches!(self, Self::Magic { .. })
    }
}

/// Classify one literal.
///
/// Nodes that carry no numeric or string value, and strings when `kinds` is
/// [`LiteralKinds::Numbers`], are always exempt.
#[must_use]
pub fn classify(node: NodeRef<'_>, options: &MagicValueOptions, kinds: LiteralKinds) -> Verdict {
    let Some(value) = node.value() else {
        return Verdict::Exempt;
    };
    let (kind, exempt) = match value {
        LiteralValue::Number(number) => {
            (ValueKind::Number, is_exempt_number(node, *number, options))
        }
        LiteralValue::Text(text) if kinds == LiteralKinds::NumbersAndStrings => {
            (ValueKind::Text, is_exempt_text(node, text, options))
        }
        LiteralValue::Text(_) => return Verdict::Exempt,
    };

    if exempt {
        Verdict::Exempt
    } else {
        Verdict::Magic {
            kind,
            display: value.display(),
        }
    }
}

fn is_exempt_number(node: NodeRef<'_>, value: f64, options: &MagicValueOptions) -> bool {
    options.ignores_number(value)
        || is_radix_or_base_argument(node)
        || is_within_constant_declaration(node)
        || (options.ignore_array_indexes && is_array_index_access(node))
        || (options.ignore_default_values && is_default_parameter_value(node))
        || is_enum_member(node)
        || is_type_annotation_context(node)
}

fn is_exempt_text(node: NodeRef<'_>, value: &str, options: &MagicValueOptions) -> bool {
    value.is_empty()
        || is_directive_prologue_statement(node)
        || is_within_constant_declaration(node)
        || is_import_or_export_context(node)
        || is_object_key(node)
        || is_require_call_argument(node)
        || is_jsx_attribute_value(node)
        || is_enum_member(node)
        || is_type_annotation_context(node)
        || (options.ignore_default_values && is_default_parameter_value(node))
}

fn report(
    node: NodeRef<'_>,
    options: &MagicValueOptions,
    kinds: LiteralKinds,
    ctx: &mut RuleContext<'_>,
) {
    if let Verdict::Magic { kind, display } = classify(node, options, kinds) {
        let message_id = match kind {
            ValueKind::Number => MessageId::NoMagicNumber,
            ValueKind::Text => MessageId::NoMagicString,
        };
        ctx.report(node.span(), message_id, &[("value", &display)]);
    }
}

/// `human-first/no-magic-values`: numbers and strings.
#[derive(Debug, Clone, Default)]
pub struct NoMagicValues {
    options: MagicValueOptions,
}

impl NoMagicValues {
    #[must_use]
    pub const fn new(options: MagicValueOptions) -> Self {
        Self { options }
    }
}

impl Rule for NoMagicValues {
    fn meta(&self) -> &'static RuleMeta {
        &VALUES_META
    }

    fn check_node(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        report(node, &self.options, LiteralKinds::NumbersAndStrings, ctx);
    }
}

/// `human-first/no-magic-numbers`: numbers only.
#[derive(Debug, Clone, Default)]
pub struct NoMagicNumbers {
    options: MagicValueOptions,
}

impl NoMagicNumbers {
    #[must_use]
    pub const fn new(options: MagicValueOptions) -> Self {
        Self { options }
    }
}

impl Rule for NoMagicNumbers {
    fn meta(&self) -> &'static RuleMeta {
        &NUMBERS_META
    }

    fn check_node(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        report(node, &self.options, LiteralKinds::Numbers, ctx);
    }
}

#[cfg(test)]
#[path = "magic_values_tests.rs"]
mod tests;
