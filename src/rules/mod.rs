macro_rules! docs_url {
    ($rule:literal) => {
        concat!(
            "https://github.com/olistic/eslint-plugin-human-first/blob/main/docs/rules/",
            $rule,
            ".md"
        )
    };
}

mod comments;
mod context;
mod limits;
mod magic_values;
mod message;
pub mod predicates;

pub use comments::{
    CommentRecord, CommentStatus, NoComments, NoCommentsOptions, classify_comments,
    removal_fix,
};
pub use context::{Diagnostic, Fix, RuleContext, Severity};
pub use limits::{
    FunctionLimitOptions, MaxLines, MaxLinesOptions, MaxLinesPerFunction, MaxParams,
    MaxParamsOptions, function_display_name,
};
pub use magic_values::{
    LiteralKinds, MagicValueOptions, NoMagicNumbers, NoMagicValues, ValueKind, Verdict, classify,
};
pub use message::{MessageId, render_message};

use crate::syntax::NodeRef;

/// Plugin namespace used in rule ids.
pub const PLUGIN_NAME: &str = "human-first";

/// Static description of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    pub id: &'static str,
    pub description: &'static str,
    pub docs_url: Option<&'static str>,
    pub fixable: bool,
    /// Enabled by the recommended preset.
    pub recommended: bool,
}

/// A configured rule. Options are fixed at construction, so a rule can be
/// shared across worker threads.
pub trait Rule: Send + Sync {
    fn meta(&self) -> &'static RuleMeta;

    /// Called once per file, before any node.
    fn check_file(&self, _ctx: &mut RuleContext<'_>) {}

    /// Called for every node in tree order.
    fn check_node(&self, _node: NodeRef<'_>, _ctx: &mut RuleContext<'_>) {}
}

/// Every rule the linter knows, in registration order.
pub static ALL_RULES: &[&RuleMeta] = &[
    &comments::META,
    &magic_values::VALUES_META,
    &magic_values::NUMBERS_META,
    &limits::MAX_PARAMS_META,
    &limits::MAX_LINES_PER_FUNCTION_META,
    &limits::MAX_LINES_META,
];

#[must_use]
pub fn find_rule(id: &str) -> Option<&'static RuleMeta> {
    ALL_RULES.iter().copied().find(|meta| meta.id == id)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
