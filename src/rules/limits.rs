//! Size limits: parameters per function, lines per function, lines per file.

use serde::Deserialize;

use crate::syntax::{LiteralValue, NodeKind, NodeRef, Role};

use super::{MessageId, Rule, RuleContext, RuleMeta};

pub(super) static MAX_PARAMS_META: RuleMeta = RuleMeta {
    id: "max-params",
    description: "Enforce a maximum number of parameters in function definitions",
    docs_url: Some("https://eslint.org/docs/latest/rules/max-params"),
    fixable: false,
    recommended: true,
};

pub(super) static MAX_LINES_PER_FUNCTION_META: RuleMeta = RuleMeta {
    id: "max-lines-per-function",
    description: "Enforce a maximum number of lines of code in a function",
    docs_url: Some("https://eslint.org/docs/latest/rules/max-lines-per-function"),
    fixable: false,
    recommended: true,
};

pub(super) static MAX_LINES_META: RuleMeta = RuleMeta {
    id: "max-lines",
    description: "Enforce a maximum number of lines per file",
    docs_url: Some("https://eslint.org/docs/latest/rules/max-lines"),
    fixable: false,
    recommended: true,
};

const PROPERTY_DEFINITION: &str = "PropertyDefinition";
const CONSTRUCTOR: &str = "constructor";

const fn default_max_params() -> usize {
    3
}

const fn default_max_function_lines() -> usize {
    50
}

const fn default_max_file_lines() -> usize {
    300
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MaxParamsOptions {
    #[serde(default = "default_max_params")]
    pub max: usize,
}

impl Default for MaxParamsOptions {
    fn default() -> Self {
        Self {
            max: default_max_params(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FunctionLimitOptions {
    #[serde(default = "default_max_function_lines")]
    pub max: usize,

    #[serde(default)]
    pub skip_blank_lines: bool,

    #[serde(default)]
    pub skip_comments: bool,

    /// Count functions that are called in place.
    #[serde(default, rename = "includeIIFEs")]
    pub include_iifes: bool,
}

impl Default for FunctionLimitOptions {
    fn default() -> Self {
        Self {
            max: default_max_function_lines(),
            skip_blank_lines: false,
            skip_comments: false,
            include_iifes: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MaxLinesOptions {
    #[serde(default = "default_max_file_lines")]
    pub max: usize,

    #[serde(default)]
    pub skip_blank_lines: bool,

    #[serde(default)]
    pub skip_comments: bool,
}

impl Default for MaxLinesOptions {
    fn default() -> Self {
        Self {
            max: default_max_file_lines(),
            skip_blank_lines: false,
            skip_comments: false,
        }
    }
}

/// Describe a function the way limit messages name it: `function 'load'`,
/// `async arrow function`, `static method 'create'`, `getter 'size'`,
/// `constructor`.
#[must_use]
pub fn function_display_name(node: NodeRef<'_>) -> String {
    let host = method_host(node);
    let key = host.and_then(|host| {
        host.child_with_role(Role::Key)
            .filter(|_| !host.is_computed())
    });
    let private_name = key
        .and_then(NodeRef::name)
        .filter(|name| name.starts_with('#'));

    let mut tokens: Vec<String> = Vec::new();
    if let Some(host) = host {
        if host.flags().is_static {
            tokens.push("static".into());
        }
        if private_name.is_some() {
            tokens.push("private".into());
        }
    }
    if node.flags().is_async {
        tokens.push("async".into());
    }
    if node.flags().generator {
        tokens.push("generator".into());
    }

    match host {
        Some(host)
            if host.is(&NodeKind::MethodDefinition)
                && static_key_name(host).as_deref() == Some(CONSTRUCTOR) =>
        {
            return CONSTRUCTOR.to_string();
        }
        Some(host) if host.flags().getter => tokens.push("getter".into()),
        Some(host) if host.flags().setter => tokens.push("setter".into()),
        Some(_) => tokens.push("method".into()),
        None => {
            if node.is(&NodeKind::ArrowFunctionExpression) {
                tokens.push("arrow".into());
            }
            tokens.push("function".into());
        }
    }

    let name = match host {
        Some(host) => private_name
            .map(ToString::to_string)
            .or_else(|| static_key_name(host).map(|name| format!("'{name}'"))),
        None => None,
    };
    let name = name.or_else(|| {
        node.child_with_role(Role::Id)
            .and_then(NodeRef::name)
            .map(|name| format!("'{name}'"))
    });
    tokens.extend(name);

    tokens.join(" ")
}

/// The member that carries a function's key: the method itself, or the
/// property or class field the function is the value of.
fn method_host(node: NodeRef<'_>) -> Option<NodeRef<'_>> {
    if node.is(&NodeKind::MethodDefinition) {
        return Some(node);
    }
    let parent = node.parent()?;
    let is_host = parent.is(&NodeKind::Property)
        || matches!(parent.kind(), NodeKind::Other(name) if name == PROPERTY_DEFINITION);
    (is_host && node.role() == Role::Value).then_some(parent)
}

fn static_key_name(host: NodeRef<'_>) -> Option<String> {
    let key = host.child_with_role(Role::Key)?;
    match key.value() {
        Some(LiteralValue::Text(text)) => Some(text.clone()),
        Some(number @ LiteralValue::Number(_)) => Some(number.display()),
        None if !host.is_computed() => key.name().map(ToString::to_string),
        None => None,
    }
}

fn upper_case_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn is_iife(node: NodeRef<'_>) -> bool {
    matches!(
        node.kind(),
        NodeKind::FunctionExpression | NodeKind::ArrowFunctionExpression
    ) && node.role() == Role::Callee
        && node
            .parent()
            .is_some_and(|parent| parent.is(&NodeKind::CallExpression))
}

/// `max-params`
#[derive(Debug, Clone, Default)]
pub struct MaxParams {
    options: MaxParamsOptions,
}

impl MaxParams {
    #[must_use]
    pub const fn new(options: MaxParamsOptions) -> Self {
        Self { options }
    }
}

impl Rule for MaxParams {
    fn meta(&self) -> &'static RuleMeta {
        &MAX_PARAMS_META
    }

    fn check_node(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        if !node.kind().is_function() {
            return;
        }
        let count = node.params().count();
        if count > self.options.max {
            ctx.report(
                node.span(),
                MessageId::TooManyParams,
                &[
                    ("name", &upper_case_first(&function_display_name(node))),
                    ("count", &count.to_string()),
                    ("max", &self.options.max.to_string()),
                ],
            );
        }
    }
}

/// `max-lines-per-function`
#[derive(Debug, Clone, Default)]
pub struct MaxLinesPerFunction {
    options: FunctionLimitOptions,
}

impl MaxLinesPerFunction {
    #[must_use]
    pub const fn new(options: FunctionLimitOptions) -> Self {
        Self { options }
    }
}

impl Rule for MaxLinesPerFunction {
    fn meta(&self) -> &'static RuleMeta {
        &MAX_LINES_PER_FUNCTION_META
    }

    fn check_node(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        if !node.kind().is_function() || (!self.options.include_iifes && is_iife(node)) {
            return;
        }
        let span = node.span();
        let line_count = ctx
            .lines()
            .count_lines(span.start_pos.line, span.end_pos.line)
            .counted(self.options.skip_blank_lines, self.options.skip_comments);

        if line_count > self.options.max {
            ctx.report(
                span,
                MessageId::TooManyFunctionLines,
                &[
                    ("name", &upper_case_first(&function_display_name(node))),
                    ("lineCount", &line_count.to_string()),
                    ("maxLines", &self.options.max.to_string()),
                ],
            );
        }
    }
}

/// `max-lines`
#[derive(Debug, Clone, Default)]
pub struct MaxLines {
    options: MaxLinesOptions,
}

impl MaxLines {
    #[must_use]
    pub const fn new(options: MaxLinesOptions) -> Self {
        Self { options }
    }
}

impl Rule for MaxLines {
    fn meta(&self) -> &'static RuleMeta {
        &MAX_LINES_META
    }

    fn check_file(&self, ctx: &mut RuleContext<'_>) {
        let lines = ctx.lines();
        let kept: Vec<usize> = lines
            .kept_lines(self.options.skip_blank_lines, self.options.skip_comments)
            .collect();
        let Some(span) = kept
            .get(self.options.max)
            .and_then(|&line| lines.span_from_line(line))
        else {
            return;
        };

        ctx.report(
            span,
            MessageId::TooManyFileLines,
            &[
                ("actual", &kept.len().to_string()),
                ("max", &self.options.max.to_string()),
            ],
        );
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod tests;
