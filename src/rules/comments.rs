//! Comment filter: every comment is reported unless its trimmed text starts
//! with an allowed prefix. Tool directives (`eslint-disable`, `@ts-ignore`,
//! shebangs) get no special treatment.

use serde::Deserialize;

use crate::syntax::Comment;

use super::{Fix, MessageId, Rule, RuleContext, RuleMeta};

const NONE_CONFIGURED: &str = "none configured";

pub(super) static META: RuleMeta = RuleMeta {
    id: "human-first/no-comments",
    description: "Disallow comments, including ESLint directives, that AI agents over-generate",
    docs_url: Some(docs_url!("no-comments")),
    fixable: true,
    recommended: true,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoCommentsOptions {
    #[serde(default)]
    pub allow: Vec<String>,
}

impl NoCommentsOptions {
    #[must_use]
    pub fn is_allowed(&self, comment: &Comment) -> bool {
        let trimmed = comment.value.trim();
        self.allow
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }

    /// The `{{allowed}}` placeholder text.
    #[must_use]
    pub fn allowed_list(&self) -> String {
        if self.allow.is_empty() {
            NONE_CONFIGURED.to_string()
        } else {
            self.allow.join(", ")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStatus {
    Allowed,
    Disallowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentRecord<'a> {
    pub comment: &'a Comment,
    pub status: CommentStatus,
}

/// Classify comments in source order.
#[must_use]
pub fn classify_comments<'a>(
    comments: &'a [Comment],
    options: &NoCommentsOptions,
) -> Vec<CommentRecord<'a>> {
    comments
        .iter()
        .map(|comment| CommentRecord {
            comment,
            status: if options.is_allowed(comment) {
                CommentStatus::Allowed
            } else {
                CommentStatus::Disallowed
            },
        })
        .collect()
}

/// Deletes the comment's exact span, delimiters included. Surrounding
/// whitespace is left alone.
#[must_use]
pub const fn removal_fix(comment: &Comment) -> Fix {
    Fix::remove(comment.span)
}

/// `human-first/no-comments`
#[derive(Debug, Clone, Default)]
pub struct NoComments {
    options: NoCommentsOptions,
}

impl NoComments {
    #[must_use]
    pub const fn new(options: NoCommentsOptions) -> Self {
        Self { options }
    }
}

impl Rule for NoComments {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_file(&self, ctx: &mut RuleContext<'_>) {
        let allowed = self.options.allowed_list();
        let tree = ctx.tree();
        for record in classify_comments(tree.comments(), &self.options) {
            if record.status == CommentStatus::Disallowed {
                ctx.report_with_fix(
                    record.comment.span,
                    MessageId::Unexpected,
                    &[("allowed", &allowed)],
                    removal_fix(record.comment),
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
