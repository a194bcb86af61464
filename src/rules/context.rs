use std::cell::OnceCell;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::counter::SlocCounter;
use crate::syntax::{Span, SyntaxTree};

use super::{MessageId, RuleMeta};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Off,
    Warn,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::Warn => "warning",
            Self::Error => "error",
        })
    }
}

/// Replace `range` (byte offsets) with `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub range: (usize, usize),
    pub text: String,
}

impl Fix {
    #[must_use]
    pub const fn remove(span: Span) -> Self {
        Self {
            range: (span.start, span.end),
            text: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub rule_id: &'static str,
    pub message_id: MessageId,
    pub message: String,
    pub severity: Severity,
    pub span: Span,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    #[must_use]
    pub const fn line(&self) -> usize {
        self.span.start_pos.line
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.span.start_pos.column
    }
}

/// What a rule sees of the file it is checking, and where it reports.
pub struct RuleContext<'a> {
    source: &'a str,
    tree: &'a SyntaxTree,
    meta: &'static RuleMeta,
    severity: Severity,
    diagnostics: &'a mut Vec<Diagnostic>,
    lines: OnceCell<SlocCounter>,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        source: &'a str,
        tree: &'a SyntaxTree,
        meta: &'static RuleMeta,
        severity: Severity,
        diagnostics: &'a mut Vec<Diagnostic>,
    ) -> Self {
        Self {
            source,
            tree,
            meta,
            severity,
            diagnostics,
            lines: OnceCell::new(),
        }
    }

    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    #[must_use]
    pub const fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// Line classification of the file, built on first use.
    pub fn lines(&self) -> &SlocCounter {
        self.lines
            .get_or_init(|| SlocCounter::new(self.source, self.tree.comments()))
    }

    pub fn report(&mut self, span: Span, message_id: MessageId, data: &[(&str, &str)]) {
        self.push(span, message_id, data, None);
    }

    pub fn report_with_fix(
        &mut self,
        span: Span,
        message_id: MessageId,
        data: &[(&str, &str)],
        fix: Fix,
    ) {
        self.push(span, message_id, data, Some(fix));
    }

    fn push(&mut self, span: Span, message_id: MessageId, data: &[(&str, &str)], fix: Option<Fix>) {
        self.diagnostics.push(Diagnostic {
            rule_id: self.meta.id,
            message_id,
            message: message_id.render(data),
            severity: self.severity,
            span,
            fix,
        });
    }
}
