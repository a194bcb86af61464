//! Runs the configured rules over one file.

use std::path::Path;

use tracing::{debug, trace};

use crate::config::{Config, RuleSetting, RulesConfig};
use crate::error::Result;
use crate::fix::apply_fixes;
use crate::parse::parse_file;
use crate::rules::{
    Diagnostic, MaxLines, MaxLinesPerFunction, MaxParams, NoComments, NoMagicNumbers,
    NoMagicValues, Rule, RuleContext, Severity,
};
use crate::syntax::SyntaxTree;

/// Upper bound on lint-and-fix rounds for one file.
pub const MAX_FIX_PASSES: usize = 10;

struct ConfiguredRule {
    rule: Box<dyn Rule>,
    severity: Severity,
}

fn enabled<T, R>(setting: &RuleSetting<T>, build: fn(T) -> R) -> Option<ConfiguredRule>
where
    T: Clone,
    R: Rule + 'static,
{
    setting.is_enabled().then(|| ConfiguredRule {
        rule: Box::new(build(setting.options.clone())),
        severity: setting.severity,
    })
}

/// The enabled rules of a configuration, ready to run on any number of files.
pub struct Linter {
    rules: Vec<ConfiguredRule>,
}

/// Source after fixing, plus what is left to report.
#[derive(Debug, Clone, PartialEq)]
pub struct FixResult {
    pub output: String,
    /// Number of fixes applied across all passes.
    pub fixed: usize,
    /// Diagnostics for `output`.
    pub diagnostics: Vec<Diagnostic>,
}

impl Linter {
    #[must_use]
    pub fn new(rules: &RulesConfig) -> Self {
        let rules = [
            enabled(&rules.no_comments, NoComments::new),
            enabled(&rules.no_magic_values, NoMagicValues::new),
            enabled(&rules.no_magic_numbers, NoMagicNumbers::new),
            enabled(&rules.max_params, MaxParams::new),
            enabled(&rules.max_lines_per_function, MaxLinesPerFunction::new),
            enabled(&rules.max_lines, MaxLines::new),
        ]
        .into_iter()
        .flatten()
        .collect();
        Self { rules }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.rules)
    }

    /// Ids of the rules that will run, in run order.
    pub fn rule_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|configured| configured.rule.meta().id)
    }

    /// Parse `source` as the language implied by `path` and lint it.
    ///
    /// # Errors
    /// Returns an error if the extension is unsupported or the source does
    /// not parse.
    pub fn lint_source(&self, path: &Path, source: &str) -> Result<Vec<Diagnostic>> {
        let tree = parse_file(path, source)?;
        let diagnostics = self.lint_tree(source, &tree);
        debug!(
            path = %path.display(),
            count = diagnostics.len(),
            "linted file"
        );
        Ok(diagnostics)
    }

    /// Run every enabled rule over an already parsed tree. Diagnostics come
    /// back in source order.
    #[must_use]
    pub fn lint_tree(&self, source: &str, tree: &SyntaxTree) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for configured in &self.rules {
            let meta = configured.rule.meta();
            trace!(rule = meta.id, "running rule");
            let mut ctx =
                RuleContext::new(source, tree, meta, configured.severity, &mut diagnostics);
            configured.rule.check_file(&mut ctx);
            for node in tree.nodes() {
                configured.rule.check_node(node, &mut ctx);
            }
        }
        diagnostics.sort_by_key(|d| (d.line(), d.column()));
        diagnostics
    }

    /// Lint and apply fixes until nothing fixable remains or
    /// [`MAX_FIX_PASSES`] rounds have run.
    ///
    /// # Errors
    /// Returns an error if the source (or a fixed version of it) does not parse.
    pub fn fix_source(&self, path: &Path, source: &str) -> Result<FixResult> {
        let mut output = source.to_string();
        let mut fixed = 0;

        for pass in 1..=MAX_FIX_PASSES {
            let diagnostics = self.lint_source(path, &output)?;
            let applied = apply_fixes(&output, diagnostics.iter().filter_map(|d| d.fix.as_ref()));
            if !applied.changed() {
                return Ok(FixResult {
                    output,
                    fixed,
                    diagnostics,
                });
            }
            debug!(path = %path.display(), pass, applied = applied.applied, "applied fixes");
            fixed += applied.applied;
            output = applied.output;
        }

        let diagnostics = self.lint_source(path, &output)?;
        Ok(FixResult {
            output,
            fixed,
            diagnostics,
        })
    }
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
