use std::path::PathBuf;

use crate::rules::{Diagnostic, Severity};

/// Outcome of linting one file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    /// Fixes written back to the file.
    pub fixed: usize,
    /// Read or parse failure; no diagnostics are produced when set.
    pub error: Option<String>,
}

impl FileReport {
    #[must_use]
    pub const fn linted(path: PathBuf, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            path,
            diagnostics,
            fixed: 0,
            error: None,
        }
    }

    #[must_use]
    pub const fn failed(path: PathBuf, error: String) -> Self {
        Self {
            path,
            diagnostics: Vec::new(),
            fixed: 0,
            error: Some(error),
        }
    }

    #[must_use]
    pub const fn with_fixed(mut self, fixed: usize) -> Self {
        self.fixed = fixed;
        self
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warn)
    }

    #[must_use]
    pub fn fixable_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.fix.is_some()).count()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.error.is_none() && self.diagnostics.is_empty()
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Totals across every linted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
    pub fixable: usize,
    pub fixed: usize,
    /// Files that could not be read or parsed.
    pub failed_files: usize,
}

impl Summary {
    #[must_use]
    pub fn from_reports(reports: &[FileReport]) -> Self {
        reports.iter().fold(
            Self {
                files: reports.len(),
                ..Self::default()
            },
            |mut summary, report| {
                summary.errors += report.error_count();
                summary.warnings += report.warning_count();
                summary.fixable += report.fixable_count();
                summary.fixed += report.fixed;
                summary.failed_files += usize::from(report.error.is_some());
                summary
            },
        )
    }

    #[must_use]
    pub const fn problems(&self) -> usize {
        self.errors + self.warnings
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
