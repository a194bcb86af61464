use std::fmt::Write;

use crate::error::Result;
use crate::rules::{Diagnostic, Severity};

use super::{FileReport, OutputFormatter, Summary};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[2m";
    pub const UNDERLINE: &str = "\x1b[4m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable report: diagnostics grouped by file, then a summary.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warn | Severity::Off => ansi::YELLOW,
        }
    }

    fn format_file(&self, report: &FileReport, output: &mut String) {
        let path = report.path.display().to_string();
        let _ = writeln!(output, "{}", self.paint(&path, ansi::UNDERLINE));

        if let Some(error) = &report.error {
            let label = self.paint("error", ansi::RED);
            let _ = writeln!(output, "  {label}  {error}");
        }

        let width = report
            .diagnostics
            .iter()
            .map(|d| location(d).len())
            .max()
            .unwrap_or(0);
        for diagnostic in &report.diagnostics {
            self.format_diagnostic(diagnostic, width, output);
        }

        if report.fixed > 0 {
            let _ = writeln!(output, "  {} fixed", plural(report.fixed, "problem"));
        }
        let _ = writeln!(output);
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic, width: usize, output: &mut String) {
        let severity = diagnostic.severity.to_string();
        let severity = format!("{severity:<7}");
        let _ = writeln!(
            output,
            "  {}  {}  {}  {}",
            self.paint(&format!("{:<width$}", location(diagnostic)), ansi::DIM),
            self.paint(&severity, Self::severity_color(diagnostic.severity)),
            diagnostic.message,
            self.paint(diagnostic.rule_id, ansi::DIM),
        );
    }

    fn format_summary(&self, summary: &Summary, output: &mut String) {
        if summary.problems() == 0 && summary.failed_files == 0 {
            let line = format!(
                "✓ {} checked, no problems found",
                plural(summary.files, "file")
            );
            let _ = writeln!(output, "{}", self.paint(&line, ansi::GREEN));
            if summary.fixed > 0 {
                let _ = writeln!(output, "  {} fixed", plural(summary.fixed, "problem"));
            }
            return;
        }

        let color = if summary.errors > 0 || summary.failed_files > 0 {
            ansi::RED
        } else {
            ansi::YELLOW
        };
        let mut line = format!(
            "✖ {} ({}, {})",
            plural(summary.problems(), "problem"),
            plural(summary.errors, "error"),
            plural(summary.warnings, "warning"),
        );
        if summary.failed_files > 0 {
            let _ = write!(line, ", {} could not be linted", plural(summary.failed_files, "file"));
        }
        let _ = writeln!(output, "{}", self.paint(&line, color));

        if summary.fixable > 0 {
            let _ = writeln!(
                output,
                "  {} potentially fixable with the `--fix` option.",
                plural(summary.fixable, "problem"),
            );
        }
    }
}

fn location(diagnostic: &Diagnostic) -> String {
    format!("{}:{}", diagnostic.line(), diagnostic.column())
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            let show = !report.is_clean() || report.fixed > 0 || self.verbose >= 1;
            if show {
                self.format_file(report, &mut output);
            }
        }

        self.format_summary(&Summary::from_reports(reports), &mut output);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
