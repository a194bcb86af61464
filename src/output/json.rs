use serde::Serialize;

use crate::error::Result;
use crate::rules::{Diagnostic, Severity};

use super::{FileReport, OutputFormatter, Summary};

/// Machine-readable report, one entry per linted file.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: JsonSummary,
    results: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    files: usize,
    errors: usize,
    warnings: usize,
    fixable: usize,
    fixed: usize,
    failed_files: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileResult<'a> {
    file_path: String,
    error_count: usize,
    warning_count: usize,
    fixed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    messages: Vec<JsonMessage<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMessage<'a> {
    rule_id: &'static str,
    message_id: &'static str,
    severity: &'static str,
    message: &'a str,
    line: usize,
    column: usize,
    end_line: usize,
    end_column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    fix: Option<&'a crate::rules::Fix>,
}

const fn severity_name(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warn => "warn",
        Severity::Off => "off",
    }
}

fn convert_message(diagnostic: &Diagnostic) -> JsonMessage<'_> {
    JsonMessage {
        rule_id: diagnostic.rule_id,
        message_id: diagnostic.message_id.as_str(),
        severity: severity_name(diagnostic.severity),
        message: &diagnostic.message,
        line: diagnostic.span.start_pos.line,
        column: diagnostic.span.start_pos.column,
        end_line: diagnostic.span.end_pos.line,
        end_column: diagnostic.span.end_pos.column,
        fix: diagnostic.fix.as_ref(),
    }
}

fn convert_report(report: &FileReport) -> FileResult<'_> {
    FileResult {
        file_path: report.path.display().to_string().replace('\\', "/"),
        error_count: report.error_count(),
        warning_count: report.warning_count(),
        fixed: report.fixed,
        error: report.error.as_deref(),
        messages: report.diagnostics.iter().map(convert_message).collect(),
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let summary = Summary::from_reports(reports);
        let output = JsonOutput {
            summary: JsonSummary {
                files: summary.files,
                errors: summary.errors,
                warnings: summary.warnings,
                fixable: summary.fixable,
                fixed: summary.fixed,
                failed_files: summary.failed_files,
            },
            results: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
