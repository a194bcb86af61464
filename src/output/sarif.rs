use serde::Serialize;

use crate::error::Result;
use crate::rules::{ALL_RULES, Diagnostic, PLUGIN_NAME, Severity};

use super::{FileReport, OutputFormatter};

/// SARIF 2.1.0 output formatter for GitHub Code Scanning and other CI/CD tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct SarifFormatter;

impl SarifFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
const TOOL_INFO_URI: &str = env!("CARGO_PKG_REPOSITORY");
const URI_BASE_ID: &str = "%SRCROOT%";

#[derive(Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    tool: Tool,
    invocations: Vec<Invocation>,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct Tool {
    driver: ToolDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolDriver {
    name: &'static str,
    version: &'static str,
    information_uri: &'static str,
    rules: Vec<ReportingDescriptor>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportingDescriptor {
    id: &'static str,
    short_description: Message,
    #[serde(skip_serializing_if = "Option::is_none")]
    help_uri: Option<&'static str>,
    default_configuration: ReportingConfiguration,
}

#[derive(Serialize)]
struct ReportingConfiguration {
    level: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Invocation {
    execution_successful: bool,
    tool_execution_notifications: Vec<Notification>,
}

#[derive(Serialize)]
struct Notification {
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule_index: Option<usize>,
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
}

#[derive(Serialize)]
struct Message {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    physical_location: PhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocation {
    artifact_location: ArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<Region>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactLocation {
    uri: String,
    uri_base_id: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Region {
    start_line: usize,
    start_column: usize,
    end_line: usize,
    end_column: usize,
}

const fn level(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warn => "warning",
        Severity::Off => "none",
    }
}

fn uri(report: &FileReport) -> String {
    report.path.display().to_string().replace('\\', "/")
}

fn location(uri: String, region: Option<Region>) -> Location {
    Location {
        physical_location: PhysicalLocation {
            artifact_location: ArtifactLocation {
                uri,
                uri_base_id: URI_BASE_ID,
            },
            region,
        },
    }
}

impl SarifFormatter {
    fn build_rules() -> Vec<ReportingDescriptor> {
        ALL_RULES
            .iter()
            .map(|meta| ReportingDescriptor {
                id: meta.id,
                short_description: Message {
                    text: meta.description.to_string(),
                },
                help_uri: meta.docs_url,
                default_configuration: ReportingConfiguration {
                    level: if meta.recommended { "error" } else { "none" },
                },
            })
            .collect()
    }

    fn convert_diagnostic(report: &FileReport, diagnostic: &Diagnostic) -> SarifResult {
        let span = diagnostic.span;
        SarifResult {
            rule_id: diagnostic.rule_id,
            rule_index: ALL_RULES.iter().position(|meta| meta.id == diagnostic.rule_id),
            level: level(diagnostic.severity),
            message: Message {
                text: diagnostic.message.clone(),
            },
            locations: vec![location(
                uri(report),
                Some(Region {
                    start_line: span.start_pos.line,
                    start_column: span.start_pos.column,
                    end_line: span.end_pos.line,
                    end_column: span.end_pos.column,
                }),
            )],
        }
    }

    fn notifications(reports: &[FileReport]) -> Vec<Notification> {
        reports
            .iter()
            .filter_map(|report| {
                report.error.as_ref().map(|error| Notification {
                    level: "error",
                    message: Message { text: error.clone() },
                    locations: vec![location(uri(report), None)],
                })
            })
            .collect()
    }
}

impl OutputFormatter for SarifFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let results = reports
            .iter()
            .flat_map(|report| {
                report
                    .diagnostics
                    .iter()
                    .map(move |diagnostic| Self::convert_diagnostic(report, diagnostic))
            })
            .collect();
        let notifications = Self::notifications(reports);

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![Run {
                tool: Tool {
                    driver: ToolDriver {
                        name: PLUGIN_NAME,
                        version: TOOL_VERSION,
                        information_uri: TOOL_INFO_URI,
                        rules: Self::build_rules(),
                    },
                },
                invocations: vec![Invocation {
                    execution_successful: notifications.is_empty(),
                    tool_execution_notifications: notifications,
                }],
                results,
            }],
        };

        Ok(serde_json::to_string_pretty(&log)?)
    }
}

#[cfg(test)]
#[path = "sarif_tests.rs"]
mod tests;
