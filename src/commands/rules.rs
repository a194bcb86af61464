use std::fmt::Write;

use serde::Serialize;

use crate::cli::{Cli, RulesArgs};
use crate::config::{AVAILABLE_PRESETS, RulesConfig, preset_display_name};
use crate::error::Result;
use crate::rules::{ALL_RULES, PLUGIN_NAME, RuleMeta, Severity};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::load_config;

#[must_use]
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Render every known rule with the severity the active configuration
/// gives it.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or the JSON
/// cannot be serialized.
pub fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> Result<String> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    if args.json {
        format_rules_json(&config.rules)
    } else {
        Ok(format_rules_text(&config.rules))
    }
}

fn configured(rules: &RulesConfig, meta: &RuleMeta) -> Severity {
    rules.severity(meta.id).unwrap_or_default()
}

#[must_use]
pub fn format_rules_text(rules: &RulesConfig) -> String {
    let width = ALL_RULES.iter().map(|meta| meta.id.len()).max().unwrap_or(0);
    let mut output = format!("{PLUGIN_NAME} {}\n\n", env!("CARGO_PKG_VERSION"));

    for meta in ALL_RULES {
        let fixable = if meta.fixable { "fixable" } else { "" };
        let severity = configured(rules, meta).to_string();
        writeln!(
            output,
            "  {:<width$}  {:<7}  {:<7}  {}",
            meta.id,
            severity,
            fixable,
            meta.description,
        )
        .ok();
        if let Some(url) = meta.docs_url {
            writeln!(output, "  {:<width$}  {url}", "").ok();
        }
    }

    let presets: Vec<String> = AVAILABLE_PRESETS
        .iter()
        .map(|name| preset_display_name(name))
        .collect();
    writeln!(output, "\nPresets: {}", presets.join(", ")).ok();
    output
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleEntry {
    id: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    docs_url: Option<&'static str>,
    fixable: bool,
    recommended: bool,
    severity: Severity,
}

/// # Errors
/// Returns an error if serialization fails.
pub fn format_rules_json(rules: &RulesConfig) -> Result<String> {
    let entries: Vec<RuleEntry> = ALL_RULES
        .iter()
        .map(|meta| RuleEntry {
            id: meta.id,
            description: meta.description,
            docs_url: meta.docs_url,
            fixable: meta.fixable,
            recommended: meta.recommended,
            severity: configured(rules, meta),
        })
        .collect();
    let mut json = serde_json::to_string_pretty(&entries)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
