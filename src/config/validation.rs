//! Semantic checks that run after a config has been deserialized.
//!
//! Type errors and unknown keys are caught by serde; this module rejects
//! values that parse but make no sense: unsupported extensions, broken globs,
//! duplicate list entries.

use globset::Glob;
use indexmap::IndexSet;

use crate::error::{HumanFirstError, Result};
use crate::parse::SourceLanguage;
use crate::rules::MagicValueOptions;

use super::Config;

/// # Errors
/// Returns the first problem found, naming the offending key.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_extensions(&config.files.extensions)?;
    validate_exclude_patterns(&config.files.exclude)?;
    validate_allow_prefixes(&config.rules.no_comments.options.allow)?;
    validate_ignore_numbers(
        "human-first/no-magic-values",
        &config.rules.no_magic_values.options,
    )?;
    validate_ignore_numbers(
        "human-first/no-magic-numbers",
        &config.rules.no_magic_numbers.options,
    )?;
    Ok(())
}

fn validate_extensions(extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(HumanFirstError::Config(
            "files.extensions must list at least one extension".to_string(),
        ));
    }

    let mut seen = IndexSet::new();
    for ext in extensions {
        if ext.starts_with('.') {
            return Err(HumanFirstError::Config(format!(
                "files.extensions: write '{}' without the leading dot",
                ext.trim_start_matches('.')
            )));
        }
        if SourceLanguage::from_extension(ext).is_none() {
            return Err(HumanFirstError::Config(format!(
                "files.extensions: unsupported extension '{ext}'. Supported: {}",
                SourceLanguage::DEFAULT_EXTENSIONS.join(", ")
            )));
        }
        if !seen.insert(ext.as_str()) {
            return Err(HumanFirstError::Config(format!(
                "files.extensions: duplicate extension '{ext}'"
            )));
        }
    }
    Ok(())
}

fn validate_exclude_patterns(patterns: &[String]) -> Result<()> {
    for pattern in patterns {
        Glob::new(pattern).map_err(|source| HumanFirstError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}

fn validate_allow_prefixes(allow: &[String]) -> Result<()> {
    let mut seen = IndexSet::new();
    for prefix in allow {
        if prefix.trim().is_empty() {
            return Err(HumanFirstError::Config(
                "human-first/no-comments: allow prefixes must not be empty".to_string(),
            ));
        }
        if !seen.insert(prefix.as_str()) {
            return Err(HumanFirstError::Config(format!(
                "human-first/no-comments: duplicate allow prefix '{prefix}'"
            )));
        }
    }
    Ok(())
}

fn validate_ignore_numbers(rule_id: &str, options: &MagicValueOptions) -> Result<()> {
    let mut seen = IndexSet::new();
    for &number in &options.ignore_numbers {
        if !number.is_finite() {
            return Err(HumanFirstError::Config(format!(
                "{rule_id}: ignoreNumbers entries must be finite, got {number}"
            )));
        }
        // -0 and 0 are the same number.
        let key = if number == 0.0 { 0.0_f64.to_bits() } else { number.to_bits() };
        if !seen.insert(key) {
            return Err(HumanFirstError::Config(format!(
                "{rule_id}: duplicate ignoreNumbers entry {number}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
