use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

use crate::parse::SourceLanguage;
use crate::rules::{
    FunctionLimitOptions, MagicValueOptions, MaxLinesOptions, MaxParamsOptions,
    NoCommentsOptions, Severity,
};

use super::presets::DEFAULT_PRESET;

/// Fully resolved configuration: preset layered under the user's file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Preset the rules were layered over.
    #[serde(default = "default_preset")]
    pub preset: String,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub rules: RulesConfig,
}

fn default_preset() -> String {
    DEFAULT_PRESET.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            files: FilesConfig::default(),
            rules: RulesConfig::default(),
        }
    }
}

/// Which files `check` looks at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    /// Extensions to lint, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns skipped during discovery. Added to `.gitignore` rules.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Respect `.gitignore` files (default: true).
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

fn default_extensions() -> Vec<String> {
    SourceLanguage::DEFAULT_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_exclude() -> Vec<String> {
    vec!["node_modules/**".to_string(), "dist/**".to_string()]
}

const fn default_true() -> bool {
    true
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
            gitignore: true,
        }
    }
}

/// Per-rule settings, keyed by rule id. Unknown ids are rejected.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(rename = "human-first/no-comments", default)]
    pub no_comments: RuleSetting<NoCommentsOptions>,

    #[serde(rename = "human-first/no-magic-values", default)]
    pub no_magic_values: RuleSetting<MagicValueOptions>,

    #[serde(rename = "human-first/no-magic-numbers", default)]
    pub no_magic_numbers: RuleSetting<MagicValueOptions>,

    #[serde(rename = "max-params", default)]
    pub max_params: RuleSetting<MaxParamsOptions>,

    #[serde(rename = "max-lines-per-function", default)]
    pub max_lines_per_function: RuleSetting<FunctionLimitOptions>,

    #[serde(rename = "max-lines", default)]
    pub max_lines: RuleSetting<MaxLinesOptions>,
}

impl RulesConfig {
    /// Configured severity for a rule id, `None` if the id is unknown.
    #[must_use]
    pub fn severity(&self, id: &str) -> Option<Severity> {
        let severity = match id {
            "human-first/no-comments" => self.no_comments.severity,
            "human-first/no-magic-values" => self.no_magic_values.severity,
            "human-first/no-magic-numbers" => self.no_magic_numbers.severity,
            "max-params" => self.max_params.severity,
            "max-lines-per-function" => self.max_lines_per_function.severity,
            "max-lines" => self.max_lines.severity,
            _ => return None,
        };
        Some(severity)
    }
}

/// A rule's severity plus its options.
///
/// Accepts either a bare severity (`"max-lines" = "off"`) or a table whose
/// `severity` key sits next to the options. A table without `severity`
/// enables the rule as an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleSetting<T> {
    pub severity: Severity,
    pub options: T,
}

impl<T> RuleSetting<T> {
    #[must_use]
    pub const fn new(severity: Severity, options: T) -> Self {
        Self { severity, options }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.severity.is_enabled()
    }
}

impl<'de, T> Deserialize<'de> for RuleSetting<T>
where
    T: DeserializeOwned + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match toml::Value::deserialize(deserializer)? {
            level @ toml::Value::String(_) => {
                let severity = level.try_into::<Severity>().map_err(D::Error::custom)?;
                Ok(Self::new(severity, T::default()))
            }
            toml::Value::Table(mut table) => {
                let severity = match table.remove("severity") {
                    Some(level) => level.try_into::<Severity>().map_err(D::Error::custom)?,
                    None => Severity::Error,
                };
                let options = toml::Value::Table(table)
                    .try_into::<T>()
                    .map_err(D::Error::custom)?;
                Ok(Self::new(severity, options))
            }
            other => Err(D::Error::custom(format!(
                "expected a severity string or a rule table, found {}",
                other.type_str()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
