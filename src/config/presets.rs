use crate::error::{HumanFirstError, Result};
use toml::Value;

/// Preset applied when a config names none.
pub const DEFAULT_PRESET: &str = "recommended";

/// Preset name that turns preset layering off.
pub const NO_PRESET: &str = "none";

pub const AVAILABLE_PRESETS: &[&str] = &[DEFAULT_PRESET, NO_PRESET];

/// Load a built-in preset by name.
///
/// # Errors
/// Returns an error if the preset name is unknown.
pub fn load_preset(name: &str) -> Result<Value> {
    let content = match name {
        DEFAULT_PRESET => PRESET_RECOMMENDED,
        NO_PRESET => "",
        _ => {
            return Err(HumanFirstError::Config(format!(
                "Unknown preset: '{}'. Available presets: {}",
                name,
                AVAILABLE_PRESETS.join(", ")
            )));
        }
    };

    toml::from_str(content)
        .map_err(|e| HumanFirstError::Config(format!("Failed to parse preset '{name}': {e}")))
}

/// Namespaced preset name as shown to users, e.g. `human-first/recommended`.
#[must_use]
pub fn preset_display_name(name: &str) -> String {
    format!("{}/{name}", crate::rules::PLUGIN_NAME)
}

const PRESET_RECOMMENDED: &str = r#"
[rules."human-first/no-comments"]
severity = "error"

[rules."human-first/no-magic-values"]
severity = "error"
ignoreNumbers = [-1, 0, 1, 2]
ignoreArrayIndexes = true
ignoreDefaultValues = true

[rules."human-first/no-magic-numbers"]
severity = "off"

[rules.max-lines-per-function]
severity = "error"
max = 50
skipBlankLines = true
skipComments = true

[rules.max-lines]
severity = "error"
max = 250
skipBlankLines = true
skipComments = true

[rules.max-params]
severity = "error"
max = 2
"#;

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
