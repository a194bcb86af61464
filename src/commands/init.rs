use std::fs;

use tracing::debug;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, HumanFirstError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the starter configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(HumanFirstError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    debug!(path = %output_path.display(), force = args.force, "writing config template");
    fs::write(output_path, generate_config_template()).map_err(|source| {
        HumanFirstError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# human-first configuration file
# Values below are layered over the preset; omit a key to keep the preset value.

# Built-in preset: "recommended" or "none"
preset = "recommended"

[files]
# File extensions to lint
extensions = ["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"]

# Exclude patterns (glob syntax, relative to each scanned path)
exclude = ["node_modules/**", "dist/**"]

# Respect .gitignore files
gitignore = true

# Each rule takes a severity ("off", "warn", "error") or a table of options.

[rules."human-first/no-comments"]
severity = "error"
# Comments starting with one of these prefixes are kept
# allow = ["TODO", "FIXME"]

[rules."human-first/no-magic-values"]
severity = "error"
ignoreNumbers = [-1, 0, 1, 2]
ignoreArrayIndexes = true
ignoreDefaultValues = true

# Numbers only; enable instead of no-magic-values to allow string literals
# [rules."human-first/no-magic-numbers"]
# severity = "error"

[rules.max-params]
severity = "error"
max = 2

[rules.max-lines-per-function]
severity = "error"
max = 50
skipBlankLines = true
skipComments = true
# includeIIFEs = false

[rules.max-lines]
severity = "error"
max = 250
skipBlankLines = true
skipComments = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
