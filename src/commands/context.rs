use std::path::Path;

use tracing::{debug, info};

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;

/// Resolve the configuration a command runs with: the preset alone under
/// `--no-config`, the explicit `--config` file, or whatever discovery finds.
///
/// # Errors
/// Returns an error if the chosen file cannot be read, parsed or validated.
pub fn load_config(path: Option<&Path>, no_config: bool) -> Result<Config> {
    load_config_with(&FileConfigLoader::new(), path, no_config)
}

pub(crate) fn load_config_with(
    loader: &impl ConfigLoader,
    path: Option<&Path>,
    no_config: bool,
) -> Result<Config> {
    if no_config {
        debug!("--no-config given, using the preset");
        return Config::from_preset();
    }
    let result = match path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    if let Some(source) = &result.source {
        info!(path = %source.display(), "using config");
    }
    Ok(result.config)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
