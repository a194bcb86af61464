use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{HumanFirstError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::merge::merge_toml_values;
use super::presets::{DEFAULT_PRESET, load_preset};
use super::validation::validate_config;
use super::Config;

pub const LOCAL_CONFIG_NAME: &str = ".human-first.toml";
pub const USER_CONFIG_NAME: &str = "config.toml";

/// A resolved configuration and the file it came from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    pub source: Option<PathBuf>,
}

pub trait ConfigLoader {
    /// Discover and load the configuration.
    ///
    /// # Errors
    /// Returns an error if a discovered file cannot be read, parsed or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.human-first.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. the recommended preset alone
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        if let Some(local_path) = self.local_config_path()
            && self.fs.exists(&local_path)
        {
            return self.load_from_path(&local_path);
        }

        if let Some(user_path) = self.user_config_path()
            && self.fs.exists(&user_path)
        {
            return self.load_from_path(&user_path);
        }

        debug!("no config file found, using the {DEFAULT_PRESET} preset");
        Ok(LoadResult {
            config: Config::from_preset()?,
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        debug!(path = %path.display(), "loading config");
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| HumanFirstError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        let config = Config::from_toml_str(&content).map_err(|err| in_file(path, err))?;
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

impl Config {
    /// Parse a config document, layer it over its preset and validate it.
    ///
    /// # Errors
    /// Returns an error for invalid TOML, unknown keys or rules, an unknown
    /// preset, or values rejected by validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let value: toml::Value = toml::from_str(content)?;
        resolve_config(value)
    }

    /// The default preset with no user overrides.
    ///
    /// # Errors
    /// Returns an error only if the embedded preset fails to load.
    pub fn from_preset() -> Result<Self> {
        resolve_config(toml::Value::Table(toml::Table::new()))
    }
}

fn resolve_config(user: toml::Value) -> Result<Config> {
    let preset = match user.get("preset") {
        None => DEFAULT_PRESET.to_string(),
        Some(name) => name
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| HumanFirstError::Config("preset must be a string".to_string()))?,
    };
    debug!(preset = %preset, "layering config over preset");

    let merged = merge_toml_values(load_preset(&preset)?, user);
    let config = merged.try_into::<Config>()?;
    validate_config(&config)?;
    Ok(config)
}

fn in_file(path: &Path, err: HumanFirstError) -> HumanFirstError {
    match err {
        HumanFirstError::TomlParse(e) => {
            HumanFirstError::Config(format!("{}: {e}", path.display()))
        }
        HumanFirstError::Config(message) => {
            HumanFirstError::Config(format!("{}: {message}", path.display()))
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
