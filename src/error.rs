use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HumanFirstError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Parsing error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported file type: {0}")]
    UnsupportedLanguage(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl HumanFirstError {
    /// Build a parse error for a source file.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Short category label for error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Parse { .. } | Self::UnsupportedLanguage(_) => "Parse",
            Self::JsonSerialize(_) => "Output",
        }
    }
}

pub type Result<T> = std::result::Result<T, HumanFirstError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
