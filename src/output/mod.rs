mod json;
mod report;
mod sarif;
mod text;

pub use json::JsonFormatter;
pub use report::{FileReport, Summary};
pub use sarif::SarifFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;

/// Trait for rendering lint reports into an output format.
pub trait OutputFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Sarif,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "stylish" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "sarif" => Ok(Self::Sarif),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Build the formatter for `format`.
#[must_use]
pub fn formatter_for(
    format: OutputFormat,
    color: ColorMode,
    verbose: u8,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::with_verbose(color, verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Sarif => Box::new(SarifFormatter::new()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
