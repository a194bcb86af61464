pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod fix;
pub mod linter;
pub mod output;
pub mod parse;
pub mod rules;
pub mod scanner;
pub mod syntax;

pub use error::{HumanFirstError, Result};
pub use linter::Linter;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_LINT_ERRORS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "HUMAN_FIRST_LOG";

/// Log filter for a `-v` count when [`LOG_ENV`] is unset.
#[must_use]
pub const fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
