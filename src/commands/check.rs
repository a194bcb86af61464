use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate_config};
use crate::error::{HumanFirstError, Result};
use crate::linter::Linter;
use crate::output::{FileReport, Summary, formatter_for};
use crate::rules::Severity;
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_LINT_ERRORS, EXIT_SUCCESS};

use super::context::load_config;

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Lint every file under `args.paths` and render the report.
///
/// # Errors
/// Returns an error if the configuration is invalid, a path does not exist,
/// or the report cannot be written. Per-file read and parse failures are
/// reported, not returned.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let config = apply_cli_overrides(config, args)?;

    let filter = GlobFilter::from_config(&config.files)?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.files.gitignore);
    let files = scanner.scan_all(&args.paths)?;
    info!(files = files.len(), fix = args.fix, "linting");

    let linter = Linter::from_config(&config);
    let mut reports = lint_files(&linter, &files, args.fix);
    if cli.quiet {
        retain_errors(&mut reports);
    }

    let formatter = formatter_for(args.format, cli.color.into(), cli.verbose);
    let rendered = formatter.format(&reports)?;
    write_output(args.output.as_deref(), &rendered)?;

    Ok(exit_code(&Summary::from_reports(&reports), args.max_warnings))
}

fn apply_cli_overrides(mut config: Config, args: &CheckArgs) -> Result<Config> {
    if let Some(extensions) = &args.ext {
        config.files.extensions.clone_from(extensions);
    }
    config.files.exclude.extend(args.exclude.iter().cloned());
    validate_config(&config)?;
    Ok(config)
}

fn lint_files(linter: &Linter, files: &[PathBuf], fix: bool) -> Vec<FileReport> {
    files
        .par_iter()
        .map(|path| lint_file(linter, path, fix))
        .collect()
}

fn lint_file(linter: &Linter, path: &Path, fix: bool) -> FileReport {
    debug!(path = %path.display(), "linting file");
    let outcome = fs::read_to_string(path)
        .map_err(|source| HumanFirstError::FileRead {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|source| {
            if fix {
                fix_file(linter, path, &source)
            } else {
                linter
                    .lint_source(path, &source)
                    .map(|diagnostics| FileReport::linted(path.to_path_buf(), diagnostics))
            }
        });

    outcome.unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "skipping file");
        FileReport::failed(path.to_path_buf(), e.to_string())
    })
}

fn fix_file(linter: &Linter, path: &Path, source: &str) -> Result<FileReport> {
    let result = linter.fix_source(path, source)?;
    if result.output != source {
        fs::write(path, &result.output).map_err(|source| HumanFirstError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), fixed = result.fixed, "wrote fixes");
    }
    Ok(FileReport::linted(path.to_path_buf(), result.diagnostics).with_fixed(result.fixed))
}

fn retain_errors(reports: &mut [FileReport]) {
    for report in reports {
        report.diagnostics.retain(|d| d.severity == Severity::Error);
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content).map_err(|source| HumanFirstError::FileWrite {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            println!("{}", content.trim_end_matches('\n'));
            Ok(())
        }
    }
}

/// Process exit code for a finished run.
///
/// Files that failed to read or parse take precedence, then errors, then a
/// warning count above `max_warnings`.
#[must_use]
pub const fn exit_code(summary: &Summary, max_warnings: Option<usize>) -> i32 {
    if summary.failed_files > 0 {
        return EXIT_CONFIG_ERROR;
    }
    if summary.errors > 0 {
        return EXIT_LINT_ERRORS;
    }
    match max_warnings {
        Some(max) if summary.warnings > max => EXIT_LINT_ERRORS,
        _ => EXIT_SUCCESS,
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
