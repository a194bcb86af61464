use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;

const CONFIG: &str = r#"
[rules."human-first/no-comments"]
severity = "error"

[rules.max-params]
severity = "warn"
max = 1
"#;

fn parse(dir: &Path, extra: &[&str]) -> Cli {
    let config = dir.join("lint.toml");
    let output = dir.join("report.txt");
    let mut argv = vec![
        "human-first".to_string(),
        "check".to_string(),
        dir.join("src").display().to_string(),
        "--config".to_string(),
        config.display().to_string(),
        "--output".to_string(),
        output.display().to_string(),
        "--color".to_string(),
        "never".to_string(),
    ];
    argv.extend(extra.iter().map(ToString::to_string));
    Cli::parse_from(argv)
}

fn check_args(cli: &Cli) -> &CheckArgs {
    match &cli.command {
        Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

fn run(cli: &Cli) -> i32 {
    run_check_impl(check_args(cli), cli).unwrap()
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lint.toml"), CONFIG).unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    for (name, content) in files {
        fs::write(dir.path().join("src").join(name), content).unwrap();
    }
    dir
}

fn report(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("report.txt")).unwrap()
}

#[test]
fn clean_project_exits_success() {
    let dir = project(&[("app.js", "const LIMIT = 3;\n")]);
    let cli = parse(dir.path(), &[]);

    assert_eq!(run(&cli), EXIT_SUCCESS);
    assert!(report(&dir).contains("no problems found"));
}

#[test]
fn errors_exit_with_lint_code() {
    let dir = project(&[("app.js", "// note\nconst x = 1;\n")]);
    let cli = parse(dir.path(), &[]);

    assert_eq!(run(&cli), EXIT_LINT_ERRORS);
    assert!(report(&dir).contains("human-first/no-comments"));
}

#[test]
fn fix_rewrites_file() {
    let dir = project(&[("app.js", "// note\nconst x = 1;\n")]);
    let cli = parse(dir.path(), &["--fix"]);

    assert_eq!(run(&cli), EXIT_SUCCESS);
    let fixed = fs::read_to_string(dir.path().join("src/app.js")).unwrap();
    assert_eq!(fixed, "\nconst x = 1;\n");
}

#[test]
fn warnings_respect_max_warnings() {
    let dir = project(&[("app.js", "function f(a, b) { return a + b; }\n")]);

    let cli = parse(dir.path(), &[]);
    assert_eq!(run(&cli), EXIT_SUCCESS);

    let cli = parse(dir.path(), &["--max-warnings", "0"]);
    assert_eq!(run(&cli), EXIT_LINT_ERRORS);
}

#[test]
fn quiet_drops_warnings() {
    let dir = project(&[("app.js", "function f(a, b) { return a + b; }\n")]);
    let cli = parse(dir.path(), &["--quiet", "--max-warnings", "0", "--format", "json"]);

    assert_eq!(run(&cli), EXIT_SUCCESS);
    let json: serde_json::Value = serde_json::from_str(&report(&dir)).unwrap();
    assert_eq!(json["summary"]["warnings"], 0);
}

#[test]
fn parse_failure_exits_with_config_code() {
    let dir = project(&[("broken.js", "const = ;\n"), ("ok.js", "const A = 1;\n")]);
    let cli = parse(dir.path(), &["--format", "json"]);

    assert_eq!(run(&cli), EXIT_CONFIG_ERROR);
    let json: serde_json::Value = serde_json::from_str(&report(&dir)).unwrap();
    assert_eq!(json["summary"]["files"], 2);
    assert_eq!(json["summary"]["failedFiles"], 1);
}

#[test]
fn ext_override_limits_files() {
    let dir = project(&[("app.js", "// note\n"), ("app.ts", "const A = 1;\n")]);
    let cli = parse(dir.path(), &["--ext", "ts", "--format", "json"]);

    assert_eq!(run(&cli), EXIT_SUCCESS);
    let json: serde_json::Value = serde_json::from_str(&report(&dir)).unwrap();
    assert_eq!(json["summary"]["files"], 1);
}

#[test]
fn exclude_override_skips_files() {
    let dir = project(&[("app.js", "// note\n"), ("gen.js", "// generated\n")]);
    let cli = parse(dir.path(), &["-x", "app.js", "--format", "json"]);

    run(&cli);
    let json: serde_json::Value = serde_json::from_str(&report(&dir)).unwrap();
    assert_eq!(json["summary"]["files"], 1);
    assert!(json["results"][0]["filePath"].as_str().unwrap().ends_with("gen.js"));
}

#[test]
fn unsupported_ext_override_is_rejected() {
    let dir = project(&[]);
    let cli = parse(dir.path(), &["--ext", "py"]);
    assert!(run_check_impl(check_args(&cli), &cli).is_err());
}

#[test]
fn missing_config_file_is_error() {
    let dir = project(&[("app.js", "")]);
    fs::remove_file(dir.path().join("lint.toml")).unwrap();
    let cli = parse(dir.path(), &[]);

    assert_eq!(run_check(check_args(&cli), &cli), EXIT_CONFIG_ERROR);
}

#[test]
fn no_config_uses_preset() {
    let dir = project(&[("app.js", "const obj = { role: \"admin\" };\n")]);
    fs::remove_file(dir.path().join("lint.toml")).unwrap();
    let cli = parse(dir.path(), &["--no-config"]);

    assert_eq!(run(&cli), EXIT_LINT_ERRORS);
    assert!(report(&dir).contains("human-first/no-magic-values"));
}

#[test]
fn exit_code_precedence() {
    let summary = Summary {
        files: 2,
        errors: 1,
        warnings: 3,
        ..Summary::default()
    };
    assert_eq!(exit_code(&summary, None), EXIT_LINT_ERRORS);
    assert_eq!(
        exit_code(&Summary { failed_files: 1, ..summary }, None),
        EXIT_CONFIG_ERROR
    );
    assert_eq!(exit_code(&Summary { errors: 0, ..summary }, Some(3)), EXIT_SUCCESS);
    assert_eq!(exit_code(&Summary { errors: 0, ..summary }, Some(2)), EXIT_LINT_ERRORS);
}
