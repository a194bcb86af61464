use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;
use crate::rules::Severity;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/human-first")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn falls_back_to_recommended_preset() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load().unwrap();

    assert!(result.source.is_none());
    let rules = &result.config.rules;
    assert_eq!(rules.no_comments.severity, Severity::Error);
    assert_eq!(rules.no_magic_values.severity, Severity::Error);
    assert_eq!(rules.no_magic_numbers.severity, Severity::Off);
    assert_eq!(rules.max_params.options.max, 2);
    assert_eq!(rules.max_lines.options.max, 250);
    assert!(rules.max_lines.options.skip_blank_lines);
}

#[test]
fn local_config_overrides_preset() {
    let fs = MockFileSystem::new().with_file(
        "/project/.human-first.toml",
        r#"
[rules."human-first/no-comments"]
allow = ["TODO"]

[rules.max-params]
max = 4
"#,
    );
    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.source, Some(PathBuf::from("/project/.human-first.toml")));
    let rules = &result.config.rules;
    assert_eq!(rules.no_comments.options.allow, vec!["TODO"]);
    assert_eq!(rules.no_comments.severity, Severity::Error);
    assert_eq!(rules.max_params.options.max, 4);
    assert_eq!(rules.max_params.severity, Severity::Error);
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.human-first.toml", "[rules.max-params]\nmax = 5")
        .with_file(
            "/home/user/.config/human-first/config.toml",
            "[rules.max-params]\nmax = 7",
        );
    let config = FileConfigLoader::with_fs(fs).load().unwrap().config;
    assert_eq!(config.rules.max_params.options.max, 5);
}

#[test]
fn user_config_used_when_no_local() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/human-first/config.toml",
        "[rules.max-params]\nmax = 7",
    );
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.rules.max_params.options.max, 7);
    assert_eq!(
        result.source,
        Some(PathBuf::from("/home/user/.config/human-first/config.toml"))
    );
}

#[test]
fn preset_none_starts_from_defaults() {
    let fs = MockFileSystem::new().with_file(
        "/project/.human-first.toml",
        "preset = \"none\"\n[rules.max-lines]\nseverity = \"warn\"",
    );
    let config = FileConfigLoader::with_fs(fs).load().unwrap().config;

    assert_eq!(config.preset, "none");
    assert_eq!(config.rules.no_comments.severity, Severity::Off);
    assert_eq!(config.rules.max_lines.severity, Severity::Warn);
    assert_eq!(config.rules.max_lines.options.max, 300);
}

#[test]
fn rule_can_be_turned_off() {
    let fs = MockFileSystem::new().with_file(
        "/project/.human-first.toml",
        "[rules]\n\"human-first/no-comments\" = \"off\"",
    );
    let config = FileConfigLoader::with_fs(fs).load().unwrap().config;
    assert_eq!(config.rules.no_comments.severity, Severity::Off);
}

#[test]
fn ignore_numbers_array_is_replaced() {
    let fs = MockFileSystem::new().with_file(
        "/project/.human-first.toml",
        "[rules.\"human-first/no-magic-values\"]\nignoreNumbers = [100]",
    );
    let config = FileConfigLoader::with_fs(fs).load().unwrap().config;
    assert_eq!(config.rules.no_magic_values.options.ignore_numbers, vec![100.0]);
}

#[test]
fn explicit_path_missing_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nowhere.toml")).unwrap_err();
    assert!(matches!(err, HumanFirstError::FileRead { .. }));
}

#[test]
fn syntax_error_names_the_file() {
    let fs = MockFileSystem::new().with_file("/project/.human-first.toml", "preset = ");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(err.to_string().contains("/project/.human-first.toml"));
}

#[test]
fn unknown_preset_is_config_error() {
    let fs = MockFileSystem::new().with_file("/project/.human-first.toml", "preset = \"strict\"");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, HumanFirstError::Config(_)));
    assert!(err.to_string().contains("Unknown preset"));
}

#[test]
fn non_string_preset_is_rejected() {
    assert!(Config::from_toml_str("preset = 1").is_err());
}

#[test]
fn validation_runs_after_merge() {
    let err = Config::from_toml_str("[files]\nextensions = [\"rb\"]").unwrap_err();
    assert!(err.to_string().contains("unsupported extension"));
}
