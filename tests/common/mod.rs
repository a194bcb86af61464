#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the human-first binary.
#[macro_export]
macro_rules! human_first {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("human-first"))
    };
}

/// A temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes `content` to `relative_path`, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.human-first.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".human-first.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample that breaks each recommended rule once.
pub const VIOLATIONS: &str = r#"// Handles login
function login(user, password, token, retries, timeout) {
  if (user.status === 200) {
    return user.role === "admin";
  }
}
"#;

/// Sample the recommended preset accepts.
pub const CLEAN: &str = r#"const HTTP_OK = 200;
const ADMIN_ROLE = "admin";

function isAdmin(user) {
  return user.status === HTTP_OK && user.role === ADMIN_ROLE;
}
"#;
