use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use super::{FileFilter, FileScanner};
use crate::error::{HumanFirstError, Result};

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: true,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .git_ignore(self.use_gitignore)
            .git_global(self.use_gitignore)
            .git_exclude(self.use_gitignore)
            .require_git(false)
            .parents(self.use_gitignore)
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if self.filter.should_include(relative) {
                files.push(entry.into_path());
            }
        }
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if root.is_file() {
            // Named files skip excludes but must still be lintable.
            return Ok(if self.filter.has_valid_extension(root) {
                vec![root.to_path_buf()]
            } else {
                debug!(path = %root.display(), "skipping file with unsupported extension");
                Vec::new()
            });
        }
        if !root.is_dir() {
            return Err(HumanFirstError::FileRead {
                path: root.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such file or directory",
                ),
            });
        }

        let files = self.walk(root);
        debug!(root = %root.display(), count = files.len(), "scanned directory");
        Ok(files)
    }
}
