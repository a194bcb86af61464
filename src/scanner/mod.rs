mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Files under `root` to lint. A `root` that is itself a file is returned
    /// as is when its extension is lintable.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Scan several roots. The result is sorted and free of duplicates.
    ///
    /// # Errors
    /// Returns the first error from [`FileScanner::scan`].
    fn scan_all(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in roots {
            files.extend(self.scan(root)?);
        }
        files.sort();
        files.dedup();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
