// src/repo/scratch.rs
// Lifecycle of the temporary clone directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// The scratch clone of one run. Removed by `cleanup()`, or on drop if
/// `cleanup()` was never reached (early `?` return, panic unwinding).
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
    cleaned: bool,
}

impl ScratchDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cleaned: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best-effort removal. Failures are logged, never returned.
    pub fn cleanup(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if self.cleaned {
            return;
        }
        self.cleaned = true;

        match remove_path(&self.path) {
            Ok(true) => info!(path = %self.path.display(), "removed scratch directory"),
            Ok(false) => {}
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove scratch directory"
            ),
        }
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        self.remove();
    }
}

/// Removes `path` whether it is a directory tree or a single file.
/// Returns `Ok(false)` when there was nothing to remove.
pub fn remove_path(path: &Path) -> io::Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cleanup_removes_tree() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("temp_owner-repo");
        fs::create_dir_all(path.join(".git/objects")).unwrap();
        fs::write(path.join("README.md"), "x").unwrap();

        ScratchDir::new(&path).cleanup();

        assert!(!path.exists());
    }

    #[test]
    fn test_cleanup_missing_dir_is_fine() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("never-created");
        ScratchDir::new(&path).cleanup();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_tree() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scratch");
        fs::create_dir_all(path.join("a/b")).unwrap();

        {
            let scratch = ScratchDir::new(&path);
            assert_eq!(scratch.path(), path.as_path());
        }

        assert!(!path.exists());
    }

    #[test]
    fn test_remove_path_file_and_missing() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("stray");
        fs::write(&file, "x").unwrap();

        assert!(remove_path(&file).unwrap());
        assert!(!file.exists());
        assert!(!remove_path(&file).unwrap());
    }
}
