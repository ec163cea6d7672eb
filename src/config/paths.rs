//! Path resolution for linktasker configuration and data files.
//!
//! All linktasker data is stored in `~/.linktasker/`:
//! - `config.yaml` - Main configuration file
//! - `tasks.json` - Task collection
//! - `links.json` - Link collection
//!
//! The `LINKTASKER_DIR` environment variable overrides the root, which
//! keeps tests and scripts hermetic.

use std::path::PathBuf;

use crate::error::LinkTaskerError;

/// Paths to linktasker configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.linktasker/`
    pub root: PathBuf,
    /// Config file: `~/.linktasker/config.yaml`
    pub config_file: PathBuf,
    /// Task collection: `~/.linktasker/tasks.json`
    pub tasks_file: PathBuf,
    /// Link collection: `~/.linktasker/links.json`
    pub links_file: PathBuf,
}

impl Paths {
    /// Create paths from `LINKTASKER_DIR` or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `LINKTASKER_DIR` nor `HOME` is set.
    pub fn new() -> Result<Self, LinkTaskerError> {
        if let Ok(dir) = std::env::var("LINKTASKER_DIR") {
            return Ok(Self::with_root(PathBuf::from(dir)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            LinkTaskerError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".linktasker")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            tasks_file: root.join("tasks.json"),
            links_file: root.join("links.json"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), LinkTaskerError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                LinkTaskerError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-linktasker");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.tasks_file, root.join("tasks.json"));
        assert_eq!(paths.links_file, root.join("links.json"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());
    }
}
