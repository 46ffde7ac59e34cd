//! Path management for the finance tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform data directory reported by `directories`
//!    (e.g. `~/.local/share/fintrack` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Manages all paths used by the tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all tracker data
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the base directory, preferring an explicit override
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the platform data
    /// directory cannot be determined.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, TrackerError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the credential file (`username,hash` lines)
    pub fn users_file(&self) -> PathBuf {
        self.base_dir.join("users.txt")
    }

    /// Get the ledger file for a user
    ///
    /// The name depends only on the username. Usernames that differ only in
    /// characters the filesystem rejects or rewrites are not disambiguated.
    pub fn ledger_file(&self, username: &str) -> PathBuf {
        self.base_dir.join(format!("transactions_{}.csv", username))
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Check if the tracker has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    ProjectDirs::from("", "", "fintrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TrackerError::Config("Could not determine a data directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.users_file(), temp_dir.path().join("users.txt"));
    }

    #[test]
    fn test_override_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ledger_file_is_deterministic() {
        let paths = TrackerPaths::with_base_dir(PathBuf::from("/data"));
        assert_eq!(
            paths.ledger_file("alice"),
            PathBuf::from("/data/transactions_alice.csv")
        );
        assert_eq!(paths.ledger_file("alice"), paths.ledger_file("alice"));
        assert_ne!(paths.ledger_file("alice"), paths.ledger_file("bob"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().join("nested").join("fintrack"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
        assert!(!paths.is_initialized());
    }
}
