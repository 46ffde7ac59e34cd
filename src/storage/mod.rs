//! Storage layer for the finance tracker
//!
//! Provides flat-file storage for credentials and per-user ledgers, with
//! atomic full rewrites and automatic directory creation.

pub mod credentials;
pub mod file_io;
pub mod ledger;

pub use credentials::{CredentialMap, CredentialStore};
pub use file_io::{read_lines, write_lines_atomic, TextLine};
pub use ledger::{FileLedgerStore, LedgerStore, LoadedLedger, SkippedLine};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrackerPaths,
    pub credentials: CredentialStore,
    pub ledgers: FileLedgerStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            credentials: CredentialStore::new(paths.users_file()),
            ledgers: FileLedgerStore::new(paths.clone()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }
}
