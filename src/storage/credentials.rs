//! Credential repository for the `users.txt` file
//!
//! Each line is `username,digest`. The file is read whole on login and
//! rewritten whole on every registration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::TrackerError;
use crate::models::UserCredential;

use super::file_io::{read_lines, write_lines_atomic};

/// Username to stored password digest
pub type CredentialMap = BTreeMap<String, String>;

/// Repository for credential persistence
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all credentials; a missing file yields an empty map
    ///
    /// Lines without a delimiter, or that are not valid UTF-8, are skipped.
    /// A later line for the same username replaces an earlier one.
    pub fn load(&self) -> Result<CredentialMap, TrackerError> {
        let mut users = CredentialMap::new();

        for (index, line) in read_lines(&self.path)?.into_iter().enumerate() {
            let Ok(line) = line else {
                warn!(
                    file = %self.path.display(),
                    line = index + 1,
                    "skipping credential line that is not valid UTF-8"
                );
                continue;
            };
            if line.trim().is_empty() {
                continue;
            }
            match UserCredential::decode(&line) {
                Some(cred) => {
                    users.insert(cred.username, cred.password_hash);
                }
                None => warn!(
                    file = %self.path.display(),
                    line = index + 1,
                    "skipping malformed credential line"
                ),
            }
        }

        debug!(count = users.len(), "loaded credentials");
        Ok(users)
    }

    /// Overwrite the credential file with the given map
    pub fn save(&self, users: &CredentialMap) -> Result<(), TrackerError> {
        let lines = users
            .iter()
            .map(|(username, hash)| UserCredential::new(username.as_str(), hash.as_str()).encode());

        write_lines_atomic(&self.path, lines)?;

        debug!(count = users.len(), "saved credentials");
        Ok(())
    }
}
