//! User credential model
//!
//! A credential ties a username to a one-way password digest. The digest text
//! is opaque here; `services::password` knows how to produce and check it.

use std::fmt;

use super::transaction::DELIMITER;
use crate::error::TrackerError;

/// A username and its stored password digest
#[derive(Clone, PartialEq, Eq)]
pub struct UserCredential {
    pub username: String,
    pub password_hash: String,
}

impl UserCredential {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Encode as a `username,hash` line
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.username, DELIMITER, self.password_hash)
    }

    /// Decode a `username,hash` line, splitting on the first delimiter only
    pub fn decode(line: &str) -> Option<Self> {
        line.split_once(DELIMITER)
            .map(|(username, hash)| Self::new(username, hash))
    }
}

// Keep digests out of debug output
impl fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredential")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Check that a username can be stored and mapped to a ledger file
pub fn validate_username(username: &str) -> Result<(), TrackerError> {
    if username.is_empty() {
        return Err(TrackerError::Validation("Username cannot be empty".into()));
    }
    if username.contains(DELIMITER) {
        return Err(TrackerError::Validation(format!(
            "Username cannot contain '{}'",
            DELIMITER
        )));
    }
    if username.contains(['/', '\\']) || username == "." || username == ".." {
        return Err(TrackerError::Validation(
            "Username cannot contain path separators".into(),
        ));
    }
    Ok(())
}
