//! Authentication service
//!
//! Login doubles as registration: an unseen username is registered with the
//! supplied password, a known one must match its stored digest.

use tracing::{info, warn};

use crate::config::settings::PasswordSchemeKind;
use crate::error::TrackerResult;
use crate::models::validate_username;
use crate::storage::{CredentialMap, CredentialStore};

use super::password::{scheme_for, verify_password};

/// Result of a login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The username was unknown and has been registered
    NewAccount,
    /// The password matched
    Success,
    /// The password did not match
    Failure,
}

impl AuthOutcome {
    /// Whether the user may proceed into a session
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::NewAccount | Self::Success)
    }
}

/// Service for login and registration
pub struct AuthService<'a> {
    store: &'a CredentialStore,
    scheme: PasswordSchemeKind,
}

impl<'a> AuthService<'a> {
    /// Create an auth service; `scheme` applies to newly registered accounts
    pub fn new(store: &'a CredentialStore, scheme: PasswordSchemeKind) -> Self {
        Self { store, scheme }
    }

    /// Load the credential store and authenticate against it
    pub fn login(&self, username: &str, password: &str) -> TrackerResult<AuthOutcome> {
        validate_username(username)?;
        let mut users = self.store.load()?;
        self.authenticate(username, password, &mut users)
    }

    /// Authenticate against an already loaded credential map
    ///
    /// Registration inserts into `users` and rewrites the store. If that
    /// write fails the error is returned and the account does not exist.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
        users: &mut CredentialMap,
    ) -> TrackerResult<AuthOutcome> {
        validate_username(username)?;

        match users.get(username) {
            Some(stored) => {
                if verify_password(password, stored)? {
                    info!(user = username, "login succeeded");
                    Ok(AuthOutcome::Success)
                } else {
                    warn!(user = username, "login failed: incorrect password");
                    Ok(AuthOutcome::Failure)
                }
            }
            None => {
                let hash = scheme_for(self.scheme).hash(password)?;
                users.insert(username.to_string(), hash);

                if let Err(e) = self.store.save(users) {
                    users.remove(username);
                    return Err(e);
                }

                info!(user = username, scheme = ?self.scheme, "registered new account");
                Ok(AuthOutcome::NewAccount)
            }
        }
    }
}
