//! Password hashing schemes
//!
//! Digests are stored as opaque text in the credential file. The legacy
//! scheme is unsalted hex SHA-256; Argon2id PHC strings can be chosen for new
//! accounts. Verification always uses whichever scheme produced the stored
//! digest, so both kinds can live in the same file.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sha2::{Digest, Sha256};

use crate::config::settings::PasswordSchemeKind;
use crate::error::{TrackerError, TrackerResult};

/// A one-way password digest format
pub trait PasswordScheme {
    fn kind(&self) -> PasswordSchemeKind;

    /// Hash a password into the text stored in the credential file
    fn hash(&self, password: &str) -> TrackerResult<String>;

    /// Check a password against a stored digest of this scheme
    fn verify(&self, password: &str, stored: &str) -> TrackerResult<bool>;

    /// Whether `stored` looks like a digest produced by this scheme
    fn matches_format(&self, stored: &str) -> bool;
}

/// Unsalted SHA-256, lowercase hex (64 characters)
///
/// Same password, same digest. Kept for compatibility with existing
/// credential files; it offers no protection against precomputed tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Scheme;

impl Sha256Scheme {
    pub fn digest_hex(password: &str) -> String {
        format!("{:x}", Sha256::digest(password.as_bytes()))
    }
}

impl PasswordScheme for Sha256Scheme {
    fn kind(&self) -> PasswordSchemeKind {
        PasswordSchemeKind::Sha256
    }

    fn hash(&self, password: &str) -> TrackerResult<String> {
        Ok(Self::digest_hex(password))
    }

    fn verify(&self, password: &str, stored: &str) -> TrackerResult<bool> {
        let computed = Self::digest_hex(password);
        Ok(constant_time_eq(computed.as_bytes(), stored.as_bytes()))
    }

    fn matches_format(&self, stored: &str) -> bool {
        stored.len() == 64 && stored.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

/// Salted Argon2id with the crate's default cost parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Scheme;

impl PasswordScheme for Argon2Scheme {
    fn kind(&self) -> PasswordSchemeKind {
        PasswordSchemeKind::Argon2
    }

    fn hash(&self, password: &str) -> TrackerResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| TrackerError::Hash(format!("Argon2 hashing failed: {}", e)))
    }

    fn verify(&self, password: &str, stored: &str) -> TrackerResult<bool> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| TrackerError::Hash(format!("Invalid Argon2 digest: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    fn matches_format(&self, stored: &str) -> bool {
        stored.starts_with("$argon2")
    }
}

/// The scheme used to hash new passwords of the given kind
pub fn scheme_for(kind: PasswordSchemeKind) -> Box<dyn PasswordScheme> {
    match kind {
        PasswordSchemeKind::Sha256 => Box::new(Sha256Scheme),
        PasswordSchemeKind::Argon2 => Box::new(Argon2Scheme),
    }
}

/// Verify a password against a stored digest of any supported scheme
pub fn verify_password(password: &str, stored: &str) -> TrackerResult<bool> {
    let schemes: [&dyn PasswordScheme; 2] = [&Argon2Scheme, &Sha256Scheme];
    let scheme = schemes
        .into_iter()
        .find(|s| s.matches_format(stored))
        .ok_or_else(|| TrackerError::Hash("Unrecognized password digest format".into()))?;

    scheme.verify(password, stored)
}

/// Compare two byte strings without exiting early on the first mismatch
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
