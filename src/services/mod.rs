//! Service layer for the finance tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! password hashing, login/registration, and the per-user session.

pub mod auth;
pub mod password;
pub mod session;

pub use auth::{AuthOutcome, AuthService};
pub use password::{verify_password, Argon2Scheme, PasswordScheme, Sha256Scheme};
pub use session::Session;
