//! Core data models for the finance tracker
//!
//! This module contains the data structures of the ledger domain:
//! transaction records, the months they are grouped by, and user credentials.

pub mod credential;
pub mod period;
pub mod transaction;

pub use credential::{validate_username, UserCredential};
pub use period::YearMonth;
pub use transaction::{RecordParseError, TransactionKind, TransactionRecord};
