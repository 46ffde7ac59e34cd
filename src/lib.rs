//! Finance Tracker - terminal-based personal income and expense ledger
//!
//! This library provides the core functionality for the `fintrack` binary: a
//! single-user ledger that records income and expense transactions per
//! account and reports balances and summaries over them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transaction records, months and credentials
//! - `storage`: Flat-file persistence for credentials and ledgers
//! - `services`: Password hashing, login/registration and sessions
//! - `reports`: Balance, count, monthly and category aggregation
//! - `display`: Terminal formatting
//! - `cli`: Interactive login prompt and menu
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::TrackerPaths;
//! use finance_tracker::services::Session;
//! use finance_tracker::storage::Storage;
//!
//! let storage = Storage::new(TrackerPaths::resolve(None)?)?;
//! let session = Session::open(storage.ledgers.clone(), "alice")?;
//! println!("{}", session.balance());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
