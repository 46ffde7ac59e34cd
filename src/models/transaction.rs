//! Transaction record model
//!
//! A record is one income or expense entry. Records are stored one per line
//! as `kind,category,amount,timestamp,description`. Decoding splits on the
//! first four commas only, so a description may itself contain commas.

use chrono::{Local, NaiveDateTime, SubsecRound};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::period::YearMonth;
use crate::error::TrackerError;

/// Field delimiter of the ledger and credential files
pub const DELIMITER: char = ',';

/// Timestamp pattern used in ledger files (24-hour clock, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of fields in an encoded record
const FIELD_COUNT: usize = 5;

/// Whether a record adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = RecordParseError;

    /// Case-insensitive: `income`, `INCOME` and `Income` are all accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("income") {
            Ok(Self::Income)
        } else if s.eq_ignore_ascii_case("expense") {
            Ok(Self::Expense)
        } else {
            Err(RecordParseError::Kind(s.to_string()))
        }
    }
}

/// Why a stored line could not be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordParseError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("unknown transaction kind '{0}'")]
    Kind(String),

    #[error("invalid amount '{0}'")]
    Amount(String),

    #[error("invalid timestamp '{0}'")]
    Timestamp(String),

    #[error("line is not valid UTF-8")]
    Encoding,
}

/// A single income or expense entry
///
/// Records are immutable once created; the ledger only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    kind: TransactionKind,
    category: String,
    amount: f64,
    timestamp: NaiveDateTime,
    description: String,
}

impl TransactionRecord {
    /// Create a record stamped with the current local time (whole seconds)
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        let now = Local::now().naive_local().trunc_subsecs(0);
        Self::with_timestamp(kind, category, amount, now, description)
    }

    /// Create a record with an explicit timestamp
    pub fn with_timestamp(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
        timestamp: NaiveDateTime,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            timestamp,
            description: description.into(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// The calendar month this record falls in
    pub fn month_key(&self) -> YearMonth {
        YearMonth::from_datetime(&self.timestamp)
    }

    /// Check a freshly entered record before it joins the ledger
    ///
    /// Stored records are not re-validated on load, so legacy files with
    /// negative amounts still open.
    pub fn validate_new(&self) -> Result<(), TrackerError> {
        if !self.amount.is_finite() {
            return Err(TrackerError::Validation("Amount must be a number".into()));
        }
        if self.amount < 0.0 {
            return Err(TrackerError::Validation(
                "Amount must not be negative".into(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(TrackerError::Validation("Category cannot be empty".into()));
        }
        if self.category.contains(DELIMITER) {
            return Err(TrackerError::Validation(format!(
                "Category cannot contain '{}'",
                DELIMITER
            )));
        }
        if self.description.contains(['\n', '\r']) {
            return Err(TrackerError::Validation(
                "Description must be a single line".into(),
            ));
        }
        Ok(())
    }

    /// Encode as one ledger line (without the trailing newline)
    ///
    /// Neither category nor description is escaped.
    pub fn encode(&self) -> String {
        format!(
            "{kind}{d}{category}{d}{amount}{d}{timestamp}{d}{description}",
            kind = self.kind,
            category = self.category,
            amount = format_amount(self.amount),
            timestamp = self.timestamp.format(TIMESTAMP_FORMAT),
            description = self.description,
            d = DELIMITER,
        )
    }

    /// Decode one ledger line
    pub fn decode(line: &str) -> Result<Self, RecordParseError> {
        let parts: Vec<&str> = line.splitn(FIELD_COUNT, DELIMITER).collect();
        if parts.len() != FIELD_COUNT {
            return Err(RecordParseError::FieldCount(parts.len()));
        }

        let kind: TransactionKind = parts[0].parse()?;
        let amount: f64 = parts[2]
            .trim()
            .parse()
            .map_err(|_| RecordParseError::Amount(parts[2].to_string()))?;
        let timestamp = NaiveDateTime::parse_from_str(parts[3], TIMESTAMP_FORMAT)
            .map_err(|_| RecordParseError::Timestamp(parts[3].to_string()))?;

        Ok(Self {
            kind,
            category: parts[1].to_string(),
            amount,
            timestamp,
            description: parts[4].to_string(),
        })
    }
}

/// Shortest round-trip text for an amount; integral values keep a `.0`
fn format_amount(amount: f64) -> String {
    format!("{:?}", amount)
}
