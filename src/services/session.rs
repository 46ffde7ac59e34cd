//! Session service
//!
//! A session is one logged-in user's working copy of their ledger. Every
//! command goes through it instead of through process-wide state.

use tracing::{debug, error};

use crate::error::TrackerResult;
use crate::models::{TransactionKind, TransactionRecord, YearMonth};
use crate::reports::{self, CategorySummary, MonthlySummary};
use crate::storage::{LedgerStore, SkippedLine};

/// An authenticated user's in-memory ledger and the store backing it
pub struct Session<S: LedgerStore> {
    username: String,
    records: Vec<TransactionRecord>,
    skipped: Vec<SkippedLine>,
    store: S,
}

impl<S: LedgerStore> Session<S> {
    /// Load the user's ledger and start a session
    pub fn open(store: S, username: impl Into<String>) -> TrackerResult<Self> {
        let username = username.into();
        let loaded = store.load(&username)?;

        Ok(Self {
            username,
            records: loaded.records,
            skipped: loaded.skipped,
            store,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Records in insertion order
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Lines left out when the ledger was loaded
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Validate and record a new transaction stamped with the current time
    pub fn add(
        &mut self,
        kind: TransactionKind,
        category: &str,
        amount: f64,
        description: &str,
    ) -> TrackerResult<&TransactionRecord> {
        let record = TransactionRecord::new(kind, category.trim(), amount, description);
        self.add_record(record)
    }

    /// Validate a record, append it and persist the ledger immediately
    ///
    /// If persisting fails the record is kept in memory and the error is
    /// returned; the save at logout writes it again.
    pub fn add_record(&mut self, record: TransactionRecord) -> TrackerResult<&TransactionRecord> {
        record.validate_new()?;
        self.records.push(record);

        let added = &self.records[self.records.len() - 1];
        if let Err(e) = self.store.append(&self.username, &self.records, added) {
            error!(user = %self.username, error = %e, "failed to persist new record");
            return Err(e);
        }

        debug!(user = %self.username, kind = %added.kind(), "record added");
        Ok(added)
    }

    pub fn balance(&self) -> f64 {
        reports::balance(&self.records)
    }

    pub fn count(&self) -> usize {
        reports::count(&self.records)
    }

    pub fn monthly_summary(&self, period: YearMonth) -> MonthlySummary {
        MonthlySummary::generate(&self.records, period)
    }

    pub fn category_summary(&self) -> CategorySummary {
        CategorySummary::generate(&self.records)
    }

    /// Write the final state of the ledger
    pub fn save(&self) -> TrackerResult<()> {
        self.store.save(&self.username, &self.records)
    }

    /// Save and end the session
    pub fn close(self) -> TrackerResult<()> {
        self.save()
    }
}
