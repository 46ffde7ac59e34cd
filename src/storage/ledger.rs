//! Ledger repository for per-user transaction files
//!
//! Each user's records live in `transactions_<username>.csv`, one encoded
//! record per line in insertion order.
//!
//! There is no file locking. Two processes working on the same username
//! will overwrite each other's changes; the last full rewrite wins.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{RecordParseError, TransactionRecord};

use super::file_io::{read_lines, write_lines_atomic, TextLine};

/// A stored line that could not be decoded and was left out of the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the ledger file
    pub line_number: usize,
    pub content: String,
    pub reason: RecordParseError,
}

/// Result of loading a ledger: the decoded records plus anything skipped
#[derive(Debug, Clone, Default)]
pub struct LoadedLedger {
    pub records: Vec<TransactionRecord>,
    pub skipped: Vec<SkippedLine>,
}

impl LoadedLedger {
    /// Decode ledger lines, skipping (and logging) lines that fail to parse
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = TextLine>,
    {
        let mut ledger = Self::default();

        for (index, line) in lines.into_iter().enumerate() {
            let (content, decoded) = match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    let decoded = TransactionRecord::decode(&line);
                    (line, decoded)
                }
                Err(e) => (
                    String::from_utf8_lossy(e.as_bytes()).into_owned(),
                    Err(RecordParseError::Encoding),
                ),
            };

            match decoded {
                Ok(record) => ledger.records.push(record),
                Err(reason) => {
                    warn!(line = index + 1, %reason, "skipping malformed ledger line");
                    ledger.skipped.push(SkippedLine {
                        line_number: index + 1,
                        content,
                        reason,
                    });
                }
            }
        }

        ledger
    }
}

/// Persistence boundary for a user's ledger
pub trait LedgerStore {
    /// Load a user's records in stored order; no data yet is an empty ledger
    fn load(&self, username: &str) -> Result<LoadedLedger, TrackerError>;

    /// Replace the user's stored ledger with `records`
    fn save(&self, username: &str, records: &[TransactionRecord]) -> Result<(), TrackerError>;

    /// Persist after `added` was pushed onto the end of `records`
    ///
    /// Stores may append just the new record; the default rewrites the whole
    /// ledger.
    fn append(
        &self,
        username: &str,
        records: &[TransactionRecord],
        _added: &TransactionRecord,
    ) -> Result<(), TrackerError> {
        self.save(username, records)
    }
}

/// Ledger store backed by one text file per user, rewritten in full on save
#[derive(Debug, Clone)]
pub struct FileLedgerStore {
    paths: TrackerPaths,
}

impl FileLedgerStore {
    pub fn new(paths: TrackerPaths) -> Self {
        Self { paths }
    }

    /// The file backing a user's ledger
    pub fn path(&self, username: &str) -> PathBuf {
        self.paths.ledger_file(username)
    }
}

impl LedgerStore for FileLedgerStore {
    fn load(&self, username: &str) -> Result<LoadedLedger, TrackerError> {
        let path = self.path(username);
        let ledger = LoadedLedger::from_lines(read_lines(&path)?);

        debug!(
            user = username,
            records = ledger.records.len(),
            skipped = ledger.skipped.len(),
            "loaded ledger"
        );
        Ok(ledger)
    }

    fn save(&self, username: &str, records: &[TransactionRecord]) -> Result<(), TrackerError> {
        write_lines_atomic(self.path(username), records.iter().map(|r| r.encode()))?;

        debug!(user = username, records = records.len(), "saved ledger");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileLedgerStore {
        FileLedgerStore::new(TrackerPaths::with_base_dir(dir.path().to_path_buf()))
    }

    fn record(kind: TransactionKind, category: &str, amount: f64, day: u32) -> TransactionRecord {
        let ts = NaiveDate::from_ymd_opt(2025, 5, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        TransactionRecord::with_timestamp(kind, category, amount, ts, "note")
    }

    #[test]
    fn test_missing_file_is_empty_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = store_in(&temp_dir).load("nobody").unwrap();
        assert!(loaded.records.is_empty());
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let records = vec![
            record(TransactionKind::Expense, "Food", 12.5, 3),
            record(TransactionKind::Income, "Salary", 50000.0, 1),
            record(TransactionKind::Expense, "Rent", 900.0, 2),
        ];

        store.save("alice", &records).unwrap();
        assert!(temp_dir.path().join("transactions_alice.csv").exists());

        let loaded = store.load("alice").unwrap();
        assert_eq!(loaded.records, records);
    }

    #[test]
    fn test_malformed_lines_are_skipped_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::write(
            store.path("alice"),
            "Income,Salary,100.0,2025-05-01 09:00:00,first\n\
             garbage\n\
             Expense,Food,abc,2025-05-02 09:00:00,bad amount\n\
             Expense,Food,20.0,2025-05-02 09:00:00,second\n\
             Expense,Food,20.0,02/05/2025,bad date\n\
             income,Bonus,5.0,2025-05-03 09:00:00,third, with comma\n",
        )
        .unwrap();

        let loaded = store.load("alice").unwrap();
        let descriptions: Vec<_> = loaded.records.iter().map(|r| r.description()).collect();
        assert_eq!(descriptions, vec!["first", "second", "third, with comma"]);

        let skipped: Vec<_> = loaded.skipped.iter().map(|s| s.line_number).collect();
        assert_eq!(skipped, vec![2, 3, 5]);
        assert_eq!(loaded.skipped[0].reason, RecordParseError::FieldCount(1));
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let mut contents = b"Income,Salary,100.0,2025-05-01 09:00:00,first\n".to_vec();
        contents.extend_from_slice(b"Expense,Caf\xe9,4.5,2025-05-02 09:00:00,coffee\n");
        contents.extend_from_slice(b"Expense,Food,20.0,2025-05-02 10:00:00,second\n");
        std::fs::write(store.path("alice"), contents).unwrap();

        let loaded = store.load("alice").unwrap();
        let descriptions: Vec<_> = loaded.records.iter().map(|r| r.description()).collect();
        assert_eq!(descriptions, vec!["first", "second"]);

        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].line_number, 2);
        assert_eq!(loaded.skipped[0].reason, RecordParseError::Encoding);
        assert!(loaded.skipped[0].content.starts_with("Expense,Caf"));
    }

    #[test]
    fn test_append_rewrites_everything() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let mut records = vec![record(TransactionKind::Income, "Salary", 10.0, 1)];
        store.save("alice", &records).unwrap();

        let added = record(TransactionKind::Expense, "Food", 2.0, 2);
        records.push(added.clone());
        store.append("alice", &records, &added).unwrap();

        assert_eq!(store.load("alice").unwrap().records, records);
    }

    #[test]
    fn test_users_are_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store
            .save("alice", &[record(TransactionKind::Income, "Salary", 10.0, 1)])
            .unwrap();

        assert!(store.load("bob").unwrap().records.is_empty());
    }
}
