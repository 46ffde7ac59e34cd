//! Display preferences taken from settings

use chrono::NaiveDateTime;
use std::fmt::Write;

use crate::config::Settings;
use crate::models::transaction::TIMESTAMP_FORMAT;

/// Currency and date presentation used by all formatters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStyle {
    pub currency_symbol: String,
    pub date_format: String,
}

impl DisplayStyle {
    /// Format an amount with the currency prefix and two decimals
    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    /// Format a timestamp with the display pattern
    ///
    /// A pattern chrono cannot render falls back to the storage format.
    pub fn timestamp(&self, timestamp: NaiveDateTime) -> String {
        let mut out = String::new();
        if write!(out, "{}", timestamp.format(&self.date_format)).is_err() {
            out = timestamp.format(TIMESTAMP_FORMAT).to_string();
        }
        out
    }
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DisplayStyle {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.display_date_format.clone(),
        }
    }
}
