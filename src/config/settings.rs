//! User settings for the finance tracker
//!
//! Manages display preferences, the password scheme used for new accounts,
//! and logging defaults.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// Password scheme used when registering new accounts
///
/// Existing accounts are always verified with the scheme their stored digest
/// was produced by, regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PasswordSchemeKind {
    /// Unsalted hex SHA-256, compatible with legacy credential files
    #[default]
    Sha256,
    /// Salted Argon2id PHC strings
    Argon2,
}

/// User settings for the tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency prefix shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used when listing transactions (strftime format)
    #[serde(default = "default_display_date_format")]
    pub display_date_format: String,

    /// Scheme used to hash passwords of newly registered accounts
    #[serde(default)]
    pub password_scheme: PasswordSchemeKind,

    /// Default log filter when `FINTRACK_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Password attempts allowed before the program exits
    #[serde(default = "default_max_login_attempts")]
    pub max_login_attempts: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs.".to_string()
}

fn default_display_date_format() -> String {
    "%d-%m-%Y %H:%M:%S".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_max_login_attempts() -> u32 {
    1
}

/// Reject strftime patterns chrono cannot render
pub fn validate_date_format(pattern: &str) -> Result<(), TrackerError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(TrackerError::Config(format!(
            "Invalid display_date_format '{}'",
            pattern
        )));
    }
    Ok(())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            display_date_format: default_display_date_format(),
            password_scheme: PasswordSchemeKind::default(),
            log_level: default_log_level(),
            max_login_attempts: default_max_login_attempts(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            validate_date_format(&settings.display_date_format)?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            TrackerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Attempts allowed at login; zero in the file is treated as one
    pub fn login_attempts(&self) -> u32 {
        self.max_login_attempts.max(1)
    }
}
