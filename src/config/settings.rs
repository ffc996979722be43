//! User settings for finanzas-cli
//!
//! Manages user preferences: currency symbol, date format, the recommended
//! savings target, and the threshold used by the small-purchase alert.

use serde::{Deserialize, Serialize};

use super::paths::FinanzasPaths;
use crate::error::FinanzasError;
use crate::models::Money;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for finanzas-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Recommended savings rate, as a percentage of income
    #[serde(default = "default_savings_target_pct")]
    pub savings_target_pct: u8,

    /// Expense amounts below this are counted as small purchases
    /// ("gastos hormiga") by the alerts panel
    #[serde(default = "default_small_expense_threshold")]
    pub small_expense_threshold: Money,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "S/".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_savings_target_pct() -> u8 {
    20
}

fn default_small_expense_threshold() -> Money {
    Money::from_soles(50)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            savings_target_pct: default_savings_target_pct(),
            small_expense_threshold: default_small_expense_threshold(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &FinanzasPaths) -> Result<Self, FinanzasError> {
        let path = paths.settings_file();
        if path.exists() {
            read_json(&path)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinanzasPaths) -> Result<(), FinanzasError> {
        write_json_atomic(paths.settings_file(), self)
    }
}
