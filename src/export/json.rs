//! JSON export functionality
//!
//! Serializes the complete dataset ({transactions, recurring expenses}) to a
//! schema-versioned JSON document, and reads such documents back for restore.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FinanzasResult;
use crate::models::{RecurringExpense, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full dataset export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions
    pub transactions: Vec<Transaction>,

    /// All recurring expenses
    pub recurring_expenses: Vec<RecurringExpense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of transactions
    pub transaction_count: usize,

    /// Total number of recurring expenses
    pub recurring_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> FinanzasResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let recurring_expenses = storage.recurring.get_all()?;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            recurring_count: recurring_expenses.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            recurring_expenses,
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        // Check schema version
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        // Duplicate IDs would make edits and deletes ambiguous after restore
        let mut txn_ids = HashSet::new();
        for txn in &self.transactions {
            if !txn_ids.insert(txn.id) {
                return Err(format!("Duplicate transaction id: {}", txn.id));
            }
            if txn.amount.is_negative() {
                return Err(format!(
                    "Transaction {} has a negative amount: {}",
                    txn.id, txn.amount
                ));
            }
        }

        let mut recurring_ids = HashSet::new();
        for expense in &self.recurring_expenses {
            if !recurring_ids.insert(expense.id) {
                return Err(format!("Duplicate recurring id: {}", expense.id));
            }
            if expense.amount.is_negative() {
                return Err(format!(
                    "Recurring expense {} has a negative amount: {}",
                    expense.id, expense.amount
                ));
            }
        }

        Ok(())
    }

    /// Replace the stored dataset with this export's contents
    pub fn apply(&self, storage: &Storage) -> FinanzasResult<()> {
        storage.transactions.replace_all(self.transactions.clone())?;
        storage.recurring.replace_all(self.recurring_expenses.clone())?;
        storage.save_all()
    }
}

/// Export the full dataset to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> FinanzasResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| crate::error::FinanzasError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export (for verification/restore)
pub fn import_from_json(json_str: &str) -> FinanzasResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)
        .map_err(|e| crate::error::FinanzasError::Import(e.to_string()))?;

    // Validate the import
    export
        .validate()
        .map_err(crate::error::FinanzasError::Import)?;

    Ok(export)
}
