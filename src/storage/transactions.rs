//! Transaction repository for JSON storage
//!
//! Manages loading and saving the transaction list to transactions.json.
//! The in-memory list preserves insertion order; aggregation bucket order
//! (first-appearance categories, first-seen months) depends on it.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanzasError;
use crate::models::{Transaction, TransactionId, TransactionUpdate};

use super::file_io::{read_snapshot, write_json_atomic};
use super::seed::seed_transactions;

/// Serializable transaction snapshot
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    ///
    /// An absent or malformed snapshot falls back to the built-in seed
    /// dataset without surfacing an error. Returns `true` when the seed
    /// was used so the caller can persist it right away.
    pub fn load(&self) -> Result<bool, FinanzasError> {
        let (transactions, seeded) = match read_snapshot::<TransactionData, _>(&self.path) {
            Some(snapshot) => (snapshot.transactions, false),
            None => (seed_transactions(), true),
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = transactions;

        Ok(seeded)
    }

    /// Save the full transaction snapshot to disk
    pub fn save(&self) -> Result<(), FinanzasError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let snapshot = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &snapshot)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FinanzasError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Get all transactions in insertion order
    pub fn get_all(&self) -> Result<Vec<Transaction>, FinanzasError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Append a new transaction
    pub fn add(&self, txn: Transaction) -> Result<(), FinanzasError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(txn);
        Ok(())
    }

    /// Update a transaction in place by ID, keeping its list position
    pub fn update(
        &self,
        id: TransactionId,
        update: TransactionUpdate,
    ) -> Result<Option<Transaction>, FinanzasError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|t| t.id == id) {
            Some(txn) => {
                txn.apply_update(update);
                Ok(Some(txn.clone()))
            }
            None => Ok(None),
        }
    }

    /// Delete a transaction by ID
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, FinanzasError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter().position(|t| t.id == id) {
            Some(index) => Ok(Some(data.remove(index))),
            None => Ok(None),
        }
    }

    /// Replace the full transaction list (restore / reset)
    pub fn replace_all(&self, transactions: Vec<Transaction>) -> Result<(), FinanzasError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = transactions;
        Ok(())
    }

    /// Unique category names, sorted
    pub fn categories(&self) -> Result<Vec<String>, FinanzasError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut categories: Vec<String> = data.iter().map(|t| t.category.clone()).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, FinanzasError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
