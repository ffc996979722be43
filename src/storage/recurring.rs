//! Recurring-expense repository for JSON storage
//!
//! Manages loading and saving the recurring-expense list to recurring.json.
//! Records are addressed by their stable ID, never by list position.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanzasError;
use crate::models::{Money, RecurringExpense, RecurringId};

use super::file_io::{read_snapshot, write_json_atomic};
use super::seed::seed_recurring;

/// Serializable recurring-expense snapshot
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RecurringData {
    recurring_expenses: Vec<RecurringExpense>,
}

/// Repository for recurring-expense persistence
pub struct RecurringRepository {
    path: PathBuf,
    data: RwLock<Vec<RecurringExpense>>,
}

impl RecurringRepository {
    /// Create a new recurring-expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load recurring expenses from disk
    ///
    /// An absent or malformed snapshot falls back to the built-in seed
    /// dataset. Returns `true` when the seed was used.
    pub fn load(&self) -> Result<bool, FinanzasError> {
        let (expenses, seeded) = match read_snapshot::<RecurringData, _>(&self.path) {
            Some(snapshot) => (snapshot.recurring_expenses, false),
            None => (seed_recurring(), true),
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = expenses;

        Ok(seeded)
    }

    /// Save the full recurring-expense snapshot to disk
    pub fn save(&self) -> Result<(), FinanzasError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let snapshot = RecurringData {
            recurring_expenses: data.clone(),
        };
        write_json_atomic(&self.path, &snapshot)
    }

    /// Get a recurring expense by ID
    pub fn get(&self, id: RecurringId) -> Result<Option<RecurringExpense>, FinanzasError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all recurring expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<RecurringExpense>, FinanzasError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Append a new recurring expense
    pub fn add(&self, expense: RecurringExpense) -> Result<(), FinanzasError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(expense);
        Ok(())
    }

    /// Update the amount of a recurring expense by ID
    pub fn update_amount(
        &self,
        id: RecurringId,
        amount: Money,
    ) -> Result<Option<RecurringExpense>, FinanzasError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|e| e.id == id) {
            Some(expense) => {
                expense.amount = amount;
                Ok(Some(expense.clone()))
            }
            None => Ok(None),
        }
    }

    /// Delete a recurring expense by ID
    pub fn delete(&self, id: RecurringId) -> Result<Option<RecurringExpense>, FinanzasError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter().position(|e| e.id == id) {
            Some(index) => Ok(Some(data.remove(index))),
            None => Ok(None),
        }
    }

    /// Replace the full recurring-expense list (restore / reset)
    pub fn replace_all(&self, expenses: Vec<RecurringExpense>) -> Result<(), FinanzasError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = expenses;
        Ok(())
    }

    /// Total monthly amount across all recurring expenses
    pub fn total(&self) -> Result<Money, FinanzasError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().map(|e| e.amount).sum())
    }

    /// Count recurring expenses
    pub fn count(&self) -> Result<usize, FinanzasError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanzasError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
