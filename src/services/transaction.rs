//! Transaction service
//!
//! Business logic for the transaction list: validated create/edit/delete
//! plus the filtered read path. Every mutation is audited and immediately
//! persisted as a full snapshot (the caller is single-threaded, so
//! last-writer-wins is the whole story).

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::error::{FinanzasError, FinanzasResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind, TransactionUpdate};
use crate::storage::Storage;

use super::filter::FilterCriteria;

/// Service for transaction operations
pub struct TransactionService<'a> {
    storage: &'a Storage,
    audit: AuditLogger,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        let audit = AuditLogger::new(storage.paths().audit_log());
        Self { storage, audit }
    }

    /// Create a new transaction
    ///
    /// Rejects empty descriptions/categories and negative amounts with a
    /// validation error; nothing is stored in that case.
    pub fn add(
        &self,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        kind: TransactionKind,
    ) -> FinanzasResult<Transaction> {
        let txn = Transaction::new(description, amount, category, date, kind);
        txn.validate()
            .map_err(|e| FinanzasError::Validation(e.to_string()))?;

        self.storage.transactions.add(txn.clone())?;

        self.audit.log(
            &AuditEntry::new(Operation::Create, EntityType::Transaction, txn.id.to_string())
                .with_name(txn.description.clone())
                .with_after(serde_json::to_value(&txn)?),
        )?;

        self.storage.transactions.save()?;
        Ok(txn)
    }

    /// Edit a transaction in place by ID
    pub fn edit(&self, id: TransactionId, update: TransactionUpdate) -> FinanzasResult<Transaction> {
        if update.is_empty() {
            return Err(FinanzasError::Validation("Nothing to update".into()));
        }

        let before = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinanzasError::transaction_not_found(id.to_string()))?;

        // Validate the result before committing the edit
        let mut preview = before.clone();
        preview.apply_update(update.clone());
        preview
            .validate()
            .map_err(|e| FinanzasError::Validation(e.to_string()))?;

        let after = self
            .storage
            .transactions
            .update(id, update)?
            .ok_or_else(|| FinanzasError::transaction_not_found(id.to_string()))?;

        self.audit.log(
            &AuditEntry::new(Operation::Update, EntityType::Transaction, id.to_string())
                .with_name(after.description.clone())
                .with_before(serde_json::to_value(&before)?)
                .with_after(serde_json::to_value(&after)?),
        )?;

        self.storage.transactions.save()?;
        Ok(after)
    }

    /// Delete a transaction by ID
    pub fn remove(&self, id: TransactionId) -> FinanzasResult<Transaction> {
        let removed = self
            .storage
            .transactions
            .delete(id)?
            .ok_or_else(|| FinanzasError::transaction_not_found(id.to_string()))?;

        self.audit.log(
            &AuditEntry::new(Operation::Delete, EntityType::Transaction, id.to_string())
                .with_name(removed.description.clone())
                .with_before(serde_json::to_value(&removed)?),
        )?;

        self.storage.transactions.save()?;
        Ok(removed)
    }

    /// List transactions matching the given criteria
    pub fn list(
        &self,
        criteria: &FilterCriteria,
        today: NaiveDate,
    ) -> FinanzasResult<Vec<Transaction>> {
        let all = self.storage.transactions.get_all()?;
        Ok(criteria.apply(&all, today))
    }

    /// Unique category names across the full list, sorted
    pub fn categories(&self) -> FinanzasResult<Vec<String>> {
        self.storage.transactions.categories()
    }
}
