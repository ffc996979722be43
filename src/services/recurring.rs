//! Recurring-expense service
//!
//! Business logic for subscriptions: validated create, amount edits, and
//! deletes, all addressed by stable ID. Mutations are audited and persisted
//! immediately, like transactions.

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::error::{FinanzasError, FinanzasResult};
use crate::models::{Money, RecurringExpense, RecurringId, DEFAULT_RECURRING_ICON};
use crate::storage::Storage;

/// Service for recurring-expense operations
pub struct RecurringService<'a> {
    storage: &'a Storage,
    audit: AuditLogger,
}

impl<'a> RecurringService<'a> {
    /// Create a new recurring-expense service
    pub fn new(storage: &'a Storage) -> Self {
        let audit = AuditLogger::new(storage.paths().audit_log());
        Self { storage, audit }
    }

    /// Create a new recurring expense
    ///
    /// The name must be non-empty and the amount strictly positive; the icon
    /// defaults to 📦 when not given.
    pub fn add(
        &self,
        name: impl Into<String>,
        amount: Money,
        icon: Option<String>,
    ) -> FinanzasResult<RecurringExpense> {
        let icon = icon.unwrap_or_else(|| DEFAULT_RECURRING_ICON.to_string());
        let expense = RecurringExpense::new(name, amount, icon);
        expense
            .validate()
            .map_err(|e| FinanzasError::Validation(e.to_string()))?;

        self.storage.recurring.add(expense.clone())?;

        self.audit.log(
            &AuditEntry::new(Operation::Create, EntityType::Recurring, expense.id.to_string())
                .with_name(expense.name.clone())
                .with_after(serde_json::to_value(&expense)?),
        )?;

        self.storage.recurring.save()?;
        Ok(expense)
    }

    /// Update the monthly amount of a recurring expense
    ///
    /// Unlike creation, an amount of zero is allowed here (a paused
    /// subscription); negative amounts are still rejected.
    pub fn update_amount(&self, id: RecurringId, amount: Money) -> FinanzasResult<RecurringExpense> {
        if amount.is_negative() {
            return Err(FinanzasError::Validation(format!(
                "Amount must not be negative (got {})",
                amount
            )));
        }

        let before = self
            .storage
            .recurring
            .get(id)?
            .ok_or_else(|| FinanzasError::recurring_not_found(id.to_string()))?;

        let after = self
            .storage
            .recurring
            .update_amount(id, amount)?
            .ok_or_else(|| FinanzasError::recurring_not_found(id.to_string()))?;

        self.audit.log(
            &AuditEntry::new(Operation::Update, EntityType::Recurring, id.to_string())
                .with_name(after.name.clone())
                .with_before(serde_json::to_value(&before)?)
                .with_after(serde_json::to_value(&after)?),
        )?;

        self.storage.recurring.save()?;
        Ok(after)
    }

    /// Delete a recurring expense by ID
    pub fn remove(&self, id: RecurringId) -> FinanzasResult<RecurringExpense> {
        let removed = self
            .storage
            .recurring
            .delete(id)?
            .ok_or_else(|| FinanzasError::recurring_not_found(id.to_string()))?;

        self.audit.log(
            &AuditEntry::new(Operation::Delete, EntityType::Recurring, id.to_string())
                .with_name(removed.name.clone())
                .with_before(serde_json::to_value(&removed)?),
        )?;

        self.storage.recurring.save()?;
        Ok(removed)
    }

    /// All recurring expenses in insertion order
    pub fn list(&self) -> FinanzasResult<Vec<RecurringExpense>> {
        self.storage.recurring.get_all()
    }

    /// Total monthly amount
    pub fn total(&self) -> FinanzasResult<Money> {
        self.storage.recurring.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinanzasPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanzasPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.transactions.replace_all(Vec::new()).unwrap();
        storage.recurring.replace_all(Vec::new()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_with_default_icon() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);

        let expense = service.add("Seguro", Money::from_soles(90), None).unwrap();
        assert_eq!(expense.icon, DEFAULT_RECURRING_ICON);
        assert_eq!(service.total().unwrap(), Money::from_soles(90));
    }

    #[test]
    fn test_add_rejects_zero_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);

        let result = service.add("Spotify", Money::zero(), None);
        assert!(matches!(result, Err(FinanzasError::Validation(_))));
        assert_eq!(storage.recurring.count().unwrap(), 0);
    }

    #[test]
    fn test_update_amount_allows_zero() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);

        let expense = service
            .add("Netflix", Money::from_soles(35), Some("📺".into()))
            .unwrap();
        let updated = service.update_amount(expense.id, Money::zero()).unwrap();
        assert_eq!(updated.amount, Money::zero());
    }

    #[test]
    fn test_update_amount_rejects_negative() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);

        let expense = service
            .add("Netflix", Money::from_soles(35), Some("📺".into()))
            .unwrap();
        let result = service.update_amount(expense.id, Money::from_cents(-100));
        assert!(matches!(result, Err(FinanzasError::Validation(_))));
    }

    #[test]
    fn test_delete_then_re_add_regression() {
        // Deleting an edited subscription and adding a new one with the
        // same name must not bring the edited amount back.
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);

        let gym = service.add("Gimnasio", Money::from_soles(120), None).unwrap();
        service.update_amount(gym.id, Money::from_soles(150)).unwrap();
        service.remove(gym.id).unwrap();

        let fresh = service.add("Gimnasio", Money::from_soles(120), None).unwrap();
        assert_ne!(fresh.id, gym.id);
        assert_eq!(fresh.amount, Money::from_soles(120));
        assert_eq!(service.total().unwrap(), Money::from_soles(120));
    }

    #[test]
    fn test_remove_unknown_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);

        let result = service.remove(RecurringId::new());
        assert!(matches!(result, Err(FinanzasError::NotFound { .. })));
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);

        let expense = service.add("Spotify", Money::from_soles(25), None).unwrap();
        service.update_amount(expense.id, Money::from_soles(30)).unwrap();
        service.remove(expense.id).unwrap();

        let audit = AuditLogger::new(storage.paths().audit_log());
        let entries = audit.read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(entries[2].operation, Operation::Delete);
    }
}
