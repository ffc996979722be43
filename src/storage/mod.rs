//! Storage layer for finanzas-cli
//!
//! Provides JSON snapshot storage with atomic writes. The application holds
//! the full dataset in memory and writes complete snapshots back after every
//! mutation, mirroring the two storage keys of the original dashboard.

pub mod file_io;
pub mod recurring;
pub mod seed;
pub mod transactions;

pub use file_io::{read_json, read_snapshot, write_json_atomic};
pub use recurring::RecurringRepository;
pub use seed::{seed_recurring, seed_transactions};
pub use transactions::TransactionRepository;

use crate::config::paths::FinanzasPaths;
use crate::error::FinanzasError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: FinanzasPaths,
    pub transactions: TransactionRepository,
    pub recurring: RecurringRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinanzasPaths) -> Result<Self, FinanzasError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            recurring: RecurringRepository::new(paths.recurring_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinanzasPaths {
        &self.paths
    }

    /// Load both datasets from disk
    ///
    /// Either file falling back to seed data is persisted immediately, so
    /// the next launch reads the same snapshot the dashboard showed.
    pub fn load_all(&self) -> Result<(), FinanzasError> {
        if self.transactions.load()? {
            self.transactions.save()?;
        }
        if self.recurring.load()? {
            self.recurring.save()?;
        }
        Ok(())
    }

    /// Save both datasets to disk
    pub fn save_all(&self) -> Result<(), FinanzasError> {
        self.transactions.save()?;
        self.recurring.save()?;
        Ok(())
    }

    /// Wipe everything: empty both lists and persist the empty snapshots
    pub fn reset_all(&self) -> Result<(), FinanzasError> {
        self.transactions.replace_all(Vec::new())?;
        self.recurring.replace_all(Vec::new())?;
        file_io::remove_if_exists(self.paths.transactions_file())?;
        file_io::remove_if_exists(self.paths.recurring_file())?;
        self.save_all()
    }

    /// Re-seed both datasets with the sample ledger and persist them
    pub fn init_seed(&self) -> Result<(), FinanzasError> {
        self.transactions.replace_all(seed_transactions())?;
        self.recurring.replace_all(seed_recurring())?;
        self.save_all()
    }
}
