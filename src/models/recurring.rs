//! Recurring expense model
//!
//! Represents a monthly subscription or fixed payment (Netflix, gym, ...).
//! Each entry carries a stable unique identifier assigned at creation time,
//! so edits and deletes address the record itself rather than its position
//! in the list.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecurringId;
use super::money::Money;

/// Default display icon for a recurring expense
pub const DEFAULT_RECURRING_ICON: &str = "📦";

/// A recurring monthly expense (subscription or fixed payment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringExpense {
    /// Unique identifier
    pub id: RecurringId,

    /// Name of the subscription ("Netflix", "Gimnasio", ...)
    pub name: String,

    /// Monthly amount
    pub amount: Money,

    /// Display icon
    pub icon: String,
}

impl RecurringExpense {
    /// Create a new recurring expense
    pub fn new(name: impl Into<String>, amount: Money, icon: impl Into<String>) -> Self {
        Self {
            id: RecurringId::new(),
            name: name.into(),
            amount,
            icon: icon.into(),
        }
    }

    /// Create a recurring expense with the default icon
    pub fn with_default_icon(name: impl Into<String>, amount: Money) -> Self {
        Self::new(name, amount, DEFAULT_RECURRING_ICON)
    }

    /// Validate the fields for creation (name required, amount strictly positive)
    pub fn validate(&self) -> Result<(), RecurringValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecurringValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(RecurringValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for RecurringExpense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.icon, self.name, self.amount)
    }
}

/// Validation errors for recurring expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurringValidationError {
    EmptyName,
    NonPositiveAmount(Money),
}

impl fmt::Display for RecurringValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name must not be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive (got {})", amount)
            }
        }
    }
}

impl std::error::Error for RecurringValidationError {}
