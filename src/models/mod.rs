//! Core data models for finanzas-cli
//!
//! This module contains all the data structures that represent the
//! personal-finance domain: transactions, recurring expenses, money,
//! and the shared category catalog.

pub mod catalog;
pub mod ids;
pub mod money;
pub mod recurring;
pub mod transaction;

pub use catalog::{style_for, CategoryStyle, DEFAULT_STYLE, RECURRING_CATEGORY};
pub use ids::{RecurringId, TransactionId};
pub use money::Money;
pub use recurring::{RecurringExpense, DEFAULT_RECURRING_ICON};
pub use transaction::{Transaction, TransactionKind, TransactionUpdate};
