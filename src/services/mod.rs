//! Service layer for finanzas-cli
//!
//! The service layer provides business logic on top of the storage layer:
//! validated mutations, the filter pipeline, and the pure aggregation
//! functions that derive every dashboard view.

pub mod aggregate;
pub mod alerts;
pub mod filter;
pub mod recurring;
pub mod transaction;

pub use aggregate::{
    category_totals, headline_totals, month_label, monthly_series, top_category,
    CategoryAggregate, MonthlyAggregate, SavingsGoal, SavingsLevel, Totals,
};
pub use alerts::{build_alerts, Alert, AlertKind};
pub use filter::{DateRangeFilter, FilterCriteria, KindFilter};
pub use recurring::RecurringService;
pub use transaction::TransactionService;
