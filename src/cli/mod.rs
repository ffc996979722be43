//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod recurring;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, handle_restore_command};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;
use clap::Args;

use crate::error::{FinanzasError, FinanzasResult};
use crate::models::Money;
use crate::services::FilterCriteria;

/// Shared filter flags for list and report commands
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Filter by kind (all, income, expense)
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Filter by exact category name
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by period (all, month, quarter, year)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Case-insensitive search over description and category
    #[arg(short, long)]
    pub search: Option<String>,
}

impl FilterArgs {
    /// Convert the raw flags into filter criteria
    pub fn into_criteria(self) -> FinanzasResult<FilterCriteria> {
        let mut criteria = FilterCriteria::default();

        if let Some(kind) = self.kind {
            criteria.kind = kind.parse().map_err(FinanzasError::Validation)?;
        }
        criteria.category = self.category;
        if let Some(period) = self.period {
            criteria.range = period.parse().map_err(FinanzasError::Validation)?;
        }
        if let Some(search) = self.search {
            criteria.search = search;
        }

        Ok(criteria)
    }
}

/// Parse a money amount argument
pub fn parse_amount(s: &str) -> FinanzasResult<Money> {
    Money::parse(s).map_err(|e| FinanzasError::Validation(format!("Invalid amount: {}", e)))
}

/// Parse a date argument (YYYY-MM-DD)
pub fn parse_date(s: &str) -> FinanzasResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| FinanzasError::Validation(format!("Invalid date (use YYYY-MM-DD): {}", s)))
}

/// Today's date in local time, threaded into the pure filter pipeline
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
