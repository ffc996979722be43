//! Transaction filtering
//!
//! Applies the dashboard's filter criteria (kind, category, date range,
//! free-text search) to a transaction list. Pure: the reference date is an
//! explicit parameter, so results are reproducible in tests.

use chrono::{Months, NaiveDate};

use crate::models::{Transaction, TransactionKind};

/// Filter by transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind.is_income(),
            Self::Expense => kind.is_expense(),
        }
    }
}

impl std::str::FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "todos" => Ok(Self::All),
            "income" | "ingreso" | "ingresos" => Ok(Self::Income),
            "expense" | "gasto" | "gastos" => Ok(Self::Expense),
            other => Err(format!("unknown kind filter: {}", other)),
        }
    }
}

/// Filter by how far back transactions are considered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRangeFilter {
    #[default]
    All,
    /// Last calendar month
    LastMonth,
    /// Last three months
    LastQuarter,
    /// Last twelve months
    LastYear,
}

impl DateRangeFilter {
    /// The inclusive lower bound for this range, relative to `today`
    ///
    /// Month subtraction is calendar-clamped (Mar 31 minus one month is the
    /// last day of February).
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        let months = match self {
            Self::All => return None,
            Self::LastMonth => 1,
            Self::LastQuarter => 3,
            Self::LastYear => 12,
        };
        today.checked_sub_months(Months::new(months))
    }
}

impl std::str::FromStr for DateRangeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "todo" => Ok(Self::All),
            "month" | "mes" => Ok(Self::LastMonth),
            "quarter" | "trimestre" => Ok(Self::LastQuarter),
            "year" | "año" | "ano" => Ok(Self::LastYear),
            other => Err(format!("unknown date range: {}", other)),
        }
    }
}

/// The full set of dashboard filter criteria
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Kind filter (all / income / expense)
    pub kind: KindFilter,
    /// Exact category name, or `None` for all categories
    pub category: Option<String>,
    /// Date-range lower bound
    pub range: DateRangeFilter,
    /// Case-insensitive substring search over description and category
    pub search: String,
}

impl FilterCriteria {
    /// Check whether any filter deviates from the defaults
    pub fn is_active(&self) -> bool {
        self.kind != KindFilter::All
            || self.category.is_some()
            || self.range != DateRangeFilter::All
            || !self.search.trim().is_empty()
    }

    /// Apply the criteria to a transaction list
    ///
    /// Predicates run in order: kind, category, date range, search. Relative
    /// list order is preserved, so the function is idempotent.
    pub fn apply(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<Transaction> {
        let cutoff = self.range.cutoff(today);
        let query = self.search.trim().to_lowercase();

        transactions
            .iter()
            .filter(|t| self.kind.matches(t.kind))
            .filter(|t| match &self.category {
                Some(category) => &t.category == category,
                None => true,
            })
            .filter(|t| match cutoff {
                Some(cutoff) => t.date >= cutoff,
                None => true,
            })
            .filter(|t| {
                if query.is_empty() {
                    return true;
                }
                t.description.to_lowercase().contains(&query)
                    || t.category.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::seed_transactions;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
    }

    #[test]
    fn test_default_criteria_keeps_everything() {
        let transactions = seed_transactions();
        let criteria = FilterCriteria::default();
        assert!(!criteria.is_active());
        assert_eq!(criteria.apply(&transactions, today()).len(), transactions.len());
    }

    #[test]
    fn test_kind_filter() {
        let transactions = seed_transactions();
        let criteria = FilterCriteria {
            kind: KindFilter::Income,
            ..Default::default()
        };
        let filtered = criteria.apply(&transactions, today());
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|t| t.is_income()));
    }

    #[test]
    fn test_category_filter() {
        let transactions = seed_transactions();
        let criteria = FilterCriteria {
            category: Some("Vivienda".to_string()),
            ..Default::default()
        };
        let filtered = criteria.apply(&transactions, today());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_combined_filter_finds_single_uber_transaction() {
        let transactions = seed_transactions();
        let criteria = FilterCriteria {
            kind: KindFilter::Expense,
            category: Some("Transporte".to_string()),
            search: "uber".to_string(),
            ..Default::default()
        };
        let filtered = criteria.apply(&transactions, today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Uber");
    }

    #[test]
    fn test_search_matches_category_too() {
        let transactions = seed_transactions();
        let criteria = FilterCriteria {
            search: "ALIMENT".to_string(),
            ..Default::default()
        };
        let filtered = criteria.apply(&transactions, today());
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_date_range_cutoff_is_inclusive() {
        let transactions = seed_transactions();
        // One month back from 2025-01-01 is 2024-12-01; every seed
        // transaction is on or after that date.
        let reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let criteria = FilterCriteria {
            range: DateRangeFilter::LastMonth,
            ..Default::default()
        };
        assert_eq!(criteria.apply(&transactions, reference).len(), transactions.len());

        // Three months later the whole of December falls outside the window
        let reference = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert!(criteria.apply(&transactions, reference).is_empty());
    }

    #[test]
    fn test_month_subtraction_clamps_to_calendar() {
        let end_of_march = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        assert_eq!(
            DateRangeFilter::LastMonth.cutoff(end_of_march),
            Some(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap())
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let transactions = seed_transactions();
        let criteria = FilterCriteria {
            kind: KindFilter::Expense,
            range: DateRangeFilter::LastYear,
            search: "a".to_string(),
            ..Default::default()
        };

        let once = criteria.apply(&transactions, today());
        let twice = criteria.apply(&once, today());
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_empty_result_is_valid() {
        let transactions = seed_transactions();
        let criteria = FilterCriteria {
            search: "no-such-thing".to_string(),
            ..Default::default()
        };
        assert!(criteria.apply(&transactions, today()).is_empty());
    }

    #[test]
    fn test_zero_amount_transactions_survive_filters() {
        let transactions = vec![crate::models::Transaction::new(
            "Ajuste",
            Money::zero(),
            "Otros",
            today(),
            crate::models::TransactionKind::Expense,
        )];
        let criteria = FilterCriteria {
            kind: KindFilter::Expense,
            ..Default::default()
        };
        assert_eq!(criteria.apply(&transactions, today()).len(), 1);
    }
}
