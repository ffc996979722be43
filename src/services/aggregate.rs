//! Derived dashboard views
//!
//! Pure reduction functions that turn the (filtered) transaction list and
//! the recurring expenses into everything the dashboard shows: category
//! totals, the monthly income/expense/savings series, headline totals, and
//! savings-goal progress. Everything is recomputed from scratch on each
//! call; there is no cached or incremental state.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{catalog, Money, RecurringExpense, Transaction};

/// Spanish month names, indexed by month number - 1
const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Locale month label for a date, e.g. "diciembre de 2024"
pub fn month_label(date: NaiveDate) -> String {
    format!(
        "{} de {}",
        SPANISH_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Total spend per category, with display metadata resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate {
    /// Category name
    pub name: String,
    /// Summed expense amount
    pub amount: Money,
    /// Chart color (hex)
    pub color: &'static str,
    /// Display icon
    pub icon: &'static str,
}

/// Group expense transactions by category, in first-appearance order
///
/// The recurring-expense total is folded into the fixed
/// [`catalog::RECURRING_CATEGORY`] bucket whenever the recurring list is
/// non-empty, merging with that category's own entries if it already has
/// a bucket.
pub fn category_totals(
    transactions: &[Transaction],
    recurring: &[RecurringExpense],
) -> Vec<CategoryAggregate> {
    let mut totals: Vec<(String, Money)> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match totals.iter_mut().find(|(name, _)| name == &txn.category) {
            Some((_, amount)) => *amount += txn.amount,
            None => totals.push((txn.category.clone(), txn.amount)),
        }
    }

    if !recurring.is_empty() {
        let recurring_total: Money = recurring.iter().map(|e| e.amount).sum();
        match totals
            .iter_mut()
            .find(|(name, _)| name == catalog::RECURRING_CATEGORY)
        {
            Some((_, amount)) => *amount += recurring_total,
            None => totals.push((catalog::RECURRING_CATEGORY.to_string(), recurring_total)),
        }
    }

    totals
        .into_iter()
        .map(|(name, amount)| {
            let style = catalog::style_for(&name);
            CategoryAggregate {
                name,
                amount,
                color: style.color,
                icon: style.icon,
            }
        })
        .collect()
}

/// Per-month income/expense/savings totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAggregate {
    /// Locale month label ("diciembre de 2024")
    pub month: String,
    /// Summed income
    pub income: Money,
    /// Summed expenses, including the uniform recurring total
    pub expenses: Money,
    /// income - expenses, after the recurring total is applied
    pub savings: Money,
}

/// Bucket transactions by calendar month+year, in first-seen order
///
/// The recurring total is added to every bucket's expenses uniformly; no
/// bucket is synthesized for a month without transactions of its own.
/// Savings are derived after the recurring total is applied.
pub fn monthly_series(
    transactions: &[Transaction],
    recurring_total: Money,
) -> Vec<MonthlyAggregate> {
    let mut keys: Vec<(i32, u32)> = Vec::new();
    let mut buckets: Vec<MonthlyAggregate> = Vec::new();

    for txn in transactions {
        let key = (txn.date.year(), txn.date.month());
        let index = match keys.iter().position(|k| *k == key) {
            Some(index) => index,
            None => {
                keys.push(key);
                buckets.push(MonthlyAggregate {
                    month: month_label(txn.date),
                    income: Money::zero(),
                    expenses: Money::zero(),
                    savings: Money::zero(),
                });
                buckets.len() - 1
            }
        };

        if txn.is_income() {
            buckets[index].income += txn.amount;
        } else {
            buckets[index].expenses += txn.amount;
        }
    }

    for bucket in &mut buckets {
        bucket.expenses += recurring_total;
        bucket.savings = bucket.income - bucket.expenses;
    }

    buckets
}

/// Headline totals for the metric cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Sum of income transactions
    pub income: Money,
    /// Sum of expense transactions plus the recurring total
    pub expenses: Money,
    /// income - expenses
    pub savings: Money,
    /// round(expenses / income * 100), or 0 with no income
    pub expense_pct: i64,
    /// round(savings / income * 100), or 0 with no income
    pub savings_pct: i64,
}

/// Rounded percentage of `part` over `whole`; 0 when `whole` is not positive
fn percent_of(part: Money, whole: Money) -> i64 {
    if whole.is_positive() {
        ((part.cents() as f64 / whole.cents() as f64) * 100.0).round() as i64
    } else {
        0
    }
}

/// Compute the headline totals over a (filtered) transaction list
pub fn headline_totals(transactions: &[Transaction], recurring_total: Money) -> Totals {
    let income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();

    let spent: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    let expenses = spent + recurring_total;
    let savings = income - expenses;

    Totals {
        income,
        expenses,
        savings,
        expense_pct: percent_of(expenses, income),
        savings_pct: percent_of(savings, income),
    }
}

/// The category with the highest spend
///
/// Deterministic max scan; when two categories tie, the later one wins.
pub fn top_category(aggregates: &[CategoryAggregate]) -> Option<&CategoryAggregate> {
    aggregates.iter().max_by_key(|a| a.amount)
}

/// Compliance level for the savings goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsLevel {
    /// Savings rate meets the recommended target
    Excelente,
    /// Above 10% but below target
    Bueno,
    /// At or below 10%
    Mejorable,
}

impl std::fmt::Display for SavingsLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excelente => write!(f, "Excelente"),
            Self::Bueno => write!(f, "Bueno"),
            Self::Mejorable => write!(f, "Mejorable"),
        }
    }
}

/// Savings-goal progress against the recommended savings rate
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsGoal {
    /// Monthly savings (may be negative)
    pub savings: Money,
    /// Exact savings rate as a percentage of income (0 with no income)
    pub savings_rate: f64,
    /// The recommended target rate
    pub target_pct: f64,
    /// Whether the rate meets the target
    pub on_track: bool,
    /// Progress toward the target, clamped to 0..=100
    pub progress_pct: f64,
    /// Compliance level
    pub level: SavingsLevel,
}

impl SavingsGoal {
    /// Evaluate the savings goal for the given totals
    pub fn evaluate(income: Money, expenses: Money, target_pct: u8) -> Self {
        let savings = income - expenses;
        let savings_rate = if income.is_positive() {
            (savings.cents() as f64 / income.cents() as f64) * 100.0
        } else {
            0.0
        };
        let target_pct = f64::from(target_pct);
        let on_track = savings_rate >= target_pct;
        let progress_pct = if target_pct > 0.0 {
            (savings_rate / target_pct * 100.0).clamp(0.0, 100.0)
        } else {
            100.0
        };
        let level = if on_track {
            SavingsLevel::Excelente
        } else if savings_rate > 10.0 {
            SavingsLevel::Bueno
        } else {
            SavingsLevel::Mejorable
        };

        Self {
            savings,
            savings_rate,
            target_pct,
            on_track,
            progress_pct,
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecurringExpense, Transaction, TransactionKind};
    use crate::storage::{seed_recurring, seed_transactions};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, day).unwrap()
    }

    fn income(soles: i64) -> Transaction {
        Transaction::new(
            "Salario",
            Money::from_soles(soles),
            "Salario",
            date(1),
            TransactionKind::Income,
        )
    }

    fn expense(soles: i64, category: &str, day: u32) -> Transaction {
        Transaction::new(
            "Gasto",
            Money::from_soles(soles),
            category,
            date(day),
            TransactionKind::Expense,
        )
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(date(5)), "diciembre de 2024");
        assert_eq!(
            month_label(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()),
            "enero de 2025"
        );
    }

    #[test]
    fn test_headline_totals_example() {
        // Acceptance example: 3500 income, 450 + 900 expenses, no recurring
        let transactions = vec![
            income(3500),
            expense(450, "Alimentación", 5),
            expense(900, "Vivienda", 1),
        ];

        let totals = headline_totals(&transactions, Money::zero());
        assert_eq!(totals.income, Money::from_soles(3500));
        assert_eq!(totals.expenses, Money::from_soles(1350));
        assert_eq!(totals.savings, Money::from_soles(2150));
        assert_eq!(totals.expense_pct, 39);
        assert_eq!(totals.savings_pct, 61);
    }

    #[test]
    fn test_headline_totals_zero_income() {
        let transactions = vec![expense(100, "Ocio", 9)];
        let totals = headline_totals(&transactions, Money::from_soles(50));
        assert_eq!(totals.income, Money::zero());
        assert_eq!(totals.expenses, Money::from_soles(150));
        assert_eq!(totals.expense_pct, 0);
        assert_eq!(totals.savings_pct, 0);
    }

    #[test]
    fn test_headline_totals_includes_recurring() {
        let transactions = vec![income(1000), expense(200, "Ocio", 9)];
        let totals = headline_totals(&transactions, Money::from_soles(300));
        assert_eq!(totals.expenses, Money::from_soles(500));
        assert_eq!(totals.savings, Money::from_soles(500));
        assert_eq!(totals.expense_pct, 50);
        assert_eq!(totals.savings_pct, 50);
    }

    #[test]
    fn test_category_totals_first_appearance_order() {
        let transactions = vec![
            expense(100, "Ocio", 9),
            expense(50, "Alimentación", 5),
            expense(25, "Ocio", 13),
        ];
        let aggregates = category_totals(&transactions, &[]);

        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].name, "Ocio");
        assert_eq!(aggregates[0].amount, Money::from_soles(125));
        assert_eq!(aggregates[1].name, "Alimentación");
    }

    #[test]
    fn test_category_totals_ignores_income() {
        let transactions = vec![income(3500), expense(100, "Ocio", 9)];
        let aggregates = category_totals(&transactions, &[]);
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].name, "Ocio");
    }

    #[test]
    fn test_category_totals_recurring_only() {
        // Acceptance example: no transactions, recurring 35 + 25
        let recurring = vec![
            RecurringExpense::new("Netflix", Money::from_soles(35), "📺"),
            RecurringExpense::new("Spotify", Money::from_soles(25), "🎵"),
        ];
        let aggregates = category_totals(&[], &recurring);

        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].name, catalog::RECURRING_CATEGORY);
        assert_eq!(aggregates[0].amount, Money::from_soles(60));
        assert_eq!(aggregates[0].icon, "💡");
    }

    #[test]
    fn test_category_totals_recurring_merges_into_existing_bucket() {
        let transactions = vec![expense(120, "Servicios", 1)];
        let recurring = vec![RecurringExpense::new(
            "Netflix",
            Money::from_soles(35),
            "📺",
        )];
        let aggregates = category_totals(&transactions, &recurring);

        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].amount, Money::from_soles(155));
    }

    #[test]
    fn test_category_totals_unknown_category_uses_fallback_style() {
        let transactions = vec![expense(30, "Mascotas", 2)];
        let aggregates = category_totals(&transactions, &[]);
        assert_eq!(aggregates[0].color, "#AAB7B8");
        assert_eq!(aggregates[0].icon, "📦");
    }

    #[test]
    fn test_category_sum_invariant() {
        // Sum of aggregates minus the recurring total equals the sum of
        // expense-kind transaction amounts
        let transactions = seed_transactions();
        let recurring = seed_recurring();

        let recurring_total: Money = recurring.iter().map(|e| e.amount).sum();
        let aggregate_sum: Money = category_totals(&transactions, &recurring)
            .iter()
            .map(|a| a.amount)
            .sum();
        let expense_sum: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        assert_eq!(aggregate_sum - recurring_total, expense_sum);
    }

    #[test]
    fn test_monthly_series_partitions_transactions() {
        let transactions = vec![
            expense(100, "Ocio", 9),
            income(3500),
            Transaction::new(
                "Curso",
                Money::from_soles(150),
                "Educación",
                NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                TransactionKind::Expense,
            ),
        ];

        let series = monthly_series(&transactions, Money::zero());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].month, "diciembre de 2024");
        assert_eq!(series[0].income, Money::from_soles(3500));
        assert_eq!(series[0].expenses, Money::from_soles(100));
        assert_eq!(series[1].month, "enero de 2025");
        assert_eq!(series[1].expenses, Money::from_soles(150));

        // Every transaction lands in exactly one bucket
        let bucketed: Money = series.iter().map(|b| b.income + b.expenses).sum();
        let total: Money = transactions.iter().map(|t| t.amount).sum();
        assert_eq!(bucketed, total);
    }

    #[test]
    fn test_monthly_series_adds_recurring_to_every_bucket() {
        let transactions = vec![
            expense(100, "Ocio", 9),
            Transaction::new(
                "Cine",
                Money::from_soles(45),
                "Ocio",
                NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(),
                TransactionKind::Expense,
            ),
        ];

        let series = monthly_series(&transactions, Money::from_soles(60));
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].expenses, Money::from_soles(160));
        assert_eq!(series[1].expenses, Money::from_soles(105));
        assert_eq!(series[0].savings, Money::from_soles(-160));
    }

    #[test]
    fn test_monthly_series_empty_without_transactions() {
        // Recurring expenses alone never synthesize a month bucket
        let series = monthly_series(&[], Money::from_soles(425));
        assert!(series.is_empty());
    }

    #[test]
    fn test_monthly_series_same_month_different_year() {
        let transactions = vec![
            Transaction::new(
                "Cena",
                Money::from_soles(80),
                "Alimentación",
                NaiveDate::from_ymd_opt(2023, 12, 24).unwrap(),
                TransactionKind::Expense,
            ),
            expense(100, "Ocio", 9),
        ];
        let series = monthly_series(&transactions, Money::zero());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].month, "diciembre de 2023");
        assert_eq!(series[1].month, "diciembre de 2024");
    }

    #[test]
    fn test_top_category() {
        let transactions = vec![
            expense(700, "Alimentación", 5),
            expense(1030, "Vivienda", 1),
            expense(310, "Transporte", 3),
        ];
        let aggregates = category_totals(&transactions, &[]);
        let top = top_category(&aggregates).unwrap();
        assert_eq!(top.name, "Vivienda");
    }

    #[test]
    fn test_top_category_empty() {
        assert!(top_category(&[]).is_none());
    }

    #[test]
    fn test_top_category_tie_is_deterministic() {
        let transactions = vec![expense(100, "Ocio", 9), expense(100, "Ropa", 10)];
        let aggregates = category_totals(&transactions, &[]);
        let first = top_category(&aggregates).unwrap().name.clone();
        let second = top_category(&aggregates).unwrap().name.clone();
        assert_eq!(first, second);
        assert_eq!(first, "Ropa");
    }

    #[test]
    fn test_savings_goal_on_track() {
        let goal = SavingsGoal::evaluate(Money::from_soles(3500), Money::from_soles(1350), 20);
        assert!(goal.on_track);
        assert_eq!(goal.level, SavingsLevel::Excelente);
        assert_eq!(goal.progress_pct, 100.0);
        assert!((goal.savings_rate - 61.428).abs() < 0.01);
    }

    #[test]
    fn test_savings_goal_below_target() {
        let goal = SavingsGoal::evaluate(Money::from_soles(1000), Money::from_soles(850), 20);
        assert!(!goal.on_track);
        assert_eq!(goal.level, SavingsLevel::Bueno);
        assert_eq!(goal.progress_pct, 75.0);
    }

    #[test]
    fn test_savings_goal_overspending() {
        let goal = SavingsGoal::evaluate(Money::from_soles(1000), Money::from_soles(1200), 20);
        assert!(goal.savings.is_negative());
        assert_eq!(goal.level, SavingsLevel::Mejorable);
        assert_eq!(goal.progress_pct, 0.0);
    }

    #[test]
    fn test_savings_goal_zero_income() {
        let goal = SavingsGoal::evaluate(Money::zero(), Money::from_soles(100), 20);
        assert_eq!(goal.savings_rate, 0.0);
        assert_eq!(goal.level, SavingsLevel::Mejorable);
    }
}
