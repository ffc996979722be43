//! Alerts and recommendations
//!
//! Derives the dashboard's message panel from the aggregates: spending
//! warnings, a savings tip for the dominant category, and a small-purchase
//! ("gastos hormiga") detector.

use crate::models::{Money, Transaction};

use super::aggregate::{top_category, CategoryAggregate, Totals};

/// Share of total expenses above which a category triggers a warning
const DOMINANT_CATEGORY_PCT: i64 = 30;

/// Spend rate (expenses over income) above which a warning fires
const HIGH_SPEND_PCT: i64 = 80;

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Tip,
    Info,
}

impl AlertKind {
    /// Display icon for this alert kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Warning => "⚠️",
            Self::Tip => "💡",
            Self::Info => "📉",
        }
    }
}

/// A single dashboard alert
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    fn warning(message: String) -> Self {
        Self {
            kind: AlertKind::Warning,
            message,
        }
    }

    fn tip(message: String) -> Self {
        Self {
            kind: AlertKind::Tip,
            message,
        }
    }

    fn info(message: String) -> Self {
        Self {
            kind: AlertKind::Info,
            message,
        }
    }
}

/// Build the alert list for the current aggregates
///
/// `small_expense_threshold` bounds what counts as a small purchase for the
/// "gastos hormiga" detector. Warnings come first, then tips, then info,
/// matching the panel's display order.
pub fn build_alerts(
    totals: &Totals,
    categories: &[CategoryAggregate],
    transactions: &[Transaction],
    small_expense_threshold: Money,
) -> Vec<Alert> {
    let mut alerts = Vec::new();
    let top = top_category(categories);

    if let Some(top) = top {
        if totals.expenses.is_positive() {
            let share = (top.amount.cents() * 100) / totals.expenses.cents();
            if share > DOMINANT_CATEGORY_PCT {
                alerts.push(Alert::warning(format!(
                    "El gasto en {} superó el {}% de tus gastos este mes",
                    top.name, DOMINANT_CATEGORY_PCT
                )));
            }
        }
    }

    if totals.income.is_positive() && totals.expense_pct > HIGH_SPEND_PCT {
        alerts.push(Alert::warning(format!(
            "Has gastado el {}% de tus ingresos",
            totals.expense_pct
        )));
    }

    if let Some(top) = top {
        if top.amount.is_positive() {
            let saving = Money::from_cents(top.amount.cents() / 10);
            alerts.push(Alert::tip(format!(
                "Reduciendo {} en 10% ahorrarías {}",
                top.name, saving
            )));
        }
    }

    let small_total: Money = transactions
        .iter()
        .filter(|t| t.is_expense() && t.amount.is_positive() && t.amount < small_expense_threshold)
        .map(|t| t.amount)
        .sum();
    if small_total.is_positive() {
        alerts.push(Alert::info(format!(
            "Gastos hormiga detectados: {} en compras menores",
            small_total
        )));
    }

    alerts
}
