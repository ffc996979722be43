//! Dashboard overview report
//!
//! The single-page view: headline metric cards, top category, savings-goal
//! progress, and the alerts panel, all derived from the filtered
//! transaction list plus the recurring expenses.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::FinanzasResult;
use crate::models::Money;
use crate::services::aggregate::{
    category_totals, headline_totals, month_label, top_category, CategoryAggregate, SavingsGoal,
    Totals,
};
use crate::services::alerts::{build_alerts, Alert};
use crate::services::filter::FilterCriteria;
use crate::storage::Storage;

/// Spend rate above which the expense card flags "Alto"
const HIGH_EXPENSE_PCT: i64 = 80;

/// Dashboard overview
#[derive(Debug, Clone)]
pub struct DashboardOverview {
    /// Month range of the filtered set ("diciembre de 2024", "octubre de
    /// 2024 - enero de 2025", or "Sin transacciones")
    pub period_label: String,
    /// Transactions surviving the filters
    pub filtered_count: usize,
    /// All transactions on record
    pub total_count: usize,
    /// Recurring expenses on record
    pub recurring_count: usize,
    /// Whether any filter is active
    pub filters_active: bool,
    /// Headline totals
    pub totals: Totals,
    /// Monthly recurring total folded into the expense figures
    pub recurring_total: Money,
    /// Largest expense category, if any
    pub top_category: Option<CategoryAggregate>,
    /// Savings-goal evaluation
    pub goal: SavingsGoal,
    /// Alerts panel content
    pub alerts: Vec<Alert>,
}

impl DashboardOverview {
    /// Generate the overview for the given filter criteria
    pub fn generate(
        storage: &Storage,
        criteria: &FilterCriteria,
        settings: &Settings,
        today: NaiveDate,
    ) -> FinanzasResult<Self> {
        let all = storage.transactions.get_all()?;
        let recurring = storage.recurring.get_all()?;
        let filtered = criteria.apply(&all, today);

        let recurring_total: Money = recurring.iter().map(|e| e.amount).sum();
        let totals = headline_totals(&filtered, recurring_total);
        let categories = category_totals(&filtered, &recurring);
        let top = top_category(&categories).cloned();
        let goal = SavingsGoal::evaluate(totals.income, totals.expenses, settings.savings_target_pct);
        let alerts = build_alerts(
            &totals,
            &categories,
            &filtered,
            settings.small_expense_threshold,
        );

        Ok(Self {
            period_label: period_label(&filtered.iter().map(|t| t.date).collect::<Vec<_>>()),
            filtered_count: filtered.len(),
            total_count: all.len(),
            recurring_count: recurring.len(),
            filters_active: criteria.is_active(),
            totals,
            recurring_total,
            top_category: top,
            goal,
            alerts,
        })
    }

    /// Format the overview for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("📊 Panel de Finanzas Personales\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        output.push_str(&format!(
            "Período: {} | {} de {} transacciones | {} gastos recurrentes\n",
            self.period_label, self.filtered_count, self.total_count, self.recurring_count
        ));
        if self.filters_active {
            output.push_str("🔎 Filtros activos\n");
        }
        output.push('\n');

        output.push_str(&format!(
            "💰 Ingresos Totales   {:>14}\n",
            self.totals.income.to_string()
        ));
        let recurring_note = if self.recurring_total.is_positive() {
            format!("  (incluye {} recurrentes)", self.recurring_total)
        } else {
            String::new()
        };
        output.push_str(&format!(
            "💸 Gastos Totales     {:>14}{}\n",
            self.totals.expenses.to_string(),
            recurring_note
        ));
        output.push_str(&format!(
            "📈 Ahorro Total       {:>14}  ({}% de ingresos)\n",
            self.totals.savings.to_string(),
            self.totals.savings_pct
        ));
        let expense_flag = if self.totals.expense_pct > HIGH_EXPENSE_PCT {
            "Alto"
        } else {
            "Normal"
        };
        output.push_str(&format!(
            "📉 Gasto vs Ingreso   {:>13}%  ({})\n",
            self.totals.expense_pct, expense_flag
        ));
        output.push('\n');

        if let Some(top) = &self.top_category {
            output.push_str(&format!(
                "Categoría principal: {} {} ({})\n\n",
                top.icon, top.name, top.amount
            ));
        }

        output.push_str("🎯 Ahorro Inteligente\n");
        let goal_note = if self.goal.on_track {
            "¡Excelente! Estás cumpliendo tu meta de ahorro"
        } else {
            "Estás ahorrando por debajo del nivel recomendado"
        };
        output.push_str(&format!("   {}\n", goal_note));
        output.push_str(&format!(
            "   Ahorro mensual: {} ({:.1}% de tus ingresos)\n",
            self.goal.savings, self.goal.savings_rate
        ));
        output.push_str(&format!(
            "   Meta recomendada: {:.0}% | progreso {:.0}% | nivel {}\n",
            self.goal.target_pct, self.goal.progress_pct, self.goal.level
        ));

        if !self.alerts.is_empty() {
            output.push_str("\n🔔 Alertas y Recomendaciones\n");
            for alert in &self.alerts {
                output.push_str(&format!("   {} {}\n", alert.kind.icon(), alert.message));
            }
        }

        output
    }
}

/// Month range label over a set of dates
///
/// A single month collapses to one label; an empty set reads
/// "Sin transacciones".
fn period_label(dates: &[NaiveDate]) -> String {
    let min = dates.iter().min();
    let max = dates.iter().max();

    match (min, max) {
        (Some(min), Some(max)) => {
            let min_label = month_label(*min);
            let max_label = month_label(*max);
            if min_label == max_label {
                min_label
            } else {
                format!("{} - {}", min_label, max_label)
            }
        }
        _ => "Sin transacciones".to_string(),
    }
}
