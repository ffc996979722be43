//! Category breakdown report
//!
//! The "where did the money go" view: per-category expense totals with
//! share-of-total percentages, recurring subscriptions folded in.

use std::io::Write;

use crate::error::FinanzasResult;
use crate::models::{Money, RecurringExpense, Transaction};
use crate::services::aggregate::{category_totals, top_category, CategoryAggregate};

/// One row of the breakdown
#[derive(Debug, Clone)]
pub struct CategoryRow {
    /// The underlying aggregate
    pub aggregate: CategoryAggregate,
    /// Share of total expenses, in percent
    pub percentage: f64,
}

/// Category breakdown report
#[derive(Debug, Clone)]
pub struct CategoryBreakdownReport {
    /// Rows in first-appearance order
    pub rows: Vec<CategoryRow>,
    /// Total across all rows (transaction expenses plus recurring)
    pub total: Money,
}

impl CategoryBreakdownReport {
    /// Generate the report from a (filtered) transaction list
    pub fn generate(transactions: &[Transaction], recurring: &[RecurringExpense]) -> Self {
        let aggregates = category_totals(transactions, recurring);
        let total: Money = aggregates.iter().map(|a| a.amount).sum();

        let rows = aggregates
            .into_iter()
            .map(|aggregate| {
                let percentage = if total.is_positive() {
                    (aggregate.amount.cents() as f64 / total.cents() as f64) * 100.0
                } else {
                    0.0
                };
                CategoryRow {
                    aggregate,
                    percentage,
                }
            })
            .collect();

        Self { rows, total }
    }

    /// The row with the highest spend
    pub fn top(&self) -> Option<&CategoryRow> {
        let aggregates: Vec<_> = self.rows.iter().map(|r| r.aggregate.clone()).collect();
        let top = top_category(&aggregates)?;
        self.rows.iter().find(|r| r.aggregate.name == top.name)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.rows.is_empty() {
            return "Sin gastos en el período seleccionado.\n".to_string();
        }

        let mut output = String::new();

        output.push_str("Gastos por Categoría\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "{:<4} {:<20} {:>14} {:>8}\n",
            "", "Categoría", "Monto", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<4} {:<20} {:>14} {:>7.1}%\n",
                row.aggregate.icon,
                row.aggregate.name,
                row.aggregate.amount.to_string(),
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<4} {:<20} {:>14}\n",
            "", "Total", self.total.to_string()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanzasResult<()> {
        writeln!(writer, "Category,Amount,Percentage,Color,Icon")
            .map_err(|e| crate::error::FinanzasError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{:.2},{},{}",
                row.aggregate.name,
                row.aggregate.amount.as_soles_f64(),
                row.percentage,
                row.aggregate.color,
                row.aggregate.icon
            )
            .map_err(|e| crate::error::FinanzasError::Export(e.to_string()))?;
        }

        writeln!(writer, "TOTAL,{:.2},100.00,,", self.total.as_soles_f64())
            .map_err(|e| crate::error::FinanzasError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{seed_recurring, seed_transactions};

    #[test]
    fn test_generate_from_seed() {
        let report = CategoryBreakdownReport::generate(&seed_transactions(), &seed_recurring());

        // Six seed categories; recurring folds into the existing Servicios bucket
        assert_eq!(report.rows.len(), 6);
        assert_eq!(report.total, Money::from_soles(2760 + 425));

        let servicios = report
            .rows
            .iter()
            .find(|r| r.aggregate.name == "Servicios")
            .unwrap();
        assert_eq!(servicios.aggregate.amount, Money::from_soles(265 + 425));
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        let report = CategoryBreakdownReport::generate(&seed_transactions(), &seed_recurring());
        let total_pct: f64 = report.rows.iter().map(|r| r.percentage).sum();
        assert!((total_pct - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_top_row() {
        let report = CategoryBreakdownReport::generate(&seed_transactions(), &[]);
        // Vivienda (1030) is the largest seed category without recurring
        assert_eq!(report.top().unwrap().aggregate.name, "Vivienda");
    }

    #[test]
    fn test_empty_report() {
        let report = CategoryBreakdownReport::generate(&[], &[]);
        assert!(report.rows.is_empty());
        assert_eq!(report.total, Money::zero());
        assert!(report.format_terminal().contains("Sin gastos"));
    }

    #[test]
    fn test_terminal_format_lists_categories() {
        let report = CategoryBreakdownReport::generate(&seed_transactions(), &[]);
        let text = report.format_terminal();
        assert!(text.contains("Alimentación"));
        assert!(text.contains("Total"));
    }

    #[test]
    fn test_csv_export() {
        let report = CategoryBreakdownReport::generate(&seed_transactions(), &[]);
        let mut output = Vec::new();
        report.export_csv(&mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.starts_with("Category,Amount"));
        assert!(csv.contains("Vivienda,1030.00"));
        assert!(csv.contains("TOTAL,2760.00"));
    }
}
