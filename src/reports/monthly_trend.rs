//! Monthly trend report
//!
//! Income, expenses, and savings per month over the most recent six month
//! buckets, with per-column averages and a simple savings trend flag.

use std::io::Write;

use crate::error::FinanzasResult;
use crate::models::{Money, Transaction};
use crate::services::aggregate::{monthly_series, MonthlyAggregate};

/// How many month buckets the report shows
const TREND_WINDOW: usize = 6;

/// Direction of the savings trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Last month saved more than the window average
    Up,
    /// Last month saved less than (or equal to) the average
    Down,
}

/// Monthly trend report
#[derive(Debug, Clone)]
pub struct MonthlyTrendReport {
    /// The last six month buckets, in series order
    pub series: Vec<MonthlyAggregate>,
    /// Average income across the window
    pub avg_income: Money,
    /// Average expenses across the window
    pub avg_expenses: Money,
    /// Average savings across the window
    pub avg_savings: Money,
    /// Savings trend of the last month vs the average
    pub trend: Trend,
}

impl MonthlyTrendReport {
    /// Generate the report from a (filtered) transaction list
    pub fn generate(transactions: &[Transaction], recurring_total: Money) -> Self {
        let full = monthly_series(transactions, recurring_total);
        let skip = full.len().saturating_sub(TREND_WINDOW);
        let series: Vec<MonthlyAggregate> = full.into_iter().skip(skip).collect();

        let len = series.len() as i64;
        let (avg_income, avg_expenses, avg_savings) = if len > 0 {
            let income: Money = series.iter().map(|m| m.income).sum();
            let expenses: Money = series.iter().map(|m| m.expenses).sum();
            let savings: Money = series.iter().map(|m| m.savings).sum();
            (
                Money::from_cents(income.cents() / len),
                Money::from_cents(expenses.cents() / len),
                Money::from_cents(savings.cents() / len),
            )
        } else {
            (Money::zero(), Money::zero(), Money::zero())
        };

        let trend = match series.last() {
            Some(last) if last.savings > avg_savings => Trend::Up,
            _ => Trend::Down,
        };

        Self {
            series,
            avg_income,
            avg_expenses,
            avg_savings,
            trend,
        }
    }

    /// Whether there is anything to show
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "Sin datos históricos. Agrega transacciones para ver la tendencia mensual.\n"
                .to_string();
        }

        let mut output = String::new();

        output.push_str("Tendencia Mensual\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        output.push_str(&format!(
            "{:<22} {:>14} {:>14} {:>14}\n",
            "Mes", "Ingresos", "Gastos", "Ahorro"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for month in &self.series {
            output.push_str(&format!(
                "{:<22} {:>14} {:>14} {:>14}\n",
                month.month,
                month.income.to_string(),
                month.expenses.to_string(),
                month.savings.to_string()
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>14} {:>14} {:>14}\n",
            "Promedio",
            self.avg_income.to_string(),
            self.avg_expenses.to_string(),
            self.avg_savings.to_string()
        ));

        let trend_note = match self.trend {
            Trend::Up => "al alza",
            Trend::Down => "a la baja",
        };
        output.push_str(&format!(
            "\nAhorro promedio: {} por mes (tendencia {})\n",
            self.avg_savings, trend_note
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanzasResult<()> {
        writeln!(writer, "Month,Income,Expenses,Savings")
            .map_err(|e| crate::error::FinanzasError::Export(e.to_string()))?;

        for month in &self.series {
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.2}",
                month.month,
                month.income.as_soles_f64(),
                month.expenses.as_soles_f64(),
                month.savings.as_soles_f64()
            )
            .map_err(|e| crate::error::FinanzasError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "AVERAGE,{:.2},{:.2},{:.2}",
            self.avg_income.as_soles_f64(),
            self.avg_expenses.as_soles_f64(),
            self.avg_savings.as_soles_f64()
        )
        .map_err(|e| crate::error::FinanzasError::Export(e.to_string()))?;

        Ok(())
    }
}
