//! Recurring-expense display formatting
//!
//! Renders the subscription list as a terminal table with the monthly total.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Money, RecurringExpense};

/// One table row of the subscription list
#[derive(Tabled)]
struct RecurringRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "")]
    icon: String,
    #[tabled(rename = "Nombre")]
    name: String,
    #[tabled(rename = "Monto mensual")]
    amount: String,
}

impl From<&RecurringExpense> for RecurringRow {
    fn from(expense: &RecurringExpense) -> Self {
        Self {
            id: expense.id.to_string(),
            icon: expense.icon.clone(),
            name: expense.name.clone(),
            amount: expense.amount.to_string(),
        }
    }
}

/// Format the recurring-expense list as a table, with a total line
pub fn format_recurring_table(expenses: &[RecurringExpense]) -> String {
    if expenses.is_empty() {
        return "No hay gastos recurrentes. Agrega tus suscripciones mensuales.\n".to_string();
    }

    let rows: Vec<RecurringRow> = expenses.iter().map(RecurringRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    let label = if expenses.len() == 1 {
        "pago recurrente"
    } else {
        "pagos recurrentes"
    };

    format!(
        "{}\nTotal mensual: {} ({} {})\n",
        table,
        total,
        expenses.len(),
        label
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed_recurring;

    #[test]
    fn test_empty_list() {
        let text = format_recurring_table(&[]);
        assert!(text.contains("No hay gastos recurrentes"));
    }

    #[test]
    fn test_table_with_total() {
        let expenses = seed_recurring();
        let text = format_recurring_table(&expenses);

        assert!(text.contains("Netflix"));
        assert!(text.contains("Total mensual: S/ 425.00 (6 pagos recurrentes)"));
    }

    #[test]
    fn test_singular_total_label() {
        let expenses = vec![RecurringExpense::new("Netflix", Money::from_soles(35), "📺")];
        let text = format_recurring_table(&expenses);
        assert!(text.contains("(1 pago recurrente)"));
    }
}
