//! Transaction display formatting
//!
//! Renders transaction lists as terminal tables.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{style_for, Transaction};

/// One table row of the transaction register
#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Fecha")]
    date: String,
    #[tabled(rename = "Descripción")]
    description: String,
    #[tabled(rename = "Categoría")]
    category: String,
    #[tabled(rename = "Tipo")]
    kind: String,
    #[tabled(rename = "Monto")]
    amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        let icon = style_for(&txn.category).icon;
        Self {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: txn.description.clone(),
            category: format!("{} {}", icon, txn.category),
            kind: txn.kind.to_string(),
            amount: txn.amount.to_string(),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No hay transacciones.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed_transactions;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_transaction_table(&[]), "No hay transacciones.\n");
    }

    #[test]
    fn test_table_contains_fields() {
        let transactions = seed_transactions();
        let table = format_transaction_table(&transactions[..3]);

        assert!(table.contains("Descripción"));
        assert!(table.contains("Salario"));
        assert!(table.contains("S/ 3500.00"));
        assert!(table.contains("txn-"));
    }

    #[test]
    fn test_category_icon_is_shown() {
        let transactions = seed_transactions();
        let table = format_transaction_table(&transactions);
        assert!(table.contains("🍔 Alimentación"));
    }
}
