//! Built-in seed dataset
//!
//! The sample ledger used when no snapshot exists yet (or the stored one
//! cannot be read): one month of typical activity plus a handful of
//! common subscriptions, so the dashboard has something to show on first
//! launch.

use chrono::NaiveDate;

use crate::models::{Money, RecurringExpense, Transaction, TransactionKind};

/// Build the sample transaction list
pub fn seed_transactions() -> Vec<Transaction> {
    let entries: &[(&str, i64, &str, u32, TransactionKind)] = &[
        // Ingresos
        ("Salario", 3500, "Salario", 1, TransactionKind::Income),
        ("Freelance", 800, "Extra", 10, TransactionKind::Income),
        // Gastos - Alimentación
        ("Supermercado", 450, "Alimentación", 5, TransactionKind::Expense),
        ("Restaurante", 85, "Alimentación", 8, TransactionKind::Expense),
        ("Delivery", 120, "Alimentación", 12, TransactionKind::Expense),
        ("Café", 45, "Alimentación", 15, TransactionKind::Expense),
        // Gastos - Transporte
        ("Uber", 95, "Transporte", 3, TransactionKind::Expense),
        ("Gasolina", 180, "Transporte", 7, TransactionKind::Expense),
        ("Taxi", 35, "Transporte", 14, TransactionKind::Expense),
        // Gastos - Vivienda
        ("Alquiler", 900, "Vivienda", 1, TransactionKind::Expense),
        ("Luz", 85, "Vivienda", 5, TransactionKind::Expense),
        ("Agua", 45, "Vivienda", 5, TransactionKind::Expense),
        // Gastos - Ocio
        ("Cine", 45, "Ocio", 9, TransactionKind::Expense),
        ("Bar", 120, "Ocio", 13, TransactionKind::Expense),
        ("Videojuego", 60, "Ocio", 16, TransactionKind::Expense),
        // Gastos - Educación
        ("Curso online", 150, "Educación", 2, TransactionKind::Expense),
        ("Libros", 80, "Educación", 11, TransactionKind::Expense),
        // Gastos - Servicios
        ("Netflix", 35, "Servicios", 1, TransactionKind::Expense),
        ("Spotify", 25, "Servicios", 1, TransactionKind::Expense),
        ("Internet", 120, "Servicios", 1, TransactionKind::Expense),
        ("Celular", 85, "Servicios", 1, TransactionKind::Expense),
    ];

    entries
        .iter()
        .map(|(description, soles, category, day, kind)| {
            Transaction::new(
                *description,
                Money::from_soles(*soles),
                *category,
                NaiveDate::from_ymd_opt(2024, 12, *day).expect("valid seed date"),
                *kind,
            )
        })
        .collect()
}

/// Build the sample recurring-expense list
pub fn seed_recurring() -> Vec<RecurringExpense> {
    let entries: &[(&str, i64, &str)] = &[
        ("Netflix", 35, "📺"),
        ("Spotify", 25, "🎵"),
        ("Plan Móvil", 85, "📱"),
        ("Internet", 120, "🌐"),
        ("Gimnasio", 120, "💪"),
        ("Amazon Prime", 40, "📦"),
    ];

    entries
        .iter()
        .map(|(name, soles, icon)| RecurringExpense::new(*name, Money::from_soles(*soles), *icon))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_transaction_count() {
        assert_eq!(seed_transactions().len(), 21);
    }

    #[test]
    fn test_seed_totals() {
        let transactions = seed_transactions();
        let income: Money = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let expenses: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        assert_eq!(income, Money::from_soles(4300));
        assert_eq!(expenses, Money::from_soles(2760));
    }

    #[test]
    fn test_seed_recurring_total() {
        let total: Money = seed_recurring().iter().map(|e| e.amount).sum();
        assert_eq!(total, Money::from_soles(425));
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let transactions = seed_transactions();
        let mut ids: Vec<_> = transactions.iter().map(|t| t.id).collect();
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert_eq!(ids.len(), transactions.len());
    }

    #[test]
    fn test_seed_validates() {
        for txn in seed_transactions() {
            assert!(txn.validate().is_ok(), "seed transaction invalid: {}", txn);
        }
        for expense in seed_recurring() {
            assert!(expense.validate().is_ok());
        }
    }
}
