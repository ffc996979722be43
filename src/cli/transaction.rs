//! Transaction CLI commands
//!
//! Implements CLI commands for recording, editing, listing, and deleting
//! transactions.

use clap::Subcommand;

use crate::display::format_transaction_table;
use crate::error::{FinanzasError, FinanzasResult};
use crate::models::{TransactionId, TransactionKind, TransactionUpdate};
use crate::services::TransactionService;
use crate::storage::Storage;

use super::{parse_amount, parse_date, today, FilterArgs};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Description ("Supermercado", "Salario", ...)
        description: String,
        /// Amount (e.g., "450" or "450.00")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New kind (income or expense)
        #[arg(short, long)]
        kind: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },

    /// List the category names in use
    Categories,
}

/// Parse a transaction ID argument
fn parse_id(s: &str) -> FinanzasResult<TransactionId> {
    s.parse()
        .map_err(|_| FinanzasError::Validation(format!("Invalid transaction id: {}", s)))
}

/// Parse a kind argument (income or expense)
fn parse_kind(s: &str) -> FinanzasResult<TransactionKind> {
    s.parse().map_err(FinanzasError::Validation)
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> FinanzasResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            kind,
            date,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => today(),
            };

            let txn = service.add(description, amount, category, date, kind)?;
            println!("Transacción registrada: {}", txn.description);
            println!("  {} | {} | {}", txn.date, txn.category, txn.amount);
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List { filters } => {
            let criteria = filters.into_criteria()?;
            let transactions = service.list(&criteria, today())?;
            print!("{}", format_transaction_table(&transactions));
            if criteria.is_active() {
                println!("{} transacciones (filtros activos)", transactions.len());
            }
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            category,
            kind,
            date,
        } => {
            let id = parse_id(&id)?;
            let update = TransactionUpdate {
                description,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                date: date.as_deref().map(parse_date).transpose()?,
                kind: kind.as_deref().map(parse_kind).transpose()?,
            };

            let txn = service.edit(id, update)?;
            println!("Transacción actualizada: {}", txn.description);
            println!("  {} | {} | {}", txn.date, txn.category, txn.amount);
        }

        TransactionCommands::Delete { id } => {
            let id = parse_id(&id)?;
            let removed = service.remove(id)?;
            println!("Transacción eliminada: {} ({})", removed.description, removed.amount);
        }

        TransactionCommands::Categories => {
            for category in service.categories()? {
                println!("{}", category);
            }
        }
    }

    Ok(())
}
