//! Recurring-expense CLI commands
//!
//! Implements CLI commands for managing monthly subscriptions.

use clap::Subcommand;

use crate::display::format_recurring_table;
use crate::error::{FinanzasError, FinanzasResult};
use crate::models::RecurringId;
use crate::services::RecurringService;
use crate::storage::Storage;

use super::parse_amount;

/// Recurring-expense subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Add a new recurring expense
    Add {
        /// Subscription name ("Netflix", "Gimnasio", ...)
        name: String,
        /// Monthly amount (e.g., "35" or "35.00")
        amount: String,
        /// Display icon
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// List all recurring expenses
    List,

    /// Change the monthly amount of a recurring expense
    Edit {
        /// Recurring expense ID
        id: String,
        /// New monthly amount
        amount: String,
    },

    /// Delete a recurring expense
    Delete {
        /// Recurring expense ID
        id: String,
    },
}

/// Parse a recurring-expense ID argument
fn parse_id(s: &str) -> FinanzasResult<RecurringId> {
    s.parse()
        .map_err(|_| FinanzasError::Validation(format!("Invalid recurring expense id: {}", s)))
}

/// Handle a recurring-expense command
pub fn handle_recurring_command(storage: &Storage, cmd: RecurringCommands) -> FinanzasResult<()> {
    let service = RecurringService::new(storage);

    match cmd {
        RecurringCommands::Add { name, amount, icon } => {
            let amount = parse_amount(&amount)?;
            let expense = service.add(name, amount, icon)?;
            println!("Gasto recurrente agregado: {} {}", expense.icon, expense.name);
            println!("  Monto mensual: {}", expense.amount);
            println!("  ID: {}", expense.id);
        }

        RecurringCommands::List => {
            let expenses = service.list()?;
            print!("{}", format_recurring_table(&expenses));
        }

        RecurringCommands::Edit { id, amount } => {
            let id = parse_id(&id)?;
            let amount = parse_amount(&amount)?;
            let expense = service.update_amount(id, amount)?;
            println!(
                "Gasto recurrente actualizado: {} ahora cuesta {}",
                expense.name, expense.amount
            );
        }

        RecurringCommands::Delete { id } => {
            let id = parse_id(&id)?;
            let removed = service.remove(id)?;
            println!("Gasto recurrente eliminado: {} ({})", removed.name, removed.amount);
        }
    }

    Ok(())
}
