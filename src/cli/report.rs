//! Report CLI commands
//!
//! Implements CLI commands for the category breakdown and monthly trend
//! reports, with optional CSV output.

use clap::Subcommand;

use crate::error::FinanzasResult;
use crate::models::Money;
use crate::reports::{CategoryBreakdownReport, MonthlyTrendReport};
use crate::storage::Storage;

use super::{today, FilterArgs};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending by category
    Categories {
        #[command(flatten)]
        filters: FilterArgs,
        /// Emit CSV instead of a table
        #[arg(long)]
        csv: bool,
    },

    /// Monthly income/expense/savings trend
    Monthly {
        #[command(flatten)]
        filters: FilterArgs,
        /// Emit CSV instead of a table
        #[arg(long)]
        csv: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> FinanzasResult<()> {
    match cmd {
        ReportCommands::Categories { filters, csv } => {
            let criteria = filters.into_criteria()?;
            let all = storage.transactions.get_all()?;
            let filtered = criteria.apply(&all, today());
            let recurring = storage.recurring.get_all()?;

            let report = CategoryBreakdownReport::generate(&filtered, &recurring);
            if csv {
                let mut stdout = std::io::stdout();
                report.export_csv(&mut stdout)?;
            } else {
                print!("{}", report.format_terminal());
            }
        }

        ReportCommands::Monthly { filters, csv } => {
            let criteria = filters.into_criteria()?;
            let all = storage.transactions.get_all()?;
            let filtered = criteria.apply(&all, today());
            let recurring_total: Money = storage.recurring.total()?;

            let report = MonthlyTrendReport::generate(&filtered, recurring_total);
            if csv {
                let mut stdout = std::io::stdout();
                report.export_csv(&mut stdout)?;
            } else {
                print!("{}", report.format_terminal());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinanzasPaths;
    use tempfile::TempDir;

    #[test]
    fn test_report_commands_run_on_seed_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanzasPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        handle_report_command(
            &storage,
            ReportCommands::Categories {
                filters: FilterArgs::default(),
                csv: false,
            },
        )
        .unwrap();

        handle_report_command(
            &storage,
            ReportCommands::Monthly {
                filters: FilterArgs::default(),
                csv: false,
            },
        )
        .unwrap();
    }
}
