use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finanzas_cli::cli::{
    handle_export_command, handle_recurring_command, handle_report_command,
    handle_restore_command, handle_transaction_command, today, FilterArgs, RecurringCommands,
    ReportCommands, TransactionCommands,
};
use finanzas_cli::config::{paths::FinanzasPaths, settings::Settings};
use finanzas_cli::reports::DashboardOverview;
use finanzas_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finanzas",
    author = "Andy Quispe",
    version,
    about = "Terminal-based personal finance dashboard",
    long_about = "finanzas-cli keeps a local ledger of income, expenses, and \
                  recurring subscriptions, and derives dashboard views from it: \
                  headline totals, category breakdowns, monthly trends, \
                  savings-goal progress, and alerts."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard overview
    #[command(alias = "dash")]
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Tx(TransactionCommands),

    /// Recurring-expense management commands
    #[command(subcommand, alias = "rec")]
    Recurring(RecurringCommands),

    /// Reports (category breakdown, monthly trend)
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the full dataset as JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Restore the dataset from a JSON export
    Restore {
        /// Path to the export file
        file: PathBuf,
    },

    /// Re-seed the dataset with the sample ledger
    Init,

    /// Delete all transactions and recurring expenses
    Reset {
        /// Skip the confirmation requirement
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinanzasPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Dashboard { filters }) => {
            let criteria = filters.into_criteria()?;
            let overview = DashboardOverview::generate(&storage, &criteria, &settings, today())?;
            print!("{}", overview.format_terminal());
        }
        Some(Commands::Tx(cmd)) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            handle_recurring_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Export { output, compact }) => {
            handle_export_command(&storage, output, compact)?;
        }
        Some(Commands::Restore { file }) => {
            handle_restore_command(&storage, file)?;
        }
        Some(Commands::Init) => {
            storage.init_seed()?;
            println!("Datos de ejemplo cargados en {}", paths.data_dir().display());
            println!("21 transacciones y 6 gastos recurrentes de muestra.");
            println!("Ejecuta 'finanzas dashboard' para ver el panel.");
        }
        Some(Commands::Reset { yes }) => {
            if yes {
                storage.reset_all()?;
                println!("Se eliminaron todas las transacciones y gastos recurrentes.");
            } else {
                println!("Esto eliminará TODAS las transacciones y gastos recurrentes.");
                println!("Vuelve a ejecutar con --yes para confirmar.");
            }
        }
        Some(Commands::Config) => {
            println!("Configuración de finanzas-cli");
            println!("=============================");
            println!("Directorio base:  {}", paths.base_dir().display());
            println!("Directorio datos: {}", paths.data_dir().display());
            println!("Registro audit:   {}", paths.audit_log().display());
            println!();
            println!("Preferencias:");
            println!("  Moneda:            {}", settings.currency_symbol);
            println!("  Formato de fecha:  {}", settings.date_format);
            println!("  Meta de ahorro:    {}%", settings.savings_target_pct);
            println!(
                "  Umbral gasto hormiga: {}",
                settings.small_expense_threshold
            );
        }
        None => {
            println!("finanzas-cli - Panel de finanzas personales en la terminal");
            println!();
            println!("Ejecuta 'finanzas --help' para ver los comandos.");
            println!("Ejecuta 'finanzas dashboard' para ver el panel.");
        }
    }

    Ok(())
}
