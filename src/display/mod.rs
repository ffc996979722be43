//! Display formatting for terminal output

pub mod recurring;
pub mod transaction;

pub use recurring::format_recurring_table;
pub use transaction::format_transaction_table;
