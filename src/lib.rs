// Expense Tracker - Core Library
// Exposes the store, persistence and menu shell for the CLI and tests

pub mod config;
pub mod console;
pub mod error;
pub mod expense;
pub mod handlers;
pub mod input;
pub mod shell;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use console::Console;
pub use error::InputError;
pub use expense::{Expense, TIMESTAMP_FORMAT};
pub use handlers::{add_expense, delete_expense, render_summary, view_expenses};
pub use input::{canonical_category, normalize_category, parse_amount, parse_ordinal};
pub use shell::{MenuChoice, Shell};
pub use storage::{JsonFileStorage, Storage};
pub use store::{CategorySummary, ExpenseStore, StoreTotals};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
