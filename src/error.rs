//! Recoverable user-input failures.
//!
//! Every variant aborts only the operation in progress: the handler prints the
//! message and the shell goes back to the menu. Nothing is mutated or persisted.
//! Fatal conditions (unreadable or malformed data file, failed save) are not
//! represented here; they travel as [`anyhow::Error`] up to `main`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Category cannot be empty!")]
    EmptyCategory,
    #[error("Please enter a valid number for the amount!")]
    InvalidAmount,
    #[error("Amount must be positive!")]
    NonPositiveAmount,
    #[error("Please enter a valid number!")]
    InvalidNumber,
    #[error("No expenses found in '{0}'!")]
    NoExpenses(String),
    #[error("Invalid expense number!")]
    InvalidOrdinal,
}
