// 🧾 Expense record - one (amount, timestamp) pair
// Identity is positional: an expense is "the n-th entry of its category"

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp layout used on screen and in the data file (second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// EXPENSE
// ============================================================================

/// A single recorded expense. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Positive amount in the tracker's single implicit unit
    pub amount: f64,

    /// Creation time formatted with [`TIMESTAMP_FORMAT`]
    pub timestamp: String,
}

impl Expense {
    /// Create an expense stamped with the current local time
    pub fn new(amount: f64) -> Self {
        Self::at(amount, Local::now().naive_local())
    }

    /// Create an expense stamped with an explicit time
    pub fn at(amount: f64, time: NaiveDateTime) -> Self {
        Expense {
            amount,
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// `$12.50 (2024-01-15 08:30:00)`
    pub fn display_line(&self) -> String {
        format!("{} ({})", format_money(self.amount), self.timestamp)
    }
}

// ============================================================================
// FORMATTING HELPERS
// ============================================================================

/// `12.5` → `$12.50`
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Category key → header label (`food` → `Food`)
pub fn capitalize(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
