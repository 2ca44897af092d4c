// 🗂️ Expense Store - category → ordered expenses
//
// Invariants:
// - every category present has at least one expense (empty ones are pruned)
// - expenses keep insertion order; deletion is by position
// - categories keep insertion order (no sorting on display)

use crate::expense::Expense;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// SUMMARY TYPES
// ============================================================================

/// Per-category subtotal shown in the View report
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary<'a> {
    pub name: &'a str,
    pub total: f64,
    pub count: usize,
    pub expenses: &'a [Expense],
}

/// Figures printed after all categories
#[derive(Debug, Clone, PartialEq)]
pub struct StoreTotals {
    pub grand_total: f64,
    pub category_count: usize,
    /// Grand total ÷ category count. `None` when the store is empty.
    pub average_per_category: Option<f64>,
}

// ============================================================================
// EXPENSE STORE
// ============================================================================

/// In-memory expense collection, owned by the shell for the lifetime of a run.
///
/// Serializes as a plain JSON object keyed by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseStore {
    categories: IndexMap<String, Vec<Expense>>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Whether `category` currently holds any expenses
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Expenses of a category in insertion order (`None` if absent)
    pub fn expenses(&self, category: &str) -> Option<&[Expense]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Append an expense, creating the category on first use.
    ///
    /// `category` is expected to be already normalized.
    pub fn add(&mut self, category: &str, expense: Expense) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(expense);
    }

    /// Remove the expense at `index`; drops the category once it is empty.
    ///
    /// Returns `None` (and changes nothing) for an unknown category or an
    /// out-of-range index.
    pub fn remove(&mut self, category: &str, index: usize) -> Option<Expense> {
        let expenses = self.categories.get_mut(category)?;
        if index >= expenses.len() {
            return None;
        }

        let removed = expenses.remove(index);
        if expenses.is_empty() {
            // shift_remove keeps the order of the remaining categories
            self.categories.shift_remove(category);
        }

        Some(removed)
    }

    /// Per-category subtotals, in store order
    pub fn summaries(&self) -> Vec<CategorySummary<'_>> {
        self.categories
            .iter()
            .map(|(name, expenses)| CategorySummary {
                name,
                total: expenses.iter().map(|e| e.amount).sum(),
                count: expenses.len(),
                expenses,
            })
            .collect()
    }

    pub fn totals(&self) -> StoreTotals {
        let grand_total: f64 = self.summaries().iter().map(|s| s.total).sum();
        let category_count = self.category_count();
        let average_per_category = if category_count == 0 {
            None
        } else {
            Some(grand_total / category_count as f64)
        };

        StoreTotals {
            grand_total,
            category_count,
            average_per_category,
        }
    }

    /// Name of the first category holding no expenses, if any.
    ///
    /// Only reachable through deserialization; used to reject such files.
    pub fn first_empty_category(&self) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, expenses)| expenses.is_empty())
            .map(|(name, _)| name.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================
