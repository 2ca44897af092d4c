// 🧮 Command Handlers - Add / View / Delete
//
// Each handler reads its own prompts, works on the caller's store and persists
// after a successful mutation. Input errors are printed and swallowed (the
// shell returns to the menu); storage and console errors propagate.

use crate::console::Console;
use crate::error::InputError;
use crate::expense::{capitalize, format_money, Expense};
use crate::input::{canonical_category, normalize_category, parse_amount, parse_ordinal};
use crate::storage::Storage;
use crate::store::ExpenseStore;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Print a rejected input and end the current operation
fn reject<R: BufRead, W: Write>(console: &mut Console<R, W>, err: InputError) -> Result<()> {
    tracing::warn!(reason = %err, "input rejected");
    console.say(err.to_string())
}

// ============================================================================
// ADD
// ============================================================================

/// Prompt for a category and an amount, then append a new expense
pub fn add_expense<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut ExpenseStore,
    storage: &dyn Storage,
) -> Result<()> {
    let Some(raw_category) = console.prompt("Enter category (e.g., food, transport): ")? else {
        return Ok(());
    };
    let category = match normalize_category(&raw_category) {
        Ok(category) => category,
        Err(err) => return reject(console, err),
    };

    let Some(raw_amount) = console.prompt("Enter amount: ")? else {
        return Ok(());
    };
    let amount = match parse_amount(&raw_amount) {
        Ok(amount) => amount,
        Err(err) => return reject(console, err),
    };

    let expense = Expense::new(amount);
    let timestamp = expense.timestamp.clone();
    store.add(&category, expense);
    storage.save(store)?;

    tracing::info!(%category, amount, "expense added");
    console.say(format!(
        "Added {} to {} at {}.",
        format_money(amount),
        category,
        timestamp
    ))
}

// ============================================================================
// DELETE
// ============================================================================

/// Show a category's expenses, then remove the one the user picks.
///
/// The listing and the ordinal check use the same snapshot of the category.
pub fn delete_expense<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut ExpenseStore,
    storage: &dyn Storage,
) -> Result<()> {
    let Some(raw_category) = console.prompt("Enter category to delete from: ")? else {
        return Ok(());
    };
    // blank names fall through to the lookup and report "no expenses"
    let category = canonical_category(&raw_category);

    let count = match store.expenses(&category) {
        Some(expenses) if !expenses.is_empty() => {
            console.say("")?;
            console.say(format!("Expenses in {}:", capitalize(&category)))?;
            for (i, expense) in expenses.iter().enumerate() {
                console.say(format!("{}. {}", i + 1, expense.display_line()))?;
            }
            expenses.len()
        }
        _ => return reject(console, InputError::NoExpenses(category)),
    };

    let Some(raw_ordinal) = console.prompt("Enter expense number to delete: ")? else {
        return Ok(());
    };
    let index = match parse_ordinal(&raw_ordinal, count) {
        Ok(index) => index,
        Err(err) => return reject(console, err),
    };

    let Some(removed) = store.remove(&category, index) else {
        return reject(console, InputError::InvalidOrdinal);
    };
    storage.save(store)?;

    tracing::info!(%category, amount = removed.amount, "expense deleted");
    console.say(format!(
        "Deleted {} from {}.",
        format_money(removed.amount),
        category
    ))
}

// ============================================================================
// VIEW
// ============================================================================

/// Print every category with subtotals, then the overall figures. Read-only.
pub fn view_expenses<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &ExpenseStore,
) -> Result<()> {
    for line in render_summary(store) {
        console.say(line)?;
    }
    Ok(())
}

/// Lines of the View report
pub fn render_summary(store: &ExpenseStore) -> Vec<String> {
    if store.is_empty() {
        return vec!["No expenses recorded yet!".to_string()];
    }

    let mut lines = vec![String::new(), "=== Expense Summary ===".to_string()];

    for summary in store.summaries() {
        lines.push(String::new());
        lines.push(format!(
            "{} ({}, {} entries):",
            capitalize(summary.name),
            format_money(summary.total),
            summary.count
        ));
        for (i, expense) in summary.expenses.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, expense.display_line()));
        }
    }

    let totals = store.totals();
    lines.push(String::new());
    lines.push(format!(
        "Total across all categories: {}",
        format_money(totals.grand_total)
    ));
    lines.push(format!("Number of categories: {}", totals.category_count));
    if let Some(average) = totals.average_per_category {
        lines.push(format!("Average per category: {}", format_money(average)));
    }

    lines
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<String>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn expense(amount: f64) -> Expense {
        Expense {
            amount,
            timestamp: "2024-01-15 08:30:00".to_string(),
        }
    }

    fn add(store: &mut ExpenseStore, storage: &MemoryStorage, category: &str, amount: &str) -> String {
        let mut console = console(&format!("{}\n{}\n", category, amount));
        add_expense(&mut console, store, storage).unwrap();
        output(console)
    }

    fn delete(store: &mut ExpenseStore, storage: &MemoryStorage, category: &str, ordinal: &str) -> String {
        let mut console = console(&format!("{}\n{}\n", category, ordinal));
        delete_expense(&mut console, store, storage).unwrap();
        output(console)
    }

    // ------------------------------------------------------------------------
    // add
    // ------------------------------------------------------------------------

    #[test]
    fn test_add_appends_and_persists() {
        let mut store = ExpenseStore::new();
        let storage = MemoryStorage::default();

        let out = add(&mut store, &storage, "  Food ", "12.50");

        let expenses = store.expenses("food").unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount, 12.5);
        assert_eq!(storage.save_count(), 1);
        assert_eq!(storage.last_saved().unwrap(), store);
        assert!(out.contains(&format!("Added $12.50 to food at {}.", expenses[0].timestamp)));
    }

    #[test]
    fn test_add_increments_existing_category() {
        let mut store = ExpenseStore::new();
        store.add("food", expense(1.0));
        let storage = MemoryStorage::default();

        add(&mut store, &storage, "FOOD", "2");

        assert_eq!(store.expenses("food").unwrap().len(), 2);
        assert_eq!(store.category_count(), 1);
    }

    #[test]
    fn test_add_rejects_empty_category() {
        let mut store = ExpenseStore::new();
        let storage = MemoryStorage::default();

        let out = add(&mut store, &storage, "   ", "5");

        assert!(store.is_empty());
        assert_eq!(storage.save_count(), 0);
        assert!(out.contains("Category cannot be empty!"));
        // amount is never asked for
        assert!(!out.contains("Enter amount"));
    }

    #[test]
    fn test_add_rejects_bad_amounts_without_persisting() {
        let storage = MemoryStorage::default();

        for (amount, message) in [
            ("0", "Amount must be positive!"),
            ("-4", "Amount must be positive!"),
            ("twelve", "Please enter a valid number for the amount!"),
        ] {
            let mut store = ExpenseStore::new();
            let out = add(&mut store, &storage, "food", amount);
            assert!(store.is_empty(), "amount {:?} mutated the store", amount);
            assert!(out.contains(message));
        }

        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_add_eof_before_amount_is_noop() {
        let mut store = ExpenseStore::new();
        let storage = MemoryStorage::default();
        let mut console = console("food\n");

        add_expense(&mut console, &mut store, &storage).unwrap();

        assert!(store.is_empty());
        assert_eq!(storage.save_count(), 0);
    }

    // ------------------------------------------------------------------------
    // delete
    // ------------------------------------------------------------------------

    #[test]
    fn test_delete_one_of_several() {
        let mut store = ExpenseStore::new();
        store.add("food", expense(10.0));
        store.add("food", expense(20.0));
        let storage = MemoryStorage::default();

        let out = delete(&mut store, &storage, "food", "1");

        assert_eq!(store.expenses("food").unwrap(), &[expense(20.0)]);
        assert_eq!(storage.save_count(), 1);
        assert!(out.contains("Expenses in Food:"));
        assert!(out.contains("1. $10.00 (2024-01-15 08:30:00)"));
        assert!(out.contains("2. $20.00 (2024-01-15 08:30:00)"));
        assert!(out.contains("Deleted $10.00 from food."));
    }

    #[test]
    fn test_delete_only_expense_removes_category() {
        let mut store = ExpenseStore::new();
        store.add("food", expense(5.0));
        let storage = MemoryStorage::default();

        delete(&mut store, &storage, "Food", "1");

        assert!(!store.contains_category("food"));
        assert!(storage.last_saved().unwrap().is_empty());
    }

    #[test]
    fn test_delete_out_of_range_leaves_store() {
        let mut store = ExpenseStore::new();
        store.add("food", expense(5.0));
        store.add("food", expense(6.0));
        let before = store.clone();
        let storage = MemoryStorage::default();

        for ordinal in ["0", "3"] {
            let out = delete(&mut store, &storage, "food", ordinal);
            assert!(out.contains("Invalid expense number!"));
        }

        assert_eq!(store, before);
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_delete_non_numeric_ordinal() {
        let mut store = ExpenseStore::new();
        store.add("food", expense(5.0));
        let storage = MemoryStorage::default();

        let out = delete(&mut store, &storage, "food", "first");

        assert!(out.contains("Please enter a valid number!"));
        assert_eq!(store.expenses("food").unwrap().len(), 1);
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_delete_from_unknown_category() {
        let mut store = ExpenseStore::new();
        store.add("food", expense(5.0));
        let storage = MemoryStorage::default();

        let out = delete(&mut store, &storage, "rent", "1");

        assert!(out.contains("No expenses found in 'rent'!"));
        assert!(!out.contains("Enter expense number"));
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_delete_blank_category_reports_no_expenses() {
        let mut store = ExpenseStore::new();
        store.add("food", expense(5.0));
        let storage = MemoryStorage::default();
        let mut console = console("   \n");

        delete_expense(&mut console, &mut store, &storage).unwrap();

        let out = output(console);
        assert!(out.contains("No expenses found in ''!"));
        assert!(!out.contains("Category cannot be empty!"));
        assert_eq!(store.expenses("food").unwrap().len(), 1);
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_delete_extreme_ordinal_is_rejected() {
        let mut store = ExpenseStore::new();
        store.add("food", expense(5.0));
        let storage = MemoryStorage::default();

        for ordinal in ["-9223372036854775808", "99999999999999999999"] {
            let out = delete(&mut store, &storage, "food", ordinal);
            assert!(out.contains("Invalid expense number!"));
        }

        assert_eq!(store.expenses("food").unwrap().len(), 1);
        assert_eq!(storage.save_count(), 0);
    }

    // ------------------------------------------------------------------------
    // storage failures
    // ------------------------------------------------------------------------

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn load(&self) -> Result<ExpenseStore> {
            Ok(ExpenseStore::new())
        }

        fn save(&self, _store: &ExpenseStore) -> Result<()> {
            anyhow::bail!("disk full")
        }
    }

    #[test]
    fn test_add_surfaces_save_failure() {
        let mut store = ExpenseStore::new();
        let mut console = console("food\n12.50\n");

        let err = add_expense(&mut console, &mut store, &FailingStorage).unwrap_err();

        assert!(err.to_string().contains("disk full"));
        assert!(!output(console).contains("Added"));
    }

    #[test]
    fn test_delete_surfaces_save_failure() {
        let mut store = ExpenseStore::new();
        store.add("food", expense(5.0));
        let mut console = console("food\n1\n");

        let result = delete_expense(&mut console, &mut store, &FailingStorage);

        assert!(result.is_err());
        assert!(!output(console).contains("Deleted"));
    }

    // ------------------------------------------------------------------------
    // view
    // ------------------------------------------------------------------------

    #[test]
    fn test_view_empty_store() {
        assert_eq!(
            render_summary(&ExpenseStore::new()),
            vec!["No expenses recorded yet!".to_string()]
        );
    }

    #[test]
    fn test_view_single_expense() {
        let mut store = ExpenseStore::new();
        store.add("food", expense(12.5));

        let lines = render_summary(&store);

        assert!(lines.contains(&"Food ($12.50, 1 entries):".to_string()));
        assert!(lines.contains(&"  1. $12.50 (2024-01-15 08:30:00)".to_string()));
        assert!(lines.contains(&"Total across all categories: $12.50".to_string()));
        assert!(lines.contains(&"Number of categories: 1".to_string()));
        assert!(lines.contains(&"Average per category: $12.50".to_string()));
    }

    #[test]
    fn test_view_multiple_categories_in_store_order() {
        let mut store = ExpenseStore::new();
        store.add("rent", expense(100.0));
        store.add("food", expense(10.0));
        store.add("food", expense(20.0));

        let report = render_summary(&store).join("\n");

        let rent = report.find("Rent ($100.00, 1 entries):").unwrap();
        let food = report.find("Food ($30.00, 2 entries):").unwrap();
        assert!(rent < food);
        assert!(report.contains("Total across all categories: $130.00"));
        assert!(report.contains("Number of categories: 2"));
        assert!(report.contains("Average per category: $65.00"));
    }

    #[test]
    fn test_view_is_read_only() {
        let mut store = ExpenseStore::new();
        store.add("food", expense(12.5));
        let before = store.clone();
        let mut console = console("");

        view_expenses(&mut console, &store).unwrap();

        assert_eq!(store, before);
        assert!(output(console).contains("=== Expense Summary ==="));
    }
}
