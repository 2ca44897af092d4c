// 🐚 Interactive Shell - numbered menu loop
//
// MENU → (Add | View | Delete) → MENU, until Exit or end of input.

use crate::console::Console;
use crate::handlers::{add_expense, delete_expense, view_expenses};
use crate::storage::Storage;
use crate::store::ExpenseStore;
use anyhow::Result;
use std::io::{BufRead, Write};

// ============================================================================
// MENU CHOICE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Map a menu selection; surrounding whitespace is ignored
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::Delete),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellState {
    Menu,
    Exit,
}

// ============================================================================
// SHELL
// ============================================================================

/// Owns the store for the run and threads it through the handlers
pub struct Shell<'s, R, W> {
    console: Console<R, W>,
    store: ExpenseStore,
    storage: &'s dyn Storage,
}

impl<'s, R: BufRead, W: Write> Shell<'s, R, W> {
    pub fn new(console: Console<R, W>, store: ExpenseStore, storage: &'s dyn Storage) -> Self {
        Shell {
            console,
            store,
            storage,
        }
    }

    /// Run until the user exits. Every mutation has already been saved by
    /// then, so nothing is flushed on the way out.
    pub fn run(&mut self) -> Result<()> {
        let mut state = ShellState::Menu;
        while state == ShellState::Menu {
            state = self.step()?;
        }
        self.console.say("Exiting. All expenses saved!")
    }

    fn step(&mut self) -> Result<ShellState> {
        self.print_menu()?;

        let Some(line) = self.console.prompt("Choose an option (1-4): ")? else {
            tracing::debug!("end of input at menu");
            return Ok(ShellState::Exit);
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Add) => {
                add_expense(&mut self.console, &mut self.store, self.storage)?;
            }
            Some(MenuChoice::View) => view_expenses(&mut self.console, &self.store)?,
            Some(MenuChoice::Delete) => {
                delete_expense(&mut self.console, &mut self.store, self.storage)?;
            }
            Some(MenuChoice::Exit) => return Ok(ShellState::Exit),
            None => self
                .console
                .say("Invalid choice! Please select 1, 2, 3, or 4.")?,
        }

        Ok(ShellState::Menu)
    }

    fn print_menu(&mut self) -> Result<()> {
        self.console.say("")?;
        self.console.say("=== Expense Tracker ===")?;
        self.console.say("1. Add expense")?;
        self.console.say("2. View expenses")?;
        self.console.say("3. Delete expense")?;
        self.console.say("4. Exit")
    }

    /// Tear down the shell, returning the final store and the writer
    pub fn into_parts(self) -> (ExpenseStore, W) {
        (self.store, self.console.into_output())
    }
}

// ============================================================================
// TESTS
// ============================================================================
