// 💾 Persistence Adapter - whole-file JSON rewrite
//
// Every mutation rewrites the full collection. Saves go through a temp file +
// rename so a crash mid-write leaves the previous file intact. There is no
// locking: the file is assumed to belong to this single process.

use crate::config::Config;
use crate::store::ExpenseStore;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// STORAGE TRAIT
// ============================================================================

/// Where the expense collection lives between runs
pub trait Storage {
    /// Read the full collection. A missing backing file is an empty store.
    fn load(&self) -> Result<ExpenseStore>;

    /// Replace the persisted collection with `store`
    fn save(&self, store: &ExpenseStore) -> Result<()>;
}

// ============================================================================
// JSON FILE STORAGE
// ============================================================================

pub struct JsonFileStorage {
    path: PathBuf,
    temp_path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(config: &Config) -> Self {
        JsonFileStorage {
            path: config.data_file.clone(),
            temp_path: config.temp_file(),
        }
    }

    /// Location of the JSON data file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<ExpenseStore> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(ExpenseStore::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read expenses file: {:?}", self.path))?;

        let store: ExpenseStore = serde_json::from_str(&content)
            .with_context(|| format!("Malformed expenses file: {:?}", self.path))?;

        if let Some(category) = store.first_empty_category() {
            bail!(
                "Malformed expenses file: {:?} (category '{}' has no expenses)",
                self.path,
                category
            );
        }

        tracing::info!(
            path = %self.path.display(),
            categories = store.category_count(),
            "loaded expenses"
        );
        Ok(store)
    }

    fn save(&self, store: &ExpenseStore) -> Result<()> {
        let json = to_pretty_json(store).context("Failed to serialize expenses")?;

        fs::write(&self.temp_path, json)
            .with_context(|| format!("Failed to write expenses file: {:?}", self.temp_path))?;
        fs::rename(&self.temp_path, &self.path)
            .with_context(|| format!("Failed to replace expenses file: {:?}", self.path))?;

        tracing::debug!(
            path = %self.path.display(),
            categories = store.category_count(),
            "saved expenses"
        );
        Ok(())
    }
}

/// Pretty JSON with 4-space indentation
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    out.push(b'\n');
    Ok(out)
}

// ============================================================================
// IN-MEMORY STORAGE (tests)
// ============================================================================

/// Records every save so tests can assert whether a persist happened
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryStorage {
    saved: std::cell::RefCell<Vec<ExpenseStore>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub(crate) fn save_count(&self) -> usize {
        self.saved.borrow().len()
    }

    pub(crate) fn last_saved(&self) -> Option<ExpenseStore> {
        self.saved.borrow().last().cloned()
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn load(&self) -> Result<ExpenseStore> {
        Ok(self.last_saved().unwrap_or_default())
    }

    fn save(&self, store: &ExpenseStore) -> Result<()> {
        self.saved.borrow_mut().push(store.clone());
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
