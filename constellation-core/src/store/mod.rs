//! Persistence for journal entries and star flags.
//!
//! The UI injects a `KeyValueStore` (browser `localStorage` in production,
//! `MemoryStore` in tests) and talks to it through `JournalRepository`.
//! Layout never sees the store.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::journal::{entries_from_json, sanitize_entries, JournalEntry};

#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

pub const JOURNAL_STORAGE_KEY: &str = "gaci-journal-entries";
pub const STARS_STORAGE_KEY: &str = "gaci-constellation-stars";

/// Star flag per entry id. Missing ids count as not starred.
pub type StarMap = BTreeMap<String, bool>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub key: String,
    pub msg: String,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Store error for '{}': {}", self.key, self.msg)
    }
}

impl std::error::Error for StoreError {}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JavaScript truthiness of a stored flag value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read a stored star map. Non-bool flags are kept per key by their
/// truthiness, so one odd value doesn't drop the others.
pub fn stars_from_json(raw: &str) -> Result<StarMap, serde_json::Error> {
    let values: BTreeMap<String, Value> = serde_json::from_str(raw)?;
    Ok(values.into_iter().map(|(id, v)| (id, is_truthy(&v))).collect())
}

/// Flip the flag for `id`.
pub fn toggle_star(stars: &mut StarMap, id: &str) -> bool {
    let flag = stars.entry(id.to_string()).or_insert(false);
    *flag = !*flag;
    *flag
}

pub fn is_starred(stars: &StarMap, id: &str) -> bool {
    stars.get(id).copied().unwrap_or(false)
}

/// Typed access to entries and stars on top of a raw key-value store.
#[derive(Debug)]
pub struct JournalRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> JournalRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored entries, sanitized and newest first.
    ///
    /// Records that don't deserialize are skipped; a value that isn't a
    /// JSON array at all is treated like an empty journal.
    pub fn load_entries(&self) -> Result<Vec<JournalEntry>, StoreError> {
        let Some(raw) = self.store.get(JOURNAL_STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        Ok(sanitize_entries(entries_from_json(&raw).unwrap_or_default()))
    }

    /// Prepend `entry` to the sanitized journal and persist. Returns the
    /// stored list; unreadable records are not written back.
    pub fn save_entry(&mut self, entry: JournalEntry) -> Result<Vec<JournalEntry>, StoreError> {
        let mut entries = self.load_entries()?;
        entries.insert(0, entry);
        self.write_json(JOURNAL_STORAGE_KEY, &entries)?;
        Ok(entries)
    }

    pub fn load_stars(&self) -> Result<StarMap, StoreError> {
        let Some(raw) = self.store.get(STARS_STORAGE_KEY)? else {
            return Ok(StarMap::new());
        };
        Ok(stars_from_json(&raw).unwrap_or_default())
    }

    /// Flip the star flag for `id`, persist, and return the updated map.
    pub fn toggle_star(&mut self, id: &str) -> Result<StarMap, StoreError> {
        let mut stars = self.load_stars()?;
        toggle_star(&mut stars, id);
        self.write_json(STARS_STORAGE_KEY, &stars)?;
        Ok(stars)
    }

    fn write_json<T: serde::Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError {
            key: key.to_string(),
            msg: e.to_string(),
        })?;
        self.store.set(key, &raw)
    }
}
