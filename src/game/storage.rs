//! Key-value storage backends for the persisted session record.
//!
//! The browser build keeps a `MemoryStorage` inside WASM memory and the host
//! page mirrors it into `localStorage` (see `/api/game/persist` and
//! `/api/game/restore`). Tests use the same backend directly.

use std::collections::HashMap;

/// Minimal string key-value store, shaped like the Web Storage API.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory storage backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.items.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.items.remove(key);
    }
}
