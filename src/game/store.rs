//! Whole-record persistence of the `GameState`.
//!
//! Every mutation is read-entire-record / modify / write-entire-record.
//! There is no partial merge and no locking: a single operator drives the
//! console, so last writer wins.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::StoreError;
use crate::game::state::GameState;
use crate::game::storage::Storage;

/// Default `localStorage` key of the session record.
pub const DEFAULT_STORAGE_KEY: &str = "murderPartyGameData";

pub struct GameStore {
    backend: Box<dyn Storage>,
    key: String,
}

impl GameStore {
    pub fn new(backend: Box<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Point the store at a different record key. The old record is left as is.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// Stored state, or the default when there is none.
    /// An unreadable record is logged and treated as absent.
    pub fn load(&self) -> GameState {
        match self.backend.get(&self.key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "discarding unreadable game record");
                    GameState::default()
                }
            },
            None => GameState::default(),
        }
    }

    /// Overwrite the stored record.
    pub fn save(&mut self, state: &GameState) {
        match serde_json::to_string(state) {
            Ok(json) => self.backend.set(&self.key, json),
            Err(e) => tracing::warn!(error = %e, "game record could not be serialised"),
        }
    }

    /// Delete the stored record; the next `load` yields defaults.
    pub fn reset(&mut self) {
        self.backend.remove(&self.key);
    }

    /// Load, apply `f`, save. Returns whatever `f` returns.
    pub fn update<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GameState) -> R,
    {
        let mut state = self.load();
        let out = f(&mut state);
        self.save(&state);
        out
    }

    /// Raw stored JSON, if a record exists.
    pub fn raw_record(&self) -> Option<String> {
        self.backend.get(&self.key)
    }

    /// Replace the record with raw JSON coming from the host page.
    /// The JSON is validated first; an empty string removes the record.
    pub fn restore_raw(&mut self, json: &str) -> Result<(), StoreError> {
        let json = json.trim();
        if json.is_empty() {
            self.reset();
            return Ok(());
        }
        let state: GameState = serde_json::from_str(json)?;
        self.save(&state);
        Ok(())
    }

    /// Portable export code: URL-safe base64 of the record JSON.
    pub fn export_code(&self) -> Result<String, StoreError> {
        let json = serde_json::to_string(&self.load())?;
        Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }

    /// Restore a record from an export code produced by `export_code`.
    pub fn import_code(&mut self, code: &str) -> Result<GameState, StoreError> {
        let bytes = URL_SAFE_NO_PAD.decode(code.trim())?;
        let state: GameState = serde_json::from_slice(&bytes)?;
        self.save(&state);
        Ok(state)
    }
}
