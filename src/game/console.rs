//! The console context: record store, catalogs, clock, RNG and config.
//!
//! Every game operation is a method on `Console`, split by concern across
//! the sibling modules (`conditions`, `phase`, `interrogation`, `search`,
//! `pensine`). The wasm bridge owns one `Console` for the lifetime of the
//! worker; tests build their own with in-memory storage and a fixed clock.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ConsoleConfig;
use crate::error::CatalogError;
use crate::game::catalog::{CatalogKind, Catalogs};
use crate::game::clock::{Clock, SystemClock};
use crate::game::state::GameState;
use crate::game::storage::{MemoryStorage, Storage};
use crate::game::store::GameStore;

pub struct Console {
    pub(crate) store: GameStore,
    pub(crate) catalogs: Catalogs,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) rng: StdRng,
    pub(crate) config: ConsoleConfig,
}

impl Console {
    pub fn new(
        storage: Box<dyn Storage>,
        clock: Box<dyn Clock>,
        rng: StdRng,
        config: ConsoleConfig,
    ) -> Self {
        Self {
            store: GameStore::new(storage, config.storage_key.clone()),
            catalogs: Catalogs::default(),
            clock,
            rng,
            config,
        }
    }

    /// Browser setup: in-memory record mirrored by the host page, real clock,
    /// entropy-seeded RNG.
    pub fn browser() -> Self {
        Self::new(
            Box::new(MemoryStorage::new()),
            Box::new(SystemClock),
            StdRng::from_entropy(),
            ConsoleConfig::default(),
        )
    }

    /// Deterministic setup: in-memory storage, the given clock and RNG seed.
    pub fn with_seed(clock: Box<dyn Clock>, seed: u64) -> Self {
        Self::new(
            Box::new(MemoryStorage::new()),
            clock,
            StdRng::seed_from_u64(seed),
            ConsoleConfig::default(),
        )
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self::with_seed(Box::new(crate::game::clock::FixedClock::at(1_000_000)), 42)
    }

    /// Current persisted state.
    pub fn state(&self) -> GameState {
        self.store.load()
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GameStore {
        &mut self.store
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    /// Apply a new config. A changed storage key points the store at the new
    /// key; the record under the old key is left untouched.
    pub fn configure(&mut self, config: ConsoleConfig) {
        if config.storage_key != self.store.key() {
            self.store.set_key(config.storage_key.clone());
        }
        tracing::info!(storage_key = %config.storage_key, tiers = config.draw_table.tiers().len(), "console configured");
        self.config = config;
    }

    /// Load one catalog. Loading the condition catalog also seeds every
    /// declared condition missing from the state with `false`.
    pub fn load_catalog(&mut self, kind: CatalogKind, json: &str) -> Result<usize, CatalogError> {
        match self.catalogs.load(kind, json) {
            Ok(count) => {
                tracing::info!(?kind, count, "catalog loaded");
                if kind == CatalogKind::Conditions {
                    self.seed_conditions();
                }
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(?kind, error = %e, "catalog rejected, continuing with it empty");
                Err(e)
            }
        }
    }
}
