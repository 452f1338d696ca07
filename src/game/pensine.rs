//! Pensine — weighted random draw of memories without replacement.
//!
//! The memory type to aim for is picked from a probability table keyed by
//! phase tier, then one memory of that type is drawn uniformly. When no
//! undrawn memory of the picked type is eligible, the draw falls back to the
//! whole eligible pool. Drawn ids are persisted, so a memory is never drawn
//! twice until the game is reset.

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;
use crate::game::catalog::{MemoryEntry, MemoryKind};
use crate::game::console::Console;
use crate::game::visibility::eligible;

/// Relative weights of each memory type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindWeights {
    pub useless: u32,
    pub false_lead: u32,
    pub clue: u32,
}

impl KindWeights {
    fn as_array(&self) -> [u32; 3] {
        // Same order as MemoryKind::ALL.
        [self.useless, self.false_lead, self.clue]
    }

    /// Pick a type by weight. `None` when every weight is zero.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<MemoryKind> {
        let dist = WeightedIndex::new(self.as_array()).ok()?;
        MemoryKind::ALL.get(dist.sample(rng)).copied()
    }
}

/// One row of the draw table, applying from `from_phase` until the next row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawTier {
    pub from_phase: u32,
    pub weights: KindWeights,
    /// Restrict the pool to `clue` memories.
    #[serde(default)]
    pub clue_only: bool,
}

/// Discrete probability table keyed by phase tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawTable {
    tiers: Vec<DrawTier>,
}

impl Default for DrawTable {
    /// Phases 1-3 uniform; phase 4 favours clues 6:2:1; phase 5 on clues only.
    fn default() -> Self {
        Self::new(vec![
            DrawTier {
                from_phase: 1,
                weights: KindWeights {
                    useless: 1,
                    false_lead: 1,
                    clue: 1,
                },
                clue_only: false,
            },
            DrawTier {
                from_phase: 4,
                weights: KindWeights {
                    useless: 1,
                    false_lead: 2,
                    clue: 6,
                },
                clue_only: false,
            },
            DrawTier {
                from_phase: 5,
                weights: KindWeights {
                    useless: 0,
                    false_lead: 0,
                    clue: 1,
                },
                clue_only: true,
            },
        ])
    }
}

impl DrawTable {
    pub fn new(tiers: Vec<DrawTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[DrawTier] {
        &self.tiers
    }

    /// Tier in force at `phase`: the one with the latest `from_phase <= phase`.
    pub fn tier_for(&self, phase: u32) -> Option<&DrawTier> {
        self.tiers
            .iter()
            .filter(|t| t.from_phase <= phase)
            .max_by_key(|t| t.from_phase)
    }
}

/// Result of a pensine draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn(MemoryEntry),
    /// Every eligible memory has been drawn.
    Empty,
}

impl Console {
    /// Undrawn memories eligible now, in catalog order.
    pub fn pensine_pool(&self) -> Vec<&MemoryEntry> {
        let state = self.store.load();
        let clue_only = self
            .config
            .draw_table
            .tier_for(state.current_phase)
            .is_some_and(|t| t.clue_only);
        eligible(&self.catalogs.memories, &state)
            .filter(|m| !state.drawn_pensine.contains(&m.id))
            .filter(|m| !clue_only || m.kind == MemoryKind::Clue)
            .collect()
    }

    /// Draw one memory and record it as drawn.
    pub fn draw_memory(&mut self) -> Result<DrawOutcome, ConsoleError> {
        self.require_started()?;
        let phase = self.store.load().current_phase;
        let pool: Vec<MemoryEntry> = self.pensine_pool().into_iter().cloned().collect();
        if pool.is_empty() {
            tracing::debug!(phase, "pensine empty");
            return Ok(DrawOutcome::Empty);
        }

        let desired = self
            .config
            .draw_table
            .tier_for(phase)
            .and_then(|t| t.weights.pick(&mut self.rng));
        let matching: Vec<&MemoryEntry> = pool
            .iter()
            .filter(|m| Some(m.kind) == desired)
            .collect();
        let chosen = if matching.is_empty() {
            pool.choose(&mut self.rng)
        } else {
            matching.choose(&mut self.rng).copied()
        };

        Ok(match chosen {
            Some(memory) => {
                let memory = memory.clone();
                self.store.update(|s| s.drawn_pensine.insert(memory.id));
                tracing::debug!(id = memory.id, kind = ?memory.kind, ?desired, "memory drawn");
                DrawOutcome::Drawn(memory)
            }
            None => DrawOutcome::Empty,
        })
    }
}
