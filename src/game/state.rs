//! The persisted game-session record.
//!
//! One `GameState` exists per session. It is serialised as a single JSON
//! document whose field names match the record the host page has always kept
//! in `localStorage` (`gameStarted`, `seenClues`, ...), so records written by
//! earlier versions still load. Missing fields fall back to their defaults.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Separator used when a `ClueSlot` is written as a JSON object key.
pub const SLOT_SEPARATOR: char = '|';

/// A (location, npc) or (location, place) pair.
///
/// Kept as two fields in memory; encoded as `"location|subject"` on the wire.
/// Catalog loading rejects identifiers containing the separator, so the
/// encoding is never ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClueSlot {
    pub location: String,
    pub subject: String,
}

impl ClueSlot {
    pub fn new(location: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            subject: subject.into(),
        }
    }
}

impl fmt::Display for ClueSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.location, SLOT_SEPARATOR, self.subject)
    }
}

impl Serialize for ClueSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClueSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.split_once(SLOT_SEPARATOR) {
            Some((location, subject)) => Ok(ClueSlot::new(location, subject)),
            None => Err(D::Error::custom(format!(
                "clue slot `{raw}` is missing the `{SLOT_SEPARATOR}` separator"
            ))),
        }
    }
}

/// Complete session record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    pub game_started: bool,
    /// Milliseconds since the Unix epoch.
    pub start_time: Option<i64>,
    pub phase_start_time: Option<i64>,
    /// Always >= 1. A stored `0` or `null` reads back as phase 1.
    #[serde(deserialize_with = "phase_at_least_one")]
    pub current_phase: u32,
    pub conditions: BTreeMap<String, bool>,
    /// Interrogation levels already revealed, per (location, npc).
    pub seen_clues: BTreeMap<ClueSlot, BTreeSet<u32>>,
    /// Search slots whose object has been taken, per (location, place).
    pub taken_clues: BTreeMap<ClueSlot, bool>,
    /// Memory ids already drawn from the pensine.
    pub drawn_pensine: BTreeSet<usize>,
}

fn phase_at_least_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(1).max(1))
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            game_started: false,
            start_time: None,
            phase_start_time: None,
            current_phase: 1,
            conditions: BTreeMap::new(),
            seen_clues: BTreeMap::new(),
            taken_clues: BTreeMap::new(),
            drawn_pensine: BTreeSet::new(),
        }
    }
}

impl GameState {
    /// Levels already revealed for a (location, npc) pair. Empty if never visited.
    pub fn seen_levels(&self, location: &str, npc: &str) -> BTreeSet<u32> {
        self.seen_clues
            .get(&ClueSlot::new(location, npc))
            .cloned()
            .unwrap_or_default()
    }

    /// Record a revealed level. Returns false if it was already recorded.
    pub fn mark_seen(&mut self, location: &str, npc: &str, level: u32) -> bool {
        self.seen_clues
            .entry(ClueSlot::new(location, npc))
            .or_default()
            .insert(level)
    }

    pub fn is_taken(&self, location: &str, place: &str) -> bool {
        self.taken_clues
            .get(&ClueSlot::new(location, place))
            .copied()
            .unwrap_or(false)
    }

    pub fn mark_taken(&mut self, location: &str, place: &str) {
        self.taken_clues.insert(ClueSlot::new(location, place), true);
    }

    /// Current value of a condition; `None` if it was never set.
    pub fn condition(&self, name: &str) -> Option<bool> {
        self.conditions.get(name).copied()
    }
}
