//! Interrogation — leveled clue progression per (location, npc).
//!
//! Each interrogation reveals the lowest eligible level not yet seen for the
//! pair. Once every eligible level has been seen, the highest one is shown
//! again on every further interrogation.

use std::collections::BTreeSet;

use crate::error::{ConsoleError, Selection};
use crate::game::catalog::InterrogationClue;
use crate::game::console::Console;
use crate::game::state::GameState;
use crate::game::visibility::{distinct, eligible};

/// What an interrogation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterrogationOutcome {
    Revealed {
        level: u32,
        text: String,
        /// Every eligible level for the pair has now been seen.
        fully_revealed: bool,
    },
    /// No clue is eligible for the pair right now. Nothing was recorded.
    NothingAvailable,
}

/// Eligible clues for the pair, ascending by level. The sort is stable, so
/// duplicate levels keep catalog order and the first one wins.
fn clues_for<'a>(
    clues: &'a [InterrogationClue],
    state: &GameState,
    location: &str,
    npc: &str,
) -> Vec<&'a InterrogationClue> {
    let mut out: Vec<&InterrogationClue> = eligible(clues, state)
        .filter(|c| c.location == location && c.npc == npc)
        .collect();
    out.sort_by_key(|c| c.level);
    out
}

/// The seen set equals the set of eligible levels. A seen level that has
/// since become ineligible keeps the pair from counting as fully revealed.
fn covers_all(available: &[&InterrogationClue], seen: &BTreeSet<u32>) -> bool {
    !available.is_empty() && available.iter().map(|c| c.level).collect::<BTreeSet<_>>() == *seen
}

impl Console {
    /// Locations with at least one eligible interrogation clue.
    pub fn interrogation_locations(&self) -> Vec<String> {
        let state = self.store.load();
        distinct(&self.catalogs.clues, &state, |c| c.location.as_str())
    }

    /// NPCs with at least one eligible clue at `location`.
    pub fn interrogation_npcs(&self, location: &str) -> Vec<String> {
        let state = self.store.load();
        distinct(
            self.catalogs.clues.iter().filter(|c| c.location == location),
            &state,
            |c| c.npc.as_str(),
        )
    }

    /// The "already seen" badge: the seen levels are exactly the eligible ones.
    pub fn is_fully_revealed(&self, location: &str, npc: &str) -> bool {
        let state = self.store.load();
        let available = clues_for(&self.catalogs.clues, &state, location, npc);
        covers_all(&available, &state.seen_levels(location, npc))
    }

    /// Reveal the next clue for (location, npc) and record it as seen.
    pub fn interrogate(
        &mut self,
        location: &str,
        npc: &str,
    ) -> Result<InterrogationOutcome, ConsoleError> {
        if location.is_empty() || npc.is_empty() {
            return Err(ConsoleError::MissingSelection(Selection::Npc));
        }
        self.require_started()?;

        let state = self.store.load();
        let available = clues_for(&self.catalogs.clues, &state, location, npc);
        let Some(highest) = available.last() else {
            tracing::debug!(location, npc, "no eligible interrogation clue");
            return Ok(InterrogationOutcome::NothingAvailable);
        };

        let mut seen = state.seen_levels(location, npc);
        let chosen = available
            .iter()
            .find(|c| !seen.contains(&c.level))
            .unwrap_or(highest);
        let level = chosen.level;
        let text = chosen.text.clone();

        if seen.insert(level) {
            self.store.update(|s| s.mark_seen(location, npc, level));
            tracing::debug!(location, npc, level, "clue revealed");
        }
        let fully_revealed = covers_all(&available, &seen);

        Ok(InterrogationOutcome::Revealed {
            level,
            text,
            fully_revealed,
        })
    }
}
