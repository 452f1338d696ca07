//! Clue eligibility: phase gate plus optional condition gate.
//!
//! A clue is eligible when its phase is not after the current phase and,
//! if it carries a condition requirement, the named condition is set to the
//! expected value. A condition that has never been set matches neither
//! `true` nor `false`, so such clues stay hidden until the game master
//! sets it.

use std::collections::BTreeMap;

use crate::game::catalog::{ConditionRequirement, InterrogationClue, MemoryEntry, SearchClue};
use crate::game::state::GameState;

/// Anything gated by phase and, optionally, a condition.
pub trait Gated {
    fn phase(&self) -> u32;

    fn requirement(&self) -> Option<&ConditionRequirement> {
        None
    }
}

impl Gated for InterrogationClue {
    fn phase(&self) -> u32 {
        self.phase
    }

    fn requirement(&self) -> Option<&ConditionRequirement> {
        self.requirement.as_ref()
    }
}

impl Gated for SearchClue {
    fn phase(&self) -> u32 {
        self.phase
    }

    fn requirement(&self) -> Option<&ConditionRequirement> {
        self.requirement.as_ref()
    }
}

// Memories are gated on phase only.
impl Gated for MemoryEntry {
    fn phase(&self) -> u32 {
        self.phase
    }
}

/// Pure eligibility check.
pub fn is_eligible(
    phase: u32,
    requirement: Option<&ConditionRequirement>,
    current_phase: u32,
    conditions: &BTreeMap<String, bool>,
) -> bool {
    if phase > current_phase {
        return false;
    }
    match requirement {
        Some(req) => conditions.get(&req.name) == Some(&req.expected),
        None => true,
    }
}

/// Eligibility of one gated entry against the current state.
pub fn visible<T: Gated>(item: &T, state: &GameState) -> bool {
    is_eligible(
        item.phase(),
        item.requirement(),
        state.current_phase,
        &state.conditions,
    )
}

/// Iterate the entries of `items` eligible under `state`, in catalog order.
pub fn eligible<'a, 's, T: Gated>(
    items: &'a [T],
    state: &'s GameState,
) -> impl Iterator<Item = &'a T> {
    items.iter().filter(move |item| visible(*item, state))
}

/// Distinct values of `key` over the eligible entries of `items`, in
/// first-seen order.
pub fn distinct<'a, T: Gated + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    state: &GameState,
    key: impl Fn(&'a T) -> &'a str,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items.into_iter().filter(|item| visible(*item, state)) {
        let value = key(item);
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}
