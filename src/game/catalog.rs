//! Read-only scenario catalogs: conditions, interrogation clues, search
//! clues and pensine memories.
//!
//! Catalogs arrive as JSON arrays fetched by the host page. They are
//! validated once here so the rest of the crate works with typed entries:
//! condition strings become `ConditionRequirement`s and identifiers used in
//! clue slots are checked for the reserved separator.

use serde::Deserialize;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::game::state::SLOT_SEPARATOR;

/// A declared scenario condition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConditionDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// `name=1` / `name=0` gate on a clue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionRequirement {
    pub name: String,
    pub expected: bool,
}

impl FromStr for ConditionRequirement {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidCondition {
            raw: raw.to_string(),
        };
        let (name, value) = raw.split_once('=').ok_or_else(invalid)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid());
        }
        let expected = match value.trim() {
            "1" => true,
            "0" => false,
            _ => return Err(invalid()),
        };
        Ok(Self {
            name: name.to_string(),
            expected,
        })
    }
}

/// Parse an optional catalog condition field. Absent or blank means no gate.
fn parse_requirement(raw: Option<String>) -> Result<Option<ConditionRequirement>, CatalogError> {
    match raw {
        Some(s) if !s.trim().is_empty() => s.parse().map(Some),
        _ => Ok(None),
    }
}

fn check_identifier(value: &str) -> Result<(), CatalogError> {
    if value.contains(SLOT_SEPARATOR) {
        return Err(CatalogError::ReservedSeparator {
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Leveled clue obtained by interrogating an NPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterrogationClue {
    pub location: String,
    pub npc: String,
    pub phase: u32,
    pub requirement: Option<ConditionRequirement>,
    pub level: u32,
    pub text: String,
}

#[derive(Deserialize)]
struct RawInterrogationClue {
    location: String,
    npc: String,
    phase: u32,
    #[serde(default)]
    condition: Option<String>,
    level: u32,
    clue: String,
}

impl TryFrom<RawInterrogationClue> for InterrogationClue {
    type Error = CatalogError;

    fn try_from(raw: RawInterrogationClue) -> Result<Self, Self::Error> {
        check_identifier(&raw.location)?;
        check_identifier(&raw.npc)?;
        Ok(Self {
            requirement: parse_requirement(raw.condition)?,
            location: raw.location,
            npc: raw.npc,
            phase: raw.phase,
            level: raw.level,
            text: raw.clue,
        })
    }
}

/// Kind of a search clue. Only `Objet` can be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClueKind {
    Objet,
    Clue,
    Useless,
    FalseLead,
    #[serde(other)]
    Other,
}

/// Single clue hidden at a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchClue {
    pub location: String,
    pub place: String,
    pub phase: u32,
    pub requirement: Option<ConditionRequirement>,
    pub kind: ClueKind,
    pub text: String,
}

#[derive(Deserialize)]
struct RawSearchClue {
    location: String,
    place: String,
    phase: u32,
    #[serde(default)]
    condition: Option<String>,
    #[serde(rename = "type")]
    kind: ClueKind,
    clue: String,
}

impl TryFrom<RawSearchClue> for SearchClue {
    type Error = CatalogError;

    fn try_from(raw: RawSearchClue) -> Result<Self, Self::Error> {
        check_identifier(&raw.location)?;
        check_identifier(&raw.place)?;
        Ok(Self {
            requirement: parse_requirement(raw.condition)?,
            location: raw.location,
            place: raw.place,
            phase: raw.phase,
            kind: raw.kind,
            text: raw.clue,
        })
    }
}

/// Usefulness of a pensine memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryKind {
    Useless,
    FalseLead,
    Clue,
}

impl MemoryKind {
    /// Order used by weight tables.
    pub const ALL: [MemoryKind; 3] = [MemoryKind::Useless, MemoryKind::FalseLead, MemoryKind::Clue];
}

/// Randomly drawable memory. `id` is its position in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
    pub id: usize,
    pub location: String,
    pub phase: u32,
    pub kind: MemoryKind,
    pub text: String,
}

#[derive(Deserialize)]
struct RawMemory {
    #[serde(default)]
    location: String,
    phase: u32,
    #[serde(rename = "type")]
    kind: MemoryKind,
    memory: String,
}

/// Which catalog a bridge request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Conditions,
    Clues,
    Search,
    Memories,
}

impl FromStr for CatalogKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conditions" => Ok(Self::Conditions),
            "clues" => Ok(Self::Clues),
            "search" => Ok(Self::Search),
            "memories" => Ok(Self::Memories),
            _ => Err(()),
        }
    }
}

/// All loaded catalogs. Each starts empty until the host page supplies it.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub conditions: Vec<ConditionDef>,
    pub clues: Vec<InterrogationClue>,
    pub search: Vec<SearchClue>,
    pub memories: Vec<MemoryEntry>,
}

impl Catalogs {
    /// Load one catalog from its JSON array. On error that catalog is left
    /// empty. Returns the number of entries loaded.
    pub fn load(&mut self, kind: CatalogKind, json: &str) -> Result<usize, CatalogError> {
        let result = match kind {
            CatalogKind::Conditions => parse_conditions(json).map(|v| {
                self.conditions = v;
                self.conditions.len()
            }),
            CatalogKind::Clues => parse_clues(json).map(|v| {
                self.clues = v;
                self.clues.len()
            }),
            CatalogKind::Search => parse_search(json).map(|v| {
                self.search = v;
                self.search.len()
            }),
            CatalogKind::Memories => parse_memories(json).map(|v| {
                self.memories = v;
                self.memories.len()
            }),
        };
        if result.is_err() {
            self.clear(kind);
        }
        result
    }

    pub fn clear(&mut self, kind: CatalogKind) {
        match kind {
            CatalogKind::Conditions => self.conditions.clear(),
            CatalogKind::Clues => self.clues.clear(),
            CatalogKind::Search => self.search.clear(),
            CatalogKind::Memories => self.memories.clear(),
        }
    }

    pub fn declares_condition(&self, name: &str) -> bool {
        self.conditions.iter().any(|c| c.name == name)
    }
}

pub fn parse_conditions(json: &str) -> Result<Vec<ConditionDef>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_clues(json: &str) -> Result<Vec<InterrogationClue>, CatalogError> {
    let raw: Vec<RawInterrogationClue> = serde_json::from_str(json)?;
    raw.into_iter().map(InterrogationClue::try_from).collect()
}

pub fn parse_search(json: &str) -> Result<Vec<SearchClue>, CatalogError> {
    let raw: Vec<RawSearchClue> = serde_json::from_str(json)?;
    raw.into_iter().map(SearchClue::try_from).collect()
}

pub fn parse_memories(json: &str) -> Result<Vec<MemoryEntry>, CatalogError> {
    let raw: Vec<RawMemory> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(id, m)| MemoryEntry {
            id,
            location: m.location,
            phase: m.phase,
            kind: m.kind,
            text: m.memory,
        })
        .collect())
}
