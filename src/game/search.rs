//! Search — one clue per (location, place), with takeable objects.

use crate::error::{ConsoleError, Selection};
use crate::game::catalog::{ClueKind, SearchClue};
use crate::game::console::Console;
use crate::game::visibility::{distinct, eligible};

/// What searching a place produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found {
        text: String,
        /// The clue is an object the players may keep.
        takeable: bool,
    },
    /// The object here was already taken.
    Removed,
    /// No eligible clue at this place.
    NothingFound,
}

impl Console {
    pub fn search_locations(&self) -> Vec<String> {
        let state = self.store.load();
        distinct(&self.catalogs.search, &state, |c| c.location.as_str())
    }

    pub fn search_places(&self, location: &str) -> Vec<String> {
        let state = self.store.load();
        distinct(
            self.catalogs.search.iter().filter(|c| c.location == location),
            &state,
            |c| c.place.as_str(),
        )
    }

    pub fn is_taken(&self, location: &str, place: &str) -> bool {
        self.store.load().is_taken(location, place)
    }

    /// Flag the slot as taken. Idempotent.
    pub fn mark_taken(&mut self, location: &str, place: &str) {
        self.store.update(|s| s.mark_taken(location, place));
    }

    fn eligible_search_clue(&self, location: &str, place: &str) -> Option<SearchClue> {
        let state = self.store.load();
        eligible(&self.catalogs.search, &state)
            .find(|c| c.location == location && c.place == place)
            .cloned()
    }

    /// Search a place.
    pub fn search(&self, location: &str, place: &str) -> Result<SearchOutcome, ConsoleError> {
        if location.is_empty() || place.is_empty() {
            return Err(ConsoleError::MissingSelection(Selection::Place));
        }
        self.require_started()?;

        if self.is_taken(location, place) {
            return Ok(SearchOutcome::Removed);
        }
        Ok(match self.eligible_search_clue(location, place) {
            Some(clue) => SearchOutcome::Found {
                takeable: clue.kind == ClueKind::Objet,
                text: clue.text,
            },
            None => SearchOutcome::NothingFound,
        })
    }

    /// Keep the object found at a place. Only an eligible `objet` clue can be
    /// taken; once taken the slot stays taken until reset.
    pub fn take(&mut self, location: &str, place: &str) -> Result<(), ConsoleError> {
        if location.is_empty() || place.is_empty() {
            return Err(ConsoleError::MissingSelection(Selection::Place));
        }
        self.require_started()?;

        match self.eligible_search_clue(location, place) {
            Some(clue) if clue.kind == ClueKind::Objet => {
                self.mark_taken(location, place);
                tracing::debug!(location, place, "object taken");
                Ok(())
            }
            _ => Err(ConsoleError::NotTakeable {
                location: location.to_string(),
                place: place.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::CatalogKind;

    const SEARCH: &str = r#"[
        {"location":"Library","place":"Desk","phase":1,"type":"objet","clue":"A bloody letter opener."},
        {"location":"Library","place":"Shelf","phase":1,"type":"useless","clue":"Dusty books."},
        {"location":"Library","place":"Fireplace","phase":2,"condition":"fire_out=1","type":"clue","clue":"Ashes of a letter."}
    ]"#;

    fn console() -> Console {
        let mut c = Console::for_tests();
        c.load_catalog(CatalogKind::Search, SEARCH).unwrap();
        c.start_game();
        c
    }

    #[test]
    fn objet_is_found_then_taken() {
        let mut c = console();
        assert_eq!(
            c.search("Library", "Desk").unwrap(),
            SearchOutcome::Found {
                text: "A bloody letter opener.".to_string(),
                takeable: true
            }
        );
        c.take("Library", "Desk").unwrap();
        assert!(c.is_taken("Library", "Desk"));
        assert_eq!(c.search("Library", "Desk").unwrap(), SearchOutcome::Removed);
        assert!(c.store().load().is_taken("Library", "Desk"));
    }

    #[test]
    fn non_objet_cannot_be_taken() {
        let mut c = console();
        assert!(matches!(
            c.search("Library", "Shelf").unwrap(),
            SearchOutcome::Found { takeable: false, .. }
        ));
        assert!(matches!(
            c.take("Library", "Shelf"),
            Err(ConsoleError::NotTakeable { .. })
        ));
        assert!(!c.is_taken("Library", "Shelf"));
    }

    #[test]
    fn mark_taken_is_idempotent() {
        let mut c = console();
        c.mark_taken("Library", "Desk");
        let once = c.store().raw_record();
        c.mark_taken("Library", "Desk");
        assert_eq!(c.store().raw_record(), once);
    }

    #[test]
    fn gated_place_is_hidden_until_eligible() {
        let mut c = console();
        assert_eq!(c.search_places("Library"), vec!["Desk", "Shelf"]);
        assert_eq!(
            c.search("Library", "Fireplace").unwrap(),
            SearchOutcome::NothingFound
        );
        c.next_phase().unwrap();
        c.set_condition("fire_out", true);
        assert_eq!(c.search_places("Library"), vec!["Desk", "Shelf", "Fireplace"]);
        assert!(matches!(
            c.search("Library", "Fireplace").unwrap(),
            SearchOutcome::Found { .. }
        ));
        assert_eq!(c.search_locations(), vec!["Library"]);
    }

    #[test]
    fn missing_place_is_an_error() {
        let c = console();
        assert!(matches!(
            c.search("Library", ""),
            Err(ConsoleError::MissingSelection(Selection::Place))
        ));
    }
}
