//! End-to-end game-master scenarios through the public API and the request
//! dispatcher.

use murder_party_console::dispatch;
use murder_party_console::error::ConsoleError;
use murder_party_console::game::catalog::CatalogKind;
use murder_party_console::game::clock::FixedClock;
use murder_party_console::game::console::Console;
use murder_party_console::game::interrogation::InterrogationOutcome;
use murder_party_console::game::pensine::DrawOutcome;
use murder_party_console::game::search::SearchOutcome;
use murder_party_console::texts;
use std::collections::BTreeSet;

fn console() -> Console {
    Console::with_seed(Box::new(FixedClock::at(1_700_000_000_000)), 11)
}

#[test]
fn condition_catalog_seeds_and_toggles() {
    let mut c = console();
    c.load_catalog(
        CatalogKind::Conditions,
        r#"[{"name":"murder_weapon_found","description":"..."}]"#,
    )
    .unwrap();
    assert_eq!(c.state().condition("murder_weapon_found"), Some(false));

    c.set_condition("murder_weapon_found", true);
    let reloaded = c.store().load();
    assert_eq!(reloaded.condition("murder_weapon_found"), Some(true));
}

#[test]
fn butler_reveals_levels_in_order() {
    let mut c = console();
    c.load_catalog(
        CatalogKind::Clues,
        r#"[
            {"location":"Library","npc":"Butler","phase":1,"level":1,"clue":"one"},
            {"location":"Library","npc":"Butler","phase":1,"level":2,"clue":"two"},
            {"location":"Library","npc":"Butler","phase":1,"level":3,"clue":"three"}
        ]"#,
    )
    .unwrap();
    c.start_game();

    let expected = [("one", 1, false), ("two", 2, false), ("three", 3, true), ("three", 3, true)];
    for (text, level, fully) in expected {
        assert_eq!(
            c.interrogate("Library", "Butler").unwrap(),
            InterrogationOutcome::Revealed {
                level,
                text: text.to_string(),
                fully_revealed: fully,
            }
        );
    }
    assert_eq!(
        c.state().seen_levels("Library", "Butler"),
        BTreeSet::from([1, 2, 3])
    );
}

#[test]
fn taken_object_stays_taken_across_reload() {
    let mut c = console();
    c.load_catalog(
        CatalogKind::Search,
        r#"[{"location":"Library","place":"Desk","phase":1,"type":"objet","clue":"A silver key."}]"#,
    )
    .unwrap();
    c.start_game();

    assert_eq!(
        c.search("Library", "Desk").unwrap(),
        SearchOutcome::Found {
            text: "A silver key.".to_string(),
            takeable: true,
        }
    );
    c.take("Library", "Desk").unwrap();
    assert_eq!(c.search("Library", "Desk").unwrap(), SearchOutcome::Removed);

    // Move the record to a fresh console, as a page reload would.
    let record = c.store().raw_record().unwrap();
    let mut reloaded = console();
    reloaded.load_catalog(
        CatalogKind::Search,
        r#"[{"location":"Library","place":"Desk","phase":1,"type":"objet","clue":"A silver key."}]"#,
    )
    .unwrap();
    reloaded.store_mut().restore_raw(&record).unwrap();
    assert!(reloaded.is_taken("Library", "Desk"));
    assert_eq!(reloaded.search("Library", "Desk").unwrap(), SearchOutcome::Removed);
}

#[test]
fn phase_cannot_drop_below_one() {
    let mut c = console();
    c.start_game();
    assert!(matches!(c.previous_phase(), Err(ConsoleError::PhaseFloor)));
    assert_eq!(c.state().current_phase, 1);

    let html = dispatch(&mut c, "POST", "/api/game/phase", "", "action=previous");
    assert!(html.contains("alert("));
    assert!(html.contains("inférieure à 1"));
    assert_eq!(c.state().current_phase, 1);
}

#[test]
fn pensine_drains_without_duplicates() {
    let mut c = console();
    c.load_catalog(
        CatalogKind::Memories,
        r#"[
            {"location":"Salon","phase":1,"type":"useless","memory":"a"},
            {"location":"Salon","phase":1,"type":"false-lead","memory":"b"},
            {"location":"Salon","phase":1,"type":"clue","memory":"c"},
            {"location":"Salon","phase":1,"type":"clue","memory":"d"}
        ]"#,
    )
    .unwrap();
    c.start_game();

    let mut previous = 0;
    while let DrawOutcome::Drawn(_) = c.draw_memory().unwrap() {
        let drawn = c.state().drawn_pensine.len();
        assert_eq!(drawn, previous + 1);
        previous = drawn;
    }
    assert_eq!(previous, 4);
    assert_eq!(c.draw_memory().unwrap(), DrawOutcome::Empty);
}

#[test]
fn reset_through_dispatch_clears_everything() {
    let mut c = console();
    dispatch(&mut c, "POST", "/api/game/start", "", "");
    dispatch(&mut c, "POST", "/api/game/phase", "", "action=next");
    assert_eq!(c.state().current_phase, 2);

    let html = dispatch(&mut c, "POST", "/api/game/reset", "", "");
    assert!(html.contains(texts::GAME_RESET));
    assert!(c.store().raw_record().is_none());
    let html = dispatch(&mut c, "POST", "/api/interrogate", "", "location=Library&npc=Butler");
    assert!(html.contains(texts::NOT_STARTED));
}

#[test]
fn restored_phase_zero_still_shows_phase_one_clues() {
    let mut c = console();
    c.load_catalog(
        CatalogKind::Clues,
        r#"[{"location":"Hall","npc":"Cook","phase":1,"level":1,"clue":"Soup was cold."}]"#,
    )
    .unwrap();
    c.store_mut()
        .restore_raw(r#"{"gameStarted":true,"currentPhase":0}"#)
        .unwrap();
    assert_eq!(c.state().current_phase, 1);
    assert!(matches!(
        c.interrogate("Hall", "Cook").unwrap(),
        InterrogationOutcome::Revealed { level: 1, .. }
    ));
}
