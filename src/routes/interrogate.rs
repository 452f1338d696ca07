//! `/api/interrogate` routes — question an NPC at a location.

use crate::game::console::Console;
use crate::game::interrogation::InterrogationOutcome;
use crate::routes::util::{Params, escape_html, notice, render_error, render_options};
use crate::texts;

// ── GET /api/interrogate/options ───────────────────────────────────

/// Without `location`: the location `<option>`s. With `location`: its NPCs,
/// followed by the "already seen" badge when `npc` is also given and fully
/// revealed.
pub fn handle_options_get(console: &Console, query: &str) -> String {
    if !console.state().game_started {
        return notice(texts::NOT_STARTED);
    }
    let params = Params::from_query(query);
    let location = params.text("location");
    let npc = params.text("npc");
    if location.is_empty() {
        return render_options(texts::LOCATION_PLACEHOLDER, &console.interrogation_locations());
    }
    if !npc.is_empty() {
        return render_badge(console.is_fully_revealed(location, npc));
    }
    render_options(texts::NPC_PLACEHOLDER, &console.interrogation_npcs(location))
}

// ── POST /api/interrogate ──────────────────────────────────────────

/// Body: `location={location}&npc={npc}`.
pub fn handle_post(console: &mut Console, body: &str) -> String {
    let params = Params::from_form(body);
    let location = params.text("location");
    let npc = params.text("npc");
    match console.interrogate(location, npc) {
        Ok(InterrogationOutcome::Revealed {
            level,
            text,
            fully_revealed,
        }) => format!(
            r#"{}<div class="clue-display" data-level="{level}"><h3>{}</h3><p>{}</p></div>"#,
            render_badge(fully_revealed),
            texts::CLUE_HEADING,
            escape_html(&text),
        ),
        Ok(InterrogationOutcome::NothingAvailable) => format!(
            r#"<div class="clue-display"><h3>{}</h3><p>{}</p></div>"#,
            texts::CLUE_HEADING,
            texts::NO_NPC_CLUE,
        ),
        Err(e) => render_error(&e),
    }
}

fn render_badge(fully_revealed: bool) -> String {
    if fully_revealed {
        format!(
            r#"<p class="already-seen text-red-700 font-bold">{}</p>"#,
            texts::ALREADY_SEEN
        )
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::CatalogKind;

    fn console() -> Console {
        let mut c = Console::for_tests();
        c.load_catalog(
            CatalogKind::Clues,
            r#"[
                {"location":"Bibliothèque","npc":"Majordome","phase":1,"level":1,"clue":"J'ai entendu un <cri>."},
                {"location":"Bibliothèque","npc":"Majordome","phase":1,"level":2,"clue":"Vers minuit."}
            ]"#,
        )
        .unwrap();
        c.start_game();
        c
    }

    #[test]
    fn options_for_locations_and_npcs() {
        let c = console();
        let html = handle_options_get(&c, "");
        assert!(html.contains(texts::LOCATION_PLACEHOLDER));
        assert!(html.contains(r#"value="Bibliothèque""#));
        let html = handle_options_get(&c, "?location=Biblioth%C3%A8que");
        assert!(html.contains(r#"value="Majordome""#));
    }

    #[test]
    fn interrogate_reveals_and_escapes() {
        let mut c = console();
        let html = handle_post(&mut c, "location=Biblioth%C3%A8que&npc=Majordome");
        assert!(html.contains("&lt;cri&gt;"));
        assert!(!html.contains(texts::ALREADY_SEEN));
        let html = handle_post(&mut c, "location=Biblioth%C3%A8que&npc=Majordome");
        assert!(html.contains("Vers minuit."));
        assert!(html.contains(texts::ALREADY_SEEN));
        let badge = handle_options_get(&c, "?location=Biblioth%C3%A8que&npc=Majordome");
        assert!(badge.contains(texts::ALREADY_SEEN));
    }

    #[test]
    fn missing_npc_is_blocking() {
        let mut c = console();
        let html = handle_post(&mut c, "location=Biblioth%C3%A8que");
        assert!(html.contains("alert("));
        assert!(html.contains("PNJ"));
        assert!(c.state().seen_clues.is_empty());
    }

    #[test]
    fn unknown_npc_has_nothing() {
        let mut c = console();
        let html = handle_post(&mut c, "location=Biblioth%C3%A8que&npc=Cuisinier");
        assert!(html.contains(texts::NO_NPC_CLUE));
    }
}
