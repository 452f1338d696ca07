//! `/api/search` routes — search a place and keep objects found there.

use crate::game::console::Console;
use crate::game::search::SearchOutcome;
use crate::routes::util::{Params, escape_html, js_string, notice, render_error, render_options};
use crate::texts;

// ── GET /api/search/options ────────────────────────────────────────

/// Without `location`: location `<option>`s. With it: its places.
pub fn handle_options_get(console: &Console, query: &str) -> String {
    if !console.state().game_started {
        return notice(texts::NOT_STARTED);
    }
    let params = Params::from_query(query);
    let location = params.text("location");
    if location.is_empty() {
        render_options(texts::LOCATION_PLACEHOLDER, &console.search_locations())
    } else {
        render_options(texts::PLACE_PLACEHOLDER, &console.search_places(location))
    }
}

// ── POST /api/search ───────────────────────────────────────────────

/// Body: `location={location}&place={place}`.
pub fn handle_post(console: &Console, body: &str) -> String {
    let params = Params::from_form(body);
    let location = params.text("location");
    let place = params.text("place");
    match console.search(location, place) {
        Ok(SearchOutcome::Found { text, takeable }) => {
            let keep = if takeable {
                render_keep_button(location, place)
            } else {
                String::new()
            };
            render_clue(&escape_html(&text), &keep)
        }
        Ok(SearchOutcome::Removed) => render_clue(texts::REMOVED, ""),
        Ok(SearchOutcome::NothingFound) => render_clue(texts::NO_PLACE_CLUE, ""),
        Err(e) => render_error(&e),
    }
}

// ── POST /api/search/take ──────────────────────────────────────────

/// Body: `location={location}&place={place}`. Keeps the object for good.
pub fn handle_take_post(console: &mut Console, body: &str) -> String {
    let params = Params::from_form(body);
    let location = params.text("location");
    let place = params.text("place");
    match console.take(location, place) {
        Ok(()) => render_clue(texts::REMOVED, ""),
        Err(e) => render_error(&e),
    }
}

fn render_clue(text_html: &str, extra: &str) -> String {
    format!(
        r#"<div class="clue-display"><h3>{}</h3><p>{}</p>{}</div>"#,
        texts::CLUE_HEADING,
        text_html,
        extra
    )
}

fn render_keep_button(location: &str, place: &str) -> String {
    let vals = format!(
        "{{\"location\":{},\"place\":{}}}",
        js_string(location),
        js_string(place)
    );
    format!(
        r#"<button hx-post="/api/search/take" hx-vals='{}' hx-target="closest .clue-display" hx-swap="outerHTML">{}</button>"#,
        escape_html(&vals),
        texts::KEEP_CLUE
    )
}
