//! Murder party game-master console, running in-browser as WASM.
//!
//! Exports `handle_request(method, path, query, body)` for the page's worker
//! bridge to call. Uses `matchit` for URL routing. Responses are HTML
//! fragments for HTMX to swap in, except the persistence plumbing routes.
//!
//! The session record is kept by a single `Console` owned by this module;
//! every handler receives it explicitly. `dispatch` exposes the same routing
//! over a caller-owned `Console`.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod game;
pub mod routes;
pub mod texts;

use config::ConsoleConfig;
use game::console::Console;

thread_local! {
    static CONSOLE: RefCell<Console> = RefCell::new(Console::browser());
}

fn with_console_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Console) -> R,
{
    CONSOLE.with(|c| f(&mut c.borrow_mut()))
}

/// Process an HTTP-like request against the worker's console.
///
/// # Arguments
/// * `method` — "GET" or "POST"
/// * `path`   — URL path (e.g. "/api/interrogate")
/// * `query`  — query string (e.g. "?location=Library")
/// * `body`   — form body or JSON for POST; empty for GET
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    with_console_mut(|console| dispatch(console, method, path, query, body))
}

/// Apply a JSON `ConsoleConfig`. Returns "ok" or an error message; on error
/// the previous config stays in force.
#[wasm_bindgen]
pub fn configure(json: &str) -> String {
    match ConsoleConfig::from_json(json) {
        Ok(config) => {
            with_console_mut(|console| console.configure(config));
            "ok".to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "config rejected");
            format!("error: {e}")
        }
    }
}

/// Replace the in-memory record with the JSON kept in localStorage.
#[wasm_bindgen]
pub fn restore_record(json: &str) -> String {
    with_console_mut(|console| routes::game::handle_restore_post(console, json))
}

/// The record JSON to write to localStorage; empty after a reset.
#[wasm_bindgen]
pub fn persisted_record() -> String {
    with_console_mut(|console| console.store().raw_record().unwrap_or_default())
}

/// Route a request to its handler.
pub fn dispatch(console: &mut Console, method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    router.insert("/api/game/state", "game_state").ok();
    router.insert("/api/game/start", "game_start").ok();
    router.insert("/api/game/phase", "game_phase").ok();
    router.insert("/api/game/reset", "game_reset").ok();
    router.insert("/api/game/timer", "game_timer").ok();
    router.insert("/api/game/persist", "game_persist").ok();
    router.insert("/api/game/restore", "game_restore").ok();
    router.insert("/api/game/export", "game_export").ok();
    router.insert("/api/game/import", "game_import").ok();

    router.insert("/api/catalog/{kind}", "catalog").ok();

    router.insert("/api/conditions", "conditions").ok();
    router.insert("/api/interrogate", "interrogate").ok();
    router.insert("/api/interrogate/options", "interrogate_options").ok();
    router.insert("/api/search", "search").ok();
    router.insert("/api/search/options", "search_options").ok();
    router.insert("/api/search/take", "search_take").ok();
    router.insert("/api/pensine/draw", "pensine_draw").ok();

    let matched = match router.at(path) {
        Ok(matched) => matched,
        Err(_) => return not_found(),
    };
    tracing::debug!(method, path, route = *matched.value, "request");

    match (*matched.value, method) {
        ("game_state", "GET") => routes::game::handle_state_get(console, query),
        ("game_timer", "GET") => routes::game::handle_timer_get(console, query),
        ("game_persist", "GET") => routes::game::handle_persist_get(console, query),
        ("game_export", "GET") => routes::game::handle_export_get(console, query),
        ("game_start", "POST") => routes::game::handle_start_post(console, body),
        ("game_phase", "POST") => routes::game::handle_phase_post(console, body),
        ("game_reset", "POST") => routes::game::handle_reset_post(console, body),
        ("game_restore", "POST") => routes::game::handle_restore_post(console, body),
        ("game_import", "POST") => routes::game::handle_import_post(console, body),

        ("catalog", "POST") => {
            let kind = matched.params.get("kind").unwrap_or("");
            routes::catalog::handle_load_post(console, kind, body)
        }

        ("conditions", "GET") => routes::conditions::handle_get(console, query),
        ("conditions", "POST") => routes::conditions::handle_post(console, body),
        ("interrogate_options", "GET") => routes::interrogate::handle_options_get(console, query),
        ("interrogate", "POST") => routes::interrogate::handle_post(console, body),
        ("search_options", "GET") => routes::search::handle_options_get(console, query),
        ("search", "POST") => routes::search::handle_post(console, body),
        ("search_take", "POST") => routes::search::handle_take_post(console, body),
        ("pensine_draw", "POST") => routes::pensine::handle_draw_post(console, body),

        _ => method_not_allowed(),
    }
}

fn not_found() -> String {
    r#"<span class="text-red-700">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-red-700">405 — method not allowed</span>"#.to_string()
}
