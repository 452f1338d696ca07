//! `/api/game/*` routes — session lifecycle, timer and record persistence.
//!
//! The record lives in WASM memory. The host page restores it from
//! localStorage on load (`/api/game/restore`) and writes it back after every
//! mutating request by swapping in the `/api/game/persist` script.

use crate::game::clock::format_elapsed;
use crate::game::console::Console;
use crate::routes::util::{Params, escape_html, js_string, notice, render_error, success};
use crate::texts;

// ── GET /api/game/state ────────────────────────────────────────────

/// Full record as JSON.
pub fn handle_state_get(console: &Console, _query: &str) -> String {
    serde_json::to_string(&console.state()).unwrap_or_else(|_| "{}".to_string())
}

// ── POST /api/game/start ───────────────────────────────────────────

pub fn handle_start_post(console: &mut Console, _body: &str) -> String {
    console.start_game();
    success(texts::GAME_STARTED)
}

// ── POST /api/game/phase ───────────────────────────────────────────

/// Body: `action=next` or `action=previous`. Returns the timer fragment.
pub fn handle_phase_post(console: &mut Console, body: &str) -> String {
    let params = Params::from_form(body);
    let result = match params.text("action") {
        "next" => console.next_phase(),
        "previous" => console.previous_phase(),
        other => return notice(&format!("Unknown phase action: {other}")),
    };
    match result {
        Ok(_) => render_timer(console),
        Err(e) => format!("{}{}", render_error(&e), render_timer(console)),
    }
}

// ── POST /api/game/reset ───────────────────────────────────────────

pub fn handle_reset_post(console: &mut Console, _body: &str) -> String {
    console.reset_game();
    success(texts::GAME_RESET)
}

// ── GET /api/game/timer ────────────────────────────────────────────

/// Polled every second by the header.
pub fn handle_timer_get(console: &Console, _query: &str) -> String {
    render_timer(console)
}

pub fn render_timer(console: &Console) -> String {
    let t = console.timer();
    format!(
        r#"<div class="timer"><p>{} {}</p><p>{} {} – {} {}</p></div>"#,
        texts::TOTAL_TIME,
        format_elapsed(t.game_elapsed_ms),
        texts::CURRENT_PHASE,
        t.phase,
        texts::PHASE_TIME,
        format_elapsed(t.phase_elapsed_ms),
    )
}

// ── GET /api/game/persist ──────────────────────────────────────────

/// Script that mirrors the record into localStorage, or removes it after a
/// reset.
pub fn handle_persist_get(console: &Console, _query: &str) -> String {
    let key = js_string(console.store().key());
    match console.store().raw_record() {
        Some(json) => format!(
            "<script>localStorage.setItem({key}, {});</script>",
            js_string(&json)
        ),
        None => format!("<script>localStorage.removeItem({key});</script>"),
    }
}

// ── POST /api/game/restore ─────────────────────────────────────────

/// Body: the raw record JSON read from localStorage (possibly empty).
pub fn handle_restore_post(console: &mut Console, body: &str) -> String {
    match console.store_mut().restore_raw(body) {
        Ok(()) => "ok".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "stored record rejected on restore");
            format!("error: {e}")
        }
    }
}

// ── GET /api/game/export ───────────────────────────────────────────

/// Export code for moving a session to another device.
pub fn handle_export_get(console: &Console, _query: &str) -> String {
    match console.store().export_code() {
        Ok(code) => format!(
            r#"<textarea readonly class="w-full font-mono text-xs">{}</textarea>"#,
            escape_html(&code)
        ),
        Err(e) => notice(&e.to_string()),
    }
}

// ── POST /api/game/import ──────────────────────────────────────────

/// Body: `code={export code}` or the bare code.
pub fn handle_import_post(console: &mut Console, body: &str) -> String {
    let params = Params::from_form(body);
    let code = params.get("code").unwrap_or(body).trim().to_string();
    match console.store_mut().import_code(&code) {
        Ok(state) => {
            tracing::info!(phase = state.current_phase, "session imported");
            success(texts::IMPORT_OK)
        }
        Err(e) => notice(&format!("{}: {}", texts::IMPORT_FAILED, e)),
    }
}
