//! `/api/pensine/draw` — draw a memory.

use crate::game::console::Console;
use crate::game::pensine::DrawOutcome;
use crate::routes::util::{escape_html, render_error};
use crate::texts;

pub fn handle_draw_post(console: &mut Console, _body: &str) -> String {
    match console.draw_memory() {
        Ok(DrawOutcome::Drawn(memory)) => format!(
            r#"<div class="memory-display" data-memory-id="{}"><h3>{}</h3><p class="memory-location">{}</p><p>{}</p></div>"#,
            memory.id,
            texts::MEMORY_HEADING,
            escape_html(&memory.location),
            escape_html(&memory.text),
        ),
        Ok(DrawOutcome::Empty) => format!(
            r#"<div class="memory-display empty"><p>{}</p></div>"#,
            texts::PENSINE_EMPTY
        ),
        Err(e) => render_error(&e),
    }
}
