//! `/api/conditions` — scenario flag toggles.

use crate::game::console::Console;
use crate::routes::util::{Params, escape_html, js_string, notice, render_error};
use crate::texts;

/// List every declared condition with its switch.
pub fn handle_get(console: &Console, _query: &str) -> String {
    render_conditions(console)
}

/// Body: `name={condition}&value=true|false`. Returns the refreshed list.
pub fn handle_post(console: &mut Console, body: &str) -> String {
    let params = Params::from_form(body);
    let name = params.text("name");
    let value = match params.text("value") {
        "true" | "1" | "on" => true,
        "false" | "0" | "off" => false,
        other => return notice(&format!("Invalid condition value: {other}")),
    };
    match console.set_declared_condition(name, value) {
        Ok(()) => render_conditions(console),
        Err(e) => render_error(&e),
    }
}

fn render_conditions(console: &Console) -> String {
    if !console.state().game_started {
        return notice(texts::NOT_STARTED);
    }
    let rows = console.condition_rows();
    let mut html = String::with_capacity(256 * rows.len().max(1));
    html.push_str(r#"<div class="conditions-page">"#);
    for (def, on) in rows {
        let name = escape_html(&def.name);
        let next = if on { "false" } else { "true" };
        let vals = escape_html(&format!(
            "{{\"name\":{},\"value\":\"{next}\"}}",
            js_string(&def.name)
        ));
        let checked = if on { " checked" } else { "" };
        let status = if on { texts::CONDITION_ON } else { texts::CONDITION_OFF };
        html.push_str(&format!(
            r#"<div class="condition-item"><p><strong>{name}</strong>: {desc}</p><label class="switch"><input type="checkbox"{checked} hx-post="/api/conditions" hx-vals="{vals}" hx-target="closest .conditions-page" hx-swap="outerHTML"><span class="slider"></span></label><span class="switch-status">{status}</span></div>"#,
            desc = escape_html(&def.description),
        ));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::CatalogKind;

    fn console() -> Console {
        let mut c = Console::for_tests();
        c.load_catalog(
            CatalogKind::Conditions,
            r#"[{"name":"murder_weapon_found","description":"Le couteau est retrouvé"}]"#,
        )
        .unwrap();
        c.start_game();
        c
    }

    #[test]
    fn lists_conditions_off() {
        let c = console();
        let html = handle_get(&c, "");
        assert!(html.contains("murder_weapon_found"));
        assert!(html.contains(texts::CONDITION_OFF));
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn toggle_on() {
        let mut c = console();
        let html = handle_post(&mut c, "name=murder_weapon_found&value=true");
        assert!(html.contains(texts::CONDITION_ON));
        assert!(html.contains(" checked"));
        assert_eq!(c.state().condition("murder_weapon_found"), Some(true));
    }

    #[test]
    fn unknown_name_is_refused() {
        let mut c = console();
        let html = handle_post(&mut c, "name=ghost&value=true");
        assert!(html.contains(texts::UNKNOWN_CONDITION));
        assert_eq!(c.state().condition("ghost"), None);
    }

    #[test]
    fn bad_value_is_refused() {
        let mut c = console();
        assert!(handle_post(&mut c, "name=murder_weapon_found&value=maybe").contains("Invalid"));
    }

    #[test]
    fn toggle_values_survive_quotes_in_names() {
        let mut c = Console::for_tests();
        c.load_catalog(
            CatalogKind::Conditions,
            r#"[{"name":"say \"hi\"\\","description":""}]"#,
        )
        .unwrap();
        c.start_game();
        let html = handle_get(&c, "");
        assert!(html.contains(r#"hx-vals="{&quot;name&quot;:&quot;say \&quot;hi\&quot;\\&quot;,&quot;value&quot;:&quot;true&quot;}""#));
    }
}
