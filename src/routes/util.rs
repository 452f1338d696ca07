//! Shared request parsing and fragment helpers for route handlers.

use crate::error::{ConsoleError, Selection};
use crate::texts;

/// Decoded `key=value&...` pairs from a query string or form body.
#[derive(Debug, Clone, Default)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Parse a URL-encoded form body (HTMX POST).
    pub fn from_form(body: &str) -> Self {
        if body.is_empty() {
            return Self::default();
        }
        Self(
            body.split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| {
                    let (key, val) = pair.split_once('=').unwrap_or((pair, ""));
                    (percent_decode(key), percent_decode(val))
                })
                .collect(),
        )
    }

    /// Parse a query string, with or without its leading `?`.
    pub fn from_query(query: &str) -> Self {
        Self::from_form(query.strip_prefix('?').unwrap_or(query))
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value for `key`, trimmed, or `""` when absent.
    pub fn text(&self, key: &str) -> &str {
        self.get(key).map(str::trim).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Percent-decode a URL-encoded value as UTF-8 (`+` is a space).
/// Malformed escapes are kept literally.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escaped = input
                    .get(i + 1..i + 3)
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match escaped {
                    Some(b) => {
                        out.push(b);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// JS string literal safe to embed inside a `<script>` element.
pub fn js_string(input: &str) -> String {
    serde_json::to_string(input)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

/// Inline error notice.
pub fn notice(message: &str) -> String {
    format!(
        r#"<span role="alert" class="text-red-700 font-bold">{}</span>"#,
        escape_html(message)
    )
}

/// Inline confirmation.
pub fn success(message: &str) -> String {
    format!(
        r#"<span class="text-emerald-600">{}</span>"#,
        escape_html(message)
    )
}

/// Blocking notice: the operator has to acknowledge it.
pub fn blocking_notice(message: &str) -> String {
    format!("<script>alert({});</script>", js_string(message))
}

/// Render a refused operation for the operator.
pub fn render_error(err: &ConsoleError) -> String {
    match err {
        ConsoleError::MissingSelection(Selection::Npc) => {
            blocking_notice(texts::SELECT_LOCATION_AND_NPC)
        }
        ConsoleError::MissingSelection(Selection::Place) => {
            blocking_notice(texts::SELECT_LOCATION_AND_PLACE)
        }
        ConsoleError::PhaseFloor => blocking_notice(texts::PHASE_FLOOR),
        ConsoleError::NotStarted => notice(texts::NOT_STARTED),
        ConsoleError::NotTakeable { .. } => notice(texts::NOT_TAKEABLE),
        ConsoleError::UnknownCondition(name) => {
            notice(&format!("{} : {}", texts::UNKNOWN_CONDITION, name))
        }
        ConsoleError::Store(e) => notice(&format!("{}: {}", texts::IMPORT_FAILED, e)),
    }
}

/// `<option>` list with a leading placeholder.
pub fn render_options(placeholder: &str, values: &[String]) -> String {
    let mut html = String::with_capacity(64 + values.len() * 48);
    html.push_str(&format!(
        r#"<option value="">{}</option>"#,
        escape_html(placeholder)
    ));
    for value in values {
        let v = escape_html(value);
        html.push_str(&format!(r#"<option value="{v}">{v}</option>"#));
    }
    html
}
