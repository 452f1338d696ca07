//! `/api/catalog/{kind}` — the host page posts each fetched JSON catalog.
//!
//! A rejected catalog is logged and left empty; the page simply shows no
//! options for it. Nothing is retried.

use crate::game::catalog::CatalogKind;
use crate::game::console::Console;
use crate::routes::util::notice;
use crate::texts;

/// Body: the catalog JSON array. Returns the entry count or an error notice.
pub fn handle_load_post(console: &mut Console, kind: &str, body: &str) -> String {
    let Ok(kind) = kind.parse::<CatalogKind>() else {
        return notice(&format!("Unknown catalog: {kind}"));
    };
    match console.load_catalog(kind, body) {
        Ok(count) => count.to_string(),
        Err(e) => notice(&format!("{}: {}", texts::CATALOG_FAILED, e)),
    }
}
