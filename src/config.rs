//! Console configuration, supplied by the host page as JSON.
//!
//! Every field has a default, so `{}` is a valid config and the crate works
//! without one.

use serde::{Deserialize, Serialize};

use crate::game::pensine::DrawTable;
use crate::game::store::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// `localStorage` key of the session record.
    pub storage_key: String,
    /// Phase-tiered memory type probabilities for the pensine.
    pub draw_table: DrawTable,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            draw_table: DrawTable::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = ConsoleConfig::from_json("{}").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.storage_key, "murderPartyGameData");
    }

    #[test]
    fn overrides_storage_key_and_table() {
        let config = ConsoleConfig::from_json(
            r#"{"storage_key":"otherParty",
                "draw_table":[{"from_phase":1,"weights":{"useless":0,"false_lead":0,"clue":1}}]}"#,
        )
        .unwrap();
        assert_eq!(config.storage_key, "otherParty");
        assert_eq!(config.draw_table.tiers().len(), 1);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(ConsoleConfig::from_json(r#"{"storage_key":5}"#).is_err());
    }
}
