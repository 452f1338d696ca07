//! Error types for catalogs, the record store and console operations.

use std::fmt;

use thiserror::Error;

/// A catalog was rejected at load time.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid condition `{raw}`: expected `name=0` or `name=1`")]
    InvalidCondition { raw: String },

    #[error("identifier `{value}` contains the reserved `|` separator")]
    ReservedSeparator { value: String },
}

/// The persisted record or an export code could not be decoded.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid game record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid export code: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// The pair of selections an operation needs from the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A location and an NPC.
    Npc,
    /// A location and a place.
    Place,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Npc => f.write_str("location and npc"),
            Selection::Place => f.write_str("location and place"),
        }
    }
}

/// A console operation was refused. None of these mutate state.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("missing selection: {0}")]
    MissingSelection(Selection),

    #[error("phase cannot go below 1")]
    PhaseFloor,

    #[error("nothing takeable at {location} / {place}")]
    NotTakeable { location: String, place: String },

    #[error("unknown condition `{0}`")]
    UnknownCondition(String),

    #[error("the game has not started")]
    NotStarted,

    #[error(transparent)]
    Store(#[from] StoreError),
}
