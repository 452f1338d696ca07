//! Game-master console core — session record, catalogs and the rules that
//! decide which clues are visible and what has already been revealed.
//!
//! Storage is injected through `storage::Storage`; the browser build keeps
//! the record in WASM memory and the host page mirrors it to localStorage.

pub mod catalog;
pub mod clock;
pub mod conditions;
pub mod console;
pub mod interrogation;
pub mod pensine;
pub mod phase;
pub mod search;
pub mod state;
pub mod storage;
pub mod store;
pub mod visibility;
