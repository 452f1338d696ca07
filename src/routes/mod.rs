//! Route handlers. Each returns an HTML fragment (or JSON/plain text for the
//! persistence plumbing) for the host page to swap in.

pub mod catalog;
pub mod conditions;
pub mod game;
pub mod interrogate;
pub mod pensine;
pub mod search;
pub mod util;
