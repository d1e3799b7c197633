//! Data model shared by the loader, the view-state engine and the front-end.

pub mod api;
pub mod pokemon;

pub use pokemon::{RosterEntry, StatKey, Stats, TypeFacets};
