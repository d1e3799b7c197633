//! Data-loading services backed by the upstream PokéAPI.
//!
//! [`client::PokeApiClient`] owns the HTTP transport, [`normalize`] turns detail documents into
//! [`crate::model::RosterEntry`] values, [`roster::RosterService`] runs the bulk and paged loads
//! and [`location::LocationService`] serves the lazy encounter lookup of the detail view.

pub mod client;
pub mod location;
pub mod normalize;
pub mod roster;

pub use client::PokeApiClient;
pub use location::LocationService;
pub use roster::{LoadedRoster, RosterPage, RosterService};
