//! Client-side state: preference persistence and the view-state engine.

pub mod controller;
pub mod persistence;
pub mod shiny;
pub mod view;

pub use controller::{PokedexController, ViewState};
pub use persistence::{KeyValueStore, MemoryStore, Preferences};
pub use shiny::ShinyState;
pub use view::{derive_visible, FilterQuery, VisiblePage};

#[cfg(feature = "web")]
pub use persistence::LocalStorage;
