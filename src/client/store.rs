use dioxus::prelude::*;
use pokedex::state::PokedexController;

/// Browser builds persist preferences to `localStorage`.
#[cfg(feature = "web")]
pub type PreferenceStore = pokedex::state::LocalStorage;

#[cfg(not(feature = "web"))]
pub type PreferenceStore = pokedex::state::MemoryStore;

/// The page controller, shared through context.
pub type PokedexStore = Signal<PokedexController<PreferenceStore>>;
