use dioxus::prelude::*;
use pokedex::model::RosterEntry;

use crate::client::{components::PokemonCard, store::PokedexStore};

#[component]
pub fn PokemonGrid() -> Element {
    let pokedex = use_context::<PokedexStore>();

    let entries: Vec<RosterEntry> = pokedex.read().visible().items.into_iter().cloned().collect();

    if entries.is_empty() {
        return rsx!(
            p { class: "text-center text-lg opacity-70 py-16",
                "No Pokémon match your filters."
            }
        );
    }

    rsx!(
        div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
            for entry in entries {
                PokemonCard { key: "{entry.id}", entry }
            }
        }
    )
}
