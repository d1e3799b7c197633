use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use pokedex::{
    config::Config,
    service::{PokeApiClient, RosterService},
};

use crate::client::{
    components::{DetailModal, FilterBar, Page, Pagination, PokemonGrid},
    store::PokedexStore,
};

#[component]
pub fn Home() -> Element {
    let config = use_context::<Config>();
    let client = use_context::<PokeApiClient>();
    let mut pokedex = use_context::<PokedexStore>();

    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut skipped = use_signal(Vec::<String>::new);

    use_future(move || {
        let config = config.clone();
        let client = client.clone();

        async move {
            loading.set(true);

            let roster_service = RosterService::from_config(&client, &config);
            match roster_service.load_roster(config.roster_limit).await {
                Ok(roster) => {
                    skipped.set(roster.skipped.clone());
                    pokedex.write().set_roster(roster);
                    load_error.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to load Pokémon roster: {}", e);
                    load_error.set(Some(e.to_string()));
                }
            }

            loading.set(false);
        }
    });

    let skipped_names = skipped().join(", ");

    rsx!(
        Title { "Pokédex" }
        Meta {
            name: "description",
            content: "Browse, filter and favorite the original 151 Pokémon."
        }
        Page {
            h1 { class: "text-3xl font-bold text-center my-6",
                "Pokédex"
            }
            FilterBar {}
            if loading() {
                div { class: "flex flex-col items-center gap-4 py-16",
                    span { class: "loading loading-spinner loading-lg" }
                    p { "Loading Pokémon..." }
                }
            } else if let Some(message) = load_error() {
                div { role: "alert", class: "alert alert-error",
                    "Failed to load Pokémon: {message}"
                }
            } else {
                if !skipped_names.is_empty() {
                    div { role: "alert", class: "alert alert-warning mb-4",
                        "Some Pokémon could not be loaded: {skipped_names}"
                    }
                }
                PokemonGrid {}
                Pagination {}
            }
            DetailModal {}
        }
    )
}
