use dioxus::prelude::*;
use dioxus_logger::tracing;
use pokedex::{
    config::Config,
    service::PokeApiClient,
    state::{PokedexController, Preferences},
};

use crate::client::{
    router::Route,
    store::{PokedexStore, PreferenceStore},
};

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Configuration error, falling back to defaults: {}", e);
            Config::default()
        }
    });
    use_context_provider(|| PokeApiClient::from_config(&config));
    use_context_provider(|| -> PokedexStore {
        Signal::new(PokedexController::new(
            Preferences::new(PreferenceStore::default()),
            config.page_size,
        ))
    });

    rsx! {
        Router::<Route> {}
    }
}
