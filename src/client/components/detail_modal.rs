use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaWandMagicSparkles, FaXmark};
use dioxus_free_icons::Icon;
use pokedex::{
    model::{RosterEntry, StatKey},
    service::{normalize::fallback_image, LocationService, PokeApiClient},
};

use crate::client::store::PokedexStore;

/// Detail overlay for the selected entry, if any.
#[component]
pub fn DetailModal() -> Element {
    let pokedex = use_context::<PokedexStore>();

    let selected = {
        let pokedex = pokedex.read();
        pokedex
            .selected_entry()
            .cloned()
            .map(|entry| (pokedex.is_shiny(entry.id), entry))
    };

    match selected {
        Some((initial_shiny, entry)) => rsx!(
            DetailDialog { key: "{entry.id}", entry, initial_shiny }
        ),
        None => rsx!(),
    }
}

#[component]
fn DetailDialog(entry: RosterEntry, initial_shiny: bool) -> Element {
    let mut pokedex = use_context::<PokedexStore>();
    let client = use_context::<PokeApiClient>();

    // Local to the dialog; the card keeps its own shiny state.
    let mut shiny = use_signal(|| initial_shiny);
    let mut image_failed = use_signal(|| false);

    let id = entry.id;
    let cached_locations = entry.locations.clone();
    let locations = use_resource(move || {
        let client = client.clone();
        let cached_locations = cached_locations.clone();

        async move {
            if let Some(locations) = cached_locations {
                return locations;
            }

            let locations = LocationService::new(&client).fetch_locations(id).await;
            pokedex.write().attach_locations(id, locations.clone());
            locations
        }
    });

    let image = if image_failed() {
        fallback_image(&entry.name, shiny())
    } else {
        entry.image_for(shiny()).to_string()
    };
    let number = entry.display_number();
    let types = entry.types.join(", ");
    let abilities = entry.abilities.join(", ");
    let height = format!("{:.1} m", entry.height_m());
    let weight = format!("{:.1} kg", entry.weight_kg());
    let stats: Vec<(&'static str, String)> = StatKey::ALL
        .iter()
        .map(|&key| {
            let value = entry
                .stats
                .get(key)
                .map_or_else(|| "-".to_string(), |v| v.to_string());
            (key.label(), value)
        })
        .collect();
    let moves = entry.featured_moves().to_vec();

    rsx!(
        div {
            class: "modal modal-open",
            onclick: move |_| pokedex.write().close_detail(),
            div {
                class: "modal-box max-w-2xl relative",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "btn btn-sm btn-circle btn-ghost absolute right-2 top-2",
                    title: "Close",
                    onclick: move |_| pokedex.write().close_detail(),
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaXmark
                    }
                }
                h2 { class: "text-2xl font-bold capitalize",
                    "{entry.name} "
                    span { class: "opacity-60", "{number}" }
                }
                div { class: "flex flex-col md:flex-row gap-6 mt-4",
                    div { class: "flex flex-col items-center gap-2",
                        img {
                            class: "w-48 h-48 object-contain",
                            src: "{image}",
                            alt: "{entry.name}",
                            onerror: move |_| image_failed.set(true),
                        }
                        button {
                            class: "btn btn-outline btn-sm flex gap-2",
                            onclick: move |_| {
                                image_failed.set(false);
                                shiny.set(!shiny());
                            },
                            Icon {
                                width: 14,
                                height: 14,
                                icon: FaWandMagicSparkles
                            }
                            if shiny() { "Show normal" } else { "Show shiny" }
                        }
                    }
                    div { class: "flex-1 flex flex-col gap-2",
                        p { "Type: {types}" }
                        p { "Height: {height}" }
                        p { "Weight: {weight}" }
                        p { class: "capitalize", "Abilities: {abilities}" }
                        table { class: "table table-sm",
                            tbody {
                                for (label, value) in stats {
                                    tr { key: "{label}",
                                        td { "{label}" }
                                        td { class: "text-right font-mono", "{value}" }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "mt-4",
                    h3 { class: "font-bold", "Moves" }
                    ul { class: "flex flex-wrap gap-2 mt-2",
                        for name in moves {
                            li { key: "{name}", class: "badge badge-outline", "{name}" }
                        }
                    }
                }
                div { class: "mt-4",
                    h3 { class: "font-bold", "Locations" }
                    {match &*locations.read() {
                        None => rsx!(
                            span { class: "loading loading-dots loading-sm" }
                        ),
                        Some(names) if names.is_empty() => rsx!(
                            p { class: "opacity-70", "No known wild locations." }
                        ),
                        Some(names) => rsx!(
                            ul { class: "list-disc pl-6",
                                for name in names.iter() {
                                    li { key: "{name}", "{name}" }
                                }
                            }
                        ),
                    }}
                }
            }
        }
    )
}
