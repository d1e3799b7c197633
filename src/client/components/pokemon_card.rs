use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaStar, FaWandMagicSparkles};
use dioxus_free_icons::Icon;
use pokedex::{model::RosterEntry, service::normalize::fallback_image};

use crate::client::store::PokedexStore;

/// Grid card for one roster entry. Clicking the card opens the detail view.
#[component]
pub fn PokemonCard(entry: RosterEntry) -> Element {
    let mut pokedex = use_context::<PokedexStore>();
    let mut image_failed = use_signal(|| false);

    let id = entry.id;
    let (is_favorite, is_shiny) = {
        let pokedex = pokedex.read();
        (pokedex.is_favorite(id), pokedex.is_shiny(id))
    };

    let image = if image_failed() {
        fallback_image(&entry.name, is_shiny)
    } else {
        entry.image_for(is_shiny).to_string()
    };
    let number = entry.display_number();
    let types = entry.types.join(", ");
    let height = format!("{:.1} m", entry.height_m());
    let weight = format!("{:.1} kg", entry.weight_kg());

    let star_class = if is_favorite {
        "text-yellow-400"
    } else {
        "text-base-300"
    };
    let favorite_label = if is_favorite {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    rsx!(
        div {
            class: "card bg-base-100 shadow-md hover:shadow-xl cursor-pointer relative",
            onclick: move |_| pokedex.write().select_entry(id),
            div { class: "absolute top-2 right-2 flex gap-1",
                button {
                    class: "btn btn-ghost btn-sm btn-circle",
                    title: "Toggle shiny",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        image_failed.set(false);
                        pokedex.write().toggle_card_shiny(id);
                    },
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaWandMagicSparkles
                    }
                }
                button {
                    class: "btn btn-ghost btn-sm btn-circle",
                    title: favorite_label,
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        pokedex.write().toggle_favorite(id);
                    },
                    span { class: star_class,
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaStar
                        }
                    }
                }
            }
            figure { class: "bg-base-200 p-4",
                img {
                    class: "w-36 h-36 object-contain",
                    src: "{image}",
                    alt: "{entry.name}",
                    onerror: move |_| image_failed.set(true),
                }
            }
            div { class: "card-body items-center text-center p-4",
                h2 { class: "card-title capitalize",
                    "{entry.name}"
                    span { class: "text-sm opacity-60", "{number}" }
                }
                p { class: "text-sm", "Type: {types}" }
                p { class: "text-sm", "Height: {height}" }
                p { class: "text-sm", "Weight: {weight}" }
            }
        }
    )
}
