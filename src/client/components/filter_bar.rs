use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaWandMagicSparkles;
use dioxus_free_icons::Icon;

use crate::client::store::PokedexStore;

/// Search box, type select, favorites-only toggle and the global shiny switch.
#[component]
pub fn FilterBar() -> Element {
    let mut pokedex = use_context::<PokedexStore>();

    let (search_term, selected_type, favorites_only, shiny, type_names) = {
        let pokedex = pokedex.read();
        let view = pokedex.view();
        (
            view.search_term.clone(),
            view.selected_type.clone().unwrap_or_default(),
            view.favorites_only,
            pokedex.shiny_global(),
            pokedex.type_facets().to_vec(),
        )
    };

    let shiny_class = if shiny {
        "btn btn-warning flex gap-2"
    } else {
        "btn btn-outline flex gap-2"
    };

    rsx!(
        div { class: "flex flex-wrap items-center gap-4 mb-8",
            input {
                class: "input input-bordered flex-1 min-w-64",
                r#type: "text",
                placeholder: "Search Pokémon by name...",
                value: "{search_term}",
                oninput: move |evt| pokedex.write().set_search_term(evt.value()),
            }
            select {
                class: "select select-bordered",
                onchange: move |evt| pokedex.write().set_selected_type(Some(evt.value())),
                option { value: "", selected: selected_type.is_empty(), "All types" }
                for type_name in type_names {
                    option {
                        key: "{type_name}",
                        value: "{type_name}",
                        selected: type_name == selected_type,
                        "{type_name}"
                    }
                }
            }
            label { class: "label cursor-pointer flex gap-2",
                input {
                    r#type: "checkbox",
                    class: "checkbox",
                    checked: favorites_only,
                    onchange: move |_| pokedex.write().set_favorites_only(!favorites_only),
                }
                span { "Favorites only" }
            }
            button {
                class: shiny_class,
                onclick: move |_| pokedex.write().set_shiny_global(!shiny),
                Icon {
                    width: 18,
                    height: 18,
                    icon: FaWandMagicSparkles
                }
                if shiny { "Showing shiny" } else { "Show shiny" }
            }
        }
    )
}
