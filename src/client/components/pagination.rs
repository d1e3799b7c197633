use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::client::store::PokedexStore;

/// Previous/next controls, shown only when the filtered roster spans more than one page.
#[component]
pub fn Pagination() -> Element {
    let mut pokedex = use_context::<PokedexStore>();

    let (page, total_pages, total_filtered, page_size) = {
        let pokedex = pokedex.read();
        (
            pokedex.current_page(),
            pokedex.total_pages(),
            pokedex.total_filtered(),
            pokedex.page_size(),
        )
    };

    if total_filtered <= page_size {
        return rsx!();
    }

    rsx!(
        div { class: "flex justify-center items-center gap-4 mt-8",
            button {
                class: "btn btn-primary",
                disabled: page <= 1,
                onclick: move |_| pokedex.write().previous_page(),
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaChevronLeft
                }
                "Previous"
            }
            span { class: "text-lg font-bold",
                "Page {page} of {total_pages}"
            }
            button {
                class: "btn btn-primary",
                disabled: page >= total_pages,
                onclick: move |_| pokedex.write().next_page(),
                "Next"
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaChevronRight
                }
            }
        }
    )
}
