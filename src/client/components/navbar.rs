use dioxus::prelude::*;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Pokédex"
                        }
                        p { class: "text-xs",
                            "Generation I"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                a { href: "https://pokeapi.co",
                    class: "btn btn-ghost btn-sm",
                    "Data from PokéAPI"
                }
            }
        }

        Outlet::<Route> {}
    }
}
