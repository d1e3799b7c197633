use dioxus::prelude::*;

/// Page body below the fixed navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-[64px] p-4 max-w-7xl mx-auto {class}",
            {children}
        }
    )
}
