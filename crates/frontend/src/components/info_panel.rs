use dioxus::prelude::*;

#[component]
pub fn InfoPanel(info: String) -> Element {
    rsx! {
        div { class: "panel",
            h3 { "Location Info" }
            if info.is_empty() {
                p { class: "hint", "Click on the map to see coordinates." }
            } else {
                // Controller output: coordinates plus escaped place names
                div { class: "location-info", dangerous_inner_html: "{info}" }
            }
        }
    }
}
