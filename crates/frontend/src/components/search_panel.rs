use dioxus::prelude::*;

#[component]
pub fn SearchPanel(
    query: Signal<String>,
    busy: bool,
    on_search: EventHandler<()>,
    on_locate: EventHandler<()>,
    on_clear_markers: EventHandler<()>,
) -> Element {
    let mut query = query;

    rsx! {
        div { class: "panel",
            h3 { "Search" }
            div { class: "search-row",
                input {
                    r#type: "text",
                    placeholder: "Search for a place...",
                    "aria-label": "Search for a place",
                    value: "{query}",
                    oninput: move |evt: Event<FormData>| {
                        query.set(evt.value().to_string());
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            on_search.call(());
                        }
                    },
                }
                button {
                    onclick: move |_| on_search.call(()),
                    if busy { "Searching..." } else { "Search" }
                }
            }
            div { class: "button-row",
                button {
                    class: "secondary",
                    onclick: move |_| on_locate.call(()),
                    "My Location"
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_clear_markers.call(()),
                    "Clear Markers"
                }
            }
        }
    }
}
