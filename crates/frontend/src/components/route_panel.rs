use dioxus::prelude::*;

use crate::forms::{RouteField, RouteInputs};

/// Element the routing overlay renders its turn-by-turn itinerary into.
pub const ROUTE_INSTRUCTIONS_ID: &str = "route-instructions";

#[component]
pub fn RoutePanel(
    inputs: Signal<RouteInputs>,
    busy: bool,
    on_calculate: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    let mut inputs = inputs;
    let (start, end) = {
        let current = inputs.read();
        (current.start.clone(), current.end.clone())
    };

    rsx! {
        div { class: "panel",
            h3 { "Route" }
            input {
                r#type: "text",
                placeholder: "Starting point...",
                "aria-label": "Starting point",
                value: "{start}",
                oninput: move |evt: Event<FormData>| {
                    inputs.write().set(RouteField::Start, evt.value().to_string());
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && inputs.read().submits_on_enter(RouteField::Start) {
                        on_calculate.call(());
                    }
                },
            }
            input {
                r#type: "text",
                placeholder: "Destination...",
                "aria-label": "Destination",
                value: "{end}",
                oninput: move |evt: Event<FormData>| {
                    inputs.write().set(RouteField::End, evt.value().to_string());
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && inputs.read().submits_on_enter(RouteField::End) {
                        on_calculate.call(());
                    }
                },
            }
            div { class: "button-row",
                button {
                    onclick: move |_| on_calculate.call(()),
                    if busy { "Calculating..." } else { "Get Route" }
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_clear.call(()),
                    "Clear Route"
                }
            }
            div { id: ROUTE_INSTRUCTIONS_ID, class: "route-instructions" }
        }
    }
}
