use dioxus::prelude::*;
use wayfinder_shared::controller::{resolve_waypoints, Geocoder, Outcome};
use wayfinder_shared::error::MapError;
use wayfinder_shared::requests::RequestKind;

use crate::api::Nominatim;
use crate::components::info_panel::InfoPanel;
use crate::components::map_view::{Controller, MapView};
use crate::components::route_panel::{RoutePanel, ROUTE_INSTRUCTIONS_ID};
use crate::components::search_panel::SearchPanel;
use crate::dom;
use crate::forms::RouteInputs;
use crate::geolocation;

/// Surface the result of a finished action. Stale answers are silent.
fn report(result: Option<Result<Outcome, MapError>>) {
    if let Some(Err(e)) = result {
        tracing::warn!(error = %e, "Action failed");
        dom::alert(&e.to_string());
    }
}

fn search_location(mut controller: Signal<Option<Controller>>, geocoder: Nominatim, query: String) {
    let Some(begun) = controller.write().as_mut().map(|ctl| ctl.begin_search(&query)) else {
        return;
    };
    let pending = match begun {
        Ok(p) => p,
        Err(e) => {
            dom::alert(&e.to_string());
            return;
        }
    };
    spawn(async move {
        let answer = geocoder.search(&pending.query).await;
        let result = controller
            .write()
            .as_mut()
            .map(|ctl| ctl.finish_search(pending.ticket, answer));
        report(result);
    });
}

fn locate_me(mut controller: Signal<Option<Controller>>) {
    let Some(ticket) = controller.write().as_mut().map(|ctl| ctl.begin_locate()) else {
        return;
    };
    spawn(async move {
        let answer = geolocation::current_position().await;
        let result = controller
            .write()
            .as_mut()
            .map(|ctl| ctl.finish_locate(ticket, answer));
        report(result);
    });
}

fn calculate_route(
    mut controller: Signal<Option<Controller>>,
    geocoder: Nominatim,
    start: String,
    end: String,
) {
    let Some(begun) = controller.write().as_mut().map(|ctl| ctl.begin_route(&start, &end)) else {
        return;
    };
    let pending = match begun {
        Ok(p) => p,
        Err(e) => {
            dom::alert(&e.to_string());
            return;
        }
    };
    spawn(async move {
        let (from, to) = &pending.query;
        let answer = resolve_waypoints(&geocoder, from, to).await;
        let result = controller
            .write()
            .as_mut()
            .map(|ctl| ctl.finish_route(pending.ticket, answer));
        report(result);
    });
}

#[component]
pub fn Explorer(initial_query: Option<String>) -> Element {
    let config = use_hook(dom::embedded_config);
    let geocoder = use_hook(|| Nominatim::new(&config.geocoder_url));

    let mut controller = use_signal(|| None::<Controller>);
    let search_query = use_signal(|| initial_query.clone().unwrap_or_default());
    let mut route_inputs = use_signal(RouteInputs::default);

    // Deep link: run the search from the URL once the map is up
    let mut deep_link_done = use_signal(|| false);
    {
        let geocoder = geocoder.clone();
        use_effect(move || {
            let ready = controller.read().is_some();
            if ready && !*deep_link_done.peek() {
                deep_link_done.set(true);
                let query = search_query.peek().clone();
                if !query.is_empty() {
                    search_location(controller, geocoder.clone(), query);
                }
            }
        });
    }

    let (info, placement_busy, route_busy) = match &*controller.read() {
        Some(ctl) => (
            ctl.info().to_string(),
            ctl.is_pending(RequestKind::Placement),
            ctl.is_pending(RequestKind::Route),
        ),
        None => (String::new(), false, false),
    };

    let search_geocoder = geocoder.clone();
    let route_geocoder = geocoder;

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Wayfinder" }
            }

            div { class: "sidebar",
                SearchPanel {
                    query: search_query,
                    busy: placement_busy,
                    on_search: move |_| {
                        let query = search_query.read().clone();
                        search_location(controller, search_geocoder.clone(), query);
                    },
                    on_locate: move |_| locate_me(controller),
                    on_clear_markers: move |_| {
                        if let Some(ctl) = controller.write().as_mut() {
                            ctl.clear_markers();
                        }
                    },
                }

                InfoPanel { info: info }

                RoutePanel {
                    inputs: route_inputs,
                    busy: route_busy,
                    on_calculate: move |_| {
                        let RouteInputs { start, end } = route_inputs.read().clone();
                        calculate_route(controller, route_geocoder.clone(), start, end);
                    },
                    on_clear: move |_| {
                        if let Some(ctl) = controller.write().as_mut() {
                            ctl.clear_route();
                        }
                        route_inputs.write().clear();
                        dom::clear_element(ROUTE_INSTRUCTIONS_ID);
                    },
                }
            }

            MapView { controller: controller, config: config.clone() }
        }
    }
}
