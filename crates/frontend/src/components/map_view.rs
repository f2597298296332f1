use dioxus::prelude::*;
use futures::StreamExt;
use wayfinder_shared::config::MapConfig;
use wayfinder_shared::controller::MapController;
use wayfinder_shared::geo::LatLng;

use crate::components::route_panel::ROUTE_INSTRUCTIONS_ID;
use crate::leaflet::LeafletSurface;

pub const MAP_CONTAINER_ID: &str = "wayfinder-map";

pub type Controller = MapController<LeafletSurface>;

#[component]
pub fn MapView(controller: Signal<Option<Controller>>, config: MapConfig) -> Element {
    let mut controller = controller;

    // Leaflet click callbacks run outside the Dioxus runtime, so they are
    // funnelled through a coroutine before touching the controller signal.
    let clicks = use_coroutine(move |mut rx: UnboundedReceiver<LatLng>| async move {
        while let Some(at) = rx.next().await {
            if let Some(ctl) = controller.write().as_mut() {
                ctl.handle_click(at);
            }
        }
    });

    // Mount once, after the container div exists
    use_effect(move || {
        if controller.peek().is_some() {
            return;
        }
        let mounted = LeafletSurface::mount(MAP_CONTAINER_ID, ROUTE_INSTRUCTIONS_ID)
            .and_then(|mut surface| {
                surface.on_click(move |at| clicks.send(at));
                MapController::initialize(surface, config.clone())
            });
        match mounted {
            Ok(ctl) => {
                controller.set(Some(ctl));
                tracing::info!("Leaflet map mounted");
            }
            Err(e) => tracing::error!(error = %e, "Leaflet map could not be mounted"),
        }
    });

    rsx! {
        div { id: MAP_CONTAINER_ID, class: "map-container" }
    }
}
