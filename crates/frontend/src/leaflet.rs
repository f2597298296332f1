use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wayfinder_shared::controller::MapSurface;
use wayfinder_shared::error::SurfaceError;
use wayfinder_shared::geo::{LatLng, LatLngBounds};
use wayfinder_shared::models::{RouteStyle, TileLayer};

#[wasm_bindgen(module = "/js/leaflet.js")]
extern "C" {
    type JsMap;
    type JsLayer;
    type JsRouteControl;

    #[wasm_bindgen(catch)]
    fn create_map(container_id: &str) -> Result<JsMap, JsValue>;
    fn destroy_map(map: &JsMap);
    fn set_view(map: &JsMap, lat: f64, lng: f64, zoom: u8);
    fn add_tile_layer(map: &JsMap, url_template: &str, attribution: &str, max_zoom: u8);
    #[wasm_bindgen(catch)]
    fn add_marker(map: &JsMap, lat: f64, lng: f64, popup_html: &str) -> Result<JsLayer, JsValue>;
    fn remove_layer(map: &JsMap, layer: &JsLayer);
    #[wasm_bindgen(catch)]
    fn add_route(
        map: &JsMap,
        from_lat: f64,
        from_lng: f64,
        to_lat: f64,
        to_lng: f64,
        color: &str,
        weight: u32,
        route_while_dragging: bool,
        itinerary_id: &str,
    ) -> Result<JsRouteControl, JsValue>;
    fn remove_route(map: &JsMap, control: &JsRouteControl);
    #[wasm_bindgen(catch)]
    fn fit_bounds(
        map: &JsMap,
        south: f64,
        west: f64,
        north: f64,
        east: f64,
        pad_x: u32,
        pad_y: u32,
    ) -> Result<(), JsValue>;
    fn on_click(map: &JsMap, handler: &Closure<dyn FnMut(f64, f64)>);
}

/// Turn a thrown JS value into something loggable.
fn surface_error(thrown: JsValue) -> SurfaceError {
    match thrown.dyn_ref::<js_sys::Error>() {
        Some(e) => SurfaceError(String::from(e.message())),
        None => SurfaceError(format!("{:?}", thrown)),
    }
}

pub struct Marker(JsLayer);

pub struct RouteControl(JsRouteControl);

/// A Leaflet map mounted into a DOM element. The map is torn down on drop.
pub struct LeafletSurface {
    map: JsMap,
    itinerary_id: String,
    click_handler: Option<Closure<dyn FnMut(f64, f64)>>,
}

impl LeafletSurface {
    /// Mount a map into `container_id`. Route itineraries are moved into the
    /// element with `itinerary_id`.
    pub fn mount(container_id: &str, itinerary_id: &str) -> Result<Self, SurfaceError> {
        Ok(Self {
            map: create_map(container_id).map_err(surface_error)?,
            itinerary_id: itinerary_id.to_string(),
            click_handler: None,
        })
    }

    /// Subscribe to map clicks. The closure is kept alive as long as the map.
    pub fn on_click(&mut self, mut handler: impl FnMut(LatLng) + 'static) {
        let closure = Closure::<dyn FnMut(f64, f64)>::new(move |lat, lng| {
            handler(LatLng::new(lat, lng))
        });
        on_click(&self.map, &closure);
        self.click_handler = Some(closure);
    }
}

impl Drop for LeafletSurface {
    fn drop(&mut self) {
        destroy_map(&self.map);
    }
}

impl MapSurface for LeafletSurface {
    type Marker = Marker;
    type Route = RouteControl;

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        set_view(&self.map, center.lat, center.lng, zoom);
    }

    fn attach_tiles(&mut self, tiles: &TileLayer) {
        add_tile_layer(&self.map, &tiles.url_template, &tiles.attribution, tiles.max_zoom);
    }

    fn add_marker(&mut self, at: LatLng, popup_html: &str) -> Result<Marker, SurfaceError> {
        add_marker(&self.map, at.lat, at.lng, popup_html)
            .map(Marker)
            .map_err(surface_error)
    }

    fn remove_marker(&mut self, marker: &Marker) {
        remove_layer(&self.map, &marker.0);
    }

    fn add_route(
        &mut self,
        start: LatLng,
        end: LatLng,
        style: &RouteStyle,
    ) -> Result<RouteControl, SurfaceError> {
        add_route(
            &self.map,
            start.lat,
            start.lng,
            end.lat,
            end.lng,
            &style.color,
            style.weight,
            style.route_while_dragging,
            &self.itinerary_id,
        )
        .map(RouteControl)
        .map_err(surface_error)
    }

    fn remove_route(&mut self, route: &RouteControl) {
        remove_route(&self.map, &route.0);
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds, padding: (u32, u32)) -> Result<(), SurfaceError> {
        fit_bounds(
            &self.map,
            bounds.south_west.lat,
            bounds.south_west.lng,
            bounds.north_east.lat,
            bounds.north_east.lng,
            padding.0,
            padding.1,
        )
        .map_err(surface_error)
    }
}
