//! Map view controller.
//!
//! Owns the marker collection, the single route overlay slot and the info
//! panel text, and translates user actions into calls against a
//! [`MapSurface`]. Async actions are split into `begin_*` (validate, take a
//! ticket), an await on the outside world, and `finish_*` (drop stale answers,
//! then mutate). Nothing is mutated until every piece of data an action needs
//! has arrived.

use crate::config::MapConfig;
use crate::error::{GeocodeError, LocateError, MapError, SurfaceError};
use crate::geo::{self, LatLng, LatLngBounds};
use crate::models::{GeocodeHit, RouteStyle, TileLayer};
use crate::requests::{RequestKind, RequestTracker, Ticket};

pub const YOU_ARE_HERE_POPUP: &str = "<b>You are here!</b>";
pub const YOUR_LOCATION_HEADING: &str = "Your Location";

/// The rendering library, as far as the controller is concerned.
pub trait MapSurface {
    type Marker;
    type Route;

    fn set_view(&mut self, center: LatLng, zoom: u8);
    fn attach_tiles(&mut self, tiles: &TileLayer);
    /// Add a marker with `popup_html` bound and opened.
    fn add_marker(&mut self, at: LatLng, popup_html: &str) -> Result<Self::Marker, SurfaceError>;
    fn remove_marker(&mut self, marker: &Self::Marker);
    fn add_route(
        &mut self,
        start: LatLng,
        end: LatLng,
        style: &RouteStyle,
    ) -> Result<Self::Route, SurfaceError>;
    fn remove_route(&mut self, route: &Self::Route);
    fn fit_bounds(&mut self, bounds: LatLngBounds, padding: (u32, u32)) -> Result<(), SurfaceError>;
}

/// Free-text place lookup.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    async fn search(&self, query: &str) -> Result<Vec<GeocodeHit>, GeocodeError>;
}

/// First candidate for `query`, if any.
pub async fn first_hit<G: Geocoder>(
    geocoder: &G,
    query: &str,
) -> Result<Option<GeocodeHit>, GeocodeError> {
    Ok(geocoder.search(query).await?.into_iter().next())
}

/// Resolve both route endpoints. The end lookup is only issued once the start
/// lookup has completed. `Ok(None)` means at least one side had no match.
pub async fn resolve_waypoints<G: Geocoder>(
    geocoder: &G,
    start: &str,
    end: &str,
) -> Result<Option<(GeocodeHit, GeocodeHit)>, GeocodeError> {
    let start_hit = first_hit(geocoder, start).await?;
    let end_hit = first_hit(geocoder, end).await?;
    Ok(start_hit.zip(end_hit))
}

/// A validated request waiting for its external answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Pending<Q> {
    pub ticket: Ticket,
    pub query: Q,
}

/// Result of feeding an answer back into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A newer request of the same kind was issued; the answer was dropped.
    Stale,
}

#[derive(Debug)]
pub struct PlacedMarker<M> {
    position: LatLng,
    popup: String,
    handle: M,
}

impl<M> PlacedMarker<M> {
    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn popup(&self) -> &str {
        &self.popup
    }

    pub fn handle(&self) -> &M {
        &self.handle
    }
}

/// Markers currently on the map. The default marker is always first and can
/// never be removed.
#[derive(Debug)]
pub struct MarkerSet<M> {
    default: PlacedMarker<M>,
    transient: Vec<PlacedMarker<M>>,
}

impl<M> MarkerSet<M> {
    pub fn default_marker(&self) -> &PlacedMarker<M> {
        &self.default
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedMarker<M>> {
        std::iter::once(&self.default).chain(self.transient.iter())
    }

    pub fn transient(&self) -> &[PlacedMarker<M>] {
        &self.transient
    }
}

#[derive(Debug)]
pub struct RouteOverlay<R> {
    start: LatLng,
    end: LatLng,
    handle: R,
}

impl<R> RouteOverlay<R> {
    pub fn start(&self) -> LatLng {
        self.start
    }

    pub fn end(&self) -> LatLng {
        self.end
    }

    pub fn handle(&self) -> &R {
        &self.handle
    }
}

pub struct MapController<S: MapSurface> {
    surface: S,
    config: MapConfig,
    markers: MarkerSet<S::Marker>,
    route: Option<RouteOverlay<S::Route>>,
    info: String,
    requests: RequestTracker,
}

impl<S: MapSurface> MapController<S> {
    /// Center the map, attach tiles and pin the default marker.
    pub fn initialize(mut surface: S, config: MapConfig) -> Result<Self, SurfaceError> {
        surface.set_view(config.center, config.zoom);
        surface.attach_tiles(&config.tiles);
        let handle = surface.add_marker(config.center, &config.default_marker_popup)?;
        let default = PlacedMarker {
            position: config.center,
            popup: config.default_marker_popup.clone(),
            handle,
        };
        tracing::debug!(lat = config.center.lat, lng = config.center.lng, "Map initialized");
        Ok(Self {
            surface,
            config,
            markers: MarkerSet {
                default,
                transient: Vec::new(),
            },
            route: None,
            info: String::new(),
            requests: RequestTracker::default(),
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn markers(&self) -> &MarkerSet<S::Marker> {
        &self.markers
    }

    pub fn route(&self) -> Option<&RouteOverlay<S::Route>> {
        self.route.as_ref()
    }

    /// Current info panel HTML.
    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn is_pending(&self, kind: RequestKind) -> bool {
        self.requests.is_pending(kind)
    }

    pub fn handle_click(&mut self, at: LatLng) {
        self.info = geo::click_label(at);
    }

    /// Remove every marker except the default one.
    pub fn clear_markers(&mut self) {
        for marker in self.markers.transient.drain(..) {
            self.surface.remove_marker(&marker.handle);
        }
    }

    /// Replace the transient markers with one at `at`. If the surface refuses
    /// the new marker nothing else is touched.
    fn focus_marker(
        &mut self,
        at: LatLng,
        popup_html: String,
        heading: &str,
    ) -> Result<(), SurfaceError> {
        let handle = self.surface.add_marker(at, &popup_html)?;
        self.surface.set_view(at, self.config.focus_zoom);
        self.clear_markers();
        self.markers.transient.push(PlacedMarker {
            position: at,
            popup: popup_html,
            handle,
        });
        self.info = geo::place_label(heading, at);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    pub fn begin_search(&mut self, query: &str) -> Result<Pending<String>, MapError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(MapError::EmptyQuery);
        }
        let ticket = self.requests.issue(RequestKind::Placement);
        tracing::debug!(query, generation = ticket.generation(), "Search issued");
        Ok(Pending {
            ticket,
            query: query.to_string(),
        })
    }

    pub fn finish_search(
        &mut self,
        ticket: Ticket,
        answer: Result<Vec<GeocodeHit>, GeocodeError>,
    ) -> Result<Outcome, MapError> {
        if !self.requests.settle(ticket) {
            tracing::debug!(generation = ticket.generation(), "Dropping stale search answer");
            return Ok(Outcome::Stale);
        }
        let hits = answer.map_err(|e| {
            tracing::warn!(error = %e, "Search failed");
            MapError::SearchFailed
        })?;
        let Some(hit) = hits.into_iter().next() else {
            return Err(MapError::LocationNotFound);
        };
        let name = geo::escape_html(&hit.display_name);
        tracing::info!(name = %hit.display_name, lat = hit.lat, lon = hit.lon, "Search result placed");
        self.focus_marker(hit.position(), format!("<b>{}</b>", name), &name)
            .map_err(|e| {
                tracing::warn!(error = %e, "Search result could not be drawn");
                MapError::SearchFailed
            })?;
        Ok(Outcome::Applied)
    }

    // -----------------------------------------------------------------------
    // Geolocation
    // -----------------------------------------------------------------------

    pub fn begin_locate(&mut self) -> Ticket {
        self.requests.issue(RequestKind::Placement)
    }

    pub fn finish_locate(
        &mut self,
        ticket: Ticket,
        answer: Result<LatLng, LocateError>,
    ) -> Result<Outcome, MapError> {
        if !self.requests.settle(ticket) {
            return Ok(Outcome::Stale);
        }
        let at = answer.map_err(|e| {
            tracing::warn!(error = %e, "Geolocation failed");
            MapError::from(e)
        })?;
        self.focus_marker(at, YOU_ARE_HERE_POPUP.to_string(), YOUR_LOCATION_HEADING)
            .map_err(|e| {
                tracing::warn!(error = %e, "Location could not be drawn");
                MapError::GeolocationFailed
            })?;
        Ok(Outcome::Applied)
    }

    // -----------------------------------------------------------------------
    // Routing
    // -----------------------------------------------------------------------

    pub fn begin_route(
        &mut self,
        start: &str,
        end: &str,
    ) -> Result<Pending<(String, String)>, MapError> {
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(MapError::MissingWaypoints);
        }
        let ticket = self.requests.issue(RequestKind::Route);
        tracing::debug!(start, end, generation = ticket.generation(), "Route issued");
        Ok(Pending {
            ticket,
            query: (start.to_string(), end.to_string()),
        })
    }

    pub fn finish_route(
        &mut self,
        ticket: Ticket,
        answer: Result<Option<(GeocodeHit, GeocodeHit)>, GeocodeError>,
    ) -> Result<Outcome, MapError> {
        if !self.requests.settle(ticket) {
            tracing::debug!(generation = ticket.generation(), "Dropping stale route answer");
            return Ok(Outcome::Stale);
        }
        let waypoints = answer.map_err(|e| {
            tracing::warn!(error = %e, "Route geocoding failed");
            MapError::RouteFailed
        })?;
        let Some((from, to)) = waypoints else {
            return Err(MapError::WaypointsNotFound);
        };
        self.show_route(from.position(), to.position()).map_err(|e| {
            tracing::warn!(error = %e, "Route could not be drawn");
            MapError::RouteFailed
        })?;
        Ok(Outcome::Applied)
    }

    /// Swap in a new overlay. The old one is only removed once the new one
    /// exists; a failed fit still leaves the new overlay tracked.
    fn show_route(&mut self, start: LatLng, end: LatLng) -> Result<(), SurfaceError> {
        let handle = self
            .surface
            .add_route(start, end, &self.config.route_style)?;
        self.clear_route();
        self.route = Some(RouteOverlay { start, end, handle });
        self.surface
            .fit_bounds(LatLngBounds::from_corners(start, end), self.config.fit_padding)?;
        tracing::info!(
            start_lat = start.lat,
            start_lng = start.lng,
            end_lat = end.lat,
            end_lng = end.lng,
            "Route shown"
        );
        Ok(())
    }

    /// Remove the route overlay if there is one. Returns whether one was removed.
    pub fn clear_route(&mut self) -> bool {
        match self.route.take() {
            Some(overlay) => {
                self.surface.remove_route(&overlay.handle);
                true
            }
            None => false,
        }
    }
}
