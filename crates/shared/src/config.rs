use serde::{Deserialize, Serialize};

use crate::geo::LatLng;
use crate::models::{RouteStyle, TileLayer};

pub const DEFAULT_CENTER: LatLng = LatLng::new(-7.0174, 113.8546);
pub const DEFAULT_ZOOM: u8 = 13;
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Everything the widget needs to know up front. All fields have defaults,
/// so a partial JSON object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: u8,
    /// Popup HTML of the permanent landmark marker.
    pub default_marker_popup: String,
    pub tiles: TileLayer,
    pub geocoder_url: String,
    /// Zoom used when jumping to a search result or the device position.
    pub focus_zoom: u8,
    pub route_style: RouteStyle,
    /// Pixel padding (x, y) around the two route endpoints when fitting the view.
    pub fit_padding: (u32, u32),
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            default_marker_popup: "<b>Sumenep</b><br>East Java, Indonesia".to_string(),
            tiles: TileLayer::default(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            focus_zoom: DEFAULT_ZOOM,
            route_style: RouteStyle::default(),
            fit_padding: (50, 50),
        }
    }
}

impl MapConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Like [`MapConfig::from_json`] but never fails: bad input is logged and
    /// the defaults are used instead.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Ignoring invalid map config, using defaults");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_landmark() {
        let config = MapConfig::default();
        assert_eq!(config.center, LatLng::new(-7.0174, 113.8546));
        assert_eq!(config.zoom, 13);
        assert_eq!(config.focus_zoom, 13);
        assert_eq!(config.fit_padding, (50, 50));
        assert!(config.default_marker_popup.contains("Sumenep"));
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config = MapConfig::from_json(
            r##"{"zoom": 10, "geocoderUrl": "http://localhost:8080", "routeStyle": {"color": "#ff0000", "weight": 6, "routeWhileDragging": false}}"##,
        )
        .unwrap();
        assert_eq!(config.zoom, 10);
        assert_eq!(config.geocoder_url, "http://localhost:8080");
        assert_eq!(config.route_style.color, "#ff0000");
        assert!(!config.route_style.route_while_dragging);
        assert_eq!(config.center, DEFAULT_CENTER);
        assert_eq!(config.tiles.max_zoom, 19);
    }

    #[test]
    fn test_center_from_json() {
        let config = MapConfig::from_json(r#"{"center": {"lat": 51.5, "lng": -0.12}}"#).unwrap();
        assert_eq!(config.center, LatLng::new(51.5, -0.12));
    }

    #[test]
    fn test_invalid_json_falls_back_to_defaults() {
        let config = MapConfig::from_json_or_default(Some("{not json"));
        assert_eq!(config, MapConfig::default());
    }

    #[test]
    fn test_missing_json_uses_defaults() {
        assert_eq!(MapConfig::from_json_or_default(None), MapConfig::default());
    }
}
