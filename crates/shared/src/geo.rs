//! Geographic primitives shared by the controller and the map bindings.
//!
//! Coordinates are WGS84 degrees. Anything shown to the user goes through
//! [`format_degrees`], which always renders 4 decimal places.

use serde::{Deserialize, Serialize};

/// Decimal places used whenever a coordinate is displayed.
pub const DISPLAY_PRECISION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned box spanned by two or more points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Smallest box containing both points, regardless of their order.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }
}

/// Format a degree value with [`DISPLAY_PRECISION`] decimals.
pub fn format_degrees(value: f64) -> String {
    format!("{:.*}", DISPLAY_PRECISION, value)
}

/// Info-panel text for a raw map click.
pub fn click_label(at: LatLng) -> String {
    format!(
        "Latitude: {}<br>Longitude: {}",
        format_degrees(at.lat),
        format_degrees(at.lng)
    )
}

/// Info-panel text for a resolved place: a heading line then the short
/// `Lat: .., Lon: ..` pair.
pub fn place_label(heading: &str, at: LatLng) -> String {
    format!(
        "{}<br>Lat: {}, Lon: {}",
        heading,
        format_degrees(at.lat),
        format_degrees(at.lng)
    )
}

/// Escape text so it can be placed inside popup or panel HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_degrees_rounds_to_four_places() {
        assert_eq!(format_degrees(-7.00001), "-7.0000");
        assert_eq!(format_degrees(113.99996), "114.0000");
        assert_eq!(format_degrees(112.7521), "112.7521");
    }

    #[test]
    fn test_format_degrees_pads_short_values() {
        assert_eq!(format_degrees(13.0), "13.0000");
        assert_eq!(format_degrees(-0.5), "-0.5000");
    }

    #[test]
    fn test_click_label() {
        let label = click_label(LatLng::new(-7.00001, 113.99996));
        assert_eq!(label, "Latitude: -7.0000<br>Longitude: 114.0000");
    }

    #[test]
    fn test_place_label() {
        let label = place_label(
            "Surabaya, East Java, Indonesia",
            LatLng::new(-7.2575, 112.7521),
        );
        assert_eq!(
            label,
            "Surabaya, East Java, Indonesia<br>Lat: -7.2575, Lon: 112.7521"
        );
    }

    #[test]
    fn test_bounds_from_corners_any_order() {
        let a = LatLng::new(-7.0174, 113.8546);
        let b = LatLng::new(-7.2575, 112.7521);
        let ab = LatLngBounds::from_corners(a, b);
        let ba = LatLngBounds::from_corners(b, a);
        assert_eq!(ab, ba);
        assert_eq!(ab.south_west, LatLng::new(-7.2575, 112.7521));
        assert_eq!(ab.north_east, LatLng::new(-7.0174, 113.8546));
    }

    #[test]
    fn test_bounds_across_hemispheres() {
        let bounds = LatLngBounds::from_corners(LatLng::new(51.5, -0.12), LatLng::new(48.85, 2.35));
        assert_eq!(bounds.south_west, LatLng::new(48.85, -0.12));
        assert_eq!(bounds.north_east, LatLng::new(51.5, 2.35));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Café <b>&</b>"), "Café &lt;b&gt;&amp;&lt;/b&gt;");
        assert_eq!(escape_html("O'Hare \"ORD\""), "O&#39;Hare &quot;ORD&quot;");
        assert_eq!(escape_html("Surabaya"), "Surabaya");
    }
}
