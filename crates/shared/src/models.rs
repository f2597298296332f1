use serde::{Deserialize, Deserializer, Serialize};

use crate::geo::LatLng;

/// One candidate returned by the geocoding endpoint.
///
/// Nominatim encodes `lat`/`lon` as JSON strings; plain numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeHit {
    #[serde(deserialize_with = "degrees")]
    pub lat: f64,
    #[serde(deserialize_with = "degrees")]
    pub lon: f64,
    pub display_name: String,
}

impl GeocodeHit {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }
}

fn degrees<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let value: f64 = match Raw::deserialize(deserializer)? {
        Raw::Number(v) => v,
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom)?,
    };
    if !value.is_finite() {
        return Err(serde::de::Error::custom(format!(
            "coordinate is not a finite number: {}",
            value
        )));
    }
    Ok(value)
}

/// Line style for the route overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStyle {
    pub color: String,
    pub weight: u32,
    pub route_while_dragging: bool,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color: "#667eea".to_string(),
            weight: 4,
            route_while_dragging: true,
        }
    }
}

/// Background tile layer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            max_zoom: 19,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_hits(body: &str) -> serde_json::Result<Vec<GeocodeHit>> {
        serde_json::from_str(body)
    }

    #[test]
    fn test_hits_deserialize_string_coordinates() {
        let json = r#"[{"place_id":1,"lat":"-7.2575","lon":"112.7521","display_name":"Surabaya, East Java, Indonesia","importance":0.7}]"#;
        let hits = parse_hits(json).unwrap();
        assert_eq!(hits.len(), 1);
        assert!((hits[0].lat - -7.2575).abs() < 1e-9);
        assert!((hits[0].lon - 112.7521).abs() < 1e-9);
        assert_eq!(hits[0].display_name, "Surabaya, East Java, Indonesia");
    }

    #[test]
    fn test_hits_deserialize_numeric_coordinates() {
        let json = r#"[{"lat":48.8566,"lon":2.3522,"display_name":"Paris"}]"#;
        let hits = parse_hits(json).unwrap();
        assert_eq!(hits[0].position(), LatLng::new(48.8566, 2.3522));
    }

    #[test]
    fn test_hits_empty_array() {
        assert!(parse_hits("[]").unwrap().is_empty());
    }

    #[test]
    fn test_hits_bad_coordinate_is_rejected() {
        let json = r#"[{"lat":"north","lon":"1.0","display_name":"x"}]"#;
        assert!(parse_hits(json).is_err());
    }

    #[test]
    fn test_hits_non_finite_coordinate_is_rejected() {
        for (lat, lon) in [("NaN", "1.0"), ("1.0", "inf"), ("-infinity", "0")] {
            let json = format!(
                r#"[{{"lat":"{}","lon":"{}","display_name":"x"}}]"#,
                lat, lon
            );
            assert!(parse_hits(&json).is_err(), "accepted {} / {}", lat, lon);
        }
    }

    #[test]
    fn test_hits_error_object_is_rejected() {
        let json = r#"{"error":"Unable to geocode"}"#;
        assert!(parse_hits(json).is_err());
    }

    #[test]
    fn test_route_style_defaults() {
        let style = RouteStyle::default();
        assert_eq!(style.color, "#667eea");
        assert_eq!(style.weight, 4);
        assert!(style.route_while_dragging);
    }

    #[test]
    fn test_tile_layer_defaults() {
        let tiles = TileLayer::default();
        assert_eq!(tiles.max_zoom, 19);
        assert!(tiles.url_template.contains("tile.openstreetmap.org"));
        assert_eq!(tiles.attribution, "© OpenStreetMap contributors");
    }
}
