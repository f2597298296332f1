use reqwest::Url;
use wayfinder_shared::controller::Geocoder;
use wayfinder_shared::error::GeocodeError;
use wayfinder_shared::models::GeocodeHit;

/// Build the Nominatim search URL for a free-text query.
pub fn search_url(base_url: &str, query: &str) -> Result<Url, GeocodeError> {
    let endpoint = format!("{}/search", base_url.trim_end_matches('/'));
    Url::parse_with_params(&endpoint, &[("format", "json"), ("q", query)])
        .map_err(|e| GeocodeError::Transport(format!("invalid geocoder URL {}: {}", endpoint, e)))
}

/// Nominatim-compatible geocoding client.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: reqwest::Client,
    base_url: String,
}

impl Nominatim {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }
}

impl Geocoder for Nominatim {
    async fn search(&self, query: &str) -> Result<Vec<GeocodeHit>, GeocodeError> {
        let url = search_url(&self.base_url, query)?;
        tracing::debug!(%url, "Geocoding");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        resp.json::<Vec<GeocodeHit>>()
            .await
            .map_err(|e| GeocodeError::Decode(e.to_string()))
    }
}
