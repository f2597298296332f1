//! Error types. [`MapError`]'s `Display` text is exactly what the user is shown.

use thiserror::Error;

/// Failure talking to the geocoding endpoint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    /// Request could not be sent or the response body could not be read.
    #[error("geocoding request failed: {0}")]
    Transport(String),
    /// Response body was not a list of results.
    #[error("malformed geocoding response: {0}")]
    Decode(String),
}

/// Failure obtaining the device position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocateError {
    #[error("geolocation is not available on this platform")]
    Unsupported,
    /// Permission denied, timeout or position unavailable.
    #[error("geolocation failed: {0}")]
    Unavailable(String),
}

/// The rendering library rejected a call, e.g. a plugin failed to load.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("map rendering failed: {0}")]
pub struct SurfaceError(pub String);

/// User-facing outcome of a failed action. Terminal for that action only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("Please enter a location to search")]
    EmptyQuery,
    #[error("Please enter both starting point and destination")]
    MissingWaypoints,
    #[error("Location not found. Please try another search.")]
    LocationNotFound,
    #[error("Could not find one or both locations. Please try different search terms.")]
    WaypointsNotFound,
    #[error("Error searching location. Please try again.")]
    SearchFailed,
    #[error("Error calculating route. Please try again.")]
    RouteFailed,
    #[error("Geolocation is not supported by your browser")]
    GeolocationUnsupported,
    #[error("Unable to retrieve your location")]
    GeolocationFailed,
}

impl From<LocateError> for MapError {
    fn from(value: LocateError) -> Self {
        match value {
            LocateError::Unsupported => MapError::GeolocationUnsupported,
            LocateError::Unavailable(_) => MapError::GeolocationFailed,
        }
    }
}
