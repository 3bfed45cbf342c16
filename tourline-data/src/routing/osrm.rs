//! OSRM Route API response types.
//!
//! Only the fields the provider reads are modelled. Geometry is requested
//! as GeoJSON, so each position is a `[lon, lat]` pair.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
#[derive(Debug, Deserialize)]
pub(super) struct RouteResponse {
    /// Status code; `"Ok"` on success, e.g. `"NoRoute"` or `"InvalidQuery"`
    /// otherwise.
    pub(super) code: String,
    /// Error description accompanying a non-`Ok` code.
    pub(super) message: Option<String>,
    /// Candidate routes, best first.
    #[serde(default)]
    pub(super) routes: Vec<Route>,
}

impl RouteResponse {
    pub(super) fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}

/// One route through every requested coordinate.
#[derive(Debug, Deserialize)]
pub(super) struct Route {
    /// Route length in metres.
    pub(super) distance: f64,
    /// Full-overview route geometry.
    pub(super) geometry: LineString,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Deserialize)]
pub(super) struct LineString {
    /// Positions as `[lon, lat]`.
    pub(super) coordinates: Vec<[f64; 2]>,
}
