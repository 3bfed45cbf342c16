//! Fixtures shared by the integration tests.

use tourline_core::{Waypoint, coordinate};

/// Construct a waypoint named after its identifier.
pub fn waypoint(id: &str, lat: f64, lon: f64) -> Waypoint {
    Waypoint::new(id, id.to_uppercase(), coordinate(lat, lon))
}
