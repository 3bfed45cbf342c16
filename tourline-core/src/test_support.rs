//! Helpers shared by unit, behaviour and property tests.

use crate::{
    Coordinate, RoadRoute, RoadRouteError, RoadRouteProvider, Waypoint, coordinate, haversine_km,
};

pub use crate::tour::SequenceSource;

/// Construct a waypoint named after its identifier.
#[must_use]
pub fn waypoint(id: &str, lat: f64, lon: f64) -> Waypoint {
    Waypoint::new(id, id.to_uppercase(), coordinate(lat, lon))
}

/// `RoadRouteProvider` joining the locations with straight segments.
///
/// The reported distance is the sum of great-circle legs in metres.
#[derive(Debug, Default, Clone, Copy)]
pub struct StraightLineRouteProvider;

impl RoadRouteProvider for StraightLineRouteProvider {
    #[expect(
        clippy::float_arithmetic,
        reason = "route length is a sum of floating-point legs"
    )]
    fn fetch_route(&self, locations: &[Coordinate]) -> Result<RoadRoute, RoadRouteError> {
        if locations.len() < 2 {
            return Err(RoadRouteError::TooFewLocations {
                count: locations.len(),
            });
        }
        let distance_km: f64 = locations
            .windows(2)
            .filter_map(|leg| match leg {
                [from, to] => Some(haversine_km(*from, *to)),
                _ => None,
            })
            .sum();
        Ok(RoadRoute {
            polyline: locations.to_vec(),
            distance_m: distance_km * 1000.0,
        })
    }
}
