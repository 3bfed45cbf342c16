//! Great-circle distance on a spherical Earth.

use crate::Coordinate;

/// Mean Earth radius used for every distance in the engine.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between `a` and `b` in kilometres (Haversine).
///
/// The result is symmetric, never negative and zero for identical points.
/// Inputs are not range checked; see
/// [`Waypoint::validated`](crate::Waypoint::validated).
///
/// # Examples
/// ```
/// use tourline_core::{coordinate, haversine_km};
///
/// let km = haversine_km(coordinate(0.0, 0.0), coordinate(0.0, 1.0));
/// assert!((km - 111.19).abs() < 0.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the Haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    // Absolute deltas keep the result bit-identical in both directions.
    let half_dlat = (b.y - a.y).abs().to_radians() / 2.0;
    let half_dlon = (b.x - a.x).abs().to_radians() / 2.0;

    let raw = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
    // Rounding can push the term marginally past 1 for antipodal points.
    let h = raw.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
