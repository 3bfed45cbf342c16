//! Named points a tour visits.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`, matching
//! the `geo` convention. [`coordinate`] builds one from the more familiar
//! `(lat, lon)` order.

use geo::Coord;
use thiserror::Error;

/// A WGS84 position with `x = longitude`, `y = latitude`.
pub type Coordinate = Coord<f64>;

/// Build a [`Coordinate`] from latitude and longitude, in that order.
///
/// # Examples
/// ```
/// use tourline_core::coordinate;
///
/// let berlin = coordinate(52.52, 13.405);
/// assert_eq!(berlin.y, 52.52);
/// assert_eq!(berlin.x, 13.405);
/// ```
#[must_use]
pub const fn coordinate(lat: f64, lon: f64) -> Coordinate {
    Coord { x: lon, y: lat }
}

/// A geographic point to be visited.
///
/// The engine only reads [`Waypoint::location`]; the identifier and display
/// name are carried through unchanged so callers can label the final tour.
///
/// # Examples
/// ```
/// use tourline_core::{Waypoint, coordinate};
///
/// let stop = Waypoint::new("hq", "Head office", coordinate(51.5, -0.12));
/// assert_eq!(stop.id, "hq");
/// assert_eq!(stop.lat(), 51.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "WaypointRecord", into = "WaypointRecord"))]
pub struct Waypoint {
    /// Caller-assigned identifier, unique within one request.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Position of the waypoint.
    pub location: Coordinate,
}

/// Errors returned by [`Waypoint::validated`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaypointError {
    /// Latitude or longitude lies outside the WGS84 range or is not finite.
    #[error("waypoint {id:?} has out-of-range coordinate ({lat}, {lon})")]
    OutOfRange {
        /// Identifier of the offending waypoint.
        id: String,
        /// Supplied latitude.
        lat: f64,
        /// Supplied longitude.
        lon: f64,
    },
}

impl Waypoint {
    /// Construct a waypoint without range checks.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
        }
    }

    /// Construct a waypoint, rejecting coordinates outside the WGS84 range.
    ///
    /// Distances are only meaningful for valid coordinates, so ingestion
    /// layers should build waypoints through this constructor.
    ///
    /// # Errors
    ///
    /// Returns [`WaypointError::OutOfRange`] when the latitude is outside
    /// `[-90, 90]`, the longitude is outside `[-180, 180]`, or either value
    /// is not finite.
    ///
    /// # Examples
    /// ```
    /// use tourline_core::{Waypoint, WaypointError, coordinate};
    ///
    /// assert!(Waypoint::validated("a", "A", coordinate(45.0, 90.0)).is_ok());
    /// let err = Waypoint::validated("b", "B", coordinate(91.0, 0.0)).unwrap_err();
    /// assert!(matches!(err, WaypointError::OutOfRange { .. }));
    /// ```
    pub fn validated(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Coordinate,
    ) -> Result<Self, WaypointError> {
        let waypoint = Self::new(id, name, location);
        if is_valid_location(location) {
            Ok(waypoint)
        } else {
            Err(WaypointError::OutOfRange {
                id: waypoint.id,
                lat: location.y,
                lon: location.x,
            })
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.location.x
    }
}

/// Whether `location` is a finite coordinate inside the WGS84 range.
#[must_use]
pub fn is_valid_location(location: Coordinate) -> bool {
    location.x.is_finite()
        && location.y.is_finite()
        && (-180.0..=180.0).contains(&location.x)
        && (-90.0..=90.0).contains(&location.y)
}

/// Flat wire form: `{ "id", "name", "lat", "lon" }`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct WaypointRecord {
    id: String,
    #[serde(default)]
    name: String,
    lat: f64,
    lon: f64,
}

#[cfg(feature = "serde")]
impl From<WaypointRecord> for Waypoint {
    fn from(record: WaypointRecord) -> Self {
        Self::new(record.id, record.name, coordinate(record.lat, record.lon))
    }
}

#[cfg(feature = "serde")]
impl From<Waypoint> for WaypointRecord {
    fn from(waypoint: Waypoint) -> Self {
        Self {
            lat: waypoint.lat(),
            lon: waypoint.lon(),
            id: waypoint.id,
            name: waypoint.name,
        }
    }
}
