//! Road-route collaborators.
//!
//! Once a visiting order is known, a host may ask a routing service for the
//! actual road path through the ordered coordinates. The engine only defines
//! the boundary: [`RoadRouteProvider`] and the [`RoadRoute`] it returns. An
//! OSRM-backed provider lives in `tourline-data`.

use thiserror::Error;

use crate::Coordinate;

/// A road path through an ordered list of coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadRoute {
    /// Path geometry as ordered coordinates.
    pub polyline: Vec<Coordinate>,
    /// Total path length in metres.
    pub distance_m: f64,
}

/// Errors from [`RoadRouteProvider::fetch_route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoadRouteError {
    /// A route needs at least two locations.
    #[error("at least two locations are required, got {count}")]
    TooFewLocations {
        /// Number of locations supplied.
        count: usize,
    },
    /// The routing service answered but could not produce a route.
    #[error("routing service returned {code}: {message}")]
    Service {
        /// Status code reported by the service, e.g. `NoRoute`.
        code: String,
        /// Description reported by the service.
        message: String,
    },
    /// The service could not be reached.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service did not answer in time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with an HTTP error status.
    #[error("request to {url} returned HTTP {status}: {message}")]
    Http {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The response body could not be understood.
    #[error("invalid routing response: {message}")]
    InvalidResponse {
        /// Parse failure description.
        message: String,
    },
}

/// Fetch a road route visiting `locations` in order.
///
/// # Examples
///
/// ```rust
/// use tourline_core::{Coordinate, RoadRoute, RoadRouteError, RoadRouteProvider, coordinate};
///
/// /// Joins the locations with straight segments of unknown length.
/// struct Polyline;
///
/// impl RoadRouteProvider for Polyline {
///     fn fetch_route(&self, locations: &[Coordinate]) -> Result<RoadRoute, RoadRouteError> {
///         if locations.len() < 2 {
///             return Err(RoadRouteError::TooFewLocations { count: locations.len() });
///         }
///         Ok(RoadRoute { polyline: locations.to_vec(), distance_m: 0.0 })
///     }
/// }
///
/// let route = Polyline.fetch_route(&[coordinate(0.0, 0.0), coordinate(0.0, 1.0)])?;
/// assert_eq!(route.polyline.len(), 2);
///
/// let err = Polyline.fetch_route(&[coordinate(0.0, 0.0)]).unwrap_err();
/// assert_eq!(err, RoadRouteError::TooFewLocations { count: 1 });
/// # Ok::<(), RoadRouteError>(())
/// ```
pub trait RoadRouteProvider {
    /// Return the road route through `locations`.
    ///
    /// # Errors
    ///
    /// Implementations must return [`RoadRouteError::TooFewLocations`] when
    /// fewer than two locations are supplied.
    fn fetch_route(&self, locations: &[Coordinate]) -> Result<RoadRoute, RoadRouteError>;
}
