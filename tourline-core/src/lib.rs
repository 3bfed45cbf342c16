//! Core tour-construction engine for tourline.
//!
//! Responsibilities:
//! - Great-circle distances between WGS84 coordinates.
//! - Pairwise distance matrices over caller-supplied waypoints.
//! - A randomised nearest-neighbour heuristic producing a visiting order.
//! - Weighted adjacency graphs built from raw road-network node and way data.
//!
//! Boundaries:
//! - No I/O. Parsing road data and waypoint files lives in `tourline-data`.
//! - Road routing services are collaborators reached through
//!   [`RoadRouteProvider`]; the OSRM client lives in `tourline-data`.
//!
//! Invariants:
//! - No global mutable state. Randomness is always injected through a
//!   [`RandomSource`].
//! - Every entity is computed fresh per call and owned by the caller.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod matrix;
pub mod plan;
pub mod road_graph;
pub mod road_route;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod tour;
pub mod waypoint;

pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use matrix::{DistanceMatrix, build_matrix};
pub use plan::{NearestNeighbourPlanner, PlanRequest, TourPlan, TourPlanner, plan_tour};
pub use road_graph::{NodeId, RoadGraph, build_graph};
pub use road_route::{RoadRoute, RoadRouteError, RoadRouteProvider};
pub use tour::{
    GREEDY_PROBABILITY, RANDOM_WINDOW, RandomSource, SequenceSource, Tour, TourError, build_tour,
};
pub use waypoint::{Coordinate, Waypoint, WaypointError, coordinate};
