//! Facade crate for tourline.
//!
//! This crate re-exports the tour-planning and road-graph types from
//! `tourline-core` and, behind the `data` feature, the loaders for waypoint
//! files, Overpass JSON, and OSM PBF extracts, plus the OSRM road-route
//! provider.

#![forbid(unsafe_code)]

pub use tourline_core::{
    Coordinate, DistanceMatrix, EARTH_RADIUS_KM, NearestNeighbourPlanner, NodeId, PlanRequest,
    RandomSource, RoadGraph, RoadRoute, RoadRouteError, RoadRouteProvider, Tour, TourError,
    TourPlan, TourPlanner, Waypoint, WaypointError, build_graph, build_matrix, build_tour,
    coordinate, haversine_km, plan_tour,
};

#[cfg(feature = "data")]
pub use tourline_data::{
    OsrmRouteProvider, OsrmRouteProviderConfig, ProviderBuildError, RoadNetwork,
    RoadNetworkError, WaypointFileError, ingest_road_network_pbf, parse_overpass_json,
    read_overpass_json, read_waypoints,
};
