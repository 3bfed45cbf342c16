//! Raw data ingestion for tourline.
//!
//! Responsibilities:
//! - Parse road-network sources (Overpass JSON, OpenStreetMap PBF) into a
//!   [`RoadNetwork`] of node coordinates and ways.
//! - Load waypoint lists from JSON, validating coordinates on the way in.
//! - Fetch road routes from an OSRM server through [`OsrmRouteProvider`].
//!
//! Boundaries:
//! - Graph construction and tour planning live in `tourline-core`.
//! - Only the routing provider talks to the network; the loaders read
//!   files and readers the caller supplies.
//!
//! Invariants:
//! - Coordinates handed to the core are finite and within the WGS84 range.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod network;
pub mod overpass;
pub mod pbf;
pub mod routing;
pub mod waypoints;

pub use network::{RoadNetwork, RoadNetworkError};
pub use overpass::{parse_overpass_json, read_overpass_json};
pub use pbf::ingest_road_network_pbf;
pub use routing::{OsrmRouteProvider, OsrmRouteProviderConfig, ProviderBuildError};
pub use waypoints::{WaypointFileError, read_waypoints};
