use std::collections::HashMap;
use std::path::PathBuf;

use log::warn;
use thiserror::Error;
use tourline_core::waypoint::is_valid_location;
use tourline_core::{Coordinate, NodeId, RoadGraph, build_graph, coordinate};

/// Parsed road-network data: node positions and the ways joining them.
///
/// # Examples
/// ```
/// use tourline_data::RoadNetwork;
///
/// let mut network = RoadNetwork::default();
/// network.record_node(1, 0.0, 0.0);
/// network.record_node(2, 0.0, 1.0);
/// network.record_way(vec![1, 2]);
/// let graph = network.to_graph();
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadNetwork {
    /// Node coordinates keyed by node identifier.
    pub nodes: HashMap<NodeId, Coordinate>,
    /// Ways as ordered node references.
    pub ways: Vec<Vec<NodeId>>,
}

impl RoadNetwork {
    /// Record a node, dropping coordinates outside the WGS84 range.
    ///
    /// Returns whether the node was kept.
    pub fn record_node(&mut self, id: NodeId, lat: f64, lon: f64) -> bool {
        let location = coordinate(lat, lon);
        if !is_valid_location(location) {
            warn!("Skipped road node {id} with invalid coordinate ({lat}, {lon})");
            return false;
        }
        self.nodes.insert(id, location);
        true
    }

    /// Record a way. Ways with fewer than two references join nothing and
    /// are not stored.
    pub fn record_way(&mut self, refs: Vec<NodeId>) {
        if refs.len() >= 2 {
            self.ways.push(refs);
        }
    }

    /// Merge another network into this one; existing nodes win.
    #[must_use]
    pub fn combine(mut self, other: Self) -> Self {
        for (id, location) in other.nodes {
            self.nodes.entry(id).or_insert(location);
        }
        self.ways.extend(other.ways);
        self
    }

    /// Build the weighted road graph for this network.
    #[must_use]
    pub fn to_graph(&self) -> RoadGraph {
        build_graph(&self.nodes, &self.ways)
    }

    /// Consume the network, building its road graph.
    #[must_use]
    pub fn into_graph(self) -> RoadGraph {
        self.to_graph()
    }
}

/// Errors returned when reading road-network sources.
#[derive(Debug, Error)]
pub enum RoadNetworkError {
    /// Overpass JSON could not be decoded.
    #[error("failed to parse Overpass JSON: {source}")]
    Json {
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The PBF file could not be opened.
    #[error("failed to open OSM PBF file at {path:?}")]
    Open {
        /// Underlying reader error.
        #[source]
        source: osmpbf::Error,
        /// Path that failed to open.
        path: PathBuf,
    },
    /// The PBF file could not be decoded.
    #[error("failed to decode OSM PBF data at {path:?}")]
    Decode {
        /// Underlying decode error.
        #[source]
        source: osmpbf::Error,
        /// Path being decoded.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(91.0, 0.0)]
    #[case(0.0, 181.0)]
    #[case(f64::NAN, 0.0)]
    fn invalid_nodes_are_dropped(#[case] lat: f64, #[case] lon: f64) {
        let mut network = RoadNetwork::default();
        assert!(!network.record_node(1, lat, lon));
        assert!(network.nodes.is_empty());
    }

    #[rstest]
    fn single_reference_ways_are_ignored() {
        let mut network = RoadNetwork::default();
        network.record_way(vec![1]);
        network.record_way(Vec::new());
        assert!(network.ways.is_empty());
    }

    #[rstest]
    fn combine_keeps_existing_nodes() {
        let mut left = RoadNetwork::default();
        left.record_node(1, 10.0, 10.0);
        left.record_way(vec![1, 2]);
        let mut right = RoadNetwork::default();
        right.record_node(1, 20.0, 20.0);
        right.record_node(2, 10.0, 11.0);
        right.record_way(vec![2, 3]);

        let merged = left.combine(right);
        assert_eq!(merged.nodes.get(&1), Some(&coordinate(10.0, 10.0)));
        assert_eq!(merged.nodes.len(), 2);
        assert_eq!(merged.ways, vec![vec![1, 2], vec![2, 3]]);
    }
}
