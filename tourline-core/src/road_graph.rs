//! Undirected road graphs weighted by great-circle distance.
//!
//! [`build_graph`] scans ways (ordered node references) and joins each pair
//! of consecutive nodes whose coordinates are known. The result is meant for
//! a shortest-path or rendering layer; the tour engine itself never reads it.

use std::collections::HashMap;
use std::hash::BuildHasher;

use log::debug;

use crate::{Coordinate, haversine_km};

/// Road-network node identifier, as used by OpenStreetMap.
pub type NodeId = i64;

/// Adjacency map from node to neighbour to edge weight in kilometres.
///
/// Every edge is stored in both directions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadGraph {
    adjacency: HashMap<NodeId, HashMap<NodeId, f64>>,
}

impl RoadGraph {
    /// Insert `a <-> b` with `weight`, replacing any previous weight.
    pub fn insert_edge(&mut self, a: NodeId, b: NodeId, weight: f64) {
        self.adjacency.entry(a).or_default().insert(b, weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
    }

    /// Weight of the direct edge between `a` and `b`, if one exists.
    #[must_use]
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.adjacency.get(&a).and_then(|edges| edges.get(&b)).copied()
    }

    /// Neighbours of `node` with edge weights.
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> Option<&HashMap<NodeId, f64>> {
        self.adjacency.get(&node)
    }

    /// Whether `node` has at least one edge.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of nodes with at least one edge.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, counting a self-loop once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let mut loops = 0_usize;
        let mut directed = 0_usize;
        for (node, edges) in &self.adjacency {
            if edges.contains_key(node) {
                loops += 1;
                directed += edges.len() - 1;
            } else {
                directed += edges.len();
            }
        }
        loops + directed / 2
    }

    /// Whether the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Build an undirected road graph from node coordinates and ways.
///
/// Consecutive node pairs in each way become edges weighted by
/// [`haversine_km`]. Pairs referencing a node missing from `nodes` are
/// skipped silently. Repeated pairs overwrite earlier weights, and a
/// self-loop becomes a zero-weight edge.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use tourline_core::{NodeId, build_graph, coordinate};
///
/// let nodes = HashMap::from([
///     (1, coordinate(0.0, 0.0)),
///     (2, coordinate(0.0, 1.0)),
///     (3, coordinate(0.0, 2.0)),
/// ]);
/// let ways: Vec<Vec<NodeId>> = vec![vec![1, 2, 3]];
/// let graph = build_graph(&nodes, &ways);
/// assert_eq!(graph.weight(1, 2), graph.weight(2, 1));
/// assert!(graph.weight(1, 3).is_none());
/// ```
pub fn build_graph<S, I, W>(nodes: &HashMap<NodeId, Coordinate, S>, ways: I) -> RoadGraph
where
    S: BuildHasher,
    I: IntoIterator<Item = W>,
    W: AsRef<[NodeId]>,
{
    let mut graph = RoadGraph::default();
    let mut skipped = 0_usize;
    for way in ways {
        for segment in way.as_ref().windows(2) {
            let &[a, b] = segment else {
                continue;
            };
            match (nodes.get(&a), nodes.get(&b)) {
                (Some(&from), Some(&to)) => graph.insert_edge(a, b, haversine_km(from, to)),
                _ => skipped += 1,
            }
        }
    }
    debug!(
        "built road graph with {} nodes and {} edges ({skipped} segments skipped)",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate;
    use rstest::{fixture, rstest};

    const A: NodeId = 1;
    const B: NodeId = 2;
    const C: NodeId = 3;

    #[fixture]
    fn nodes() -> HashMap<NodeId, Coordinate> {
        HashMap::from([
            (A, coordinate(0.0, 0.0)),
            (B, coordinate(0.0, 1.0)),
            (C, coordinate(0.0, 2.0)),
        ])
    }

    #[rstest]
    fn consecutive_nodes_are_joined_both_ways(nodes: HashMap<NodeId, Coordinate>) {
        let graph = build_graph(&nodes, [vec![A, B, C]]);
        let ab = haversine_km(coordinate(0.0, 0.0), coordinate(0.0, 1.0));
        let bc = haversine_km(coordinate(0.0, 1.0), coordinate(0.0, 2.0));
        assert_eq!(graph.weight(A, B), Some(ab));
        assert_eq!(graph.weight(B, A), Some(ab));
        assert_eq!(graph.weight(B, C), Some(bc));
        assert_eq!(graph.weight(C, B), Some(bc));
        assert_eq!(graph.weight(A, C), None);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[rstest]
    fn unknown_nodes_are_skipped(nodes: HashMap<NodeId, Coordinate>) {
        let graph = build_graph(&nodes, [vec![A, 99, B]]);
        assert!(graph.is_empty());
        assert!(!graph.contains_node(99));
    }

    #[rstest]
    fn short_ways_add_nothing(nodes: HashMap<NodeId, Coordinate>) {
        let graph = build_graph(&nodes, [vec![A], Vec::new()]);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[rstest]
    fn repeated_segments_keep_one_edge(nodes: HashMap<NodeId, Coordinate>) {
        let graph = build_graph(&nodes, [vec![A, B], vec![B, A]]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbours(A).map(HashMap::len), Some(1));
    }

    #[rstest]
    fn self_loop_has_zero_weight(nodes: HashMap<NodeId, Coordinate>) {
        let graph = build_graph(&nodes, [vec![A, A]]);
        assert_eq!(graph.weight(A, A), Some(0.0));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[rstest]
    fn later_insert_overwrites_weight() {
        let mut graph = RoadGraph::default();
        graph.insert_edge(A, B, 1.0);
        graph.insert_edge(B, A, 2.5);
        assert_eq!(graph.weight(A, B), Some(2.5));
        assert_eq!(graph.weight(B, A), Some(2.5));
    }
}
