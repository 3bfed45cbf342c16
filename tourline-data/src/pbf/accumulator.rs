//! Accumulators for two-pass PBF road ingestion.

use std::collections::HashSet;

use osmpbf::Element;
use tourline_core::NodeId;

use crate::RoadNetwork;

/// First pass: highway ways and the node ids they reference.
#[derive(Debug, Default)]
pub(super) struct RoadAccumulator {
    network: RoadNetwork,
    pending_way_nodes: HashSet<NodeId>,
    skipped_nodes: usize,
}

impl RoadAccumulator {
    pub(super) fn process_element(&mut self, element: Element<'_>) {
        match element {
            Element::Way(way) if way.tags().any(|(key, _)| key == "highway") => {
                let refs: Vec<NodeId> = way.refs().collect();
                self.pending_way_nodes.extend(refs.iter().copied());
                self.network.record_way(refs);
            }
            Element::Node(_) | Element::DenseNode(_) | Element::Way(_) | Element::Relation(_) => {}
        }
    }

    pub(super) fn combine(mut self, other: Self) -> Self {
        self.pending_way_nodes.extend(other.pending_way_nodes);
        self.skipped_nodes += other.skipped_nodes;
        self.network = self.network.combine(other.network);
        self
    }

    pub(super) fn has_pending_nodes(&self) -> bool {
        !self.pending_way_nodes.is_empty()
    }

    pub(super) fn pending_way_node_count(&self) -> usize {
        self.pending_way_nodes.len()
    }

    /// Second pass: keep a node only if a highway way references it.
    pub(super) fn resolve_pending_node(&mut self, id: NodeId, lat: f64, lon: f64) {
        if !self.pending_way_nodes.remove(&id) {
            return;
        }
        if !self.network.record_node(id, lat, lon) {
            self.skipped_nodes += 1;
        }
    }

    pub(super) const fn skipped_nodes(&self) -> usize {
        self.skipped_nodes
    }

    pub(super) fn into_network(self) -> RoadNetwork {
        self.network
    }
}
