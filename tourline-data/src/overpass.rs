//! Overpass API JSON responses.
//!
//! Road queries such as `way["highway"](bbox); out body; >; out skel qt;`
//! return a flat `elements` array mixing nodes and ways:
//!
//! ```json
//! { "elements": [
//!     { "type": "node", "id": 1, "lat": 52.5, "lon": 13.4 },
//!     { "type": "way", "id": 10, "nodes": [1, 2], "tags": { "highway": "residential" } }
//! ] }
//! ```
//!
//! Other element types (relations, areas) are ignored, as are ways without
//! a `nodes` array. Nodes missing `lat` or `lon` (as `out ids` emits) are
//! skipped with a warning.

use std::io::Read;

use log::warn;
use serde::Deserialize;
use tourline_core::NodeId;

use crate::{RoadNetwork, RoadNetworkError};

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum OverpassElement {
    Node {
        id: NodeId,
        #[serde(default)]
        lat: Option<f64>,
        #[serde(default)]
        lon: Option<f64>,
    },
    Way {
        #[serde(default)]
        nodes: Option<Vec<NodeId>>,
    },
    #[serde(other)]
    Other,
}

impl OverpassResponse {
    fn into_network(self) -> RoadNetwork {
        let mut network = RoadNetwork::default();
        for element in self.elements {
            match element {
                OverpassElement::Node {
                    id,
                    lat: Some(lat),
                    lon: Some(lon),
                } => {
                    network.record_node(id, lat, lon);
                }
                OverpassElement::Node { id, .. } => {
                    warn!("Skipped road node {id} without coordinates");
                }
                OverpassElement::Way { nodes: Some(refs) } => network.record_way(refs),
                OverpassElement::Way { nodes: None } | OverpassElement::Other => {}
            }
        }
        network
    }
}

/// Parse an Overpass JSON document held in memory.
///
/// # Errors
///
/// Returns [`RoadNetworkError::Json`] if the document is not valid
/// Overpass JSON.
///
/// # Examples
/// ```
/// use tourline_data::parse_overpass_json;
///
/// let network = parse_overpass_json(r#"{ "elements": [
///     { "type": "node", "id": 1, "lat": 0.0, "lon": 0.0 },
///     { "type": "node", "id": 2, "lat": 0.0, "lon": 1.0 },
///     { "type": "way", "id": 7, "nodes": [1, 2] }
/// ] }"#)?;
/// assert_eq!(network.nodes.len(), 2);
/// assert_eq!(network.to_graph().edge_count(), 1);
/// # Ok::<(), tourline_data::RoadNetworkError>(())
/// ```
pub fn parse_overpass_json(json: &str) -> Result<RoadNetwork, RoadNetworkError> {
    serde_json::from_str::<OverpassResponse>(json)
        .map(OverpassResponse::into_network)
        .map_err(|source| RoadNetworkError::Json { source })
}

/// Parse an Overpass JSON document from `reader`.
///
/// # Errors
///
/// Returns [`RoadNetworkError::Json`] if reading fails or the document is
/// not valid Overpass JSON.
pub fn read_overpass_json<R: Read>(reader: R) -> Result<RoadNetwork, RoadNetworkError> {
    serde_json::from_reader::<_, OverpassResponse>(reader)
        .map(OverpassResponse::into_network)
        .map_err(|source| RoadNetworkError::Json { source })
}
