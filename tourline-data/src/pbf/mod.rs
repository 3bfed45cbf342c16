//! Road networks from OpenStreetMap PBF extracts.
//!
//! Only ways tagged `highway` contribute edges, mirroring a
//! `way["highway"]` Overpass query. Ingestion reads the file twice: the
//! first pass collects highway ways and the node ids they reference, the
//! second records coordinates for those nodes alone.

use std::path::Path;

use log::{debug, warn};
use osmpbf::{Element, ElementReader};

use crate::{RoadNetwork, RoadNetworkError};

mod accumulator;

use accumulator::RoadAccumulator;

/// Parallel OSM PBF ingestion collecting highway ways and their nodes.
///
/// # Errors
///
/// Returns [`RoadNetworkError::Open`] if the file cannot be opened and
/// [`RoadNetworkError::Decode`] if its contents are not valid PBF data.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use tourline_data::ingest_road_network_pbf;
///
/// # fn main() -> Result<(), tourline_data::RoadNetworkError> {
/// let network = ingest_road_network_pbf(Path::new("berlin.osm.pbf"))?;
/// let graph = network.into_graph();
/// println!("{} road segments", graph.edge_count());
/// # Ok(())
/// # }
/// ```
pub fn ingest_road_network_pbf(path: &Path) -> Result<RoadNetwork, RoadNetworkError> {
    let reader = ElementReader::from_path(path).map_err(|source| RoadNetworkError::Open {
        source,
        path: path.to_path_buf(),
    })?;

    let mut accumulator = reader
        .par_map_reduce(
            |element| {
                let mut accumulator = RoadAccumulator::default();
                accumulator.process_element(element);
                accumulator
            },
            RoadAccumulator::default,
            RoadAccumulator::combine,
        )
        .map_err(|source| RoadNetworkError::Decode {
            source,
            path: path.to_path_buf(),
        })?;

    if accumulator.has_pending_nodes() {
        let resolver = ElementReader::from_path(path).map_err(|source| RoadNetworkError::Open {
            source,
            path: path.to_path_buf(),
        })?;
        {
            let accumulator_ref = &mut accumulator;
            resolver
                .for_each(|element| match element {
                    Element::Node(node) => {
                        accumulator_ref.resolve_pending_node(node.id(), node.lat(), node.lon());
                    }
                    Element::DenseNode(node) => {
                        accumulator_ref.resolve_pending_node(node.id(), node.lat(), node.lon());
                    }
                    Element::Way(_) | Element::Relation(_) => {}
                })
                .map_err(|source| RoadNetworkError::Decode {
                    source,
                    path: path.to_path_buf(),
                })?;
        }
        if accumulator.has_pending_nodes() {
            warn!(
                "Skipped {} way node references without coordinates in {}",
                accumulator.pending_way_node_count(),
                path.display()
            );
        }
    }

    if accumulator.skipped_nodes() > 0 {
        warn!(
            "Skipped {} nodes with invalid coordinates in {}",
            accumulator.skipped_nodes(),
            path.display()
        );
    }
    let network = accumulator.into_network();
    debug!(
        "Loaded {} nodes and {} highway ways from {}",
        network.nodes.len(),
        network.ways.len(),
        path.display()
    );
    Ok(network)
}
