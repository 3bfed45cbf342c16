//! Graph command implementation for the tourline CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tourline_data::{RoadNetwork, ingest_road_network_pbf, read_overpass_json};

use crate::fs::{open_input, require_file};
use crate::{ARG_GRAPH_ROAD_DATA, CliError, ENV_GRAPH_ROAD_DATA};

/// Encodings accepted for road data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RoadDataFormat {
    /// Overpass API JSON with `node` and `way` elements.
    Overpass,
    /// OpenStreetMap protocol buffer extract.
    Pbf,
}

impl RoadDataFormat {
    /// Guess the format from a file name: `.pbf` is PBF, anything else JSON.
    fn infer(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("pbf") => Self::Pbf,
            _ => Self::Overpass,
        }
    }
}

/// CLI arguments for the `graph` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load road data from an Overpass JSON response or an OSM PBF \
                 extract, build the weighted road graph, and print its node \
                 and edge counts.",
    about = "Summarise a road graph"
)]
#[ortho_config(prefix = "TOURLINE")]
pub(crate) struct GraphArgs {
    /// Path to the road data file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) road_data: Option<Utf8PathBuf>,
    /// Input encoding; inferred from the file extension when omitted.
    #[arg(long, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<RoadDataFormat>,
}

impl GraphArgs {
    fn into_config(self) -> Result<GraphConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GraphConfig::try_from(merged)
    }
}

/// Resolved `graph` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GraphConfig {
    /// Path to the road data file.
    pub(crate) road_data: Utf8PathBuf,
    /// Encoding of `road_data`.
    pub(crate) format: RoadDataFormat,
}

impl TryFrom<GraphArgs> for GraphConfig {
    type Error = CliError;

    fn try_from(args: GraphArgs) -> Result<Self, Self::Error> {
        let road_data = args.road_data.ok_or(CliError::MissingArgument {
            field: ARG_GRAPH_ROAD_DATA,
            env: ENV_GRAPH_ROAD_DATA,
        })?;
        let format = args
            .format
            .unwrap_or_else(|| RoadDataFormat::infer(&road_data));
        Ok(Self { road_data, format })
    }
}

/// JSON document written by `tourline graph`.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct GraphSummary {
    nodes: usize,
    edges: usize,
}

pub(crate) fn run_graph(args: GraphArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_graph_with(&config, writer)
}

pub(crate) fn run_graph_with(config: &GraphConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    require_file(&config.road_data, ARG_GRAPH_ROAD_DATA)?;
    let network = load_network(config)?;
    let graph = network.into_graph();
    log::info!(
        "built road graph from {}: {} nodes, {} edges",
        config.road_data,
        graph.node_count(),
        graph.edge_count()
    );
    let summary = GraphSummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    };
    let payload = serde_json::to_string_pretty(&summary).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn load_network(config: &GraphConfig) -> Result<RoadNetwork, CliError> {
    let loaded = match config.format {
        RoadDataFormat::Overpass => {
            let file = open_input(&config.road_data, ARG_GRAPH_ROAD_DATA)?;
            read_overpass_json(BufReader::new(file))
        }
        RoadDataFormat::Pbf => ingest_road_network_pbf(config.road_data.as_std_path()),
    };
    loaded.map_err(|source| CliError::LoadRoadData {
        path: config.road_data.clone(),
        source,
    })
}
