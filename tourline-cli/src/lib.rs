//! Command-line interface for tourline.
//!
//! `tourline plan` orders a waypoint file into a tour; `tourline graph`
//! summarises the road graph built from raw road data. Options can come
//! from CLI flags, configuration files, or `TOURLINE_` environment
//! variables.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod graph;
mod plan;

pub use error::CliError;

use graph::GraphArgs;
use plan::PlanArgs;

pub(crate) const ARG_PLAN_WAYPOINTS: &str = "waypoints";
pub(crate) const ENV_PLAN_WAYPOINTS: &str = "TOURLINE_CMDS_PLAN_WAYPOINTS";
pub(crate) const ARG_GRAPH_ROAD_DATA: &str = "road-data";
pub(crate) const ENV_GRAPH_ROAD_DATA: &str = "TOURLINE_CMDS_GRAPH_ROAD_DATA";

/// Run the tourline CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments are invalid, inputs cannot be read,
/// or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Plan(args) => plan::run_plan(args, writer),
        Command::Graph(args) => graph::run_graph(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tourline",
    about = "Order waypoints into short tours and inspect road graphs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order a waypoint file into a tour.
    Plan(PlanArgs),
    /// Build a road graph from Overpass JSON or OSM PBF data.
    Graph(GraphArgs),
}

#[cfg(test)]
mod tests;
