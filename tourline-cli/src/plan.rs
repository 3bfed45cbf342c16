//! Plan command implementation for the tourline CLI.

use std::io::{BufReader, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tourline_core::{
    Coordinate, NearestNeighbourPlanner, PlanRequest, RoadRoute, RoadRouteProvider, Tour,
    TourPlan, TourPlanner, Waypoint,
};
use tourline_data::{OsrmRouteProvider, read_waypoints};

use crate::fs::{open_input, require_file};
use crate::{ARG_PLAN_WAYPOINTS, CliError, ENV_PLAN_WAYPOINTS};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order the waypoints in a JSON file into a short tour using a \
                 randomised nearest-neighbour heuristic. Passing --seed makes \
                 the ordering reproducible. With --osrm-url the planned tour is \
                 also routed over the road network by an OSRM server.",
    about = "Order waypoints into a tour"
)]
#[ortho_config(prefix = "TOURLINE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON array of waypoints.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) waypoints: Option<Utf8PathBuf>,
    /// Seed for the random source; drawn from entropy when omitted.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Report the length of the closed loop back to the first waypoint.
    #[arg(long)]
    #[serde(default)]
    pub(crate) closed: bool,
    /// Base URL of an OSRM server used to route the planned tour by road.
    #[arg(long, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_url: Option<String>,
}

impl PlanArgs {
    fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the waypoint file.
    pub(crate) waypoints: Utf8PathBuf,
    /// Seed used for this run.
    pub(crate) seed: u64,
    /// Whether to report the closed-loop length.
    pub(crate) closed: bool,
    /// OSRM server to route the tour through, if any.
    pub(crate) osrm_url: Option<String>,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let waypoints = args.waypoints.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_WAYPOINTS,
            env: ENV_PLAN_WAYPOINTS,
        })?;
        let seed = args.seed.unwrap_or_else(|| {
            let drawn = rand::random::<u64>();
            log::info!("no seed supplied; using seed {drawn}");
            drawn
        });
        Ok(Self {
            waypoints,
            seed,
            closed: args.closed,
            osrm_url: args.osrm_url,
        })
    }
}

/// JSON document written by `tourline plan`.
#[derive(Debug, Serialize)]
struct PlanOutput<'a> {
    seed: u64,
    order: &'a Tour,
    waypoints: &'a [Waypoint],
    length_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<RouteOutput>,
}

/// Road route through the planned tour.
#[derive(Debug, Serialize)]
struct RouteOutput {
    distance_m: f64,
    /// Route geometry as `[lat, lon]` pairs.
    polyline: Vec<[f64; 2]>,
}

impl From<RoadRoute> for RouteOutput {
    fn from(route: RoadRoute) -> Self {
        Self {
            distance_m: route.distance_m,
            polyline: route
                .polyline
                .into_iter()
                .map(|point| [point.y, point.x])
                .collect(),
        }
    }
}

pub(crate) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let routes = config
        .osrm_url
        .as_deref()
        .map(|base_url| {
            OsrmRouteProvider::new(base_url).map_err(|source| CliError::BuildRouteProvider {
                base_url: base_url.to_owned(),
                source,
            })
        })
        .transpose()?;
    run_plan_with(
        &config,
        &NearestNeighbourPlanner,
        routes.as_ref().map(|provider| provider as &dyn RoadRouteProvider),
        writer,
    )
}

pub(crate) fn run_plan_with(
    config: &PlanConfig,
    planner: &dyn TourPlanner,
    routes: Option<&dyn RoadRouteProvider>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_file(&config.waypoints, ARG_PLAN_WAYPOINTS)?;
    let waypoints = load_waypoints(config)?;
    log::debug!("planning {} waypoints with seed {}", waypoints.len(), config.seed);
    let request = PlanRequest {
        waypoints,
        seed: config.seed,
    };
    let plan = planner.plan(&request)?;
    let route = match routes {
        Some(provider) => route_plan(provider, config, &plan)?,
        None => None,
    };
    write_plan(writer, config, &plan, route)
}

/// Route the tour in visiting order, returning to the start when `closed`.
///
/// Tours with fewer than two waypoints have nothing to route.
fn route_plan(
    provider: &dyn RoadRouteProvider,
    config: &PlanConfig,
    plan: &TourPlan,
) -> Result<Option<RouteOutput>, CliError> {
    if plan.waypoints.len() < 2 {
        log::info!("skipping road routing for a tour of {} waypoints", plan.waypoints.len());
        return Ok(None);
    }
    let mut locations: Vec<Coordinate> = plan.waypoints.iter().map(|stop| stop.location).collect();
    if config.closed {
        locations.extend(plan.waypoints.first().map(|stop| stop.location));
    }
    let route = provider.fetch_route(&locations)?;
    log::debug!(
        "road route covers {} m over {} points",
        route.distance_m,
        route.polyline.len()
    );
    Ok(Some(RouteOutput::from(route)))
}

fn load_waypoints(config: &PlanConfig) -> Result<Vec<Waypoint>, CliError> {
    let file = open_input(&config.waypoints, ARG_PLAN_WAYPOINTS)?;
    read_waypoints(BufReader::new(file)).map_err(|source| CliError::ReadWaypoints {
        path: config.waypoints.clone(),
        source,
    })
}

fn write_plan(
    writer: &mut dyn Write,
    config: &PlanConfig,
    plan: &TourPlan,
    route: Option<RouteOutput>,
) -> Result<(), CliError> {
    let length_km = if config.closed {
        plan.closed_length_km
    } else {
        plan.length_km
    };
    let output = PlanOutput {
        seed: config.seed,
        order: &plan.order,
        waypoints: &plan.waypoints,
        length_km,
        route,
    };
    let payload = serde_json::to_string_pretty(&output).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
