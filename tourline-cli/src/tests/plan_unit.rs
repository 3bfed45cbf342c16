//! Focused unit tests covering plan configuration and output.

use super::helpers::{Scratch, THREE_STOPS, output_json};
use super::*;
use crate::plan::{PlanArgs, PlanConfig, run_plan_with};
use rstest::rstest;
use tourline_core::test_support::StraightLineRouteProvider;
use tourline_core::{
    Coordinate, NearestNeighbourPlanner, RoadRoute, RoadRouteError, RoadRouteProvider,
};

fn config_for(scratch: &Scratch, contents: &str, seed: u64, closed: bool) -> PlanConfig {
    PlanConfig {
        waypoints: scratch.write("stops.json", contents),
        seed,
        closed,
        osrm_url: None,
    }
}

fn run_to_string(config: &PlanConfig) -> Result<Vec<u8>, CliError> {
    let mut buffer = Vec::new();
    run_plan_with(config, &NearestNeighbourPlanner, None, &mut buffer)?;
    Ok(buffer)
}

fn run_routed(config: &PlanConfig, routes: &dyn RoadRouteProvider) -> Result<Vec<u8>, CliError> {
    let mut buffer = Vec::new();
    run_plan_with(config, &NearestNeighbourPlanner, Some(routes), &mut buffer)?;
    Ok(buffer)
}

/// Route provider standing in for an unreachable routing service.
struct UnroutableProvider;

impl RoadRouteProvider for UnroutableProvider {
    fn fetch_route(&self, _locations: &[Coordinate]) -> Result<RoadRoute, RoadRouteError> {
        Err(RoadRouteError::Service {
            code: "NoRoute".to_owned(),
            message: "Impossible route between points".to_owned(),
        })
    }
}

#[rstest]
fn converting_plan_without_waypoints_errors() {
    let args = PlanArgs {
        waypoints: None,
        ..PlanArgs::default()
    };

    let err = PlanConfig::try_from(args).expect_err("missing waypoints should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_WAYPOINTS);
            assert_eq!(env, ENV_PLAN_WAYPOINTS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn explicit_seed_is_kept() {
    let args = PlanArgs {
        waypoints: Some("stops.json".into()),
        seed: Some(99),
        closed: true,
        osrm_url: Some("http://localhost:5000".to_owned()),
    };

    let config = PlanConfig::try_from(args).expect("config should build");
    assert_eq!(config.seed, 99);
    assert!(config.closed);
    assert_eq!(config.osrm_url.as_deref(), Some("http://localhost:5000"));
}

#[rstest]
fn plan_output_lists_every_waypoint_once() {
    let scratch = Scratch::new();
    let config = config_for(&scratch, THREE_STOPS, 7, false);

    let output = output_json(&run_to_string(&config).expect("plan should succeed"));

    assert_eq!(output["seed"], 7);
    let mut order: Vec<u64> = output["order"]
        .as_array()
        .expect("order array")
        .iter()
        .map(|index| index.as_u64().expect("index"))
        .collect();
    order.sort_unstable();
    assert_eq!(order, [0, 1, 2]);
    assert_eq!(output["waypoints"].as_array().map(Vec::len), Some(3));
    assert!(output["length_km"].as_f64().expect("length") > 0.0);
}

#[rstest]
fn same_seed_produces_identical_output() {
    let scratch = Scratch::new();
    let config = config_for(&scratch, THREE_STOPS, 1234, false);

    let first = run_to_string(&config).expect("first run");
    let second = run_to_string(&config).expect("second run");

    assert_eq!(first, second);
}

#[rstest]
fn closed_length_is_never_shorter() {
    let scratch = Scratch::new();
    let open = config_for(&scratch, THREE_STOPS, 5, false);
    let closed = PlanConfig {
        closed: true,
        ..open.clone()
    };

    let open_km = output_json(&run_to_string(&open).expect("open"))["length_km"]
        .as_f64()
        .expect("open length");
    let closed_km = output_json(&run_to_string(&closed).expect("closed"))["length_km"]
        .as_f64()
        .expect("closed length");

    assert!(closed_km >= open_km);
}

#[rstest]
fn single_waypoint_has_zero_length() {
    let scratch = Scratch::new();
    let config = config_for(
        &scratch,
        r#"[{ "id": "only", "lat": 10.0, "lon": 20.0 }]"#,
        3,
        true,
    );

    let output = output_json(&run_to_string(&config).expect("plan should succeed"));

    assert_eq!(output["order"], serde_json::json!([0]));
    assert_eq!(output["length_km"].as_f64(), Some(0.0));
}

#[rstest]
fn missing_waypoint_file_is_reported() {
    let scratch = Scratch::new();
    let config = PlanConfig {
        waypoints: scratch.root().join("absent.json"),
        seed: 0,
        closed: false,
        osrm_url: None,
    };

    match run_to_string(&config) {
        Err(CliError::MissingSourceFile { field, path }) => {
            assert_eq!(field, ARG_PLAN_WAYPOINTS);
            assert_eq!(path, config.waypoints);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn directory_is_not_a_waypoint_file() {
    let scratch = Scratch::new();
    let config = PlanConfig {
        waypoints: scratch.root().to_path_buf(),
        seed: 0,
        closed: false,
        osrm_url: None,
    };

    match run_to_string(&config) {
        Err(CliError::SourcePathNotFile { field, .. }) => assert_eq!(field, ARG_PLAN_WAYPOINTS),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
#[case::malformed("[{ \"id\": ")]
#[case::out_of_range(r#"[{ "id": "x", "lat": 95.0, "lon": 0.0 }]"#)]
#[case::duplicate_ids(
    r#"[{ "id": "x", "lat": 1.0, "lon": 1.0 }, { "id": "x", "lat": 2.0, "lon": 2.0 }]"#
)]
fn bad_waypoint_files_are_rejected(#[case] contents: &str) {
    let scratch = Scratch::new();
    let config = config_for(&scratch, contents, 0, false);

    match run_to_string(&config) {
        Err(CliError::ReadWaypoints { path, .. }) => assert_eq!(path, config.waypoints),
        other => panic!("expected ReadWaypoints, found {other:?}"),
    }
}

#[rstest]
fn unrouted_plan_has_no_route() {
    let scratch = Scratch::new();
    let config = config_for(&scratch, THREE_STOPS, 7, false);

    let output = output_json(&run_to_string(&config).expect("plan should succeed"));

    assert!(output.get("route").is_none());
}

#[rstest]
#[case::open(false, 3)]
#[case::closed(true, 4)]
fn routed_plan_follows_the_tour(#[case] closed: bool, #[case] points: usize) {
    let scratch = Scratch::new();
    let config = config_for(&scratch, THREE_STOPS, 11, closed);

    let output = output_json(
        &run_routed(&config, &StraightLineRouteProvider).expect("plan should succeed"),
    );

    let route = &output["route"];
    let polyline = route["polyline"].as_array().expect("polyline array");
    assert_eq!(polyline.len(), points);
    let start = &output["waypoints"][0];
    assert_eq!(
        polyline.first(),
        Some(&serde_json::json!([start["lat"], start["lon"]]))
    );
    let distance_m = route["distance_m"].as_f64().expect("distance");
    let length_km = output["length_km"].as_f64().expect("length");
    assert!((distance_m / 1000.0 - length_km).abs() < 1e-6);
}

#[rstest]
fn single_waypoint_is_not_routed() {
    let scratch = Scratch::new();
    let config = config_for(
        &scratch,
        r#"[{ "id": "only", "lat": 10.0, "lon": 20.0 }]"#,
        3,
        false,
    );

    let output = output_json(
        &run_routed(&config, &UnroutableProvider).expect("single stop needs no route"),
    );

    assert!(output.get("route").is_none());
}

#[rstest]
fn routing_failures_are_reported() {
    let scratch = Scratch::new();
    let config = config_for(&scratch, THREE_STOPS, 7, false);

    match run_routed(&config, &UnroutableProvider) {
        Err(CliError::Route(RoadRouteError::Service { code, .. })) => assert_eq!(code, "NoRoute"),
        other => panic!("expected a routing error, found {other:?}"),
    }
}
