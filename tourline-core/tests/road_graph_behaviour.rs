//! Behavioural tests for building road graphs.

use std::cell::RefCell;
use std::collections::HashMap;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tourline_core::{Coordinate, NodeId, RoadGraph, build_graph, coordinate, haversine_km};

const A: NodeId = 101;
const B: NodeId = 102;
const C: NodeId = 103;
const UNKNOWN: NodeId = 999;

#[fixture]
fn nodes() -> RefCell<HashMap<NodeId, Coordinate>> {
    RefCell::new(HashMap::new())
}

#[fixture]
fn ways() -> RefCell<Vec<Vec<NodeId>>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn graph() -> RefCell<Option<RoadGraph>> {
    RefCell::new(None)
}

fn location(node: NodeId) -> Coordinate {
    match node {
        A => coordinate(0.0, 0.0),
        B => coordinate(0.0, 1.0),
        _ => coordinate(0.0, 2.0),
    }
}

fn built(graph: &RefCell<Option<RoadGraph>>) -> RoadGraph {
    graph.borrow().clone().expect("graph built")
}

fn assert_joined(graph: &RoadGraph, a: NodeId, b: NodeId) {
    let expected = haversine_km(location(a), location(b));
    assert_eq!(graph.weight(a, b), Some(expected), "{a} -> {b}");
    assert_eq!(graph.weight(b, a), Some(expected), "{b} -> {a}");
}

#[given("nodes A, B and C one degree apart along the equator")]
fn given_nodes(#[from(nodes)] nodes: &RefCell<HashMap<NodeId, Coordinate>>) {
    *nodes.borrow_mut() = [A, B, C].into_iter().map(|id| (id, location(id))).collect();
}

#[given("a way visiting A, B and C")]
fn given_full_way(#[from(ways)] ways: &RefCell<Vec<Vec<NodeId>>>) {
    ways.borrow_mut().push(vec![A, B, C]);
}

#[given("a way visiting A, an unknown node and C")]
fn given_broken_way(#[from(ways)] ways: &RefCell<Vec<Vec<NodeId>>>) {
    ways.borrow_mut().push(vec![A, UNKNOWN, C]);
}

#[when("I build the road graph")]
fn when_build(
    #[from(nodes)] nodes: &RefCell<HashMap<NodeId, Coordinate>>,
    #[from(ways)] ways: &RefCell<Vec<Vec<NodeId>>>,
    #[from(graph)] graph: &RefCell<Option<RoadGraph>>,
) {
    let result = build_graph(&*nodes.borrow(), ways.borrow().iter());
    *graph.borrow_mut() = Some(result);
}

#[then("A and B are joined in both directions")]
fn then_ab(#[from(graph)] graph: &RefCell<Option<RoadGraph>>) {
    assert_joined(&built(graph), A, B);
}

#[then("B and C are joined in both directions")]
fn then_bc(#[from(graph)] graph: &RefCell<Option<RoadGraph>>) {
    assert_joined(&built(graph), B, C);
}

#[then("A and C are not directly joined")]
fn then_no_ac(#[from(graph)] graph: &RefCell<Option<RoadGraph>>) {
    let road = built(graph);
    assert!(road.weight(A, C).is_none());
    assert!(road.weight(C, A).is_none());
}

#[then("the road graph is empty")]
fn then_empty(#[from(graph)] graph: &RefCell<Option<RoadGraph>>) {
    let road = built(graph);
    assert!(road.is_empty(), "expected no edges, found {road:?}");
    assert_eq!(road.edge_count(), 0);
}

#[scenario(path = "tests/features/road_graph.feature", index = 0)]
fn single_way(
    nodes: RefCell<HashMap<NodeId, Coordinate>>,
    ways: RefCell<Vec<Vec<NodeId>>>,
    graph: RefCell<Option<RoadGraph>>,
) {
    let _ = (nodes, ways, graph);
}

#[scenario(path = "tests/features/road_graph.feature", index = 1)]
fn unknown_nodes(
    nodes: RefCell<HashMap<NodeId, Coordinate>>,
    ways: RefCell<Vec<Vec<NodeId>>>,
    graph: RefCell<Option<RoadGraph>>,
) {
    let _ = (nodes, ways, graph);
}
