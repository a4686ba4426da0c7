use barrier_sssp::algorithm::bmssp::{Bmssp, PathKey};
use barrier_sssp::graph::DirectedGraph;
use ordered_float::OrderedFloat;

fn chain_with_shortcuts() -> DirectedGraph<OrderedFloat<f64>> {
    DirectedGraph::from_edges(
        5,
        &[
            (0, 1, OrderedFloat(1.0)),
            (1, 2, OrderedFloat(1.0)),
            (0, 2, OrderedFloat(3.0)),
            (2, 3, OrderedFloat(1.0)),
            (1, 3, OrderedFloat(4.0)),
            (3, 4, OrderedFloat(1.0)),
            (0, 4, OrderedFloat(10.0)),
        ],
    )
}

#[test]
fn base_case_stops_at_extraction_cap() {
    let graph = chain_with_shortcuts();
    let mut engine = Bmssp::new(&graph, 0);

    // Five vertices give k = 1: two extractions, the second becomes the cut.
    let result = engine.execute(0, PathKey::unbounded(), &[0]);
    assert_eq!(result.new_bound.dist, OrderedFloat(1.0));
    assert_eq!(result.completed, vec![0]);
}

#[test]
fn base_case_exhausts_region_below_bound() {
    let graph = chain_with_shortcuts();
    let mut engine = Bmssp::new(&graph, 0);

    let bound = PathKey::at_distance(OrderedFloat(0.5));
    let result = engine.execute(0, bound, &[0]);
    // Only the source sits below the bound, so it comes back unchanged.
    assert_eq!(result.new_bound, bound);
    assert_eq!(result.completed, vec![0]);
}

#[test]
fn full_solve_finalizes_every_distance() {
    let graph = chain_with_shortcuts();
    let mut engine = Bmssp::new(&graph, 0);
    engine.solve();

    let distances: Vec<f64> = (0..5)
        .map(|v| engine.distance(v).expect("all vertices reachable").into_inner())
        .collect();
    assert_eq!(distances, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn unreached_vertices_have_no_distance() {
    let graph = DirectedGraph::from_edges(3, &[(0, 1, OrderedFloat(7.0))]);
    let mut engine = Bmssp::new(&graph, 0);
    engine.solve();

    assert_eq!(engine.distance(0), Some(OrderedFloat(0.0)));
    assert_eq!(engine.distance(1), Some(OrderedFloat(7.0)));
    assert_eq!(engine.distance(2), None);
}
