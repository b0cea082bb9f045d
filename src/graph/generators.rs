use ordered_float::OrderedFloat;
use rand::prelude::*;

use crate::graph::digraph::EdgeWeightedDigraph;
use crate::graph::edge::DirectedEdge;

/// Generates a random digraph with `vertices` vertices and `edges` edges
///
/// Endpoints are drawn uniformly from the vertex set, so parallel edges and
/// self-loops can occur; weights are uniform in [0, 1).
pub fn random_digraph(vertices: usize, edges: usize) -> EdgeWeightedDigraph<OrderedFloat<f64>> {
    random_digraph_with_rng(vertices, edges, &mut rand::thread_rng())
}

/// Same as [`random_digraph`], drawing from a caller-supplied generator
///
/// Seed the generator to make the resulting digraph reproducible.
pub fn random_digraph_with_rng<R>(
    vertices: usize,
    edges: usize,
    rng: &mut R,
) -> EdgeWeightedDigraph<OrderedFloat<f64>>
where
    R: Rng + ?Sized,
{
    assert!(vertices > 0 || edges == 0, "cannot add edges to an empty digraph");

    let mut graph = EdgeWeightedDigraph::new(vertices);
    for _ in 0..edges {
        let from = rng.gen_range(0..vertices);
        let to = rng.gen_range(0..vertices);
        let weight = OrderedFloat(rng.gen::<f64>());
        graph
            .add_edge(DirectedEdge::new(from, to, weight))
            .expect("endpoints are drawn from the vertex range");
    }
    graph
}
