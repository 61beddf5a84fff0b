
use searchlab_graph::{Graph, GraphBuilder};

/// Heuristic values towards `G`, in the order S, A, B, C, G.
pub(super) const ROUTE_HEURISTIC: [f64; 5] = [6.0, 5.0, 3.0, 2.0, 0.0];

/// Five-node route map; the shortest S -> G path is S-A-B-C-G with length 8.
pub(super) fn route_graph(heuristic: [f64; 5]) -> Graph {
    let mut builder = GraphBuilder::new();
    builder
        .add_nodes(["S", "A", "B", "C", "G"])
        .add_edge("S", "A", 2.0)
        .add_edge("S", "B", 5.0)
        .add_edge("A", "B", 2.0)
        .add_edge("A", "C", 4.0)
        .add_edge("B", "C", 1.0)
        .add_edge("B", "G", 6.0)
        .add_edge("C", "G", 3.0);
    for (node, value) in ["S", "A", "B", "C", "G"].iter().zip(heuristic) {
        builder.set_heuristic("G", *node, value);
    }
    builder.compile().expect("route graph is valid")
}
