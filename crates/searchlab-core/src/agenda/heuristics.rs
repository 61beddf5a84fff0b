use searchlab_graph::{Graph, NodeKey};

use crate::{
    agenda::{search::search, strategy::Strategy},
    error::SearchError,
};

/// Whether the heuristic towards `goal` never overestimates the true distance.
///
/// True distances come from branch-and-bound with an extended set. Nodes that
/// cannot reach the goal put no constraint on the heuristic.
pub fn is_admissible(graph: &Graph, goal: NodeKey) -> Result<bool, SearchError> {
    let shortest = Strategy::BranchAndBoundWithExtendedSet.config();

    for node in graph.nodes() {
        let estimate = graph.get_heuristic_value(node, goal)?;
        let Some(path) = search(graph, node, goal, &shortest)? else {
            continue;
        };
        let distance = graph.path_length(&path)?;
        if estimate > distance {
            tracing::debug!(
                node = graph.node_name(node),
                estimate,
                distance,
                "heuristic overestimates"
            );
            return Ok(false);
        }
    }

    Ok(true)
}

/// Whether `h(u) <= h(v) + w(u, v)` holds across every edge, in both directions.
pub fn is_consistent(graph: &Graph, goal: NodeKey) -> Result<bool, SearchError> {
    for node in graph.nodes() {
        let here = graph.get_heuristic_value(node, goal)?;
        for neighbor in graph.get_neighbors(node)? {
            let there = graph.get_heuristic_value(*neighbor, goal)?;
            let step = graph.get_edge(node, *neighbor)?.length;
            if here > there + step {
                tracing::debug!(
                    from = graph.node_name(node),
                    to = graph.node_name(*neighbor),
                    "heuristic violates the triangle inequality"
                );
                return Ok(false);
            }
        }
    }

    Ok(true)
}
