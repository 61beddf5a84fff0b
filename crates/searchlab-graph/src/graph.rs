use std::collections::HashMap;

use crate::{GraphError, GraphSpec};

/// Dense index for nodes in a compiled graph.
///
/// Keys are handed out in ascending name order, so ordering keys orders
/// node names and ordering key sequences orders paths lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey(usize);

impl NodeKey {
    /// Return the underlying node index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeKey {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A resolved undirected edge.
pub struct Edge {
    pub a: NodeKey,
    pub b: NodeKey,
    pub length: f64,
}

#[derive(Debug, Clone)]
/// Runtime form of a graph with resolved names, sorted adjacency, and heuristic lookups.
pub struct Graph {
    names: Vec<String>,
    name_to_key: HashMap<String, NodeKey>,
    neighbors: Vec<Vec<NodeKey>>,
    lengths: HashMap<(NodeKey, NodeKey), f64>,
    heuristic: HashMap<(NodeKey, NodeKey), f64>,
}

impl Graph {
    /// Compile and validate a spec into a fast runtime representation.
    pub(crate) fn from_spec(spec: &GraphSpec) -> Result<Self, GraphError> {
        spec.validate()?;

        let mut names = spec.nodes.clone();
        names.sort();

        let name_to_key: HashMap<String, NodeKey> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), NodeKey::from(idx)))
            .collect();

        let resolve = |name: &str| {
            name_to_key
                .get(name)
                .copied()
                .ok_or_else(|| GraphError::UnknownNode {
                    node: name.to_string(),
                })
        };

        let mut neighbors = vec![Vec::new(); names.len()];
        let mut lengths = HashMap::with_capacity(spec.edges.len() * 2);
        for edge in &spec.edges {
            let a = resolve(&edge.a)?;
            let b = resolve(&edge.b)?;
            neighbors[a.index()].push(b);
            neighbors[b.index()].push(a);
            lengths.insert((a, b), edge.length);
            lengths.insert((b, a), edge.length);
        }
        for list in &mut neighbors {
            list.sort();
        }

        let mut heuristic = HashMap::new();
        for (goal, table) in &spec.heuristic {
            let goal = resolve(goal)?;
            for (node, value) in table {
                heuristic.insert((goal, resolve(node)?), *value);
            }
        }

        tracing::debug!(
            nodes = names.len(),
            edges = spec.edges.len(),
            "compiled graph"
        );

        Ok(Self {
            names,
            name_to_key,
            neighbors,
            lengths,
            heuristic,
        })
    }

    /// Return the number of nodes.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Iterate all node keys in ascending name order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeKey> + '_ {
        (0..self.names.len()).map(NodeKey::from)
    }

    /// Convert a node name into its key.
    pub fn node_key(&self, name: &str) -> Option<NodeKey> {
        self.name_to_key.get(name).copied()
    }

    /// Convert a node name into its key, failing on unknown names.
    pub fn require_node(&self, name: &str) -> Result<NodeKey, GraphError> {
        self.node_key(name).ok_or_else(|| GraphError::UnknownNode {
            node: name.to_string(),
        })
    }

    /// Convert a node key back to its name.
    pub fn node_name(&self, key: NodeKey) -> Option<&str> {
        self.names.get(key.index()).map(String::as_str)
    }

    fn name_or_index(&self, key: NodeKey) -> String {
        self.node_name(key)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("#{}", key.index()))
    }

    /// Neighbors of `node`, ascending.
    pub fn get_neighbors(&self, node: NodeKey) -> Result<&[NodeKey], GraphError> {
        self.neighbors
            .get(node.index())
            .map(Vec::as_slice)
            .ok_or(GraphError::UnknownNodeKey { key: node.index() })
    }

    /// Look up the edge joining `a` and `b`.
    pub fn get_edge(&self, a: NodeKey, b: NodeKey) -> Result<Edge, GraphError> {
        self.lengths
            .get(&(a, b))
            .map(|length| Edge {
                a,
                b,
                length: *length,
            })
            .ok_or_else(|| GraphError::MissingEdge {
                a: self.name_or_index(a),
                b: self.name_or_index(b),
            })
    }

    /// Whether `a` and `b` are joined by an edge.
    pub fn are_connected(&self, a: NodeKey, b: NodeKey) -> bool {
        self.lengths.contains_key(&(a, b))
    }

    /// Heuristic estimate of the remaining cost from `node` to `goal`.
    pub fn get_heuristic_value(&self, node: NodeKey, goal: NodeKey) -> Result<f64, GraphError> {
        self.heuristic
            .get(&(goal, node))
            .copied()
            .ok_or_else(|| GraphError::MissingHeuristic {
                goal: self.name_or_index(goal),
                node: self.name_or_index(node),
            })
    }

    /// Order nodes best-to-worst by heuristic towards `goal`, ties broken by name.
    pub fn sort_by_heuristic(
        &self,
        goal: NodeKey,
        nodes: &[NodeKey],
    ) -> Result<Vec<NodeKey>, GraphError> {
        let mut sorted = nodes.to_vec();
        sort_by_cost(&mut sorted, |node| self.get_heuristic_value(*node, goal))?;
        Ok(sorted)
    }
}

/// Sort `items` by ascending cost, falling back to the items' own order on ties.
///
/// Costs are compared with `f64::total_cmp`. The first failing cost aborts the
/// sort and leaves `items` empty.
pub fn sort_by_cost<T, F>(items: &mut Vec<T>, mut cost: F) -> Result<(), GraphError>
where
    T: Ord,
    F: FnMut(&T) -> Result<f64, GraphError>,
{
    let mut keyed = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        keyed.push((cost(&item)?, item));
    }
    keyed.sort_by(|(ka, a), (kb, b)| ka.total_cmp(kb).then_with(|| a.cmp(b)));
    items.extend(keyed.into_iter().map(|(_, item)| item));
    Ok(())
}
