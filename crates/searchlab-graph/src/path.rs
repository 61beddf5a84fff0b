use std::collections::HashSet;

use crate::{Graph, GraphError, NodeKey, sort_by_cost};

/// An ordered walk through a graph.
///
/// The derived ordering compares node sequences lexicographically, which is
/// the tie-break every search strategy falls back on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<NodeKey>);

impl Path {
    /// A single-node path.
    pub fn start(node: NodeKey) -> Self {
        Path(vec![node])
    }

    pub fn nodes(&self) -> &[NodeKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Final node of the path.
    pub fn last(&self) -> Option<NodeKey> {
        self.0.last().copied()
    }

    pub fn contains(&self, node: NodeKey) -> bool {
        self.0.contains(&node)
    }

    /// Copy of this path with `node` appended.
    pub fn extended(&self, node: NodeKey) -> Path {
        let mut nodes = Vec::with_capacity(self.0.len() + 1);
        nodes.extend_from_slice(&self.0);
        nodes.push(node);
        Path(nodes)
    }

    /// Whether any node is visited more than once.
    pub fn has_loops(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().any(|node| !seen.insert(*node))
    }
}

impl From<Vec<NodeKey>> for Path {
    fn from(nodes: Vec<NodeKey>) -> Self {
        Path(nodes)
    }
}

impl Graph {
    /// Sum of edge lengths along `path`; zero for paths shorter than two nodes.
    pub fn path_length(&self, path: &Path) -> Result<f64, GraphError> {
        path.nodes()
            .windows(2)
            .map(|pair| self.get_edge(pair[0], pair[1]).map(|edge| edge.length))
            .sum()
    }

    /// All loop-free one-node extensions of `path`, in lexicographic order.
    pub fn extensions(&self, path: &Path) -> Result<Vec<Path>, GraphError> {
        let last = path.last().ok_or(GraphError::EmptyPath)?;
        // Neighbors are stored ascending, so the extensions come out sorted.
        Ok(self
            .get_neighbors(last)?
            .iter()
            .filter(|next| !path.contains(**next))
            .map(|next| path.extended(*next))
            .collect())
    }

    /// Heuristic estimate from the final node of `path` to `goal`.
    pub fn path_heuristic(&self, path: &Path, goal: NodeKey) -> Result<f64, GraphError> {
        let last = path.last().ok_or(GraphError::EmptyPath)?;
        self.get_heuristic_value(last, goal)
    }

    /// Order paths by the heuristic of their final node, ties broken lexicographically.
    ///
    /// Same ordering as [`Graph::sort_by_heuristic`], lifted to whole paths.
    pub fn sort_paths_by_heuristic(
        &self,
        goal: NodeKey,
        paths: &mut Vec<Path>,
    ) -> Result<(), GraphError> {
        sort_by_cost(paths, |path| self.path_heuristic(path, goal))
    }

    /// Resolve a sequence of node names into a path.
    pub fn path_from_names<S: AsRef<str>>(&self, names: &[S]) -> Result<Path, GraphError> {
        names
            .iter()
            .map(|name| self.require_node(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Path)
    }

    /// Render a path as node names.
    pub fn path_names(&self, path: &Path) -> Vec<&str> {
        path.nodes()
            .iter()
            .filter_map(|node| self.node_name(*node))
            .collect()
    }
}
