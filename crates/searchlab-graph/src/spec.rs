use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{Graph, GraphError};

/// Schema version written by `GraphBuilder` and `save_yaml`.
pub const GRAPH_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// Serializable graph schema used for YAML IO and validation.
pub struct GraphSpec {
    /// Schema version; absent means the current one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Unique node names.
    pub nodes: Vec<String>,
    /// Undirected weighted edges.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    /// Heuristic table keyed by goal, then by node.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub heuristic: BTreeMap<String, BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One undirected edge declaration.
pub struct EdgeSpec {
    pub a: String,
    pub b: String,
    pub length: f64,
}

impl GraphSpec {
    /// Validate names, edges, and heuristic entries.
    pub fn validate(&self) -> Result<(), GraphError> {
        if let Some(found) = self.version.filter(|v| *v != GRAPH_SCHEMA_VERSION) {
            return Err(GraphError::UnsupportedVersion { found });
        }
        if self.nodes.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut names = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if node.trim().is_empty() {
                return Err(GraphError::BlankNodeName);
            }
            if !names.insert(node.as_str()) {
                return Err(GraphError::DuplicateNode { node: node.clone() });
            }
        }

        let known = |name: &str| -> Result<(), GraphError> {
            if names.contains(name) {
                Ok(())
            } else {
                Err(GraphError::UnknownNode {
                    node: name.to_string(),
                })
            }
        };

        // Undirected: (a, b) and (b, a) are the same edge.
        let mut seen_edges = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            known(&edge.a)?;
            known(&edge.b)?;

            if edge.a == edge.b {
                return Err(GraphError::SelfLoop {
                    node: edge.a.clone(),
                });
            }

            if !edge.length.is_finite() || edge.length < 0.0 {
                return Err(GraphError::InvalidLength {
                    a: edge.a.clone(),
                    b: edge.b.clone(),
                    value: edge.length,
                });
            }

            let pair = if edge.a < edge.b {
                (edge.a.as_str(), edge.b.as_str())
            } else {
                (edge.b.as_str(), edge.a.as_str())
            };
            if !seen_edges.insert(pair) {
                return Err(GraphError::DuplicateEdge {
                    a: edge.a.clone(),
                    b: edge.b.clone(),
                });
            }
        }

        for (goal, table) in &self.heuristic {
            if !names.contains(goal.as_str()) {
                return Err(GraphError::UnknownHeuristicGoal { goal: goal.clone() });
            }
            for (node, value) in table {
                if !names.contains(node.as_str()) {
                    return Err(GraphError::UnknownHeuristicNode {
                        goal: goal.clone(),
                        node: node.clone(),
                    });
                }
                if !value.is_finite() {
                    return Err(GraphError::InvalidHeuristic {
                        goal: goal.clone(),
                        node: node.clone(),
                        value: *value,
                    });
                }
            }
        }

        Ok(())
    }

    /// Compile this spec into the runtime representation.
    pub fn compile(&self) -> Result<Graph, GraphError> {
        Graph::from_spec(self)
    }
}
