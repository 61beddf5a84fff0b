use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::toy_tree::{ToyState, ToyTree, TreeSpecError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// Serializable game tree used for YAML IO and validation.
pub struct GameTreeSpec {
    /// Schema version for future compatibility checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Name of the starting position.
    pub root: String,
    pub nodes: Vec<ToyNodeSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One position. Leaves carry a `score`; interior nodes list `children`.
pub struct ToyNodeSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Static rating used when a depth limit stops search here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl GameTreeSpec {
    /// Check that the nodes form a single tree rooted at `root`.
    ///
    /// With one parent per node and a parentless root, any cycle is cut off
    /// from the root and reported as unreachable.
    pub fn validate(&self) -> Result<(), TreeSpecError> {
        if self.nodes.is_empty() {
            return Err(TreeSpecError::EmptyTree);
        }

        let mut by_name: HashMap<&str, &ToyNodeSpec> = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if node.name.trim().is_empty() {
                return Err(TreeSpecError::BlankNodeName);
            }
            if by_name.insert(node.name.as_str(), node).is_some() {
                return Err(TreeSpecError::DuplicateNode {
                    node: node.name.clone(),
                });
            }
            for value in [node.score, node.heuristic].into_iter().flatten() {
                if !value.is_finite() {
                    return Err(TreeSpecError::InvalidValue {
                        node: node.name.clone(),
                        value,
                    });
                }
            }
            match (node.score, node.children.is_empty()) {
                (None, true) => {
                    return Err(TreeSpecError::LeafWithoutScore {
                        node: node.name.clone(),
                    });
                }
                (Some(_), false) => {
                    return Err(TreeSpecError::ScoredInterior {
                        node: node.name.clone(),
                    });
                }
                _ => {}
            }
        }

        if !by_name.contains_key(self.root.as_str()) {
            return Err(TreeSpecError::UnknownRoot {
                root: self.root.clone(),
            });
        }

        let mut has_parent = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            for child in &node.children {
                if !by_name.contains_key(child.as_str()) {
                    return Err(TreeSpecError::UnknownChild {
                        parent: node.name.clone(),
                        child: child.clone(),
                    });
                }
                if *child == self.root {
                    return Err(TreeSpecError::RootHasParent {
                        root: self.root.clone(),
                        parent: node.name.clone(),
                    });
                }
                if !has_parent.insert(child.as_str()) {
                    return Err(TreeSpecError::MultipleParents {
                        node: child.clone(),
                    });
                }
            }
        }

        let mut reached = HashSet::with_capacity(self.nodes.len());
        let mut stack = vec![self.root.as_str()];
        while let Some(name) = stack.pop() {
            if !reached.insert(name) {
                continue;
            }
            if let Some(node) = by_name.get(name) {
                stack.extend(node.children.iter().map(String::as_str));
            }
        }
        if let Some(node) = self
            .nodes
            .iter()
            .find(|node| !reached.contains(node.name.as_str()))
        {
            return Err(TreeSpecError::Unreachable {
                node: node.name.clone(),
            });
        }

        Ok(())
    }

    /// Compile into a game state positioned at the root.
    pub fn compile(&self) -> Result<ToyState, TreeSpecError> {
        Ok(ToyTree::from_spec(self)?.into_root())
    }
}
