use std::{collections::HashMap, rc::Rc};

use searchlab_core::GameState;

use crate::toy_tree::{GameTreeSpec, TreeSpecError};

const CLASSIC_TREE_YAML: &str = include_str!("../../fixtures/classic.yaml");

/// Compiled position in a toy game tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ToyNode {
    name: String,
    score: Option<f64>,
    heuristic: f64,
    children: Vec<usize>,
}

impl ToyNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Leaf score, `None` for interior nodes.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Static rating; 0 when none was declared.
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }
}

/// Validated game tree with nodes stored by index.
#[derive(Debug, Clone, PartialEq)]
pub struct ToyTree {
    nodes: Vec<ToyNode>,
    root: usize,
}

impl ToyTree {
    pub fn from_spec(spec: &GameTreeSpec) -> Result<Self, TreeSpecError> {
        spec.validate()?;

        let index: HashMap<&str, usize> = spec
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.name.as_str(), i))
            .collect();
        // validate() guarantees every child name resolves.
        let nodes: Vec<ToyNode> = spec
            .nodes
            .iter()
            .map(|node| ToyNode {
                name: node.name.clone(),
                score: node.score,
                heuristic: node.heuristic.unwrap_or(0.0),
                children: node
                    .children
                    .iter()
                    .filter_map(|child| index.get(child.as_str()).copied())
                    .collect(),
            })
            .collect();
        let root = index
            .get(spec.root.as_str())
            .copied()
            .ok_or_else(|| TreeSpecError::UnknownRoot {
                root: spec.root.clone(),
            })?;

        tracing::debug!(
            nodes = nodes.len(),
            root = %spec.root,
            "compiled toy game tree"
        );
        Ok(Self { nodes, root })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, name: &str) -> Option<&ToyNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Game state at the root, sharing this tree.
    pub fn into_root(self) -> ToyState {
        let index = self.root;
        ToyState {
            tree: Rc::new(self),
            index,
        }
    }
}

/// Handle to one node of a shared toy tree.
#[derive(Debug, Clone)]
pub struct ToyState {
    tree: Rc<ToyTree>,
    index: usize,
}

impl ToyState {
    pub fn name(&self) -> &str {
        self.snapshot().name()
    }
}

impl PartialEq for ToyState {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && (Rc::ptr_eq(&self.tree, &other.tree) || self.tree == other.tree)
    }
}

impl GameState for ToyState {
    type Snapshot = ToyNode;

    fn snapshot(&self) -> &ToyNode {
        &self.tree.nodes[self.index]
    }

    fn is_game_over(&self) -> bool {
        self.snapshot().score.is_some()
    }

    fn next_states(&self) -> Vec<Self> {
        self.snapshot()
            .children
            .iter()
            .map(|index| ToyState {
                tree: Rc::clone(&self.tree),
                index: *index,
            })
            .collect()
    }

    /// Leaf scores are absolute; the perspective is ignored.
    fn endgame_score(&self, _maximize: bool) -> f64 {
        self.snapshot().score.unwrap_or(0.0)
    }
}

/// Heuristic that reads each node's static rating.
pub fn toy_heuristic(node: &ToyNode, _maximize: bool) -> f64 {
    node.heuristic
}

/// Three-ply textbook tree: minimax value 3, two of B's leaves prune.
pub fn classic_tree() -> Result<ToyState, TreeSpecError> {
    let spec: GameTreeSpec = serde_yaml::from_str(CLASSIC_TREE_YAML)?;
    spec.compile()
}
