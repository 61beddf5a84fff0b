mod minimax_tests;

use std::rc::Rc;

use crate::GameState;

#[derive(Debug)]
pub(super) struct TestNode {
    pub name: &'static str,
    pub score: Option<f64>,
    pub heuristic: f64,
    children: Vec<usize>,
}

#[derive(Debug)]
struct TestTree {
    nodes: Vec<TestNode>,
}

/// Handle into a fixed test game tree. Nodes with a score are game over.
#[derive(Debug, Clone)]
pub(super) struct TestState {
    tree: Rc<TestTree>,
    index: usize,
}

impl TestState {
    pub fn name(&self) -> &'static str {
        self.tree.nodes[self.index].name
    }
}

impl PartialEq for TestState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.index == other.index
    }
}

impl GameState for TestState {
    type Snapshot = TestNode;

    fn snapshot(&self) -> &TestNode {
        &self.tree.nodes[self.index]
    }

    fn is_game_over(&self) -> bool {
        self.snapshot().score.is_some()
    }

    fn next_states(&self) -> Vec<Self> {
        self.snapshot()
            .children
            .iter()
            .map(|index| TestState {
                tree: Rc::clone(&self.tree),
                index: *index,
            })
            .collect()
    }

    fn endgame_score(&self, _maximize: bool) -> f64 {
        self.snapshot().score.unwrap_or(0.0)
    }
}

/// Rows of `(name, leaf score, heuristic, children)`; the first row is the root.
type Row = (&'static str, Option<f64>, f64, &'static [&'static str]);

pub(super) fn build(rows: &[Row]) -> TestState {
    let index_of = |name: &str| {
        rows.iter()
            .position(|row| row.0 == name)
            .unwrap_or_else(|| panic!("unknown test node {name}"))
    };
    let nodes = rows
        .iter()
        .map(|(name, score, heuristic, children)| TestNode {
            name: *name,
            score: *score,
            heuristic: *heuristic,
            children: children.iter().map(|child| index_of(child)).collect(),
        })
        .collect();

    TestState {
        tree: Rc::new(TestTree { nodes }),
        index: 0,
    }
}

/// Textbook three-ply tree: minimax value 3 via A, and B's last two leaves prune.
pub(super) fn classic_tree() -> TestState {
    build(&[
        ("root", None, 0.0, &["A", "B", "C"]),
        ("A", None, 0.0, &["A1", "A2", "A3"]),
        ("B", None, 0.0, &["B1", "B2", "B3"]),
        ("C", None, 0.0, &["C1", "C2", "C3"]),
        ("A1", Some(3.0), 0.0, &[]),
        ("A2", Some(12.0), 0.0, &[]),
        ("A3", Some(8.0), 0.0, &[]),
        ("B1", Some(2.0), 0.0, &[]),
        ("B2", Some(4.0), 0.0, &[]),
        ("B3", Some(6.0), 0.0, &[]),
        ("C1", Some(14.0), 0.0, &[]),
        ("C2", Some(5.0), 0.0, &[]),
        ("C3", Some(2.0), 0.0, &[]),
    ])
}

/// Binary four-level tree with heuristic ratings on interior nodes.
pub(super) fn deep_tree() -> TestState {
    build(&[
        ("root", None, 0.0, &["X", "Y"]),
        ("X", None, 5.0, &["X1", "X2"]),
        ("Y", None, 6.0, &["Y1", "Y2"]),
        ("X1", None, 3.0, &["X1a", "X1b"]),
        ("X2", None, 8.0, &["X2a", "X2b"]),
        ("Y1", None, 4.0, &["Y1a", "Y1b"]),
        ("Y2", None, 2.0, &["Y2a", "Y2b"]),
        ("X1a", Some(4.0), 0.0, &[]),
        ("X1b", Some(7.0), 0.0, &[]),
        ("X2a", Some(1.0), 0.0, &[]),
        ("X2b", Some(9.0), 0.0, &[]),
        ("Y1a", Some(6.0), 0.0, &[]),
        ("Y1b", Some(2.0), 0.0, &[]),
        ("Y2a", Some(8.0), 0.0, &[]),
        ("Y2b", Some(3.0), 0.0, &[]),
    ])
}

pub(super) fn static_heuristic(node: &TestNode, _maximize: bool) -> f64 {
    node.heuristic
}

pub(super) fn names(path: &[TestState]) -> Vec<&'static str> {
    path.iter().map(TestState::name).collect()
}
