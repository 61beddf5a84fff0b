use searchlab_core::{
    GameState, alphabeta, always_zero, dfs_maximizing, minimax_search, progressive_deepening,
};

use crate::{GameTreeSpec, ToyState, TreeSpecError, classic_tree, toy_heuristic};

fn names(path: &[ToyState]) -> Vec<&str> {
    path.iter().map(ToyState::name).collect()
}

fn parse(yaml: &str) -> GameTreeSpec {
    serde_yaml::from_str(yaml).expect("test yaml should parse")
}

#[test]
fn classic_tree_compiles() {
    let root = classic_tree().expect("fixture should compile");

    assert_eq!(root.name(), "root");
    assert!(!root.is_game_over());
    let children: Vec<String> = root
        .next_states()
        .iter()
        .map(|child| child.name().to_string())
        .collect();
    assert_eq!(children, ["A", "B", "C"]);
}

#[test]
fn classic_tree_searches() {
    let root = classic_tree().expect("fixture should compile");

    let full = minimax_search(&root, always_zero, None, true);
    assert_eq!(names(&full.path), ["root", "A", "A1"]);
    assert_eq!(full.score, 3.0);
    assert_eq!(full.evaluations, 9);

    let pruned = alphabeta(&root, always_zero, None, true);
    assert_eq!(pruned.score, 3.0);
    assert_eq!(pruned.evaluations, 7);

    let best_leaf = dfs_maximizing(&root);
    assert_eq!(names(&best_leaf.path), ["root", "C", "C1"]);
    assert_eq!(best_leaf.score, 14.0);
}

#[test]
fn minimizing_root_picks_the_weakest_maximum() {
    let root = classic_tree().expect("fixture should compile");
    let result = minimax_search(&root, always_zero, None, false);

    assert_eq!(names(&result.path), ["root", "B", "B3"]);
    assert_eq!(result.score, 6.0);
}

#[test]
fn heuristic_ratings_drive_shallow_rounds() {
    let root = classic_tree().expect("fixture should compile");

    let shallow = minimax_search(&root, toy_heuristic, Some(1), true);
    assert_eq!(names(&shallow.path), ["root", "C"]);
    assert_eq!(shallow.score, 6.0);
    assert_eq!(shallow.evaluations, 3);

    let anytime = progressive_deepening(&root, toy_heuristic, 2, true);
    let scores: Vec<f64> = anytime.history().iter().map(|round| round.score).collect();
    assert_eq!(scores, [6.0, 3.0]);
    assert_eq!(anytime.total_evaluations(), 10);
}

#[test]
fn spec_round_trips_through_yaml() {
    let yaml = r#"
root: top
nodes:
  - { name: top, children: [left, right] }
  - { name: left, score: -2 }
  - { name: right, score: 5, heuristic: 1 }
"#;
    let spec = parse(yaml);
    let text = serde_yaml::to_string(&spec).expect("spec serializes");
    let again = parse(&text);

    assert_eq!(again.nodes, spec.nodes);
    let root = again.compile().expect("tree is valid");
    assert_eq!(minimax_search(&root, always_zero, None, true).score, 5.0);
}

#[test]
fn invalid_trees_are_rejected() {
    let cases = [
        ("root: a\nnodes: []\n", "EmptyTree"),
        (
            "root: a\nnodes:\n  - { name: a, score: 1 }\n  - { name: a, score: 2 }\n",
            "DuplicateNode",
        ),
        ("root: z\nnodes:\n  - { name: a, score: 1 }\n", "UnknownRoot"),
        (
            "root: a\nnodes:\n  - { name: a, children: [b] }\n",
            "UnknownChild",
        ),
        ("root: a\nnodes:\n  - { name: a }\n", "LeafWithoutScore"),
        (
            "root: a\nnodes:\n  - { name: a, score: 1, children: [b] }\n  - { name: b, score: 2 }\n",
            "ScoredInterior",
        ),
        (
            "root: a\nnodes:\n  - { name: a, children: [b, b] }\n  - { name: b, score: 2 }\n",
            "MultipleParents",
        ),
        (
            "root: a\nnodes:\n  - { name: a, children: [b] }\n  - { name: b, children: [a] }\n",
            "RootHasParent",
        ),
        (
            "root: a\nnodes:\n  - { name: a, children: [b] }\n  - { name: b, score: 1 }\n  - { name: c, children: [d] }\n  - { name: d, children: [c] }\n",
            "Unreachable",
        ),
    ];

    for (yaml, expected) in cases {
        let err = parse(yaml).compile().expect_err("tree should be rejected");
        let matched = match err {
            TreeSpecError::EmptyTree => "EmptyTree",
            TreeSpecError::DuplicateNode { .. } => "DuplicateNode",
            TreeSpecError::UnknownRoot { .. } => "UnknownRoot",
            TreeSpecError::UnknownChild { .. } => "UnknownChild",
            TreeSpecError::LeafWithoutScore { .. } => "LeafWithoutScore",
            TreeSpecError::ScoredInterior { .. } => "ScoredInterior",
            TreeSpecError::MultipleParents { .. } => "MultipleParents",
            TreeSpecError::RootHasParent { .. } => "RootHasParent",
            TreeSpecError::Unreachable { .. } => "Unreachable",
            other => panic!("unexpected error: {other}"),
        };
        assert_eq!(matched, expected, "{yaml}");
    }
}

#[test]
fn cycles_are_reported_as_unreachable() {
    let yaml = "root: a\nnodes:\n  - { name: a, children: [b] }\n  - { name: b, score: 1 }\n  - { name: c, children: [d] }\n  - { name: d, children: [c] }\n";
    let err = parse(yaml).compile().expect_err("cycle should be rejected");

    assert!(matches!(err, TreeSpecError::Unreachable { node } if node == "c"));
}
