use super::{build, classic_tree, deep_tree, names, static_heuristic};
use crate::{
    alphabeta, always_zero, dfs_maximizing, minimax_endgame_search, minimax_search,
    minimax_search_alphabeta,
};

#[test]
fn dfs_maximizing_finds_highest_leaf() {
    let result = dfs_maximizing(&classic_tree());

    assert_eq!(names(&result.path), ["root", "C", "C1"]);
    assert_eq!(result.score, 14.0);
    assert_eq!(result.evaluations, 9);
}

#[test]
fn dfs_maximizing_keeps_first_leaf_on_ties() {
    let tree = build(&[
        ("root", None, 0.0, &["L", "R"]),
        ("L", Some(5.0), 0.0, &[]),
        ("R", Some(5.0), 0.0, &[]),
    ]);
    let result = dfs_maximizing(&tree);

    assert_eq!(names(&result.path), ["root", "L"]);
    assert_eq!(result.evaluations, 2);
}

#[test]
fn terminal_root_is_a_single_evaluation() {
    let leaf = build(&[("only", Some(-4.0), 0.0, &[])]);

    let minimax = minimax_endgame_search(&leaf, true);
    assert_eq!(names(&minimax.path), ["only"]);
    assert_eq!(minimax.score, -4.0);
    assert_eq!(minimax.evaluations, 1);

    let dfs = dfs_maximizing(&leaf);
    assert_eq!(dfs.score, -4.0);
    assert_eq!(dfs.evaluations, 1);
}

#[test]
fn minimax_picks_the_textbook_line() {
    let result = minimax_endgame_search(&classic_tree(), true);

    assert_eq!(names(&result.path), ["root", "A", "A1"]);
    assert_eq!(result.score, 3.0);
    assert_eq!(result.evaluations, 9);
    assert_eq!(result.best_move().map(|s| s.name()), Some("A"));
    assert_eq!(result.depth(), 2);
}

#[test]
fn minimax_breaks_ties_by_generation_order() {
    let tree = build(&[
        ("root", None, 0.0, &["L", "R"]),
        ("L", Some(1.0), 0.0, &[]),
        ("R", Some(1.0), 0.0, &[]),
    ]);

    assert_eq!(names(&minimax_endgame_search(&tree, true).path), ["root", "L"]);
    assert_eq!(names(&minimax_endgame_search(&tree, false).path), ["root", "L"]);
    assert_eq!(names(&alphabeta(&tree, always_zero, None, true).path), ["root", "L"]);
}

#[test]
fn minimizing_root_flips_every_level() {
    let result = minimax_endgame_search(&deep_tree(), false);

    assert_eq!(names(&result.path), ["root", "Y", "Y2", "Y2b"]);
    assert_eq!(result.score, 3.0);
    assert_eq!(result.evaluations, 8);
}

#[test]
fn depth_limit_switches_to_heuristic() {
    let tree = deep_tree();

    let one = minimax_search(&tree, static_heuristic, Some(1), true);
    assert_eq!(names(&one.path), ["root", "Y"]);
    assert_eq!((one.score, one.evaluations), (6.0, 2));

    let two = minimax_search(&tree, static_heuristic, Some(2), true);
    assert_eq!(names(&two.path), ["root", "X", "X1"]);
    assert_eq!((two.score, two.evaluations), (3.0, 4));

    let three = minimax_search(&tree, static_heuristic, Some(3), true);
    assert_eq!(names(&three.path), ["root", "X", "X1", "X1b"]);
    assert_eq!((three.score, three.evaluations), (7.0, 8));

    // Terminal positions end the search before a deeper limit matters.
    let unlimited = minimax_search(&tree, static_heuristic, None, true);
    assert_eq!(unlimited, three);
}

#[test]
fn depth_zero_rates_the_root_itself() {
    let tree = deep_tree();
    let result = minimax_search(&tree, |_node: &super::TestNode, _| 42.0, Some(0), true);

    assert_eq!(names(&result.path), ["root"]);
    assert_eq!((result.score, result.evaluations), (42.0, 1));
}

#[test]
fn alphabeta_matches_minimax_and_prunes() {
    let classic = classic_tree();
    let plain = minimax_endgame_search(&classic, true);
    let pruned = alphabeta(&classic, always_zero, None, true);

    assert_eq!(pruned.score, plain.score);
    assert_eq!(names(&pruned.path), ["root", "A", "A1"]);
    assert_eq!(pruned.evaluations, 7);
    assert!(pruned.evaluations < plain.evaluations);

    let deep = deep_tree();
    let plain = minimax_search(&deep, static_heuristic, None, true);
    let pruned = alphabeta(&deep, static_heuristic, None, true);
    assert_eq!(pruned.score, plain.score);
    assert_eq!(names(&pruned.path), names(&plain.path));
    assert_eq!((plain.evaluations, pruned.evaluations), (8, 6));
}

#[test]
fn alphabeta_agrees_with_minimax_at_every_depth() {
    let tree = deep_tree();

    for maximize in [true, false] {
        for depth in [Some(0), Some(1), Some(2), Some(3), Some(4), None] {
            let plain = minimax_search(&tree, static_heuristic, depth, maximize);
            let pruned = alphabeta(&tree, static_heuristic, depth, maximize);
            assert_eq!(pruned.score, plain.score, "depth {depth:?} maximize {maximize}");
            assert!(pruned.evaluations <= plain.evaluations);
        }
    }
}

#[test]
fn narrow_window_fails_hard_at_its_bound() {
    let tree = classic_tree();
    // A's value (3) lies above the window, so A reports the upper bound and
    // the root stops after its first child.
    let result = minimax_search_alphabeta(&tree, 2.0, 2.5, always_zero, None, true);

    assert_eq!(result.score, 2.5);
    assert_eq!(result.evaluations, 3);
    assert_eq!(names(&result.path), ["root", "A"]);
    // The cut-off leaves the path ending on an interior node.
    assert_eq!(result.leaf_state().map(|state| state.name()), Some("A"));
}

#[test]
fn stuck_state_is_rated_once() {
    let tree = build(&[
        ("root", None, 0.0, &["stuck", "B"]),
        ("stuck", None, 5.0, &[]),
        ("B", Some(3.0), 0.0, &[]),
    ]);

    let plain = minimax_search(&tree, static_heuristic, None, true);
    assert_eq!(names(&plain.path), ["root", "stuck"]);
    assert_eq!((plain.score, plain.evaluations), (5.0, 2));

    let pruned = alphabeta(&tree, static_heuristic, None, true);
    assert_eq!((pruned.score, pruned.evaluations), (5.0, 2));

    let dfs = dfs_maximizing(&tree);
    assert_eq!(names(&dfs.path), ["root", "B"]);
    assert_eq!(dfs.evaluations, 2);
}

#[test]
fn repeated_searches_are_identical() {
    let tree = deep_tree();

    assert_eq!(
        alphabeta(&tree, static_heuristic, Some(2), true),
        alphabeta(&tree, static_heuristic, Some(2), true)
    );
    assert_eq!(dfs_maximizing(&tree), dfs_maximizing(&tree));
}

#[test]
fn snapshot_renders_labels_and_counts() {
    let result = alphabeta(&classic_tree(), always_zero, None, true);
    let snapshot = result.snapshot(|state| state.name().to_string());
    let json = snapshot.to_json().expect("snapshot serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["path"], serde_json::json!(["root", "A", "A1"]));
    assert_eq!(value["score"], serde_json::json!(3.0));
    assert_eq!(value["evaluations"], serde_json::json!(7));
}
