use std::path::PathBuf;

use searchlab_core::{alphabeta, dfs_maximizing, minimax_search, progressive_deepening};
use searchlab_games::{ToyState, classic_tree, compile_yaml, toy_heuristic};

fn path_names(path: &[ToyState]) -> String {
    path.iter().map(ToyState::name).collect::<Vec<_>>().join(" -> ")
}

fn main() {
    let root = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => compile_yaml(&path).expect("failed to compile game tree YAML"),
        None => classic_tree().expect("bundled tree should compile"),
    };

    let best_leaf = dfs_maximizing(&root);
    println!(
        "dfs_maximizing: {} score={} evaluations={}",
        path_names(&best_leaf.path),
        best_leaf.score,
        best_leaf.evaluations
    );

    let full = minimax_search(&root, toy_heuristic, None, true);
    let pruned = alphabeta(&root, toy_heuristic, None, true);
    println!(
        "minimax: {} score={} evaluations={}",
        path_names(&full.path),
        full.score,
        full.evaluations
    );
    println!(
        "alphabeta: {} score={} evaluations={}",
        path_names(&pruned.path),
        pruned.score,
        pruned.evaluations
    );

    let anytime = progressive_deepening(&root, toy_heuristic, 3, true);
    let snapshot = anytime.snapshot(|state| state.name().to_string());
    println!(
        "{}",
        snapshot.to_json().expect("snapshot should serialize")
    );
}
