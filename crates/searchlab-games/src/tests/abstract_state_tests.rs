use searchlab_core::{GameState, minimax_endgame_search};

use crate::AbstractGameState;

fn counter_over(count: &u32) -> bool {
    *count >= 3
}

fn counter_next(count: &u32) -> Vec<u32> {
    vec![count + 1, count + 2]
}

fn counter_score(count: &u32, _maximize: bool) -> f64 {
    f64::from(*count)
}

fn counter(start: u32) -> AbstractGameState<u32> {
    AbstractGameState::new(start, counter_over, counter_next, counter_score)
}

#[test]
fn functions_drive_the_state() {
    let state = counter(2);

    assert!(!state.is_game_over());
    assert_eq!(state.endgame_score(true), 2.0);

    let children = state.next_states();
    let snapshots: Vec<u32> = children.iter().map(|child| *child.snapshot()).collect();
    assert_eq!(snapshots, [3, 4]);
    assert!(children.iter().all(GameState::is_game_over));
}

#[test]
fn wrap_keeps_the_rules() {
    let state = counter(0);
    let wrapped = state.wrap(5);

    assert!(wrapped.is_game_over());
    assert_eq!(wrapped.endgame_score(false), 5.0);
    assert_eq!(wrapped.into_snapshot(), 5);
}

#[test]
fn equality_compares_positions() {
    assert_eq!(counter(1), counter(0).wrap(1));
    assert_ne!(counter(1), counter(2));
}

#[test]
fn search_runs_over_abstract_states() {
    // 1 -> {2, 3}; 2 -> {3, 4}. Both root moves are worth 3 and the first
    // generated one is kept.
    let result = minimax_endgame_search(&counter(1), true);

    assert_eq!(result.score, 3.0);
    assert_eq!(result.evaluations, 3);
    assert_eq!(result.best_move().map(|state| *state.snapshot()), Some(2));
}
