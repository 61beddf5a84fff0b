use std::fmt;

use searchlab_core::GameState;

pub type IsGameOverFn<S> = fn(&S) -> bool;
pub type NextStatesFn<S> = fn(&S) -> Vec<S>;
pub type EndgameScoreFn<S> = fn(&S, bool) -> f64;

/// Game state assembled from a domain snapshot and three plain functions.
///
/// Successor snapshots are wrapped with the same functions, so one set of
/// rules drives the whole tree.
pub struct AbstractGameState<S> {
    snapshot: S,
    is_game_over_fn: IsGameOverFn<S>,
    generate_next_states_fn: NextStatesFn<S>,
    endgame_score_fn: EndgameScoreFn<S>,
}

impl<S> AbstractGameState<S> {
    pub fn new(
        snapshot: S,
        is_game_over_fn: IsGameOverFn<S>,
        generate_next_states_fn: NextStatesFn<S>,
        endgame_score_fn: EndgameScoreFn<S>,
    ) -> Self {
        Self {
            snapshot,
            is_game_over_fn,
            generate_next_states_fn,
            endgame_score_fn,
        }
    }

    /// A state for `snapshot` that plays by the same rules as `self`.
    pub fn wrap(&self, snapshot: S) -> Self {
        Self {
            snapshot,
            is_game_over_fn: self.is_game_over_fn,
            generate_next_states_fn: self.generate_next_states_fn,
            endgame_score_fn: self.endgame_score_fn,
        }
    }

    pub fn into_snapshot(self) -> S {
        self.snapshot
    }
}

impl<S: Clone> Clone for AbstractGameState<S> {
    fn clone(&self) -> Self {
        self.wrap(self.snapshot.clone())
    }
}

// Rules are plain functions; two states are equal when their positions are.
impl<S: PartialEq> PartialEq for AbstractGameState<S> {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot == other.snapshot
    }
}

impl<S: fmt::Debug> fmt::Debug for AbstractGameState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbstractGameState")
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

impl<S: Clone> GameState for AbstractGameState<S> {
    type Snapshot = S;

    fn snapshot(&self) -> &S {
        &self.snapshot
    }

    fn is_game_over(&self) -> bool {
        (self.is_game_over_fn)(&self.snapshot)
    }

    fn next_states(&self) -> Vec<Self> {
        (self.generate_next_states_fn)(&self.snapshot)
            .into_iter()
            .map(|snapshot| self.wrap(snapshot))
            .collect()
    }

    fn endgame_score(&self, maximize: bool) -> f64 {
        (self.endgame_score_fn)(&self.snapshot, maximize)
    }
}
