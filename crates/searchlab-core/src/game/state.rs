/// Immutable view of a two-player, zero-sum game position.
///
/// Successors are generated on demand, so search never materializes the
/// full game tree.
pub trait GameState: Clone {
    /// Domain position handed to heuristic functions.
    type Snapshot;

    fn snapshot(&self) -> &Self::Snapshot;

    /// Whether the game has ended at this position.
    fn is_game_over(&self) -> bool;

    /// Positions reachable in one move, in a fixed order.
    fn next_states(&self) -> Vec<Self>;

    /// Final score; positive values favor the maximizer.
    fn endgame_score(&self, maximize: bool) -> f64;
}

/// Heuristic that rates every position as even.
pub fn always_zero<S: ?Sized>(_snapshot: &S, _maximize: bool) -> f64 {
    0.0
}
