use crate::game::{
    result::SearchResult,
    state::{GameState, always_zero},
};

/// Minimax to the end of the game, scoring only endgame positions.
pub fn minimax_endgame_search<G: GameState>(state: &G, maximize: bool) -> SearchResult<G> {
    minimax_search(state, always_zero, None, maximize)
}

/// Minimax with an optional depth limit.
///
/// At the limit the position is rated with `heuristic` instead of being
/// expanded; every child of an expanded node is searched and counted.
pub fn minimax_search<G, H>(
    state: &G,
    heuristic: H,
    depth_limit: Option<u32>,
    maximize: bool,
) -> SearchResult<G>
where
    G: GameState,
    H: Fn(&G::Snapshot, bool) -> f64,
{
    minimax(state, &heuristic, depth_limit, maximize)
}

fn minimax<G, H>(state: &G, heuristic: &H, depth_limit: Option<u32>, maximize: bool) -> SearchResult<G>
where
    G: GameState,
    H: Fn(&G::Snapshot, bool) -> f64,
{
    if state.is_game_over() {
        return SearchResult::leaf(state.clone(), state.endgame_score(maximize));
    }
    if depth_limit == Some(0) {
        return SearchResult::leaf(state.clone(), heuristic(state.snapshot(), maximize));
    }

    let children = state.next_states();
    let next_limit = depth_limit.map(|depth| depth - 1);
    let mut best: Option<SearchResult<G>> = None;
    let mut evaluations = 0;

    for child in &children {
        let result = minimax(child, heuristic, next_limit, !maximize);
        evaluations += result.evaluations;

        let improves = match &best {
            None => true,
            Some(current) if maximize => result.score > current.score,
            Some(current) => result.score < current.score,
        };
        if improves {
            best = Some(result);
        }
    }

    let Some(mut best) = best else {
        tracing::warn!("non-terminal state has no successors; rating it with the heuristic");
        return SearchResult::leaf(state.clone(), heuristic(state.snapshot(), maximize));
    };

    best.path.insert(0, state.clone());
    best.evaluations = evaluations;
    best
}
