use crate::game::{result::SearchResult, state::GameState};

/// Alpha-beta search over the full `(-inf, +inf)` window.
pub fn alphabeta<G, H>(
    state: &G,
    heuristic: H,
    depth_limit: Option<u32>,
    maximize: bool,
) -> SearchResult<G>
where
    G: GameState,
    H: Fn(&G::Snapshot, bool) -> f64,
{
    minimax_search_alphabeta(
        state,
        f64::NEG_INFINITY,
        f64::INFINITY,
        heuristic,
        depth_limit,
        maximize,
    )
}

/// Minimax with alpha-beta pruning inside the window `(alpha, beta)`.
///
/// Children are searched only while `alpha < beta`; skipped siblings cost no
/// evaluations. Over the full window the root score equals plain minimax.
pub fn minimax_search_alphabeta<G, H>(
    state: &G,
    alpha: f64,
    beta: f64,
    heuristic: H,
    depth_limit: Option<u32>,
    maximize: bool,
) -> SearchResult<G>
where
    G: GameState,
    H: Fn(&G::Snapshot, bool) -> f64,
{
    prune(state, alpha, beta, &heuristic, depth_limit, maximize)
}

pub(crate) fn prune<G, H>(
    state: &G,
    mut alpha: f64,
    mut beta: f64,
    heuristic: &H,
    depth_limit: Option<u32>,
    maximize: bool,
) -> SearchResult<G>
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
    if children.is_empty() {
        tracing::warn!("non-terminal state has no successors; rating it with the heuristic");
        return SearchResult::leaf(state.clone(), heuristic(state.snapshot(), maximize));
    }

    let next_limit = depth_limit.map(|depth| depth - 1);
    let mut best_tail: Vec<G> = Vec::new();
    let mut evaluations = 0;

    for (idx, child) in children.iter().enumerate() {
        if alpha >= beta {
            tracing::trace!(
                alpha,
                beta,
                pruned = children.len() - idx,
                "alpha-beta cutoff"
            );
            break;
        }

        let result = prune(child, alpha, beta, heuristic, next_limit, !maximize);
        evaluations += result.evaluations;

        if maximize {
            if result.score > alpha {
                alpha = result.score;
                best_tail = result.path;
            }
        } else if result.score < beta {
            beta = result.score;
            best_tail = result.path;
        }
    }

    let mut path = Vec::with_capacity(best_tail.len() + 1);
    path.push(state.clone());
    path.extend(best_tail);

    SearchResult {
        path,
        score: if maximize { alpha } else { beta },
        evaluations,
    }
}
