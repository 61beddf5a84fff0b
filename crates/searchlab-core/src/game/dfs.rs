use crate::game::{result::SearchResult, state::GameState};

/// Walk every root-to-leaf path and keep the one with the highest endgame score.
///
/// Successors are visited depth-first in generation order; on ties the
/// first leaf found wins. Leaves are scored from the maximizer's side.
pub fn dfs_maximizing<G: GameState>(state: &G) -> SearchResult<G> {
    let mut best_path = vec![state.clone()];
    let mut best_score = f64::NEG_INFINITY;
    let mut evaluations = 0_u64;

    let mut stack = vec![vec![state.clone()]];
    while let Some(path) = stack.pop() {
        let Some(last) = path.last() else {
            continue;
        };

        let children = if last.is_game_over() {
            Vec::new()
        } else {
            last.next_states()
        };

        if children.is_empty() {
            if !last.is_game_over() {
                tracing::warn!("non-terminal state has no successors; scoring it as a leaf");
            }
            evaluations += 1;
            let score = last.endgame_score(true);
            if score > best_score {
                best_score = score;
                best_path = path;
            }
            continue;
        }

        // Reversed so the first successor is popped first.
        for child in children.into_iter().rev() {
            let mut next = Vec::with_capacity(path.len() + 1);
            next.extend(path.iter().cloned());
            next.push(child);
            stack.push(next);
        }
    }

    SearchResult {
        path: best_path,
        score: best_score,
        evaluations,
    }
}
