use crate::game::{alphabeta::prune, result::AnytimeValue, state::GameState};

/// Run alpha-beta at depth 1, 2, ..., `max_depth` and keep the latest answer.
pub fn progressive_deepening<G, H>(
    state: &G,
    heuristic: H,
    max_depth: u32,
    maximize: bool,
) -> AnytimeValue<G>
where
    G: GameState,
    H: Fn(&G::Snapshot, bool) -> f64,
{
    let mut anytime = AnytimeValue::new();
    progressive_deepening_into(state, heuristic, max_depth, maximize, &mut anytime, |_| {});
    anytime
}

/// Progressive deepening that writes each round into a caller-owned slot.
///
/// Rounds are independent searches. `on_round` receives the slot after each
/// update, with the finished round as the last entry of its history.
pub fn progressive_deepening_into<G, H, F>(
    state: &G,
    heuristic: H,
    max_depth: u32,
    maximize: bool,
    anytime: &mut AnytimeValue<G>,
    mut on_round: F,
) where
    G: GameState,
    H: Fn(&G::Snapshot, bool) -> f64,
    F: FnMut(&AnytimeValue<G>),
{
    for depth in 1..=max_depth {
        let result = prune(
            state,
            f64::NEG_INFINITY,
            f64::INFINITY,
            &heuristic,
            Some(depth),
            maximize,
        );
        let summary = anytime.set_value(depth, result);

        tracing::debug!(
            depth,
            score = summary.score,
            evaluations = summary.evaluations,
            "progressive deepening round complete"
        );
        on_round(anytime);
    }
}
