use serde::Serialize;

use crate::game::snapshot::ResultSnapshot;

/// Outcome of one game-tree search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<G> {
    /// States from the searched root down to the chosen leaf.
    pub path: Vec<G>,
    /// Score of the chosen leaf.
    pub score: f64,
    /// Endgame and heuristic evaluations performed.
    pub evaluations: u64,
}

impl<G> SearchResult<G> {
    /// A one-state result that cost a single evaluation.
    pub(crate) fn leaf(state: G, score: f64) -> Self {
        SearchResult {
            path: vec![state],
            score,
            evaluations: 1,
        }
    }

    /// The state at the bottom of the path.
    pub fn leaf_state(&self) -> Option<&G> {
        self.path.last()
    }

    /// The move chosen at the root, if the root was expanded.
    pub fn best_move(&self) -> Option<&G> {
        self.path.get(1)
    }

    /// Number of moves along the path.
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Printable form, labelling each state with `label`.
    pub fn snapshot<F>(&self, label: F) -> ResultSnapshot
    where
        F: FnMut(&G) -> String,
    {
        ResultSnapshot {
            path: self.path.iter().map(label).collect(),
            score: self.score,
            evaluations: self.evaluations,
        }
    }
}

/// Summary of one progressive-deepening round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundSummary {
    pub depth: u32,
    pub score: f64,
    pub evaluations: u64,
}

/// Best answer found so far by an anytime search.
///
/// Each deepening round overwrites the value, so a reader always sees the
/// deepest completed round.
#[derive(Debug, Clone)]
pub struct AnytimeValue<G> {
    value: Option<SearchResult<G>>,
    history: Vec<RoundSummary>,
    total_evaluations: u64,
}

impl<G> Default for AnytimeValue<G> {
    fn default() -> Self {
        Self {
            value: None,
            history: Vec::new(),
            total_evaluations: 0,
        }
    }
}

impl<G> AnytimeValue<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the result of the round searched to `depth`.
    pub fn set_value(&mut self, depth: u32, result: SearchResult<G>) -> RoundSummary {
        let summary = RoundSummary {
            depth,
            score: result.score,
            evaluations: result.evaluations,
        };
        self.total_evaluations += result.evaluations;
        self.history.push(summary);
        self.value = Some(result);
        summary
    }

    /// Latest stored result, `None` before the first round completes.
    pub fn value(&self) -> Option<&SearchResult<G>> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<SearchResult<G>> {
        self.value
    }

    /// One entry per completed round, shallowest first.
    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }

    /// Evaluations summed across every completed round.
    pub fn total_evaluations(&self) -> u64 {
        self.total_evaluations
    }

    /// Depth of the latest completed round.
    pub fn depth_reached(&self) -> Option<u32> {
        self.history.last().map(|round| round.depth)
    }
}
