use serde::{Deserialize, Serialize};
use searchlab_graph::{Graph, GraphError, NodeKey, Path, sort_by_cost};

/// Beam width used when a beam strategy is requested without an explicit width.
pub const DEFAULT_BEAM_WIDTH: usize = 2;

/// Caller-supplied ordering hook: reorder `paths` in place for the given goal.
pub type SortPathsFn = fn(&Graph, NodeKey, &mut Vec<Path>) -> Result<(), GraphError>;

/// How a list of paths is ordered before it joins or after it updates the agenda.
///
/// Every keyed order breaks ties by lexicographic node order.
#[derive(Debug, Clone, Copy)]
pub enum PathOrder {
    /// Leave the list as it is.
    Unchanged,
    Lexicographic,
    /// By heuristic of the final node towards the goal.
    Heuristic,
    /// By total edge length.
    Length,
    /// By total edge length plus heuristic of the final node.
    LengthPlusHeuristic,
    Custom(SortPathsFn),
}

impl PathOrder {
    /// Reorder `paths` for a search towards `goal`.
    pub fn apply(self, graph: &Graph, goal: NodeKey, paths: &mut Vec<Path>) -> Result<(), GraphError> {
        match self {
            PathOrder::Unchanged => Ok(()),
            PathOrder::Lexicographic => {
                paths.sort();
                Ok(())
            }
            PathOrder::Heuristic => graph.sort_paths_by_heuristic(goal, paths),
            PathOrder::Length => sort_by_cost(paths, |path| graph.path_length(path)),
            PathOrder::LengthPlusHeuristic => sort_by_cost(paths, |path| {
                Ok(graph.path_length(path)? + graph.path_heuristic(path, goal)?)
            }),
            PathOrder::Custom(sort_fn) => sort_fn(graph, goal, paths),
        }
    }
}

/// Parameter record that turns the generic engine into a concrete search algorithm.
#[derive(Debug, Clone, Copy)]
pub struct StrategyConfig {
    /// Order applied to freshly generated extensions (which start out lexicographic).
    pub sort_new_paths: PathOrder,
    /// Insert extensions at the front of the agenda instead of the back.
    pub add_to_front: bool,
    /// Order applied to the whole agenda after each expansion.
    pub sort_agenda: PathOrder,
    /// Never expand the same end node twice.
    pub use_extended_set: bool,
    /// Keep only this many paths per level (level-synchronous beam search).
    pub beam_width: Option<usize>,
}

impl StrategyConfig {
    /// Beam search ranking each level by heuristic.
    pub fn beam(width: usize) -> Self {
        StrategyConfig {
            sort_new_paths: PathOrder::Lexicographic,
            add_to_front: false,
            sort_agenda: PathOrder::Heuristic,
            use_extended_set: false,
            beam_width: Some(width),
        }
    }

    /// Replace the new-path ordering with a caller-supplied function.
    pub fn with_custom_new_path_order(mut self, sort_fn: SortPathsFn) -> Self {
        self.sort_new_paths = PathOrder::Custom(sort_fn);
        self
    }

    /// Replace the agenda ordering with a caller-supplied function.
    pub fn with_custom_agenda_order(mut self, sort_fn: SortPathsFn) -> Self {
        self.sort_agenda = PathOrder::Custom(sort_fn);
        self
    }
}

/// The named search algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Dfs,
    Bfs,
    HillClimbing,
    BestFirst,
    BranchAndBound,
    BranchAndBoundWithHeuristic,
    BranchAndBoundWithExtendedSet,
    #[default]
    AStar,
    Beam,
}

impl Strategy {
    /// Every named strategy, in table order.
    pub const ALL: [Strategy; 9] = [
        Strategy::Dfs,
        Strategy::Bfs,
        Strategy::HillClimbing,
        Strategy::BestFirst,
        Strategy::BranchAndBound,
        Strategy::BranchAndBoundWithHeuristic,
        Strategy::BranchAndBoundWithExtendedSet,
        Strategy::AStar,
        Strategy::Beam,
    ];

    /// Name as written in YAML config files.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Dfs => "dfs",
            Strategy::Bfs => "bfs",
            Strategy::HillClimbing => "hill_climbing",
            Strategy::BestFirst => "best_first",
            Strategy::BranchAndBound => "branch_and_bound",
            Strategy::BranchAndBoundWithHeuristic => "branch_and_bound_with_heuristic",
            Strategy::BranchAndBoundWithExtendedSet => "branch_and_bound_with_extended_set",
            Strategy::AStar => "a_star",
            Strategy::Beam => "beam",
        }
    }

    /// Fixed parameter record for this strategy. Beam uses `DEFAULT_BEAM_WIDTH`.
    pub fn config(self) -> StrategyConfig {
        let (sort_new_paths, add_to_front, sort_agenda, use_extended_set) = match self {
            Strategy::Dfs => (PathOrder::Lexicographic, true, PathOrder::Unchanged, false),
            Strategy::Bfs => (PathOrder::Lexicographic, false, PathOrder::Unchanged, false),
            Strategy::HillClimbing => (PathOrder::Heuristic, true, PathOrder::Unchanged, false),
            Strategy::BestFirst => (PathOrder::Heuristic, true, PathOrder::Heuristic, false),
            Strategy::BranchAndBound => (PathOrder::Unchanged, false, PathOrder::Length, false),
            Strategy::BranchAndBoundWithHeuristic => (
                PathOrder::Unchanged,
                false,
                PathOrder::LengthPlusHeuristic,
                false,
            ),
            Strategy::BranchAndBoundWithExtendedSet => {
                (PathOrder::Unchanged, false, PathOrder::Length, true)
            }
            Strategy::AStar => (
                PathOrder::Unchanged,
                false,
                PathOrder::LengthPlusHeuristic,
                true,
            ),
            Strategy::Beam => return StrategyConfig::beam(DEFAULT_BEAM_WIDTH),
        };

        StrategyConfig {
            sort_new_paths,
            add_to_front,
            sort_agenda,
            use_extended_set,
            beam_width: None,
        }
    }

    /// Whether this strategy consults the heuristic table.
    pub fn uses_heuristic(self) -> bool {
        matches!(
            self,
            Strategy::HillClimbing
                | Strategy::BestFirst
                | Strategy::BranchAndBoundWithHeuristic
                | Strategy::AStar
                | Strategy::Beam
        )
    }

    /// Whether this strategy returns a shortest path.
    ///
    /// Branch and bound with a heuristic needs the heuristic to be admissible.
    /// A* also keeps an extended set, so its heuristic must be consistent.
    pub fn is_optimal(self) -> bool {
        matches!(
            self,
            Strategy::BranchAndBound
                | Strategy::BranchAndBoundWithHeuristic
                | Strategy::BranchAndBoundWithExtendedSet
                | Strategy::AStar
        )
    }
}
