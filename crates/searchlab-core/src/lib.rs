mod agenda;
mod config;
mod error;
mod game;

pub use agenda::heuristics::{is_admissible, is_consistent};
pub use agenda::search::{
    SearchEvent, SearchStats, search, search_named, search_with_hook, search_with_stats,
};
pub use agenda::strategy::{DEFAULT_BEAM_WIDTH, PathOrder, SortPathsFn, Strategy, StrategyConfig};
pub use config::{SearchConfig, SearchConfigError};
pub use error::SearchError;
pub use game::alphabeta::{alphabeta, minimax_search_alphabeta};
pub use game::deepening::{progressive_deepening, progressive_deepening_into};
pub use game::dfs::dfs_maximizing;
pub use game::minimax::{minimax_endgame_search, minimax_search};
pub use game::result::{AnytimeValue, RoundSummary, SearchResult};
pub use game::snapshot::{AnytimeSnapshot, ResultSnapshot};
pub use game::state::{GameState, always_zero};

pub use searchlab_graph::{Graph, GraphError, NodeKey, Path};
