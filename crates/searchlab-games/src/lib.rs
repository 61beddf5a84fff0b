mod abstract_state;
pub mod connect_four;
pub mod toy_tree;

#[cfg(test)]
mod tests;

pub use abstract_state::{AbstractGameState, EndgameScoreFn, IsGameOverFn, NextStatesFn};
pub use connect_four::{
    BoardError, Chain, ConnectFourBoard, NUM_COLS, NUM_ROWS, Player, connect_four_state,
    connect_four_state_faster, endgame_score_connectfour, endgame_score_connectfour_faster,
    heuristic_connectfour, is_game_over_connectfour, next_boards_connectfour, random_board,
};
pub use toy_tree::{
    GameTreeSpec, ToyNode, ToyNodeSpec, ToyState, ToyTree, TreeSpecError, classic_tree,
    compile_yaml, load_yaml, toy_heuristic,
};
