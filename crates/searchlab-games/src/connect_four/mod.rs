//! Connect Four positions, chain detection, and scoring functions.

mod board;
mod chains;
mod random;
mod scoring;

pub use board::{BoardError, ConnectFourBoard, NUM_COLS, NUM_ROWS, Player};
pub use chains::Chain;
pub use random::random_board;
pub use scoring::{
    connect_four_state, connect_four_state_faster, endgame_score_connectfour,
    endgame_score_connectfour_faster, heuristic_connectfour, is_game_over_connectfour,
    next_boards_connectfour,
};
