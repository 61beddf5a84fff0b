use crate::{
    abstract_state::AbstractGameState,
    connect_four::board::{ConnectFourBoard, NUM_COLS, Player},
};

const WIN_SCORE: f64 = 1000.0;
const WINNING_LENGTH: usize = 4;

fn has_won(board: &ConnectFourBoard, player: Player) -> bool {
    board
        .get_all_chains(Some(player))
        .iter()
        .any(|chain| chain.len() >= WINNING_LENGTH)
}

/// The maximizer is the player to move when `is_current_player_maximizer`
/// holds, otherwise the player who just moved.
fn maximizer(board: &ConnectFourBoard, is_current_player_maximizer: bool) -> Player {
    if is_current_player_maximizer {
        board.current_player()
    } else {
        board.other_player()
    }
}

/// A board is over once someone has four in a row or no column has room.
pub fn is_game_over_connectfour(board: &ConnectFourBoard) -> bool {
    board
        .get_all_chains(None)
        .iter()
        .any(|chain| chain.len() >= WINNING_LENGTH)
        || board.is_full()
}

/// Boards reachable in one move, by column; empty once the game is over.
pub fn next_boards_connectfour(board: &ConnectFourBoard) -> Vec<ConnectFourBoard> {
    if is_game_over_connectfour(board) {
        return Vec::new();
    }
    (0..NUM_COLS)
        .filter(|col| !board.is_column_full(*col))
        .filter_map(|col| board.add_piece(col).ok())
        .collect()
}

/// 1000 if the maximizer has won, -1000 if the minimizer has, 0 for a tie.
pub fn endgame_score_connectfour(board: &ConnectFourBoard, is_current_player_maximizer: bool) -> f64 {
    let max_player = maximizer(board, is_current_player_maximizer);
    if has_won(board, max_player) {
        WIN_SCORE
    } else if has_won(board, max_player.other()) {
        -WIN_SCORE
    } else {
        0.0
    }
}

/// Endgame score scaled by `1000 / pieces`, so earlier wins score higher.
/// Decided games keep `|score| >= 1000`.
pub fn endgame_score_connectfour_faster(
    board: &ConnectFourBoard,
    is_current_player_maximizer: bool,
) -> f64 {
    let score = endgame_score_connectfour(board, is_current_player_maximizer);
    let pieces = board.count_pieces(None);
    if pieces == 0 {
        return score;
    }
    score * WIN_SCORE / pieces as f64
}

/// Chain-length balance between the maximizer and the minimizer.
///
/// Chains of three or more count double. Stays well inside `(-1000, 1000)`.
pub fn heuristic_connectfour(board: &ConnectFourBoard, is_current_player_maximizer: bool) -> f64 {
    let weight = |player: Player| -> f64 {
        board
            .get_all_chains(Some(player))
            .iter()
            .map(|chain| {
                let len = chain.len();
                if len >= 3 { 2 * len } else { len }
            })
            .sum::<usize>() as f64
    };

    let max_player = maximizer(board, is_current_player_maximizer);
    weight(max_player) - weight(max_player.other())
}

/// Connect Four game state scored with `endgame_score_connectfour`.
pub fn connect_four_state(board: ConnectFourBoard) -> AbstractGameState<ConnectFourBoard> {
    AbstractGameState::new(
        board,
        is_game_over_connectfour,
        next_boards_connectfour,
        endgame_score_connectfour,
    )
}

/// Connect Four game state that rewards quicker wins.
pub fn connect_four_state_faster(board: ConnectFourBoard) -> AbstractGameState<ConnectFourBoard> {
    AbstractGameState::new(
        board,
        is_game_over_connectfour,
        next_boards_connectfour,
        endgame_score_connectfour_faster,
    )
}
