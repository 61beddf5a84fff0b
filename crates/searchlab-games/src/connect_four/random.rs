use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::connect_four::{
    board::{ConnectFourBoard, NUM_COLS},
    scoring::is_game_over_connectfour,
};

/// Play up to `moves` uniformly random moves from the empty board.
///
/// Stops early if the game ends. The same seed always yields the same board.
pub fn random_board(seed: u64, moves: usize) -> ConnectFourBoard {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = ConnectFourBoard::new();

    for _ in 0..moves {
        if is_game_over_connectfour(&board) {
            break;
        }
        let open: Vec<usize> = (0..NUM_COLS)
            .filter(|col| !board.is_column_full(*col))
            .collect();
        let Some(next) = open.choose(&mut rng).and_then(|col| board.add_piece(*col).ok()) else {
            break;
        };
        board = next;
    }

    tracing::debug!(
        seed,
        pieces = board.count_pieces(None),
        "generated random connect four board"
    );
    board
}
