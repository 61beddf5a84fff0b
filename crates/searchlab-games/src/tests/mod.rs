mod abstract_state_tests;
mod toy_tree_tests;

use crate::ConnectFourBoard;

pub(super) fn board(rows: [&str; 6]) -> ConnectFourBoard {
    ConnectFourBoard::from_rows(&rows).expect("test board should parse")
}
