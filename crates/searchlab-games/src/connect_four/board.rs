use std::fmt;

use thiserror::Error;

pub const NUM_ROWS: usize = 6;
pub const NUM_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Cell symbol used by `from_rows` and `Display`.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Option<Player>> {
        match symbol {
            'X' => Some(Some(Player::One)),
            'O' => Some(Some(Player::Two)),
            '.' => Some(None),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => f.write_str("Player One"),
            Player::Two => f.write_str("Player Two"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Error type for board construction and moves.
pub enum BoardError {
    #[error("column {col} is out of range")]
    ColumnOutOfRange { col: usize },

    #[error("column {col} is full")]
    ColumnFull { col: usize },

    #[error("expected 6 rows, found {found}")]
    RowCount { found: usize },

    #[error("row {row} has {found} cells, expected 7")]
    RowWidth { row: usize, found: usize },

    #[error("unknown cell symbol '{symbol}' at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, symbol: char },

    #[error("piece at row {row}, column {col} has an empty cell below it")]
    FloatingPiece { row: usize, col: usize },

    #[error("piece counts {one} (X) and {two} (O) cannot arise from alternating moves")]
    UnbalancedPieces { one: usize, two: usize },
}

/// Immutable 6x7 Connect Four position. Row 0 is the top row.
///
/// Player One moves first, so the player to move is derived from the piece
/// counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConnectFourBoard {
    cells: [[Option<Player>; NUM_COLS]; NUM_ROWS],
}

impl ConnectFourBoard {
    /// Empty board, Player One to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse six rows of `X`, `O`, and `.`, top row first. Whitespace is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        if rows.len() != NUM_ROWS {
            return Err(BoardError::RowCount { found: rows.len() });
        }

        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line
                .as_ref()
                .chars()
                .filter(|symbol| !symbol.is_whitespace())
                .collect();
            if symbols.len() != NUM_COLS {
                return Err(BoardError::RowWidth {
                    row,
                    found: symbols.len(),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = Player::from_symbol(symbol)
                    .ok_or(BoardError::InvalidCell { row, col, symbol })?;
            }
        }

        board.validate()?;
        Ok(board)
    }

    fn validate(&self) -> Result<(), BoardError> {
        for row in 0..NUM_ROWS - 1 {
            for col in 0..NUM_COLS {
                if self.cells[row][col].is_some() && self.cells[row + 1][col].is_none() {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }

        let one = self.count_pieces(Some(Player::One));
        let two = self.count_pieces(Some(Player::Two));
        if one != two && one != two + 1 {
            return Err(BoardError::UnbalancedPieces { one, two });
        }
        Ok(())
    }

    /// Piece at `(row, col)`; `None` for empty or out-of-range cells.
    pub fn get_piece(&self, row: usize, col: usize) -> Option<Player> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    pub fn current_player(&self) -> Player {
        if self.count_pieces(Some(Player::One)) > self.count_pieces(Some(Player::Two)) {
            Player::Two
        } else {
            Player::One
        }
    }

    pub fn other_player(&self) -> Player {
        self.current_player().other()
    }

    /// Number of pieces, for one player or for both with `None`.
    pub fn count_pieces(&self, player: Option<Player>) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| match (cell, player) {
                (Some(_), None) => true,
                (Some(owner), Some(player)) => *owner == player,
                (None, _) => false,
            })
            .count()
    }

    /// Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= NUM_COLS || self.cells[0][col].is_some()
    }

    pub fn is_full(&self) -> bool {
        (0..NUM_COLS).all(|col| self.is_column_full(col))
    }

    /// Drop the current player's piece into `col` and return the new board.
    pub fn add_piece(&self, col: usize) -> Result<Self, BoardError> {
        if col >= NUM_COLS {
            return Err(BoardError::ColumnOutOfRange { col });
        }
        let row = (0..NUM_ROWS)
            .rev()
            .find(|row| self.cells[*row][col].is_none())
            .ok_or(BoardError::ColumnFull { col })?;

        let mut next = self.clone();
        next.cells[row][col] = Some(self.current_player());
        Ok(next)
    }
}

impl fmt::Display for ConnectFourBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = cell.map_or('.', Player::symbol);
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
