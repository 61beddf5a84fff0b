use crate::connect_four::board::{ConnectFourBoard, NUM_COLS, NUM_ROWS, Player};

/// Row, column steps for horizontal, vertical, and both diagonal lines.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Maximal run of one player's pieces along a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub player: Player,
    /// `(row, col)` cells in line order.
    pub cells: Vec<(usize, usize)>,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn step(row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
    let row = row.checked_add_signed(dr).filter(|row| *row < NUM_ROWS)?;
    let col = col.checked_add_signed(dc).filter(|col| *col < NUM_COLS)?;
    Some((row, col))
}

impl ConnectFourBoard {
    /// All chains, for one player or for both with `None`.
    ///
    /// Runs of two or more come first, grouped by direction and in row-major
    /// order of their first cell. A piece that belongs to no such run is
    /// reported as a chain of length one.
    pub fn get_all_chains(&self, player: Option<Player>) -> Vec<Chain> {
        let wanted = |owner: Player| player.is_none_or(|player| player == owner);
        let mut chains = Vec::new();
        let mut in_run = [[false; NUM_COLS]; NUM_ROWS];

        for direction in DIRECTIONS {
            let (dr, dc) = direction;
            for row in 0..NUM_ROWS {
                for col in 0..NUM_COLS {
                    let Some(owner) = self.get_piece(row, col).filter(|owner| wanted(*owner))
                    else {
                        continue;
                    };

                    // Only walk from the first cell of a run.
                    let previous = step(row, col, (-dr, -dc));
                    if previous.is_some_and(|(r, c)| self.get_piece(r, c) == Some(owner)) {
                        continue;
                    }

                    let mut cells = vec![(row, col)];
                    let mut cursor = (row, col);
                    while let Some(next) = step(cursor.0, cursor.1, direction) {
                        if self.get_piece(next.0, next.1) != Some(owner) {
                            break;
                        }
                        cells.push(next);
                        cursor = next;
                    }

                    if cells.len() >= 2 {
                        for (r, c) in &cells {
                            in_run[*r][*c] = true;
                        }
                        chains.push(Chain {
                            player: owner,
                            cells,
                        });
                    }
                }
            }
        }

        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                let Some(owner) = self.get_piece(row, col) else {
                    continue;
                };
                if wanted(owner) && !in_run[row][col] {
                    chains.push(Chain {
                        player: owner,
                        cells: vec![(row, col)],
                    });
                }
            }
        }

        chains
    }
}
