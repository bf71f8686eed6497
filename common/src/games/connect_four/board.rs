use super::grid::Grid;
use super::types::{MoveError, Position, Token};
use super::win_detector::find_winning_run;
use super::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Game board: the grid plus the recorded win, if any.
///
/// Once a winner is recorded, `insert` rejects every further drop, so the
/// grid, the winner and the winning run stay frozen through normal play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    winner: Option<Token>,
    winning_run: Vec<Position>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}

impl Board {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            grid: Grid::new(columns, rows),
            winner: None,
            winning_run: Vec::new(),
        }
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<Token> {
        self.grid.get(column, row)
    }

    /// Snapshot of every cell, indexed `[column][row]` with row 0 at the bottom.
    pub fn cells(&self) -> Vec<Vec<Token>> {
        (0..self.columns())
            .map(|c| {
                (0..self.rows())
                    .map(|r| self.grid.get(c, r).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    pub fn fill_height(&self, column: usize) -> Option<usize> {
        self.grid.fill_height(column)
    }

    /// Row the next token dropped into `column` would land in.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if self.grid.is_column_open(column) {
            self.grid.fill_height(column)
        } else {
            None
        }
    }

    pub fn insert(&mut self, token: Token, column: usize) -> Result<usize, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }

        let row = self.grid.drop_token(token, column)?;
        self.detect_win_at(column, row);
        Ok(row)
    }

    /// Writes a cell directly to mirror a move reported by a remote peer.
    pub fn set_cell(&mut self, token: Token, column: usize, row: usize) -> Result<(), MoveError> {
        self.grid.write(token, column, row)?;
        self.detect_win_at(column, row);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    pub fn is_playable(&self) -> bool {
        self.winner.is_none() && !self.grid.is_full()
    }

    pub fn playable_columns(&self) -> Vec<usize> {
        self.grid.open_columns().collect()
    }

    pub fn winner(&self) -> Option<Token> {
        self.winner
    }

    pub fn winning_run(&self) -> &[Position] {
        &self.winning_run
    }

    fn detect_win_at(&mut self, column: usize, row: usize) {
        if let Some(run) = find_winning_run(&self.grid, column, row) {
            self.winner = self.grid.get(column, row);
            self.winning_run = run;
        }
    }
}
