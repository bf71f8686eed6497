use std::collections::BTreeSet;

use super::types::{MoveError, Token};

/// Column-major cell matrix with gravity-fill bookkeeping.
///
/// `fill_heights[c]` is the lowest empty row of column `c` (or `rows` when the
/// column is full), and `open_columns` holds exactly the columns whose fill
/// height is below `rows`. Direct writes may leave tokens above the fill
/// height; a later drop skips over them instead of overwriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Token>,
    fill_heights: Vec<usize>,
    open_columns: BTreeSet<usize>,
}

impl Grid {
    pub fn new(columns: usize, rows: usize) -> Self {
        let open_columns = if rows > 0 { (0..columns).collect() } else { BTreeSet::new() };
        Self {
            columns,
            rows,
            cells: vec![Token::Empty; columns * rows],
            fill_heights: vec![0; columns],
            open_columns,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains(&self, column: isize, row: isize) -> bool {
        column >= 0 && row >= 0 && (column as usize) < self.columns && (row as usize) < self.rows
    }

    pub fn get(&self, column: usize, row: usize) -> Option<Token> {
        if column < self.columns && row < self.rows {
            Some(self.cells[self.index(column, row)])
        } else {
            None
        }
    }

    pub fn fill_height(&self, column: usize) -> Option<usize> {
        self.fill_heights.get(column).copied()
    }

    pub fn is_column_open(&self, column: usize) -> bool {
        self.open_columns.contains(&column)
    }

    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.open_columns.iter().copied()
    }

    pub fn is_full(&self) -> bool {
        self.open_columns.is_empty()
    }

    /// Places `token` in the lowest empty cell of `column` and returns its row.
    pub fn drop_token(&mut self, token: Token, column: usize) -> Result<usize, MoveError> {
        if token == Token::Empty {
            return Err(MoveError::EmptyToken);
        }
        if column >= self.columns {
            return Err(MoveError::ColumnOutOfRange {
                column: column as i64,
                columns: self.columns,
            });
        }
        if !self.is_column_open(column) {
            return Err(MoveError::ColumnFull { column });
        }

        let row = self.fill_heights[column];
        let index = self.index(column, row);
        self.cells[index] = token;
        self.settle(column, row + 1);
        Ok(row)
    }

    /// Writes a cell directly and recomputes the column's fill height as the
    /// lowest empty row.
    pub fn write(&mut self, token: Token, column: usize, row: usize) -> Result<(), MoveError> {
        if column >= self.columns || row >= self.rows {
            return Err(MoveError::CellOutOfRange { column, row });
        }

        let index = self.index(column, row);
        self.cells[index] = token;
        self.settle(column, 0);
        Ok(())
    }

    /// Moves the fill height to the lowest empty row at or above `from`.
    fn settle(&mut self, column: usize, from: usize) {
        let height = (from..self.rows)
            .find(|&r| self.cells[self.index(column, r)] == Token::Empty)
            .unwrap_or(self.rows);
        self.fill_heights[column] = height;
        if height < self.rows {
            self.open_columns.insert(column);
        } else {
            self.open_columns.remove(&column);
        }
    }

    fn index(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }
}
