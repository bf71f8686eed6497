use super::grid::Grid;
use super::types::{Position, Token};

pub const WIN_LENGTH: usize = 4;

/// Axis steps as `(column, row)` deltas, in scan order: vertical, rising
/// diagonal, horizontal, falling diagonal.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 1), (1, 0), (-1, 1)];

/// Looks for a run of at least `WIN_LENGTH` same tokens through the given cell.
///
/// The first axis that qualifies wins; later axes are not inspected even if
/// they would produce a longer run.
pub fn find_winning_run(grid: &Grid, column: usize, row: usize) -> Option<Vec<Position>> {
    let token = grid.get(column, row)?;
    if token == Token::Empty {
        return None;
    }

    AXES.iter()
        .map(|&axis| scan_axis(grid, column, row, token, axis))
        .find(|run| run.len() >= WIN_LENGTH)
}

fn scan_axis(
    grid: &Grid,
    column: usize,
    row: usize,
    token: Token,
    (dc, dr): (isize, isize),
) -> Vec<Position> {
    let mut c = column as isize;
    let mut r = row as isize;

    loop {
        c -= dc;
        r -= dr;
        if !holds(grid, c, r, token) {
            break;
        }
    }

    let mut run = Vec::new();
    while grid.contains(c + dc, r + dr) {
        c += dc;
        r += dr;
        if !holds(grid, c, r, token) {
            break;
        }
        run.push(Position::new(c as usize, r as usize));
    }
    run
}

fn holds(grid: &Grid, column: isize, row: isize, token: Token) -> bool {
    grid.contains(column, row) && grid.get(column as usize, row as usize) == Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(columns: usize, rows: usize, cells: &[(usize, usize, Token)]) -> Grid {
        let mut grid = Grid::new(columns, rows);
        for &(c, r, token) in cells {
            grid.write(token, c, r).unwrap();
        }
        grid
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let grid = grid_with(7, 6, &[(0, 0, Token::X), (1, 0, Token::X), (2, 0, Token::X)]);
        assert!(find_winning_run(&grid, 2, 0).is_none());
    }

    #[test]
    fn test_horizontal_run_is_ordered_left_to_right() {
        let grid = grid_with(
            7,
            6,
            &[(3, 0, Token::O), (4, 0, Token::O), (5, 0, Token::O), (6, 0, Token::O)],
        );
        let run = find_winning_run(&grid, 4, 0).unwrap();
        assert_eq!(
            run,
            vec![
                Position::new(3, 0),
                Position::new(4, 0),
                Position::new(5, 0),
                Position::new(6, 0)
            ]
        );
    }

    #[test]
    fn test_run_stops_at_other_token() {
        let grid = grid_with(
            7,
            6,
            &[
                (0, 0, Token::X),
                (1, 0, Token::O),
                (2, 0, Token::O),
                (3, 0, Token::O),
                (4, 0, Token::X),
            ],
        );
        assert!(find_winning_run(&grid, 2, 0).is_none());
    }

    #[test]
    fn test_falling_diagonal_detected_from_middle() {
        let grid = grid_with(
            7,
            6,
            &[(0, 4, Token::X), (1, 3, Token::X), (2, 2, Token::X), (3, 1, Token::X)],
        );
        let run = find_winning_run(&grid, 1, 3).unwrap();
        assert_eq!(run.len(), 4);
        assert!(run.contains(&Position::new(0, 4)));
        assert!(run.contains(&Position::new(3, 1)));
    }

    #[test]
    fn test_vertical_axis_is_checked_before_horizontal() {
        let mut cells = Vec::new();
        for r in 0..4 {
            cells.push((2, r, Token::X));
        }
        for c in [0, 1, 3, 4] {
            cells.push((c, 3, Token::X));
        }
        let grid = grid_with(7, 6, &cells);
        let run = find_winning_run(&grid, 2, 3).unwrap();
        assert!(run.iter().all(|p| p.column == 2));
        assert_eq!(run.len(), 4);
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let grid = Grid::new(7, 6);
        assert!(find_winning_run(&grid, 0, 0).is_none());
        assert!(find_winning_run(&grid, 9, 9).is_none());
    }
}
