use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::protocol::tags::MAX_UNTAGGED_INDEX;
use super::board::Board;
use super::win_detector::WIN_LENGTH;
use super::{DEFAULT_COLUMNS, DEFAULT_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    pub columns: usize,
    pub rows: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl BoardSettings {
    pub fn create_board(&self) -> Board {
        Board::new(self.columns, self.rows)
    }
}

impl Validate for BoardSettings {
    fn validate(&self) -> Result<(), String> {
        // Indices travel as bare integers and must stay below the smallest tag.
        let max = MAX_UNTAGGED_INDEX as usize + 1;
        if self.columns < WIN_LENGTH || self.columns > max {
            return Err(format!("Board columns must be between {} and {}", WIN_LENGTH, max));
        }
        if self.rows < WIN_LENGTH || self.rows > max {
            return Err(format!("Board rows must be between {} and {}", WIN_LENGTH, max));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_seven_by_six() {
        let settings = BoardSettings::default();
        assert!(settings.validate().is_ok());
        let board = settings.create_board();
        assert_eq!((board.columns(), board.rows()), (7, 6));
    }

    #[test]
    fn test_bounds() {
        assert!(BoardSettings { columns: 10, rows: 10 }.validate().is_ok());
        assert!(BoardSettings { columns: 4, rows: 4 }.validate().is_ok());
        assert!(BoardSettings { columns: 3, rows: 6 }.validate().is_err());
        assert!(BoardSettings { columns: 7, rows: 11 }.validate().is_err());
    }
}
