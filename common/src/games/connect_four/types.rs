use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Token {
    #[default]
    Empty,
    X,
    O,
}

impl Token {
    pub fn symbol(&self) -> char {
        match self {
            Token::Empty => ' ',
            Token::X => 'X',
            Token::O => 'O',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Turn-order identity of a participant. `Player1` always moves first and plays `Token::X`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    Player1,
    Player2,
}

impl Seat {
    pub fn token(self) -> Token {
        match self {
            Seat::Player1 => Token::X,
            Seat::Player2 => Token::O,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::Player1 => 0,
            Seat::Player2 => 1,
        }
    }

    pub fn from_index(index: usize) -> Seat {
        if index % 2 == 0 { Seat::Player1 } else { Seat::Player2 }
    }

    pub fn for_token(token: Token) -> Option<Seat> {
        match token {
            Token::X => Some(Seat::Player1),
            Token::O => Some(Seat::Player2),
            Token::Empty => None,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player1 => write!(f, "Player 1"),
            Seat::Player2 => write!(f, "Player 2"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Player1,
    Player2,
    Draw,
}

impl Verdict {
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Verdict::Player1 => Some(Seat::Player1),
            Verdict::Player2 => Some(Seat::Player2),
            Verdict::Draw => None,
        }
    }

    pub fn from_winner(winner: Option<Seat>) -> Self {
        match winner {
            Some(Seat::Player1) => Verdict::Player1,
            Some(Seat::Player2) => Verdict::Player2,
            None => Verdict::Draw,
        }
    }
}

/// Cell coordinate. Rows count up from the bottom of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0..{columns})")]
    ColumnOutOfRange { column: i64, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cell ({column}, {row}) is outside the board")]
    CellOutOfRange { column: usize, row: usize },

    #[error("an empty token cannot be dropped")]
    EmptyToken,

    #[error("game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seats_own_alternating_tokens() {
        assert_eq!(Seat::Player1.token(), Token::X);
        assert_eq!(Seat::Player2.token(), Token::O);
        assert_eq!(Seat::for_token(Token::O), Some(Seat::Player2));
        assert_eq!(Seat::for_token(Token::Empty), None);
        assert_eq!(Seat::from_index(3), Seat::Player2);
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::ColumnOutOfRange { column: -1, columns: 7 };
        assert_eq!(err.to_string(), "column -1 is outside the board (0..7)");
        assert_eq!(MoveError::ColumnFull { column: 3 }.to_string(), "column 3 is full");
    }
}
