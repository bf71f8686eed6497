use super::board::Board;
use super::player::{MoveSource, Player};
use super::types::{MoveError, Seat, Verdict};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Over(Verdict),
}

/// Turn order and outcome on top of a `Board`.
///
/// `Phase::Over` is absorbing: once reached, `make_move` rejects everything
/// and the current seat no longer changes.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    current: usize,
    phase: Phase,
}

impl GameEngine {
    /// A board that is already won or full starts the engine in `Phase::Over`.
    pub fn new(board: Board, player1: Player, player2: Player) -> Self {
        let mut engine = Self {
            board,
            players: [player1, player2],
            current: 0,
            phase: Phase::Playing,
        };
        if !engine.board.is_playable() {
            engine.phase = Phase::Over(engine.settled_verdict());
        }
        engine
    }

    pub fn with_default_players(columns: usize, rows: usize) -> Self {
        Self::new(
            Board::new(columns, rows),
            Player::for_seat(Seat::Player1),
            Player::for_seat(Seat::Player2),
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self.phase {
            Phase::Playing => None,
            Phase::Over(verdict) => Some(verdict),
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_seat(&self) -> Seat {
        Seat::from_index(self.current)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Drops the current player's token into `column` and returns the landing row.
    ///
    /// On any error the turn does not pass; the same player has to move again.
    pub fn make_move(&mut self, column: i32) -> Result<usize, MoveError> {
        if !self.is_playing() {
            return Err(MoveError::GameOver);
        }

        let column = usize::try_from(column).map_err(|_| MoveError::ColumnOutOfRange {
            column: column as i64,
            columns: self.board.columns(),
        })?;
        let row = self.board.insert(self.current_player().token(), column)?;
        self.update_phase();
        Ok(row)
    }

    /// Asks `source` for the current player's column and applies it.
    /// Returns the column and the landing row.
    pub fn play_turn(&mut self, source: &mut dyn MoveSource) -> Result<(usize, usize), MoveError> {
        let column = source.next_move(&self.board);
        let row = self.make_move(column)?;
        Ok((column as usize, row))
    }

    fn update_phase(&mut self) {
        if self.board.is_playable() {
            self.current = (self.current + 1) % 2;
        } else {
            self.phase = Phase::Over(self.settled_verdict());
        }
    }

    fn settled_verdict(&self) -> Verdict {
        let winner = self
            .board
            .winner()
            .and_then(|token| self.players.iter().find(|p| p.token() == token))
            .map(|p| p.seat());
        Verdict::from_winner(winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::Token;

    fn engine() -> GameEngine {
        GameEngine::with_default_players(7, 6)
    }

    #[test]
    fn test_legal_moves_alternate_players() {
        let mut engine = engine();
        let mut seen = Vec::new();
        for column in [0, 1, 2, 3, 4, 5, 6, 0, 1] {
            seen.push(engine.current_index());
            engine.make_move(column).unwrap();
        }
        assert_eq!(seen, vec![0, 1, 0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn test_illegal_move_keeps_current_player() {
        let mut engine = engine();
        engine.make_move(3).unwrap();
        assert_eq!(engine.current_seat(), Seat::Player2);

        assert!(matches!(engine.make_move(7), Err(MoveError::ColumnOutOfRange { .. })));
        assert!(matches!(engine.make_move(-1), Err(MoveError::ColumnOutOfRange { column: -1, .. })));
        assert_eq!(engine.current_seat(), Seat::Player2);
        assert!(engine.is_playing());
    }

    #[test]
    fn test_full_column_is_rejected_for_same_player() {
        let mut engine = engine();
        for _ in 0..3 {
            engine.make_move(0).unwrap();
            engine.make_move(0).unwrap();
        }
        let seat = engine.current_seat();
        assert_eq!(engine.make_move(0), Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(engine.current_seat(), seat);
    }

    #[test]
    fn test_vertical_win_ends_game_for_player_one() {
        let mut engine = engine();
        for _ in 0..3 {
            engine.make_move(0).unwrap();
            engine.make_move(1).unwrap();
        }
        assert_eq!(engine.make_move(0), Ok(3));

        assert_eq!(engine.phase(), Phase::Over(Verdict::Player1));
        assert_eq!(engine.current_seat(), Seat::Player1);
        assert_eq!(engine.make_move(2), Err(MoveError::GameOver));
        assert_eq!(engine.current_seat(), Seat::Player1);
    }

    #[test]
    fn test_player_two_can_win() {
        let mut engine = engine();
        for column in [0, 3, 0, 4, 1, 5, 0] {
            engine.make_move(column).unwrap();
        }
        assert!(engine.is_playing());
        assert_eq!(engine.make_move(6), Ok(0));
        assert_eq!(engine.verdict(), Some(Verdict::Player2));
    }

    #[test]
    fn test_engine_over_finished_board_starts_over() {
        let mut won = Board::new(5, 4);
        for column in 0..4 {
            won.insert(Token::O, column).unwrap();
        }
        let mut engine = GameEngine::new(won, Player::for_seat(Seat::Player1), Player::for_seat(Seat::Player2));
        assert_eq!(engine.verdict(), Some(Verdict::Player2));
        assert_eq!(engine.make_move(4), Err(MoveError::GameOver));

        let empty = GameEngine::with_default_players(3, 0);
        assert_eq!(empty.phase(), Phase::Over(Verdict::Draw));
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut engine = GameEngine::with_default_players(4, 4);
        // Player 1 drops at even turns, player 2 at odd turns.
        for column in [0, 1, 0, 1, 1, 0, 1, 0, 2, 3, 2, 3, 3, 2, 3, 2] {
            engine.make_move(column).unwrap();
        }
        assert_eq!(engine.verdict(), Some(Verdict::Draw));
        assert!(engine.board().winner().is_none());
    }

    #[test]
    fn test_play_turn_uses_move_source() {
        let mut engine = engine();
        let mut source = super::super::ScriptedMoveSource::new([9, 4]);
        assert!(engine.play_turn(&mut source).is_err());
        assert_eq!(engine.play_turn(&mut source), Ok((4, 0)));
        assert_eq!(engine.current_seat(), Seat::Player2);
    }
}
