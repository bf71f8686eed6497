use std::collections::VecDeque;

use crate::games::SessionRng;
use super::board::Board;
use super::types::{Seat, Token};

pub const COMPUTER_PLAYER_NAME: &str = "Computer player";

/// A participant's identity within one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    seat: Seat,
}

impl Player {
    pub fn new(seat: Seat, name: impl Into<String>) -> Self {
        Self { name: name.into(), seat }
    }

    /// Default name derived from the seat's token, e.g. "Player X".
    pub fn for_seat(seat: Seat) -> Self {
        Self::new(seat, format!("Player {}", seat.token()))
    }

    pub fn computer(seat: Seat) -> Self {
        Self::new(seat, COMPUTER_PLAYER_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn token(&self) -> Token {
        self.seat.token()
    }
}

/// Anything that can pick the next column for the player whose turn it is.
///
/// The returned column is not trusted: the engine runs it through the same
/// legality check as any other move.
pub trait MoveSource: Send {
    fn next_move(&mut self, board: &Board) -> i32;
}

/// Picks uniformly among the columns that are not yet full.
pub struct RandomMoveSource {
    rng: SessionRng,
}

impl RandomMoveSource {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SessionRng::new(seed))
    }

    pub fn from_random() -> Self {
        Self::new(SessionRng::from_random())
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl MoveSource for RandomMoveSource {
    fn next_move(&mut self, board: &Board) -> i32 {
        let columns = board.playable_columns();
        self.rng
            .choose(&columns)
            .map(|&column| column as i32)
            .unwrap_or(-1)
    }
}

/// Replays a fixed list of columns, then keeps answering -1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoveSource {
    moves: VecDeque<i32>,
}

impl ScriptedMoveSource {
    pub fn new(moves: impl IntoIterator<Item = i32>) -> Self {
        Self { moves: moves.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoveSource {
    fn next_move(&mut self, _board: &Board) -> i32 {
        self.moves.pop_front().unwrap_or(-1)
    }
}
