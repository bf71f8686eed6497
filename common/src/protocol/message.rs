use serde::{Deserialize, Serialize};

use crate::games::connect_four::Seat;
use super::ProtocolError;
use super::tags;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentKind {
    Person,
    Computer,
}

impl OpponentKind {
    pub fn to_wire(self) -> i32 {
        match self {
            OpponentKind::Person => tags::PLAY_AGAINST_PERSON,
            OpponentKind::Computer => tags::PLAY_AGAINST_COMPUTER,
        }
    }

    /// Anything other than `PLAY_AGAINST_COMPUTER` asks for a human opponent.
    pub fn from_wire(value: i32) -> Self {
        if value == tags::PLAY_AGAINST_COMPUTER {
            OpponentKind::Computer
        } else {
            OpponentKind::Person
        }
    }
}

pub fn seat_to_wire(seat: Seat) -> i32 {
    match seat {
        Seat::Player1 => tags::PLAYER1,
        Seat::Player2 => tags::PLAYER2,
    }
}

pub fn seat_from_wire(value: i32) -> Result<Seat, ProtocolError> {
    match value {
        tags::PLAYER1 => Ok(Seat::Player1),
        tags::PLAYER2 => Ok(Seat::Player2),
        _ => Err(ProtocolError::UnexpectedValue {
            expected: "a player id",
            value,
        }),
    }
}

/// Outcome of the move a client just submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Landed(usize),
    Illegal,
}

impl MoveResult {
    pub fn to_wire(self) -> i32 {
        match self {
            MoveResult::Landed(row) => row as i32,
            MoveResult::Illegal => tags::ERROR_ILLEGAL_MOVE,
        }
    }

    pub fn from_wire(value: i32) -> Result<Self, ProtocolError> {
        match value {
            tags::ERROR_ILLEGAL_MOVE => Ok(MoveResult::Illegal),
            0..=tags::MAX_UNTAGGED_INDEX => Ok(MoveResult::Landed(value as usize)),
            _ => Err(ProtocolError::UnexpectedValue {
                expected: "a landing row or ERROR_ILLEGAL_MOVE",
                value,
            }),
        }
    }
}

/// Everything the server sends to a connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerMessage {
    Assignment(Seat),
    Start,
    PromptForMove,
    Move { player: Seat, column: usize, row: usize },
    Win(Seat),
    Draw,
    /// Untagged reply to the receiver's own move.
    MoveResult(MoveResult),
}

/// Everything a client sends to the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientMessage {
    OpponentRequest(OpponentKind),
    /// Untagged column choice, only valid right after a prompt.
    Move(i32),
}

pub trait Encode {
    fn encode(&self, out: &mut Vec<u8>);

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16);
        self.encode(&mut out);
        out
    }
}

fn put(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_be_bytes());
}

impl Encode for ServerMessage {
    fn encode(&self, out: &mut Vec<u8>) {
        match *self {
            ServerMessage::Assignment(seat) => put(out, seat_to_wire(seat)),
            ServerMessage::Start => put(out, tags::START),
            ServerMessage::PromptForMove => put(out, tags::PROMPT_FOR_MOVE),
            ServerMessage::Move { player, column, row } => {
                put(out, tags::MOVE);
                put(out, seat_to_wire(player));
                put(out, column as i32);
                put(out, row as i32);
            }
            ServerMessage::Win(seat) => {
                put(out, tags::WIN);
                put(out, seat_to_wire(seat));
            }
            ServerMessage::Draw => put(out, tags::DRAW),
            ServerMessage::MoveResult(result) => put(out, result.to_wire()),
        }
    }
}

impl Encode for ClientMessage {
    fn encode(&self, out: &mut Vec<u8>) {
        match *self {
            ClientMessage::OpponentRequest(kind) => put(out, kind.to_wire()),
            ClientMessage::Move(column) => put(out, column),
        }
    }
}
