//! Integer tags. Values below `PLAYER1` are left free for column and row indices.

pub const UNDEFINED: i32 = -1;

pub const PLAYER1: i32 = 10;
pub const PLAYER2: i32 = 11;

pub const WAITING_FOR_YOU: i32 = 13;
pub const WAITING_FOR_OTHER_PLAYER: i32 = 14;

pub const MOVE: i32 = 15;
pub const PROMPT_FOR_MOVE: i32 = 16;

pub const WAITING: i32 = 20;
pub const DRAW: i32 = 21;
pub const WIN: i32 = 22;
pub const START: i32 = 23;

pub const PLAYER1_WON: i32 = 30;
pub const PLAYER2_WON: i32 = 31;

pub const PLAY_AGAINST_PERSON: i32 = 60;
pub const PLAY_AGAINST_COMPUTER: i32 = 61;

pub const ERROR_ILLEGAL_MOVE: i32 = 100;

/// Largest row or column index that can travel untagged without colliding with a tag.
pub const MAX_UNTAGGED_INDEX: i32 = PLAYER1 - 1;
