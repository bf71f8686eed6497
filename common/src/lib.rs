pub mod config;
pub mod games;
pub mod logger;
pub mod protocol;

pub use games::connect_four::{
    Board, BoardSettings, GameEngine, MoveError, MoveSource, Phase, Player, RandomMoveSource, Seat, Token,
    Verdict,
};
pub use protocol::{ClientMessage, MoveResult, OpponentKind, ProtocolError, ServerMessage};
