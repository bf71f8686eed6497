//! Wire vocabulary shared by the session server and clients.
//!
//! Every value on the wire is a big-endian `i32`. A message is a tag followed
//! by a fixed number of fields implied by the tag. Two values travel untagged:
//! the column a client submits right after `PROMPT_FOR_MOVE`, and the result
//! the server sends back for it. Both sides must stay in lockstep.

use tokio::io::{AsyncRead, AsyncWrite};

mod codec;
mod message;
pub mod tags;

pub use codec::{
    read_assignment, read_client_move, read_int, read_opponent_kind, read_server_message,
    write_message,
};
pub use message::{ClientMessage, Encode, MoveResult, OpponentKind, ServerMessage, seat_from_wire, seat_to_wire};

/// Any ordered byte stream an endpoint can be reached over.
pub trait ByteStream: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T> ByteStream for T where T: AsyncRead + AsyncWrite + Unpin + Send {}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("connection error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected value {value} where {expected} was expected")]
    UnexpectedValue { expected: &'static str, value: i32 },
}

impl ProtocolError {
    /// True when the peer went away rather than sending something wrong.
    pub fn is_disconnect(&self) -> bool {
        match self {
            ProtocolError::Io(err) => matches!(
                err.kind(),
                std::io::ErrorKind::UnexpectedEof
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::BrokenPipe
            ),
            ProtocolError::UnexpectedValue { .. } => false,
        }
    }
}
