use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::games::connect_four::Seat;
use super::message::{Encode, MoveResult, OpponentKind, ServerMessage, seat_from_wire};
use super::{ProtocolError, tags};

pub async fn write_message<W, M>(writer: &mut W, message: &M) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
    M: Encode + ?Sized,
{
    writer.write_all(&message.to_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

pub async fn read_int<R>(reader: &mut R) -> Result<i32, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    Ok(reader.read_i32().await?)
}

pub async fn read_opponent_kind<R>(reader: &mut R) -> Result<OpponentKind, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    Ok(OpponentKind::from_wire(read_int(reader).await?))
}

pub async fn read_assignment<R>(reader: &mut R) -> Result<Seat, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    seat_from_wire(read_int(reader).await?)
}

/// Reads the bare column a client submits after being prompted.
pub async fn read_client_move<R>(reader: &mut R) -> Result<i32, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    read_int(reader).await
}

/// Reads one server message. A value that is not a known tag is decoded as
/// the result of the reader's own outstanding move.
pub async fn read_server_message<R>(reader: &mut R) -> Result<ServerMessage, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    let tag = read_int(reader).await?;
    match tag {
        tags::START => Ok(ServerMessage::Start),
        tags::PROMPT_FOR_MOVE => Ok(ServerMessage::PromptForMove),
        tags::DRAW => Ok(ServerMessage::Draw),
        tags::WIN => {
            let winner = read_int(reader).await?;
            Ok(ServerMessage::Win(seat_from_wire(winner)?))
        }
        tags::MOVE => {
            // Consume every field before validating so a bad value cannot desync the stream.
            let player = read_int(reader).await?;
            let column = read_int(reader).await?;
            let row = read_int(reader).await?;
            Ok(ServerMessage::Move {
                player: seat_from_wire(player)?,
                column: index_field(column, "a column index")?,
                row: index_field(row, "a row index")?,
            })
        }
        other => Ok(ServerMessage::MoveResult(MoveResult::from_wire(other)?)),
    }
}

fn index_field(value: i32, expected: &'static str) -> Result<usize, ProtocolError> {
    usize::try_from(value).map_err(|_| ProtocolError::UnexpectedValue { expected, value })
}
