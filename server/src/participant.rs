use common::protocol::{self, ByteStream, ServerMessage};
use common::{MoveSource, OpponentKind, Player, ProtocolError, Seat};

#[derive(Debug, thiserror::Error)]
#[error("{seat} ({peer}): {source}")]
pub struct ConnectionError {
    pub seat: Seat,
    pub peer: String,
    #[source]
    pub source: ProtocolError,
}

/// One remote participant's stream. Only the owning session reads or writes it.
pub struct Connection {
    seat: Seat,
    peer: String,
    stream: Box<dyn ByteStream>,
}

impl Connection {
    pub fn new(seat: Seat, peer: impl Into<String>, stream: impl ByteStream + 'static) -> Self {
        Self {
            seat,
            peer: peer.into(),
            stream: Box::new(stream),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }

    pub async fn send(&mut self, message: &ServerMessage) -> Result<(), ConnectionError> {
        let result = protocol::write_message(&mut self.stream, message).await;
        result.map_err(|source| self.error(source))
    }

    pub async fn read_opponent_kind(&mut self) -> Result<OpponentKind, ConnectionError> {
        let result = protocol::read_opponent_kind(&mut self.stream).await;
        result.map_err(|source| self.error(source))
    }

    pub async fn read_move(&mut self) -> Result<i32, ConnectionError> {
        let result = protocol::read_client_move(&mut self.stream).await;
        result.map_err(|source| self.error(source))
    }

    fn error(&self, source: ProtocolError) -> ConnectionError {
        ConnectionError {
            seat: self.seat,
            peer: self.peer.clone(),
            source,
        }
    }
}

/// Who fills a seat in a session, fixed when the session is formed.
pub enum Participant {
    Remote(Connection),
    Automated {
        player: Player,
        source: Box<dyn MoveSource>,
    },
}

impl Participant {
    pub fn automated(seat: Seat, source: impl MoveSource + 'static) -> Self {
        Participant::Automated {
            player: Player::computer(seat),
            source: Box::new(source),
        }
    }

    pub fn player(&self) -> Player {
        match self {
            Participant::Remote(connection) => Player::for_seat(connection.seat()),
            Participant::Automated { player, .. } => player.clone(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Participant::Remote(connection) => format!("remote {}", connection.peer()),
            Participant::Automated { player, .. } => player.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::RandomMoveSource;
    use common::protocol::read_server_message;

    #[tokio::test]
    async fn test_connection_errors_name_the_seat() {
        let (server_end, client_end) = tokio::io::duplex(64);
        drop(client_end);
        let mut connection = Connection::new(Seat::Player2, "test-peer", server_end);
        let err = connection.read_move().await.unwrap_err();
        assert_eq!(err.seat, Seat::Player2);
        assert!(err.source.is_disconnect());
        assert!(err.to_string().starts_with("Player 2 (test-peer)"));
    }

    #[tokio::test]
    async fn test_connection_sends_encoded_messages() {
        let (server_end, mut client_end) = tokio::io::duplex(64);
        let mut connection = Connection::new(Seat::Player1, "peer", server_end);
        connection.send(&ServerMessage::Start).await.unwrap();
        assert_eq!(read_server_message(&mut client_end).await.unwrap(), ServerMessage::Start);
    }

    #[test]
    fn test_participant_players() {
        let automated = Participant::automated(Seat::Player2, RandomMoveSource::seeded(3));
        assert!(matches!(automated, Participant::Automated { .. }));
        assert_eq!(automated.player().name(), common::games::connect_four::COMPUTER_PLAYER_NAME);
        assert_eq!(automated.player().seat(), Seat::Player2);
    }
}
