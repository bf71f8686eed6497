use std::future::Future;
use std::net::SocketAddr;

use common::{OpponentKind, RandomMoveSource, Seat, ServerMessage, log};
use tokio::net::TcpListener;

use crate::identifiers::SessionCounter;
use crate::participant::{Connection, Participant};
use crate::server_config::{ACCEPT_RETRY_DELAY, ServerConfig};
use crate::session::{Session, SessionError};

/// Pairs incoming connections into sessions and runs each one on its own task.
///
/// Connections are admitted in accept order. The first connection of a pair is
/// always PLAYER1; it decides whether a second connection or an automated
/// opponent fills PLAYER2. Sessions are formed one at a time, so a client
/// that connects and never sends its opponent request holds up admission.
pub struct SessionServer {
    listener: TcpListener,
    config: ServerConfig,
    sessions: SessionCounter,
}

impl SessionServer {
    pub async fn bind(config: ServerConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind(config.bind_address()).await?;
        Ok(Self::from_listener(listener, config))
    }

    pub fn from_listener(listener: TcpListener, config: ServerConfig) -> Self {
        Self {
            listener,
            config,
            sessions: SessionCounter::new(),
        }
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn run(self) {
        self.run_until(std::future::pending()).await
    }

    /// Admits sessions until `shutdown` completes. Sessions already running keep
    /// going on their own tasks.
    pub async fn run_until<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    log!("Stopped admitting sessions after {} sessions", self.sessions.issued());
                    return;
                }
                formed = self.form_session() => match formed {
                    Ok(session) => {
                        tokio::spawn(async move {
                            let number = session.number();
                            if let Err(e) = session.run().await {
                                log!("[session:{}] Terminated: {}", number, e);
                            }
                        });
                    }
                    Err(SessionError::Accept(e)) => {
                        log!("Failed to accept connection: {}", e);
                        tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                    }
                    Err(e) => log!("Failed to form session: {}", e),
                },
            }
        }
    }

    async fn form_session(&self) -> Result<Session, SessionError> {
        log!("Waiting for players to join the next session");

        let mut first = self.accept(Seat::Player1).await?;
        first.send(&ServerMessage::Assignment(Seat::Player1)).await?;
        let kind = first.read_opponent_kind().await?;

        let second = match kind {
            OpponentKind::Computer => {
                let source = self.automated_source();
                log!(
                    "Player 1 ({}) opts to play against the computer (seed {})",
                    first.peer(),
                    source.seed()
                );
                Participant::automated(Seat::Player2, source)
            }
            OpponentKind::Person => {
                log!("Player 1 ({}) opts to play against a person; waiting for player 2", first.peer());
                let mut second = self.accept(Seat::Player2).await?;
                second.send(&ServerMessage::Assignment(Seat::Player2)).await?;
                // Every client opens with an opponent request; player 2's has no effect.
                let ignored = second.read_opponent_kind().await?;
                log!("Player 2 ({}) joined requesting {:?}", second.peer(), ignored);
                Participant::Remote(second)
            }
        };

        let number = self.sessions.next_number();
        log!("[session:{}] Formed", number);
        Ok(Session::new(number, &self.config.board, Participant::Remote(first), second))
    }

    async fn accept(&self, seat: Seat) -> Result<Connection, SessionError> {
        let (stream, peer) = self.listener.accept().await?;
        if let Err(e) = stream.set_nodelay(true) {
            log!("Could not disable Nagle for {}: {}", peer, e);
        }
        log!("{} joined from {}", seat, peer);
        Ok(Connection::new(seat, peer.to_string(), stream))
    }

    fn automated_source(&self) -> RandomMoveSource {
        match self.config.computer_seed {
            // Offset by the number this session is about to receive.
            Some(seed) => RandomMoveSource::seeded(seed.wrapping_add(self.sessions.issued() + 1)),
            None => RandomMoveSource::from_random(),
        }
    }
}
