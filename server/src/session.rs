use common::games::connect_four::MoveError;
use common::{BoardSettings, GameEngine, MoveResult, Seat, ServerMessage, Verdict, log};

use crate::identifiers::SessionNumber;
use crate::participant::{Connection, ConnectionError, Participant};

/// Back-to-back illegal picks tolerated from an automated source.
const MAX_AUTOMATED_ATTEMPTS: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("connection failed: {0}")]
    Connection(#[from] ConnectionError),

    #[error("accept failed: {0}")]
    Accept(#[from] std::io::Error),

    #[error("automated {seat} produced no legal move: {source}")]
    AutomatedMove {
        seat: Seat,
        #[source]
        source: MoveError,
    },
}

/// One game between two seats. The session task owns the engine and both
/// streams outright, so nothing here is shared or locked.
pub struct Session {
    number: SessionNumber,
    engine: GameEngine,
    participants: [Participant; 2],
}

impl Session {
    pub fn new(
        number: SessionNumber,
        board: &BoardSettings,
        player1: Participant,
        player2: Participant,
    ) -> Self {
        let engine = GameEngine::new(board.create_board(), player1.player(), player2.player());
        Self {
            number,
            engine,
            participants: [player1, player2],
        }
    }

    pub fn number(&self) -> SessionNumber {
        self.number
    }

    /// Runs the game to a win or a draw. A failing stream ends the session
    /// with an error; the other participant is simply disconnected.
    pub async fn run(mut self) -> Result<Verdict, SessionError> {
        log!(
            "[session:{}] Starting: {} vs {}",
            self.number,
            self.participants[0].describe(),
            self.participants[1].describe()
        );

        for connection in self.connections() {
            connection.send(&ServerMessage::Start).await?;
        }

        loop {
            let seat = self.engine.current_seat();
            let (column, row) = self.take_turn(seat).await?;
            log!("[session:{}] {} moves to c{}r{}", self.number, seat, column, row);

            let update = ServerMessage::Move { player: seat, column, row };
            for connection in self.connections() {
                if connection.seat() != seat {
                    connection.send(&update).await?;
                }
            }

            if let Some(verdict) = self.engine.verdict() {
                self.announce(verdict).await?;
                return Ok(verdict);
            }
        }
    }

    async fn take_turn(&mut self, seat: Seat) -> Result<(usize, usize), SessionError> {
        let number = self.number;
        let engine = &mut self.engine;

        match &mut self.participants[seat.index()] {
            Participant::Remote(connection) => loop {
                connection.send(&ServerMessage::PromptForMove).await?;
                let column = connection.read_move().await?;

                match engine.make_move(column) {
                    Ok(row) => {
                        connection
                            .send(&ServerMessage::MoveResult(MoveResult::Landed(row)))
                            .await?;
                        return Ok((column as usize, row));
                    }
                    Err(err) => {
                        log!("[session:{}] {} tried column {}: {}", number, seat, column, err);
                        connection
                            .send(&ServerMessage::MoveResult(MoveResult::Illegal))
                            .await?;
                    }
                }
            },
            Participant::Automated { source, .. } => {
                let mut last_error = MoveError::GameOver;
                for _ in 0..MAX_AUTOMATED_ATTEMPTS {
                    match engine.play_turn(&mut **source) {
                        Ok(placed) => return Ok(placed),
                        Err(err) => last_error = err,
                    }
                }
                Err(SessionError::AutomatedMove { seat, source: last_error })
            }
        }
    }

    async fn announce(&mut self, verdict: Verdict) -> Result<(), SessionError> {
        let message = match verdict.winner() {
            Some(seat) => {
                log!("[session:{}] {} wins", self.number, seat);
                ServerMessage::Win(seat)
            }
            None => {
                log!("[session:{}] Draw", self.number);
                ServerMessage::Draw
            }
        };

        let mut first_error = None;
        for connection in self.connections() {
            if let Err(err) = connection.send(&message).await
                && first_error.is_none()
            {
                first_error = Some(err);
            }
        }
        match first_error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn connections(&mut self) -> impl Iterator<Item = &mut Connection> {
        self.participants.iter_mut().filter_map(|participant| match participant {
            Participant::Remote(connection) => Some(connection),
            Participant::Automated { .. } => None,
        })
    }
}
