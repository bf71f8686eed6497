use common::{Board, MoveResult, MoveSource, Token, Verdict, log};
use tokio::sync::mpsc;

use crate::session_client::{ClientError, SessionClient, SessionEvent};

/// Plays a session without a human: keeps a local copy of the board in step
/// with the server and answers every prompt from a move source.
pub struct Agent {
    client: SessionClient,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    board: Board,
    source: Box<dyn MoveSource>,
    pending_column: Option<usize>,
}

impl Agent {
    pub fn new(
        client: SessionClient,
        events: mpsc::UnboundedReceiver<SessionEvent>,
        board: Board,
        source: impl MoveSource + 'static,
    ) -> Self {
        Self {
            client,
            events,
            board,
            source: Box::new(source),
            pending_column: None,
        }
    }

    /// Plays until the server announces an outcome.
    pub async fn run(mut self) -> Result<(Verdict, Board), ClientError> {
        let seat = self.client.seat();

        while let Some(event) = self.events.recv().await {
            if let Some(verdict) = event.outcome() {
                return self.finish(verdict).await;
            }

            match event {
                SessionEvent::PlayerAssigned(assigned) => log!("Playing as {}", assigned),
                SessionEvent::GameStarted => log!("Game started"),
                SessionEvent::PromptForMove => {
                    let column = self.source.next_move(&self.board);
                    self.pending_column = usize::try_from(column).ok();
                    self.client.send_move(column).await?;
                }
                SessionEvent::MoveResult(MoveResult::Landed(row)) => {
                    log!("Our token landed in row {}", row);
                    if let Some(column) = self.pending_column.take() {
                        self.mirror(seat.token(), column, row);
                    }
                }
                SessionEvent::MoveResult(MoveResult::Illegal) => {
                    log!("Server rejected column {:?}", self.pending_column.take());
                }
                SessionEvent::MoveReceived { player, column, row } => {
                    self.mirror(player.token(), column, row);
                }
                SessionEvent::Win(_) | SessionEvent::Draw => {}
            }
        }

        self.client.join().await?;
        Err(ClientError::Stopped)
    }

    fn mirror(&mut self, token: Token, column: usize, row: usize) {
        if let Err(e) = self.board.set_cell(token, column, row) {
            log!("Could not mirror {} at c{}r{}: {}", token.symbol(), column, row, e);
        }
    }

    async fn finish(self, verdict: Verdict) -> Result<(Verdict, Board), ClientError> {
        match verdict.winner() {
            Some(winner) if winner == self.client.seat() => log!("We won"),
            Some(winner) => log!("{} won", winner),
            None => log!("Game ended in a draw"),
        }
        self.client.stop();
        self.client.join().await?;
        Ok((verdict, self.board))
    }
}
