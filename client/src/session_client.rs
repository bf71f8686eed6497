use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use common::protocol::{ByteStream, ClientMessage, read_assignment, read_server_message, write_message};
use common::{MoveResult, OpponentKind, ProtocolError, Seat, ServerMessage, Verdict, log};
use tokio::io::{ReadHalf, WriteHalf};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("handshake failed: {0}")]
    Handshake(#[source] ProtocolError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("session ended before an outcome was announced")]
    Stopped,

    #[error("receive task failed: {0}")]
    ReceiveTask(#[from] tokio::task::JoinError),
}

/// What the server has told this connection, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    PlayerAssigned(Seat),
    GameStarted,
    MoveReceived { player: Seat, column: usize, row: usize },
    PromptForMove,
    MoveResult(MoveResult),
    Win(Seat),
    Draw,
}

impl SessionEvent {
    /// The verdict carried by a WIN or DRAW event.
    pub fn outcome(&self) -> Option<Verdict> {
        match *self {
            SessionEvent::Win(winner) => Some(Verdict::from_winner(Some(winner))),
            SessionEvent::Draw => Some(Verdict::Draw),
            _ => None,
        }
    }
}

/// One endpoint of a session. Moves go out through [`SessionClient::send_move`];
/// everything the server sends arrives on the event channel handed out at
/// connect time, fed by a background receive task.
pub struct SessionClient {
    seat: Seat,
    writer: WriteHalf<Box<dyn ByteStream>>,
    awaiting_result: Arc<AtomicBool>,
    stop: watch::Sender<bool>,
    receiver: JoinHandle<Result<(), ClientError>>,
}

impl SessionClient {
    pub async fn connect(
        address: &str,
        opponent: OpponentKind,
    ) -> Result<(Self, mpsc::UnboundedReceiver<SessionEvent>), ClientError> {
        let stream = TcpStream::connect(address)
            .await
            .map_err(|source| ClientError::Connect {
                address: address.to_string(),
                source,
            })?;
        if let Err(e) = stream.set_nodelay(true) {
            log!("Could not disable Nagle: {}", e);
        }
        Self::from_stream(stream, opponent).await
    }

    /// Sends the opponent request, waits for the seat assignment and starts
    /// the receive task. The assignment is the first event delivered.
    pub async fn from_stream(
        stream: impl ByteStream + 'static,
        opponent: OpponentKind,
    ) -> Result<(Self, mpsc::UnboundedReceiver<SessionEvent>), ClientError> {
        let mut stream: Box<dyn ByteStream> = Box::new(stream);

        write_message(&mut stream, &ClientMessage::OpponentRequest(opponent))
            .await
            .map_err(ClientError::Handshake)?;
        let seat = read_assignment(&mut stream).await.map_err(ClientError::Handshake)?;
        log!("Assigned {} after requesting {:?}", seat, opponent);

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let _ = events_tx.send(SessionEvent::PlayerAssigned(seat));

        let (reader, writer) = tokio::io::split(stream);
        let awaiting_result = Arc::new(AtomicBool::new(false));
        let (stop, stop_rx) = watch::channel(false);

        let receiver = tokio::spawn(receive_loop(reader, events_tx, awaiting_result.clone(), stop_rx));

        let client = Self {
            seat,
            writer,
            awaiting_result,
            stop,
            receiver,
        };
        Ok((client, events_rx))
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Submits a column. Only meaningful right after a prompt; the reply is
    /// delivered as [`SessionEvent::MoveResult`].
    pub async fn send_move(&mut self, column: i32) -> Result<(), ClientError> {
        self.awaiting_result.store(true, Ordering::SeqCst);
        log!("Sending column {}", column);
        if let Err(e) = write_message(&mut self.writer, &ClientMessage::Move(column)).await {
            self.awaiting_result.store(false, Ordering::SeqCst);
            return Err(e.into());
        }
        Ok(())
    }

    /// Asks the receive task to exit. Events already queued stay readable.
    pub fn stop(&self) {
        self.stop.send_replace(true);
    }

    /// Waits for the receive task and reports how it ended.
    pub async fn join(self) -> Result<(), ClientError> {
        self.receiver.await?
    }
}

async fn receive_loop(
    mut reader: ReadHalf<Box<dyn ByteStream>>,
    events: mpsc::UnboundedSender<SessionEvent>,
    awaiting_result: Arc<AtomicBool>,
    mut stop: watch::Receiver<bool>,
) -> Result<(), ClientError> {
    let mut finished = false;

    loop {
        let received = tokio::select! {
            _ = stop.wait_for(|stopped| *stopped) => {
                log!("Receive loop stopped");
                return Ok(());
            }
            received = read_server_message(&mut reader) => received,
        };

        let message = match received {
            Ok(message) => message,
            Err(e) if finished && e.is_disconnect() => return Ok(()),
            Err(e) if e.is_disconnect() => {
                log!("Server closed the connection before an outcome");
                return Err(ClientError::Stopped);
            }
            Err(ProtocolError::UnexpectedValue { expected, value }) => {
                log!("Dropping value {} where {} was expected", value, expected);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let event = match message {
            ServerMessage::Start => SessionEvent::GameStarted,
            ServerMessage::PromptForMove => SessionEvent::PromptForMove,
            ServerMessage::Move { player, column, row } => {
                log!("{} moved to c{}r{}", player, column, row);
                SessionEvent::MoveReceived { player, column, row }
            }
            ServerMessage::MoveResult(result) => {
                if !awaiting_result.swap(false, Ordering::SeqCst) {
                    log!("Dropping {:?} with no move outstanding", result);
                    continue;
                }
                SessionEvent::MoveResult(result)
            }
            ServerMessage::Win(seat) => {
                finished = true;
                SessionEvent::Win(seat)
            }
            ServerMessage::Draw => {
                finished = true;
                SessionEvent::Draw
            }
            ServerMessage::Assignment(seat) => SessionEvent::PlayerAssigned(seat),
        };

        if events.send(event).is_err() {
            return Ok(());
        }
    }
}
