use std::time::Duration;

use common::protocol::{ClientMessage, read_assignment, read_server_message, write_message};
use common::{BoardSettings, MoveResult, OpponentKind, Seat, ServerMessage};
use connect_four_server::SessionServer;
use connect_four_server::server_config::ServerConfig;
use tokio::net::{TcpListener, TcpStream};

async fn start_server(config: ServerConfig) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server = SessionServer::from_listener(listener, config);
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());
    addr
}

async fn join(addr: std::net::SocketAddr, kind: OpponentKind) -> (TcpStream, Seat) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    write_message(&mut stream, &ClientMessage::OpponentRequest(kind)).await.unwrap();
    let seat = read_assignment(&mut stream).await.unwrap();
    (stream, seat)
}

async fn next_message(stream: &mut TcpStream) -> ServerMessage {
    tokio::time::timeout(Duration::from_secs(5), read_server_message(stream))
        .await
        .expect("timed out waiting for server")
        .unwrap()
}

#[tokio::test]
async fn test_two_people_are_paired_in_accept_order() {
    let addr = start_server(ServerConfig::default()).await;

    let (mut first, first_seat) = join(addr, OpponentKind::Person).await;
    let (mut second, second_seat) = join(addr, OpponentKind::Person).await;
    assert_eq!(first_seat, Seat::Player1);
    assert_eq!(second_seat, Seat::Player2);

    assert_eq!(next_message(&mut first).await, ServerMessage::Start);
    assert_eq!(next_message(&mut second).await, ServerMessage::Start);
    assert_eq!(next_message(&mut first).await, ServerMessage::PromptForMove);

    write_message(&mut first, &ClientMessage::Move(2)).await.unwrap();
    assert_eq!(
        next_message(&mut first).await,
        ServerMessage::MoveResult(MoveResult::Landed(0))
    );
    assert_eq!(
        next_message(&mut second).await,
        ServerMessage::Move { player: Seat::Player1, column: 2, row: 0 }
    );
    assert_eq!(next_message(&mut second).await, ServerMessage::PromptForMove);
}

#[tokio::test]
async fn test_computer_game_runs_to_completion() {
    let config = ServerConfig {
        board: BoardSettings { columns: 4, rows: 4 },
        computer_seed: Some(7),
        ..ServerConfig::default()
    };
    let addr = start_server(config).await;

    let (mut stream, seat) = join(addr, OpponentKind::Computer).await;
    assert_eq!(seat, Seat::Player1);
    assert_eq!(next_message(&mut stream).await, ServerMessage::Start);

    let mut next_column = 0;
    loop {
        match next_message(&mut stream).await {
            ServerMessage::PromptForMove => {
                // Sweep columns; illegal picks are answered and re-prompted.
                write_message(&mut stream, &ClientMessage::Move(next_column % 4)).await.unwrap();
                next_column += 1;
                let result = next_message(&mut stream).await;
                assert!(matches!(result, ServerMessage::MoveResult(_)), "got {:?}", result);
            }
            ServerMessage::Move { player, .. } => assert_eq!(player, Seat::Player2),
            ServerMessage::Win(_) | ServerMessage::Draw => break,
            other => panic!("unexpected message {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let addr = start_server(ServerConfig::default()).await;

    let (mut solo, _) = join(addr, OpponentKind::Computer).await;
    let (mut first, _) = join(addr, OpponentKind::Person).await;
    let (mut second, second_seat) = join(addr, OpponentKind::Person).await;
    assert_eq!(second_seat, Seat::Player2);

    assert_eq!(next_message(&mut solo).await, ServerMessage::Start);
    assert_eq!(next_message(&mut first).await, ServerMessage::Start);
    assert_eq!(next_message(&mut second).await, ServerMessage::Start);

    drop(first);
    let after_drop = tokio::time::timeout(Duration::from_secs(5), read_server_message(&mut second))
        .await
        .expect("session did not end after a disconnect");
    assert!(after_drop.is_err());
    assert_eq!(next_message(&mut solo).await, ServerMessage::PromptForMove);
}
