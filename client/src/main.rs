use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::{OpponentKind, RandomMoveSource, Token, log, logger};
use connect_four_client::Agent;
use connect_four_client::SessionClient;
use connect_four_client::client_config::get_config_manager;

#[derive(Clone, Copy, ValueEnum)]
enum Opponent {
    Person,
    Computer,
}

impl From<Opponent> for OpponentKind {
    fn from(value: Opponent) -> Self {
        match value {
            Opponent::Person => OpponentKind::Person,
            Opponent::Computer => OpponentKind::Computer,
        }
    }
}

#[derive(Parser)]
#[command(name = "connect_four_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    config: Option<String>,

    /// Server address as host:port.
    #[arg(long)]
    server: Option<String>,

    #[arg(long, value_enum)]
    opponent: Option<Opponent>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(args.config.as_deref()).get_config()?;
    if let Some(server) = args.server {
        config.server_address = server;
    }
    if let Some(opponent) = args.opponent {
        config.opponent = opponent.into();
    }
    config.validate()?;

    log!("Connecting to {}", config.server_address);
    let (client, events) = SessionClient::connect(&config.server_address, config.opponent).await?;

    let source = match config.seed {
        Some(seed) => RandomMoveSource::seeded(seed),
        None => RandomMoveSource::from_random(),
    };
    let agent = Agent::new(client, events, config.board.create_board(), source);
    let (verdict, board) = agent.run().await?;

    log!("Final verdict: {:?}", verdict);
    for row in (0..board.rows()).rev() {
        let line: String = (0..board.columns())
            .map(|column| match board.cell(column, row) {
                Some(Token::Empty) | None => '.',
                Some(token) => token.symbol(),
            })
            .collect();
        log!("{}", line);
    }

    Ok(())
}
