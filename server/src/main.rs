use clap::Parser;
use common::config::Validate;
use common::{log, logger};
use connect_four_server::SessionServer;
use connect_four_server::server_config::get_config_manager;

#[derive(Parser)]
#[command(name = "connect_four_server")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config; defaults to a file next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(args.config.as_deref()).get_config()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    config.validate()?;

    let server = SessionServer::bind(config.clone()).await?;
    log!(
        "Connect four server listening on {} ({}x{} board)",
        server.local_addr()?,
        config.board.columns,
        config.board.rows
    );

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    server.run_until(shutdown_signal).await;

    log!("Server shut down gracefully");

    Ok(())
}
