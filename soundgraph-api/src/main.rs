//! Soundgraph API server binary.

use clap::Parser;
use soundgraph_api::config::ApiConfig;
use soundgraph_api::server::run_server;
use soundgraph_api::state::AppState;
use std::net::SocketAddr;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Soundgraph API - graph-driven music generation backend
#[derive(Parser)]
#[command(name = "soundgraph-api")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind
    #[arg(short, long, env = "SOUNDGRAPH_ADDR", default_value = "0.0.0.0:8000")]
    addr: SocketAddr,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");

    match rt.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "soundgraph_api={level},soundgraph={level},tower_http={}",
            if verbosity >= 2 { "debug" } else { "warn" }
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .init();
}

/// Main async entry point: build state from the environment and serve
/// until ctrl-c.
async fn run(cli: Cli) -> std::io::Result<()> {
    let config = ApiConfig::from_env();
    let state = AppState::from_config(&config);

    tokio::select! {
        result = run_server(cli.addr, state) => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down");
            Ok(())
        }
    }
}
