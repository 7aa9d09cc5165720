//! Roster registry HTTP server
//!
//! Seeds the in-memory registry and serves the API until the process is
//! stopped. All state lives for the process lifetime only.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roster_core::{AppState, InMemoryRegistry, RegistryService, ServerConfig, api_router};

#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "In-memory student and group registry over HTTP")]
struct Args {
    /// Server port
    #[arg(short, long, default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Server host
    #[arg(long, default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    let registry = RegistryService::new(InMemoryRegistry::with_seed_data());
    let app = api_router(AppState::new(registry));

    let addr = config.socket_addr()?;
    info!("Starting roster server on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
