//! Doccheck Server CLI
//!
//! Starts the HTTP server that checks uploaded documents for contradictions.

use clap::Parser;
use doccheck_server::{config::ServerConfig, start_server, ServerError};
use std::path::PathBuf;
use std::process;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Smart Doc Checker - find conflicting values across business documents
#[derive(Debug, Parser)]
#[command(name = "doccheck-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "DOCCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind address
    #[arg(long)]
    bind_address: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    // Log to stderr, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ServerError> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => {
            warn!("No config file specified, using defaults");
            ServerConfig::default_config()
        }
    };

    if let Some(address) = args.bind_address {
        config.bind_address = address;
    }
    if let Some(port) = args.port {
        config.bind_port = port;
    }

    start_server(config).await
}
