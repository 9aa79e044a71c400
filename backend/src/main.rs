use std::{io::stderr, sync::Arc};

use anyhow::Result;
use clap::{Parser, Subcommand};
use feed::{EmergencyFeed, NhostClient, NhostConfig};
use server::{config::Config, start_server, state::AppState};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

mod report;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON views over HTTP
    Serve,

    /// Print every emergency, most urgent first
    List {
        #[arg(long)]
        json: bool,
    },

    /// List emergencies, then toggle the map selection by typing ids
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(stderr)
        .init();

    let args = Args::parse();

    let nhost = NhostConfig::from_env()?;
    let client = Arc::new(NhostClient::new(&nhost));
    info!("Using GraphQL endpoint {}", client.endpoints().graphql);

    match args.command {
        Command::Serve => {
            let config = Config::load()?;
            start_server(AppState::new(config, client)).await?;
        }
        Command::List { json } => report::list(&EmergencyFeed::new(client), json).await?,
        Command::Browse => report::browse(&EmergencyFeed::new(client)).await?,
    }

    Ok(())
}
