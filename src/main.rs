use std::sync::Arc;

use clap::{Parser, Subcommand};
use feedback_relay::{
    cmd::send::{self, SendArgs},
    config::AppConfig,
    http_server::run_server_from_config,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the relay server.
    Serve,
    /// Sends one message through the widget client and prints the outcome.
    Send(SendArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await?,
        Commands::Send(args) => {
            let status = send::execute(args).await?;
            println!("{status}");
            if status.is_failure() {
                return Err(send::Error::NotDelivered(status).into());
            }
        }
    }

    Ok(())
}

async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!("Loading application configuration...");
    let config = Arc::new(AppConfig::new()?);
    tracing::debug!(?config, "Configuration loaded.");

    run_server_from_config(config).await?;
    Ok(())
}
