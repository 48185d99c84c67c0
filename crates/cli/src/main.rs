//! Vault deposit CLI - Build unsigned ERC-4626 deposit transactions.

mod cli;
mod commands;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::run_deposit;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logger(&cli.log_level)?;

    match cli.command {
        Commands::Deposit(args) => {
            run_deposit(&args, cli.format).await?;
        }
    }

    Ok(())
}
