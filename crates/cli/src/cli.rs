//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};

/// Vault deposit CLI - Build guarded ERC-4626 deposit transactions
#[derive(Parser, Debug)]
#[command(name = "vault-deposit")]
#[command(
    about = "CLI tool for building unsigned ERC-4626 deposit transactions",
    long_about = None
)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a deposit against chain state and print the unsigned transaction
    Deposit(DepositArgs),
}

#[derive(Parser, Debug)]
pub struct DepositArgs {
    /// Vault contract address
    pub vault: String,

    /// Amount to deposit in human-readable units (e.g., "100.5")
    pub amount: String,

    /// Treat the amount as base units of the asset instead of scaling by decimals
    #[arg(long)]
    pub raw: bool,

    /// Wallet that holds the asset and receives the shares (can also use WALLET_ADDRESS env var)
    #[arg(long, env = "WALLET_ADDRESS")]
    pub wallet: String,

    /// RPC URL for the target chain (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
