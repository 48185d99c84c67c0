//! Deposit command implementation.

use alloy_primitives::{Address, U256};
use anyhow::{Context, Result};
use tracing::info;
use vault_deposit_contracts::{connect_http, deposit, DepositRequest, VaultReader};

use crate::cli::{DepositArgs, OutputFormat};
use crate::output::{format_transaction_json, format_transaction_table, DepositSummary};

/// Split a human-readable amount into its integer and fractional digits.
fn split_amount(amount: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = amount.split('.').collect();

    let (integer_part, fractional_part) = match parts.as_slice() {
        [integer] => (*integer, ""),
        [integer, fraction] => (*integer, *fraction),
        _ => anyhow::bail!("Invalid amount format: {}", amount),
    };

    let all_digits = integer_part
        .chars()
        .chain(fractional_part.chars())
        .all(|c| c.is_ascii_digit());
    if !all_digits || (integer_part.is_empty() && fractional_part.is_empty()) {
        anyhow::bail!("Invalid amount format: {}", amount);
    }

    Ok((integer_part, fractional_part))
}

/// Parse a human-readable amount string to U256 given decimals.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256> {
    let (integer_part, fractional_part) = split_amount(amount)?;

    if fractional_part.len() > decimals as usize {
        anyhow::bail!(
            "Amount {} has more than {} decimal places",
            amount,
            decimals
        );
    }

    let fractional_padded = format!("{:0<width$}", fractional_part, width = decimals as usize);

    let combined = format!("{}{}", integer_part, fractional_padded);
    let combined = combined.trim_start_matches('0');

    if combined.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(combined, 10)
        .with_context(|| format!("Failed to parse amount: {}", amount))
}

/// Parse an amount given in base units.
pub fn parse_raw_amount(amount: &str) -> Result<U256> {
    if amount.is_empty() || !amount.chars().all(|c| c.is_ascii_digit()) {
        anyhow::bail!("Invalid amount format: {}", amount);
    }
    U256::from_str_radix(amount, 10).with_context(|| format!("Failed to parse amount: {}", amount))
}

/// Run the deposit command.
pub async fn run_deposit(args: &DepositArgs, format: OutputFormat) -> Result<()> {
    let vault: Address = args.vault.parse().context("Invalid vault address")?;
    let wallet: Address = args.wallet.parse().context("Invalid wallet address")?;

    // Reject malformed and zero amounts before touching the network.
    let raw_amount = if args.raw {
        Some(parse_raw_amount(&args.amount)?)
    } else {
        let (integer_part, fractional_part) = split_amount(&args.amount)?;
        if integer_part.chars().chain(fractional_part.chars()).all(|c| c == '0') {
            anyhow::bail!("Amount must be greater than zero");
        }
        None
    };
    if raw_amount.is_some_and(|amount| amount.is_zero()) {
        anyhow::bail!("Amount must be greater than zero");
    }

    let provider = connect_http(&args.rpc_url)?;

    let (asset, decimals, amount) = if let Some(amount) = raw_amount {
        (None, None, amount)
    } else {
        let asset = provider.vault_asset(vault).await?;
        let decimals = provider.token_decimals(asset).await?;
        let amount = parse_amount(&args.amount, decimals)?;
        (Some(asset), Some(decimals), amount)
    };
    info!(%vault, %wallet, %amount, "building deposit");

    let tx = deposit(
        &provider,
        DepositRequest {
            wallet,
            vault,
            amount,
        },
    )
    .await?;

    let output = match format {
        OutputFormat::Table => format_transaction_table(
            &tx,
            &DepositSummary {
                asset,
                decimals,
                amount,
            },
        ),
        OutputFormat::Json => format_transaction_json(&tx)?,
    };
    println!("{}", output);

    Ok(())
}
