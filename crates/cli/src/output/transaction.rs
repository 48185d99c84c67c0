//! Formatting for unsigned deposit transactions.

use alloy_primitives::{Address, U256};
use colored::Colorize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};
use vault_deposit_contracts::UnsignedTransaction;

/// Context shown next to the transaction in table output.
pub struct DepositSummary {
    /// Vault asset, when it was read for decimal scaling.
    pub asset: Option<Address>,
    /// Asset decimals, when known.
    pub decimals: Option<u8>,
    /// Deposit amount in base units.
    pub amount: U256,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Format a base-unit amount with the given decimals, trimming trailing zeros.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let digits = amount.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

/// Format gas with thousands separators.
pub fn format_gas(gas: u64) -> String {
    let s = gas.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

fn format_amount(summary: &DepositSummary) -> String {
    match summary.decimals {
        Some(decimals) => format!(
            "{} ({} base units)",
            format_units(summary.amount, decimals),
            summary.amount
        ),
        None => format!("{} base units", summary.amount),
    }
}

pub fn format_transaction_table(tx: &UnsignedTransaction, summary: &DepositSummary) -> String {
    let mut rows = vec![
        FieldRow {
            field: "To (vault)",
            value: format!("{}", tx.to),
        },
        FieldRow {
            field: "From",
            value: format!("{}", tx.from),
        },
    ];
    if let Some(asset) = summary.asset {
        rows.push(FieldRow {
            field: "Asset",
            value: format!("{}", asset),
        });
    }
    rows.extend([
        FieldRow {
            field: "Amount",
            value: format_amount(summary),
        },
        FieldRow {
            field: "Value",
            value: tx.value.to_string(),
        },
        FieldRow {
            field: "Gas",
            value: format_gas(tx.gas),
        },
        FieldRow {
            field: "Data",
            value: format!("{}", tx.data),
        },
    ]);

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    format!("{}\n{}", "Unsigned deposit transaction".cyan().bold(), table)
}

pub fn format_transaction_json(tx: &UnsignedTransaction) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(tx)?)
}
