//! Guarded ERC-4626 deposit builder.
//!
//! [`deposit`] reads the vault asset, the wallet's balance and allowance, and
//! the vault's deposit ceiling, in that order, and stops at the first unmet
//! precondition. When all of them hold it encodes `deposit(amount, wallet)`,
//! estimates gas and returns the [`UnsignedTransaction`]. Nothing is sent.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::erc4626::IERC4626;
use crate::error::{DepositError, Result};
use crate::reader::VaultReader;
use crate::transaction::UnsignedTransaction;

/// Parameters of a deposit.
///
/// `amount` is in the asset's base units. A zero amount is not rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    /// Account that holds the asset and receives the vault shares.
    pub wallet: Address,
    /// The ERC-4626 vault to deposit into.
    pub vault: Address,
    /// Asset amount to deposit.
    pub amount: U256,
}

/// Encode the call data for `deposit(amount, receiver)`.
pub fn encode_deposit(amount: U256, receiver: Address) -> Bytes {
    IERC4626::depositCall {
        assets: amount,
        receiver,
    }
    .abi_encode()
    .into()
}

/// Build an unsigned deposit transaction after validating it against chain state.
///
/// Error precedence is balance, then allowance, then max deposit. Reads past
/// the first failing check are never issued.
///
/// The returned transaction always carries zero native value: the deposited
/// asset of an ERC-4626 vault is an ERC-20 token.
#[instrument(skip_all, err, fields(wallet = %request.wallet, vault = %request.vault, amount = %request.amount))]
pub async fn deposit<R: VaultReader>(
    reader: &R,
    request: DepositRequest,
) -> Result<UnsignedTransaction> {
    let DepositRequest {
        wallet,
        vault,
        amount,
    } = request;

    let asset = reader.vault_asset(vault).await?;
    debug!(%asset, "resolved vault asset");

    let balance = reader.token_balance(asset, wallet).await?;
    if balance < amount {
        return Err(DepositError::InsufficientBalance {
            have: balance,
            need: amount,
        });
    }

    let allowance = reader.token_allowance(asset, wallet, vault).await?;
    if allowance < amount {
        return Err(DepositError::MissingAllowance {
            have: allowance,
            need: amount,
        });
    }

    let max_deposit = reader.vault_max_deposit(vault, wallet).await?;
    if amount > max_deposit {
        return Err(DepositError::AmountExceedsMaxDeposit {
            max: max_deposit,
            amount,
        });
    }
    debug!(%balance, %allowance, %max_deposit, "deposit preconditions hold");

    let data = encode_deposit(amount, wallet);
    let gas = reader
        .estimate_call_gas(wallet, vault, data.clone())
        .await?
        .ok_or(DepositError::InvalidTransaction)?;
    debug!(gas, "estimated deposit gas");

    Ok(UnsignedTransaction {
        data,
        from: wallet,
        to: vault,
        value: U256::ZERO,
        gas,
    })
}
