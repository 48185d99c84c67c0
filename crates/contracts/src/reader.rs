//! Chain-read seam used by the deposit builder.
//!
//! [`VaultReader`] covers exactly the reads a guarded deposit needs. It is
//! implemented for alloy's [`DynProvider`]; any other provider is converted
//! with [`Provider::erased`]. Tests substitute their own implementation.

use std::future::Future;

use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::TransactionRequest;

use crate::erc20::IERC20;
use crate::erc4626::IERC4626;
use crate::error::{DepositError, Result};

/// Read-only view of the chain state a vault deposit depends on.
///
/// Every method is a single round trip to the node.
pub trait VaultReader: Send + Sync {
    /// Get the underlying asset address of a vault (`asset()`).
    fn vault_asset(&self, vault: Address) -> impl Future<Output = Result<Address>> + Send;

    /// Get the token balance of `owner` (`balanceOf(owner)`).
    fn token_balance(
        &self,
        token: Address,
        owner: Address,
    ) -> impl Future<Output = Result<U256>> + Send;

    /// Get the amount `spender` may pull from `owner` (`allowance(owner, spender)`).
    fn token_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> impl Future<Output = Result<U256>> + Send;

    /// Get the maximum deposit the vault accepts for `receiver` (`maxDeposit(receiver)`).
    fn vault_max_deposit(
        &self,
        vault: Address,
        receiver: Address,
    ) -> impl Future<Output = Result<U256>> + Send;

    /// Get the decimals of a token.
    fn token_decimals(&self, token: Address) -> impl Future<Output = Result<u8>> + Send;

    /// Estimate the gas for a zero-value call from `from` to `to` with `data`.
    ///
    /// `Ok(None)` means the node answered but gave no usable estimate.
    fn estimate_call_gas(
        &self,
        from: Address,
        to: Address,
        data: Bytes,
    ) -> impl Future<Output = Result<Option<u64>>> + Send;
}

impl VaultReader for DynProvider {
    async fn vault_asset(&self, vault: Address) -> Result<Address> {
        let contract = IERC4626::new(vault, self);
        let result = contract
            .asset()
            .call()
            .await
            .map_err(|e| DepositError::ContractCall(format!("Failed to get asset: {}", e)))?;
        Ok(result)
    }

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256> {
        let contract = IERC20::new(token, self);
        let result = contract.balanceOf(owner).call().await.map_err(|e| {
            DepositError::ContractCall(format!("Failed to get balance: {}", e))
        })?;
        Ok(result)
    }

    async fn token_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256> {
        let contract = IERC20::new(token, self);
        let result = contract.allowance(owner, spender).call().await.map_err(|e| {
            DepositError::ContractCall(format!("Failed to get allowance: {}", e))
        })?;
        Ok(result)
    }

    async fn vault_max_deposit(&self, vault: Address, receiver: Address) -> Result<U256> {
        let contract = IERC4626::new(vault, self);
        let result = contract.maxDeposit(receiver).call().await.map_err(|e| {
            DepositError::ContractCall(format!("Failed to get max deposit: {}", e))
        })?;
        Ok(result)
    }

    async fn token_decimals(&self, token: Address) -> Result<u8> {
        let contract = IERC20::new(token, self);
        let result = contract.decimals().call().await.map_err(|e| {
            DepositError::ContractCall(format!("Failed to get decimals: {}", e))
        })?;
        Ok(result)
    }

    async fn estimate_call_gas(&self, from: Address, to: Address, data: Bytes) -> Result<Option<u64>> {
        let tx = TransactionRequest::default()
            .from(from)
            .to(to)
            .input(data.into())
            .value(U256::ZERO);

        let gas = Provider::estimate_gas(self, tx)
            .await
            .map_err(|e| DepositError::GasEstimation(e.to_string()))?;

        // A zero estimate cannot pay for the intrinsic cost of any call.
        Ok((gas > 0).then_some(gas))
    }
}
