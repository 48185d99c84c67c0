//! Error types for the deposit builder.

use alloy_primitives::U256;
use thiserror::Error;

/// Errors that can occur while building a deposit transaction.
///
/// The first four variants are precondition failures raised by the builder
/// itself. The rest wrap failures of the underlying chain client.
#[derive(Debug, Error)]
pub enum DepositError {
    /// The wallet holds less of the vault asset than it wants to deposit.
    #[error("Not enough balance: have {have}, need {need}")]
    InsufficientBalance { have: U256, need: U256 },

    /// The wallet has not approved the vault for the deposit amount.
    #[error("Not enough allowance: have {have}, need {need}")]
    MissingAllowance { have: U256, need: U256 },

    /// The vault refuses deposits of this size for the receiver.
    #[error("Amount exceeds max deposit: max {max}, amount {amount}")]
    AmountExceedsMaxDeposit { max: U256, amount: U256 },

    /// Gas estimation produced no usable value.
    #[error("Invalid transaction: gas estimation returned no result")]
    InvalidTransaction,

    /// A contract read failed.
    #[error("Contract call failed: {0}")]
    ContractCall(String),

    /// The node rejected the gas estimation request.
    #[error("Gas estimation failed: {0}")]
    GasEstimation(String),

    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),
}

impl DepositError {
    /// Returns true for failures raised by the builder's own validation,
    /// as opposed to errors passed through from the chain client.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InsufficientBalance { .. }
                | Self::MissingAllowance { .. }
                | Self::AmountExceedsMaxDeposit { .. }
                | Self::InvalidTransaction
        )
    }
}

/// Result type alias for deposit operations.
pub type Result<T> = std::result::Result<T, DepositError>;
