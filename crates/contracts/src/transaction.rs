//! Unsigned transaction descriptor produced by the deposit builder.

use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;
use serde::{Deserialize, Serialize};

/// A fully specified transaction that has not been signed or broadcast.
///
/// The caller hands it to their own signer, usually through
/// [`UnsignedTransaction::into_request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTransaction {
    /// ABI-encoded call data.
    pub data: Bytes,
    /// Sender of the transaction.
    pub from: Address,
    /// Contract the call is made against.
    pub to: Address,
    /// Native currency attached to the call.
    pub value: U256,
    /// Gas limit obtained from estimation.
    pub gas: u64,
}

impl UnsignedTransaction {
    /// Returns the 4-byte function selector of the call data, if present.
    pub fn selector(&self) -> Option<[u8; 4]> {
        let bytes = self.data.get(..4)?;
        let mut selector = [0u8; 4];
        selector.copy_from_slice(bytes);
        Some(selector)
    }

    /// Consumes self and returns a `TransactionRequest` ready for a signer.
    ///
    /// Nonce, chain id and fee fields are left for the signer's fillers.
    pub fn into_request(self) -> TransactionRequest {
        let mut request = TransactionRequest::default()
            .from(self.from)
            .to(self.to)
            .input(self.data.into())
            .value(self.value);
        request.gas = Some(self.gas);
        request
    }
}
