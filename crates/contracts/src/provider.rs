//! Read-only provider construction.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::error::{DepositError, Result};

/// The provider type returned by [`connect_http`].
///
/// No wallet filler is installed: the deposit builder only reads chain state
/// and estimates gas, it never signs.
pub type ReadProvider = DynProvider;

/// Connect a read-only provider to an HTTP RPC endpoint.
pub fn connect_http(rpc_url: &str) -> Result<ReadProvider> {
    let url: url::Url = rpc_url
        .parse()
        .map_err(|e| DepositError::RpcConnection(format!("{}", e)))?;

    tracing::debug!(%url, "connecting read-only provider");
    Ok(ProviderBuilder::new().connect_http(url).erased())
}
