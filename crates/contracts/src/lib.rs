//! Guarded ERC-4626 deposit transaction builder.
//!
//! This crate validates that a wallet can deposit into an ERC-4626 vault
//! and builds the unsigned transaction that performs the deposit. It only
//! reads chain state; signing and broadcasting are left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use vault_deposit_contracts::{connect_http, deposit, DepositRequest};
//! use alloy::primitives::{address, U256};
//!
//! #[tokio::main]
//! async fn main() -> vault_deposit_contracts::Result<()> {
//!     let provider = connect_http("https://eth.llamarpc.com")?;
//!
//!     let tx = deposit(
//!         &provider,
//!         DepositRequest {
//!             wallet: address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
//!             vault: address!("BEEF01735c132Ada46AA9aA4c54623cAA92A64CB"),
//!             amount: U256::from(1_000_000u64),
//!         },
//!     )
//!     .await?;
//!
//!     // Hand `tx.into_request()` to a signer.
//!     Ok(())
//! }
//! ```

pub mod deposit;
pub mod erc20;
pub mod erc4626;
pub mod error;
pub mod provider;
pub mod reader;
pub mod transaction;

pub use deposit::{deposit, encode_deposit, DepositRequest};
pub use error::{DepositError, Result};
pub use provider::{connect_http, ReadProvider};
pub use reader::VaultReader;
pub use transaction::UnsignedTransaction;
