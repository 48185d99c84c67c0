//! Command implementations.

pub mod deposit;

pub use deposit::run_deposit;
