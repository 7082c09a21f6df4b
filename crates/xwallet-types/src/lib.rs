//! # xwallet-types
//!
//! Shared types, errors, and configuration for the **xWallet** custodial ledger.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Principal`], [`Caller`], [`TxId`]
//! - **Amounts**: [`Amount`] (micro-STX) and the STX unit helpers in [`amount`]
//! - **Operations**: [`LedgerOperation`], the four entry points of the contract
//! - **Events**: [`StxTransferEvent`]
//! - **Configuration**: [`NetworkConfig`], [`ContractDeployment`], [`NetworkType`]
//! - **Errors**: [`XwalletError`] with `XW_ERR_` prefix codes, [`TransferError`]
//! - **Constants**: boundary error codes, unit scale, default deployments

pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod operation;

// Re-export all primary types at crate root for ergonomic imports:
//   use xwallet_types::{Principal, Caller, Amount, XwalletError, ...};

pub use amount::{Amount, format_stx, micro_to_stx, stx_to_micro};
pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use operation::*;

// Constants are accessed via `xwallet_types::constants::FOO`
// (not re-exported to avoid name collisions).
