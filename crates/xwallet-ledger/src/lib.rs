//! # xwallet-ledger
//!
//! The custodial balance ledger at the heart of **xWallet**.
//!
//! - [`Ledger`]: principal → balance mapping with `deposit`, `transfer`,
//!   `withdraw` and `get_balance`
//! - [`NativeTransfer`]: the host primitive that moves STX in and out of
//!   custody; [`StxBank`] is the in-memory implementation
//! - [`SupplyConservation`]: `Σ balances == Σ deposits - Σ withdrawals`
//!
//! ## Call flow
//!
//! ```text
//! host ──(Caller, args)──▶ Ledger ──validate──▶ NativeTransfer (≤ 1 movement)
//!                             │
//!                             └──▶ balances updated, amount returned
//! ```
//!
//! The ledger is threaded through each call by `&mut`; there is no global
//! state and no way to re-enter it while a movement is in flight.

pub mod custody;
pub mod ledger;
pub mod supply_conservation;

pub use custody::{NativeTransfer, StxBank};
pub use ledger::Ledger;
pub use supply_conservation::SupplyConservation;
