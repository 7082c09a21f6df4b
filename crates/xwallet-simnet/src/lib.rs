//! # xwallet-simnet
//!
//! In-process chain for exercising the xWallet ledger end to end.
//!
//! A [`Simnet`] funds a set of named accounts, deploys one ledger contract
//! and executes calls against it by function name, with arguments and
//! results encoded as [`ClarityValue`]s:
//!
//! | Function      | Kind      | Arguments              |
//! |---------------|-----------|------------------------|
//! | `deposit`     | public    | `uint`                 |
//! | `send-stx`    | public    | `uint`, `principal`    |
//! | `withdraw`    | public    | `uint`                 |
//! | `get-balance` | read-only | `principal`            |
//!
//! Each public call is atomic. When it returns `(err uN)` or aborts, the
//! ledger and all native balances are restored to their pre-call state and
//! its transfer events are dropped.

pub mod config;
pub mod error;
pub mod logging;
pub mod simnet;
pub mod value;

pub use config::{AccountConfig, DEFAULT_ACCOUNT_BALANCE, SimnetConfig};
pub use error::{Result, SimnetError};
pub use logging::init_tracing;
pub use simnet::{CallReceipt, Simnet};
pub use value::{ClarityValue, ResponseValue};
