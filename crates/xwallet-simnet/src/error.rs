//! Host-level errors.
//!
//! These are failures of the call itself (unknown function, malformed
//! arguments, bad configuration), not ledger rejections. A ledger rejection
//! is a successful call whose response is `(err uN)`.

use thiserror::Error;
use xwallet_types::{Principal, XwalletError};

#[derive(Debug, Error)]
pub enum SimnetError {
    /// The call named a contract that is not deployed.
    #[error("XW_SIM_ERR_100: Unknown contract: {0}")]
    UnknownContract(String),

    /// The contract has no entry point with this name.
    #[error("XW_SIM_ERR_101: Unknown function: {0}")]
    UnknownFunction(String),

    /// A read-only entry point was called as public, or vice versa.
    #[error("XW_SIM_ERR_102: Function {function} cannot be called {expected}")]
    WrongCallKind {
        function: String,
        expected: &'static str,
    },

    /// Argument count or types do not match the entry point.
    #[error("XW_SIM_ERR_103: Bad arguments for {function}: {reason}")]
    BadArguments { function: String, reason: String },

    /// No account registered under this name.
    #[error("XW_SIM_ERR_104: Unknown account: {0}")]
    UnknownAccount(String),

    /// The sender cannot originate transactions.
    #[error("XW_SIM_ERR_105: Invalid sender: {0}")]
    InvalidSender(Principal),

    /// The call aborted with a runtime error rather than a response.
    #[error("XW_SIM_ERR_106: Runtime error: {0}")]
    Runtime(XwalletError),

    /// Configuration could not be loaded or is inconsistent.
    #[error("XW_SIM_ERR_107: Configuration error: {0}")]
    Config(#[from] XwalletError),

    /// The tracing subscriber could not be installed.
    #[error("XW_SIM_ERR_108: Logging setup failed: {0}")]
    Logging(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SimnetError>;
