//! Error types for the xWallet ledger.
//!
//! All errors use the `XW_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped:
//! - 1xx: Ledger rejections (stable, observed by clients at the call boundary)
//! - 9xx: General / internal errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Amount, constants};

/// Central error enum for all xWallet operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XwalletError {
    // =================================================================
    // Ledger rejections (1xx)
    // =================================================================
    /// Stored balance is below the requested amount.
    #[error("XW_ERR_100: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    /// The amount argument was zero.
    #[error("XW_ERR_101: Amount must be greater than zero")]
    ZeroAmount,

    /// Transfer recipient equals the caller.
    #[error("XW_ERR_102: Cannot transfer to self")]
    SelfTransfer,

    /// The host's native asset movement reported failure.
    #[error("XW_ERR_103: Native transfer failed: {reason}")]
    TransferFailed { reason: TransferError },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Balance arithmetic would exceed the integer width.
    #[error("XW_ERR_900: Arithmetic overflow")]
    Overflow,

    /// Sum of balances diverged from deposits minus withdrawals or custody.
    #[error("XW_ERR_901: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    /// A principal string failed validation.
    #[error("XW_ERR_902: Invalid principal {input:?}: {reason}")]
    InvalidPrincipal { input: String, reason: String },

    /// An STX amount could not be converted to or from micro-STX.
    #[error("XW_ERR_903: Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    /// Configuration error (invalid config file, missing fields, etc.).
    #[error("XW_ERR_904: Configuration error: {0}")]
    Configuration(String),

    /// Serialization / deserialization error.
    #[error("XW_ERR_905: Serialization error: {0}")]
    Serialization(String),

    /// I/O error.
    #[error("XW_ERR_906: I/O error: {0}")]
    Io(String),
}

impl XwalletError {
    /// Numeric code as observed at the call boundary.
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::InsufficientBalance { .. } => constants::ERR_INSUFFICIENT_BALANCE,
            Self::ZeroAmount => constants::ERR_ZERO_AMOUNT,
            Self::SelfTransfer => constants::ERR_SELF_TRANSFER,
            Self::TransferFailed { .. } => constants::ERR_TRANSFER_FAILED,
            Self::Overflow => 900,
            Self::SupplyInvariantViolation { .. } => 901,
            Self::InvalidPrincipal { .. } => 902,
            Self::InvalidAmount { .. } => 903,
            Self::Configuration(_) => 904,
            Self::Serialization(_) => 905,
            Self::Io(_) => 906,
        }
    }

    /// Whether this is one of the four rejections a ledger operation returns
    /// to its caller.
    #[must_use]
    pub fn is_ledger_rejection(&self) -> bool {
        matches!(
            self,
            Self::InsufficientBalance { .. }
                | Self::ZeroAmount
                | Self::SelfTransfer
                | Self::TransferFailed { .. }
        )
    }

    /// Human-readable message a client shows for a boundary error code.
    #[must_use]
    pub fn user_message(code: u32) -> &'static str {
        match code {
            constants::ERR_INSUFFICIENT_BALANCE => {
                "Insufficient balance in xWallet. Please deposit more STX."
            }
            constants::ERR_ZERO_AMOUNT => "Amount must be greater than zero.",
            constants::ERR_SELF_TRANSFER => {
                "Cannot send to yourself. Use the withdraw function instead."
            }
            constants::ERR_TRANSFER_FAILED => {
                "Transfer failed. Please check your wallet balance and try again."
            }
            _ => "Transaction failed.",
        }
    }
}

/// Failure reported by the host's native asset movement (`stx-transfer?`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum TransferError {
    /// Sender's external holdings are below the amount.
    #[error("sender has insufficient funds")]
    InsufficientFunds,

    /// Sender and recipient are the same principal.
    #[error("sender and recipient are the same")]
    SenderIsRecipient,

    /// Amount was zero.
    #[error("amount must be positive")]
    NonPositiveAmount,

    /// Crediting the recipient would overflow.
    #[error("recipient balance overflow")]
    RecipientOverflow,
}

impl TransferError {
    /// Native error code (`(err u1)`..`(err u3)` for `stx-transfer?`).
    #[must_use]
    pub fn native_code(self) -> Option<u32> {
        match self {
            Self::InsufficientFunds => Some(1),
            Self::SenderIsRecipient => Some(2),
            Self::NonPositiveAmount => Some(3),
            Self::RecipientOverflow => None,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, XwalletError>;

impl From<std::io::Error> for XwalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for XwalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
