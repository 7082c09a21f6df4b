//! Values crossing the call boundary.
//!
//! Arguments and results are encoded the way the chain encodes them: an
//! unsigned integer or a principal, and a response that is either `ok` or
//! `err`. Ledger rejections surface as `(err uN)` with the stable code.

use serde::{Deserialize, Serialize};
use xwallet_types::{Amount, Principal, Result, XwalletError};

/// A typed argument or return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClarityValue {
    UInt(u128),
    Principal(Principal),
}

impl ClarityValue {
    #[must_use]
    pub fn uint(value: impl Into<u128>) -> Self {
        Self::UInt(value.into())
    }

    #[must_use]
    pub fn principal(principal: &Principal) -> Self {
        Self::Principal(principal.clone())
    }

    #[must_use]
    pub fn as_uint(&self) -> Option<u128> {
        match self {
            Self::UInt(v) => Some(*v),
            Self::Principal(_) => None,
        }
    }

    #[must_use]
    pub fn as_principal(&self) -> Option<&Principal> {
        match self {
            Self::Principal(p) => Some(p),
            Self::UInt(_) => None,
        }
    }

    /// Name of the value's type, for argument errors.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::UInt(_) => "uint",
            Self::Principal(_) => "principal",
        }
    }
}

/// The response of a contract call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseValue {
    Ok(ClarityValue),
    Err(ClarityValue),
}

impl ResponseValue {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// The `(ok uN)` payload, if any.
    #[must_use]
    pub fn ok_uint(&self) -> Option<u128> {
        match self {
            Self::Ok(v) => v.as_uint(),
            Self::Err(_) => None,
        }
    }

    /// The `(err uN)` code, if any.
    #[must_use]
    pub fn err_code(&self) -> Option<u128> {
        match self {
            Self::Err(v) => v.as_uint(),
            Self::Ok(_) => None,
        }
    }

    /// Encode a ledger outcome. Returns the error back if it is not one of
    /// the rejections that have a boundary code.
    ///
    /// # Errors
    /// Any [`XwalletError`] that is not a ledger rejection.
    pub fn from_ledger(outcome: Result<Amount>) -> std::result::Result<Self, XwalletError> {
        match outcome {
            Ok(amount) => Ok(Self::Ok(ClarityValue::UInt(amount))),
            Err(err) if err.is_ledger_rejection() => {
                Ok(Self::Err(ClarityValue::UInt(u128::from(err.code()))))
            }
            Err(err) => Err(err),
        }
    }
}
