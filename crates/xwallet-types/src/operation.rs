//! The four entry points of the ledger contract.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A contract entry point, named as it is called at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LedgerOperation {
    /// Move STX from the caller into custody and credit the caller.
    Deposit,
    /// Move ledger balance from the caller to another principal.
    #[serde(rename = "send-stx")]
    Transfer,
    /// Debit the caller and move STX from custody back to them.
    Withdraw,
    /// Read a principal's ledger balance.
    GetBalance,
}

impl LedgerOperation {
    pub const ALL: [Self; 4] = [Self::Deposit, Self::Transfer, Self::Withdraw, Self::GetBalance];

    /// Function name at the call boundary.
    #[must_use]
    pub fn function_name(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Transfer => "send-stx",
            Self::Withdraw => "withdraw",
            Self::GetBalance => "get-balance",
        }
    }

    /// Whether the entry point only reads state.
    #[must_use]
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::GetBalance)
    }

    /// Whether the entry point moves native STX through the host.
    #[must_use]
    pub fn moves_native_asset(self) -> bool {
        matches!(self, Self::Deposit | Self::Withdraw)
    }
}

impl fmt::Display for LedgerOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

impl FromStr for LedgerOperation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.function_name() == s)
            .ok_or_else(|| format!("unknown function {s:?}"))
    }
}
