//! Deposit and withdrawal totals for the custody check.
//!
//! The ledger maintains
//! ```text
//! Σ(balances) == Σ(deposits) - Σ(withdrawals) == custody
//! ```
//!
//! Transfers move entitlement between principals and never change supply.
//!
//! Both totals are kept modulo 2^128. Their difference is the outstanding
//! supply, which custody bounds, so it stays exact however much STX has
//! cycled through the contract.

use serde::{Deserialize, Serialize};
use xwallet_types::{Amount, Result, XwalletError};

/// Cumulative deposit and withdrawal totals since deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyConservation {
    deposited: Amount,
    withdrawn: Amount,
}

impl SupplyConservation {
    /// Totals for a freshly deployed contract.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a successful deposit.
    pub fn record_deposit(&mut self, amount: Amount) {
        self.deposited = self.deposited.wrapping_add(amount);
    }

    /// Add a successful withdrawal.
    pub fn record_withdrawal(&mut self, amount: Amount) {
        self.withdrawn = self.withdrawn.wrapping_add(amount);
    }

    /// Expected supply: deposits - withdrawals.
    #[must_use]
    pub fn expected_supply(&self) -> Amount {
        self.deposited.wrapping_sub(self.withdrawn)
    }

    /// Verify that `actual_supply` (e.g. the sum of all balances, or the
    /// custody holdings) matches deposits - withdrawals.
    ///
    /// # Errors
    /// Returns [`XwalletError::SupplyInvariantViolation`] if actual ≠ expected.
    pub fn verify(&self, actual_supply: Amount) -> Result<()> {
        let expected = self.expected_supply();
        if expected != actual_supply {
            return Err(XwalletError::SupplyInvariantViolation {
                reason: format!(
                    "actual supply {actual_supply} != expected {expected} \
                     (deposits={}, withdrawals={})",
                    self.deposited, self.withdrawn
                ),
            });
        }
        Ok(())
    }

    /// Deposits since deployment, modulo 2^128.
    #[must_use]
    pub fn total_deposits(&self) -> Amount {
        self.deposited
    }

    /// Withdrawals since deployment, modulo 2^128.
    #[must_use]
    pub fn total_withdrawals(&self) -> Amount {
        self.withdrawn
    }
}
