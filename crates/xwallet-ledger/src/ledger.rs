//! The custodial balance ledger.
//!
//! The [`Ledger`] maps each principal to the amount of STX the contract owes
//! it. Entries are created on first credit and never removed; an absent
//! entry reads as zero.
//!
//! Every operation validates completely before mutating anything:
//! 1. `deposit` → native movement caller → custody, then credit caller
//! 2. `transfer` → debit caller, credit recipient (no native movement)
//! 3. `withdraw` → debit caller, then native movement custody → caller;
//!    the debit is restored if the movement fails
//! 4. `get_balance` → read only
//!
//! A failed call leaves the ledger exactly as it was.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use xwallet_types::{Amount, Caller, Principal, Result, XwalletError};

use crate::custody::NativeTransfer;
use crate::supply_conservation::SupplyConservation;

/// Principal → balance mapping owned by one deployed contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// The contract principal that holds custody.
    contract: Principal,
    /// `Principal → balance owed`
    balances: HashMap<Principal, Amount>,
    /// Cumulative deposits / withdrawals.
    supply: SupplyConservation,
}

impl Ledger {
    /// Create an empty ledger whose custody is held by `contract`.
    #[must_use]
    pub fn new(contract: Principal) -> Self {
        Self {
            contract,
            balances: HashMap::new(),
            supply: SupplyConservation::new(),
        }
    }

    /// The principal that holds custody of deposited STX.
    #[must_use]
    pub fn contract(&self) -> &Principal {
        &self.contract
    }

    /// Stored balance for `principal`, or zero if it has no entry.
    #[must_use]
    pub fn get_balance(&self, principal: &Principal) -> Amount {
        self.balances.get(principal).copied().unwrap_or_default()
    }

    // =================================================================
    // Mutating operations
    // =================================================================

    /// Move `amount` from the caller into custody and credit it.
    ///
    /// # Errors
    /// - `ZeroAmount` if `amount` is zero
    /// - `Overflow` if the credit could not be represented
    /// - `TransferFailed` if the native movement fails
    pub fn deposit(
        &mut self,
        host: &mut impl NativeTransfer,
        caller: &Caller,
        amount: Amount,
    ) -> Result<Amount> {
        if amount == 0 {
            return Err(XwalletError::ZeroAmount);
        }
        let owner = caller.principal();
        let credited = self
            .get_balance(owner)
            .checked_add(amount)
            .ok_or(XwalletError::Overflow)?;

        // Movement first: never credit for funds that did not arrive.
        host.transfer(amount, owner, &self.contract)
            .map_err(|reason| {
                tracing::warn!(caller = %owner, amount, %reason, "deposit movement failed");
                XwalletError::TransferFailed { reason }
            })?;

        self.balances.insert(owner.clone(), credited);
        self.supply.record_deposit(amount);
        tracing::debug!(caller = %owner, amount, balance = credited, "deposit");
        Ok(amount)
    }

    /// Move `amount` of ledger balance from the caller to `recipient`.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// zero amount, self-transfer, insufficient balance.
    ///
    /// # Errors
    /// - `ZeroAmount` if `amount` is zero
    /// - `SelfTransfer` if `recipient` is the caller
    /// - `InsufficientBalance` if the caller holds less than `amount`
    pub fn transfer(
        &mut self,
        caller: &Caller,
        recipient: &Principal,
        amount: Amount,
    ) -> Result<Amount> {
        if amount == 0 {
            return Err(XwalletError::ZeroAmount);
        }
        let sender = caller.principal();
        if sender == recipient {
            return Err(XwalletError::SelfTransfer);
        }
        let available = self.get_balance(sender);
        if available < amount {
            return Err(XwalletError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        // Checked before either write.
        let credited = self
            .get_balance(recipient)
            .checked_add(amount)
            .ok_or(XwalletError::Overflow)?;

        self.balances.insert(sender.clone(), available - amount);
        self.balances.insert(recipient.clone(), credited);
        tracing::debug!(caller = %sender, %recipient, amount, "transfer");
        Ok(amount)
    }

    /// Debit the caller by `amount` and move it out of custody to them.
    ///
    /// # Errors
    /// - `ZeroAmount` if `amount` is zero
    /// - `InsufficientBalance` if the caller holds less than `amount`
    /// - `TransferFailed` if the native movement fails (the debit is undone)
    pub fn withdraw(
        &mut self,
        host: &mut impl NativeTransfer,
        caller: &Caller,
        amount: Amount,
    ) -> Result<Amount> {
        if amount == 0 {
            return Err(XwalletError::ZeroAmount);
        }
        let owner = caller.principal();
        let available = self.get_balance(owner);
        if available < amount {
            return Err(XwalletError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        // Debit before the movement so the outbound call can only ever
        // observe the reduced balance.
        self.balances.insert(owner.clone(), available - amount);

        if let Err(reason) = host.transfer(amount, &self.contract, owner) {
            self.balances.insert(owner.clone(), available);
            tracing::warn!(
                caller = %owner,
                amount,
                %reason,
                "withdraw movement failed, debit restored"
            );
            return Err(XwalletError::TransferFailed { reason });
        }

        self.supply.record_withdrawal(amount);
        tracing::debug!(caller = %owner, amount, balance = available - amount, "withdraw");
        Ok(amount)
    }

    // =================================================================
    // Inspection
    // =================================================================

    /// Sum of all stored balances.
    #[must_use]
    pub fn total_balances(&self) -> Amount {
        // Bounded by custody holdings, which are bounded by native supply.
        self.balances
            .values()
            .fold(0, |acc: Amount, b| acc.saturating_add(*b))
    }

    /// Number of principals with an entry (including zeroed ones).
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.balances.len()
    }

    /// All stored entries.
    pub fn balances(&self) -> impl Iterator<Item = (&Principal, Amount)> {
        self.balances.iter().map(|(p, b)| (p, *b))
    }

    #[must_use]
    pub fn supply(&self) -> &SupplyConservation {
        &self.supply
    }

    /// Check `Σ balances == deposits - withdrawals == custody_balance`.
    ///
    /// # Errors
    /// Returns [`XwalletError::SupplyInvariantViolation`] on any mismatch.
    pub fn verify_supply_conservation(&self, custody_balance: Amount) -> Result<()> {
        self.supply.verify(self.total_balances())?;
        self.supply.verify(custody_balance)
    }
}
