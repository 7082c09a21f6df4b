//! The host's native asset movement primitive and an in-memory implementation.
//!
//! The ledger never touches native holdings directly. Every movement between
//! a principal and the contract's custody goes through [`NativeTransfer`],
//! which either applies completely or reports a [`TransferError`] and leaves
//! holdings untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use xwallet_types::{Amount, Principal, Result, StxTransferEvent, TransferError, XwalletError};

/// Atomic movement of the native asset between two principals.
pub trait NativeTransfer {
    /// Move `amount` from `from` to `to`.
    ///
    /// # Errors
    /// Returns a [`TransferError`] and changes nothing if the movement cannot
    /// be applied in full.
    fn transfer(
        &mut self,
        amount: Amount,
        from: &Principal,
        to: &Principal,
    ) -> std::result::Result<(), TransferError>;
}

/// In-memory native STX holdings with `stx-transfer?` semantics.
///
/// Records a [`StxTransferEvent`] for every applied movement; the host drains
/// them with [`StxBank::take_events`] after each call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StxBank {
    /// `Principal → native balance`
    balances: HashMap<Principal, Amount>,
    /// Sum of everything ever minted.
    supply: Amount,
    /// Movements applied since the last drain.
    events: Vec<StxTransferEvent>,
    /// One-shot fault to report on the next movement.
    #[serde(skip)]
    pending_fault: Option<TransferError>,
}

impl StxBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit newly created STX to `to` (genesis funding).
    ///
    /// # Errors
    /// Returns [`XwalletError::Overflow`] if total supply would exceed `u128`.
    pub fn mint(&mut self, to: &Principal, amount: Amount) -> Result<()> {
        let supply = self
            .supply
            .checked_add(amount)
            .ok_or(XwalletError::Overflow)?;
        // Every balance is bounded by supply, so this cannot overflow.
        *self.balances.entry(to.clone()).or_default() += amount;
        self.supply = supply;
        Ok(())
    }

    /// Native balance of `principal`; zero if it never held STX.
    #[must_use]
    pub fn balance(&self, principal: &Principal) -> Amount {
        self.balances.get(principal).copied().unwrap_or_default()
    }

    /// Total STX in existence.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.supply
    }

    /// Movements applied since the last drain.
    #[must_use]
    pub fn events(&self) -> &[StxTransferEvent] {
        &self.events
    }

    /// Drain and return recorded movements.
    pub fn take_events(&mut self) -> Vec<StxTransferEvent> {
        std::mem::take(&mut self.events)
    }

    /// Make the next movement fail with `fault`, regardless of holdings.
    pub fn inject_fault(&mut self, fault: TransferError) {
        self.pending_fault = Some(fault);
    }

    /// Drop a fault injected with [`StxBank::inject_fault`] that has not fired.
    pub fn clear_fault(&mut self) -> Option<TransferError> {
        self.pending_fault.take()
    }
}

impl NativeTransfer for StxBank {
    fn transfer(
        &mut self,
        amount: Amount,
        from: &Principal,
        to: &Principal,
    ) -> std::result::Result<(), TransferError> {
        if let Some(fault) = self.pending_fault.take() {
            return Err(fault);
        }
        if amount == 0 {
            return Err(TransferError::NonPositiveAmount);
        }
        if from == to {
            return Err(TransferError::SenderIsRecipient);
        }
        let from_balance = self.balance(from);
        if from_balance < amount {
            return Err(TransferError::InsufficientFunds);
        }
        let to_balance = self
            .balance(to)
            .checked_add(amount)
            .ok_or(TransferError::RecipientOverflow)?;

        self.balances.insert(from.clone(), from_balance - amount);
        self.balances.insert(to.clone(), to_balance);
        self.events
            .push(StxTransferEvent::new(amount, from.clone(), to.clone()));
        Ok(())
    }
}
