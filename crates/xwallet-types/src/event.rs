//! Events emitted by the host while executing a call.

use serde::{Deserialize, Serialize};

use crate::{Amount, Principal};

/// A completed native asset movement, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StxTransferEvent {
    pub amount: Amount,
    pub sender: Principal,
    pub recipient: Principal,
}

impl StxTransferEvent {
    #[must_use]
    pub fn new(amount: Amount, sender: Principal, recipient: Principal) -> Self {
        Self {
            amount,
            sender,
            recipient,
        }
    }

    /// Whether this event moved funds into `custody`.
    #[must_use]
    pub fn is_inbound_to(&self, custody: &Principal) -> bool {
        &self.recipient == custody
    }
}
