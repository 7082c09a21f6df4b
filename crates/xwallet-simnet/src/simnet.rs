//! Simulated chain hosting one xWallet contract.
//!
//! The [`Simnet`] plays the host's part of the contract's contract:
//! - authenticates the sender and hands the ledger a [`Caller`]
//! - provides native STX movement through an [`StxBank`]
//! - serializes calls and makes each one atomic: an `(err ...)` response or a
//!   runtime error restores ledger and holdings to their state before the call
//! - assigns a [`TxId`] and collects the transfer events of each call

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use xwallet_ledger::{Ledger, StxBank};
use xwallet_types::{
    Amount, Caller, LedgerOperation, Principal, StxTransferEvent, TransferError, TxId,
};

use crate::config::SimnetConfig;
use crate::value::{ClarityValue, ResponseValue};
use crate::{Result, SimnetError};

/// Outcome of a public call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallReceipt {
    pub tx_id: TxId,
    pub function: LedgerOperation,
    pub sender: Principal,
    pub result: ResponseValue,
    /// Native movements applied by the call; empty if it was rolled back.
    pub events: Vec<StxTransferEvent>,
    pub block_height: u64,
    pub executed_at: DateTime<Utc>,
}

/// A decoded entry-point invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LedgerCall {
    Deposit { amount: Amount },
    Transfer { amount: Amount, recipient: Principal },
    Withdraw { amount: Amount },
    GetBalance { principal: Principal },
}

impl LedgerCall {
    fn decode(op: LedgerOperation, args: &[ClarityValue]) -> Result<Self> {
        let bad = |reason: String| SimnetError::BadArguments {
            function: op.function_name().to_string(),
            reason,
        };
        let uint = |v: &ClarityValue| {
            v.as_uint()
                .ok_or_else(|| bad(format!("expected uint, got {}", v.type_name())))
        };
        let principal = |v: &ClarityValue| {
            v.as_principal()
                .cloned()
                .ok_or_else(|| bad(format!("expected principal, got {}", v.type_name())))
        };

        match (op, args) {
            (LedgerOperation::Deposit, [amount]) => Ok(Self::Deposit {
                amount: uint(amount)?,
            }),
            (LedgerOperation::Transfer, [amount, recipient]) => Ok(Self::Transfer {
                amount: uint(amount)?,
                recipient: principal(recipient)?,
            }),
            (LedgerOperation::Withdraw, [amount]) => Ok(Self::Withdraw {
                amount: uint(amount)?,
            }),
            (LedgerOperation::GetBalance, [who]) => Ok(Self::GetBalance {
                principal: principal(who)?,
            }),
            (op, args) => {
                let expected = match op {
                    LedgerOperation::Transfer => 2,
                    _ => 1,
                };
                Err(bad(format!(
                    "expected {expected} argument(s), got {}",
                    args.len()
                )))
            }
        }
    }
}

/// In-process chain with one deployed ledger contract.
#[derive(Debug)]
pub struct Simnet {
    contract_name: String,
    accounts: BTreeMap<String, Principal>,
    bank: StxBank,
    ledger: Ledger,
    nonce: u64,
    block_height: u64,
}

impl Simnet {
    /// Fund the configured accounts and deploy the contract.
    ///
    /// # Errors
    /// Returns `Config` if the configuration is invalid.
    pub fn new(config: &SimnetConfig) -> Result<Self> {
        config.validate()?;
        let mut bank = StxBank::new();
        let mut accounts = BTreeMap::new();
        for account in config.all_accounts() {
            bank.mint(&account.address, account.balance)?;
            accounts.insert(account.name.clone(), account.address.clone());
        }
        let contract = config.deployer.address.contract(&config.contract_name)?;
        tracing::info!(
            %contract,
            network = %config.network,
            accounts = accounts.len(),
            "contract deployed"
        );
        Ok(Self {
            contract_name: config.contract_name.clone(),
            accounts,
            bank,
            ledger: Ledger::new(contract),
            nonce: 0,
            block_height: 1,
        })
    }

    /// A simnet over the standard devnet accounts.
    ///
    /// # Errors
    /// Fails only if the built-in devnet configuration is invalid.
    pub fn devnet() -> Result<Self> {
        Self::new(&SimnetConfig::devnet()?)
    }

    // =================================================================
    // Accounts and state
    // =================================================================

    /// Named accounts (deployer included).
    #[must_use]
    pub fn accounts(&self) -> &BTreeMap<String, Principal> {
        &self.accounts
    }

    /// Address of a named account.
    ///
    /// # Errors
    /// Returns [`SimnetError::UnknownAccount`] if no such account exists.
    pub fn account(&self, name: &str) -> Result<&Principal> {
        self.accounts
            .get(name)
            .ok_or_else(|| SimnetError::UnknownAccount(name.to_string()))
    }

    #[must_use]
    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    /// The contract principal holding custody.
    #[must_use]
    pub fn contract_principal(&self) -> &Principal {
        self.ledger.contract()
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Native STX held by `principal`.
    #[must_use]
    pub fn stx_balance(&self, principal: &Principal) -> Amount {
        self.bank.balance(principal)
    }

    /// STX currently held in the contract's custody.
    #[must_use]
    pub fn custody_balance(&self) -> Amount {
        self.bank.balance(self.ledger.contract())
    }

    #[must_use]
    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    /// Make the next native movement fail with `fault`.
    pub fn inject_transfer_fault(&mut self, fault: TransferError) {
        self.bank.inject_fault(fault);
    }

    /// Check ledger balances against deposits, withdrawals and custody.
    ///
    /// # Errors
    /// Returns `Runtime(SupplyInvariantViolation)` on mismatch.
    pub fn verify_supply_conservation(&self) -> Result<()> {
        self.ledger
            .verify_supply_conservation(self.custody_balance())
            .map_err(SimnetError::Runtime)
    }

    // =================================================================
    // Calls
    // =================================================================

    /// Execute a public entry point as `sender`.
    ///
    /// A ledger rejection is a successful call with an `(err uN)` result;
    /// it still consumes a nonce and a block.
    ///
    /// # Errors
    /// Host errors: unknown contract or function, bad arguments, a contract
    /// principal as sender, or a runtime abort.
    pub fn call_public_fn(
        &mut self,
        contract: &str,
        function: &str,
        args: &[ClarityValue],
        sender: &Principal,
    ) -> Result<CallReceipt> {
        let op = self.resolve(contract, function)?;
        if sender.is_contract() {
            return Err(SimnetError::InvalidSender(sender.clone()));
        }
        let call = LedgerCall::decode(op, args)?;
        let caller = Caller::authenticated(sender.clone());

        let ledger_before = self.ledger.clone();
        let bank_before = self.bank.clone();

        let outcome = match call {
            LedgerCall::Deposit { amount } => self.ledger.deposit(&mut self.bank, &caller, amount),
            LedgerCall::Transfer { amount, recipient } => {
                self.ledger.transfer(&caller, &recipient, amount)
            }
            LedgerCall::Withdraw { amount } => {
                self.ledger.withdraw(&mut self.bank, &caller, amount)
            }
            LedgerCall::GetBalance { .. } => {
                return Err(SimnetError::WrongCallKind {
                    function: function.to_string(),
                    expected: "as read-only",
                });
            }
        };

        self.nonce += 1;
        self.block_height += 1;
        let tx_id = TxId::derive(self.nonce, sender, function);

        let result = match ResponseValue::from_ledger(outcome) {
            Ok(result) => result,
            Err(err) => {
                self.rollback(ledger_before, bank_before);
                tracing::warn!(%tx_id, %function, %err, "call aborted");
                return Err(SimnetError::Runtime(err));
            }
        };
        let events = if result.is_ok() {
            self.bank.take_events()
        } else {
            self.rollback(ledger_before, bank_before);
            Vec::new()
        };

        tracing::debug!(
            %tx_id,
            %function,
            sender = %sender.short(),
            ok = result.is_ok(),
            events = events.len(),
            "call executed"
        );
        Ok(CallReceipt {
            tx_id,
            function: op,
            sender: sender.clone(),
            result,
            events,
            block_height: self.block_height,
            executed_at: Utc::now(),
        })
    }

    /// Evaluate a read-only entry point. Never mutates state.
    ///
    /// # Errors
    /// Host errors: unknown contract or function, bad arguments, or a public
    /// entry point called read-only.
    pub fn call_read_only_fn(
        &self,
        contract: &str,
        function: &str,
        args: &[ClarityValue],
        sender: &Principal,
    ) -> Result<ResponseValue> {
        let op = self.resolve(contract, function)?;
        match LedgerCall::decode(op, args)? {
            LedgerCall::GetBalance { principal } => {
                tracing::trace!(sender = %sender.short(), %principal, "get-balance");
                Ok(ResponseValue::Ok(ClarityValue::UInt(
                    self.ledger.get_balance(&principal),
                )))
            }
            _ => Err(SimnetError::WrongCallKind {
                function: function.to_string(),
                expected: "as public",
            }),
        }
    }

    fn resolve(&self, contract: &str, function: &str) -> Result<LedgerOperation> {
        let known = contract == self.contract_name || contract == self.ledger.contract().as_str();
        if !known {
            return Err(SimnetError::UnknownContract(contract.to_string()));
        }
        function
            .parse()
            .map_err(|_| SimnetError::UnknownFunction(function.to_string()))
    }

    /// Restore pre-call state. An injected fault that already fired stays
    /// consumed; one that did not fire stays pending.
    fn rollback(&mut self, ledger: Ledger, mut bank: StxBank) {
        bank.clear_fault();
        if let Some(fault) = self.bank.clear_fault() {
            bank.inject_fault(fault);
        }
        self.ledger = ledger;
        self.bank = bank;
    }
}
