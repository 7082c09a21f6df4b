//! Integration test: the contract driven through the simnet call boundary.
//!
//! Arguments and results cross as Clarity-like values; rejections must come
//! back as `(err uN)` with the stable codes, and host failures as
//! [`SimnetError`].

use xwallet_simnet::*;
use xwallet_types::{Principal, TransferError, XwalletError, constants};

const CONTRACT: &str = "xwallet";

struct Net {
    sim: Simnet,
    wallet1: Principal,
    wallet2: Principal,
    wallet3: Principal,
}

impl Net {
    fn new() -> Self {
        let sim = Simnet::devnet().unwrap();
        let wallet1 = sim.account("wallet_1").unwrap().clone();
        let wallet2 = sim.account("wallet_2").unwrap().clone();
        let wallet3 = sim.account("wallet_3").unwrap().clone();
        Self {
            sim,
            wallet1,
            wallet2,
            wallet3,
        }
    }

    fn deposit(&mut self, amount: u128, sender: &Principal) -> CallReceipt {
        self.sim
            .call_public_fn(CONTRACT, "deposit", &[ClarityValue::uint(amount)], sender)
            .unwrap()
    }

    fn send(&mut self, amount: u128, to: &Principal, sender: &Principal) -> CallReceipt {
        self.sim
            .call_public_fn(
                CONTRACT,
                "send-stx",
                &[ClarityValue::uint(amount), ClarityValue::principal(to)],
                sender,
            )
            .unwrap()
    }

    fn withdraw(&mut self, amount: u128, sender: &Principal) -> CallReceipt {
        self.sim
            .call_public_fn(CONTRACT, "withdraw", &[ClarityValue::uint(amount)], sender)
            .unwrap()
    }

    fn balance(&self, who: &Principal) -> u128 {
        self.sim
            .call_read_only_fn(CONTRACT, "get-balance", &[ClarityValue::principal(who)], who)
            .unwrap()
            .ok_uint()
            .expect("get-balance always returns (ok uint)")
    }

    fn assert_conserved(&self) {
        self.sim.verify_supply_conservation().unwrap();
        assert_eq!(self.sim.ledger().total_balances(), self.sim.custody_balance());
    }
}

// =============================================================================
// Successful calls
// =============================================================================

#[test]
fn deposit_moves_stx_into_custody() {
    let mut net = Net::new();
    let w1 = net.wallet1.clone();
    let before = net.sim.stx_balance(&w1);

    let receipt = net.deposit(1000, &w1);

    assert_eq!(receipt.result.ok_uint(), Some(1000));
    assert_eq!(net.balance(&w1), 1000);
    assert_eq!(net.sim.stx_balance(&w1), before - 1000);
    assert_eq!(net.sim.custody_balance(), 1000);

    assert_eq!(receipt.events.len(), 1);
    let event = &receipt.events[0];
    assert_eq!(event.amount, 1000);
    assert_eq!(&event.sender, &w1);
    assert_eq!(&event.recipient, net.sim.contract_principal());
    net.assert_conserved();
}

#[test]
fn send_stx_moves_no_native_asset() {
    let mut net = Net::new();
    let (w1, w2) = (net.wallet1.clone(), net.wallet2.clone());
    net.deposit(1000, &w1);
    let custody = net.sim.custody_balance();

    let receipt = net.send(300, &w2, &w1);

    assert_eq!(receipt.result.ok_uint(), Some(300));
    assert!(receipt.events.is_empty());
    assert_eq!(net.balance(&w1), 700);
    assert_eq!(net.balance(&w2), 300);
    assert_eq!(net.sim.custody_balance(), custody);
}

#[test]
fn withdraw_returns_stx_to_caller() {
    let mut net = Net::new();
    let w1 = net.wallet1.clone();
    let start = net.sim.stx_balance(&w1);
    net.deposit(1000, &w1);

    let receipt = net.withdraw(400, &w1);

    assert_eq!(receipt.result.ok_uint(), Some(400));
    assert_eq!(net.balance(&w1), 600);
    assert_eq!(net.sim.stx_balance(&w1), start - 600);
    assert_eq!(receipt.events.len(), 1);
    assert!(receipt.events[0].is_inbound_to(&w1));
    net.assert_conserved();
}

#[test]
fn contract_can_be_addressed_by_full_principal() {
    let mut net = Net::new();
    let w1 = net.wallet1.clone();
    let contract = net.sim.contract_principal().to_string();
    let receipt = net
        .sim
        .call_public_fn(&contract, "deposit", &[ClarityValue::uint(5_u32)], &w1)
        .unwrap();
    assert_eq!(receipt.result.ok_uint(), Some(5));
}

#[test]
fn receipts_carry_distinct_tx_ids_and_heights() {
    let mut net = Net::new();
    let w1 = net.wallet1.clone();
    let a = net.deposit(10, &w1);
    let b = net.deposit(10, &w1);
    assert_ne!(a.tx_id, b.tx_id);
    assert_eq!(b.block_height, a.block_height + 1);
    assert_eq!(b.block_height, net.sim.block_height());

    let json = serde_json::to_value(&b).unwrap();
    assert_eq!(json["function"], "deposit");
    assert_eq!(json["result"]["ok"]["uint"], 10);
}

#[test]
fn anyone_can_read_any_balance() {
    let mut net = Net::new();
    let (w1, w2, w3) = (net.wallet1.clone(), net.wallet2.clone(), net.wallet3.clone());
    net.deposit(300, &w1);

    for reader in [&w1, &w2, &w3] {
        let r = net
            .sim
            .call_read_only_fn(CONTRACT, "get-balance", &[ClarityValue::principal(&w1)], reader)
            .unwrap();
        assert_eq!(r, ResponseValue::Ok(ClarityValue::uint(300_u32)));
    }
    let stranger = Principal::random();
    assert_eq!(net.balance(&stranger), 0);
}

// =============================================================================
// Ledger rejections
// =============================================================================

#[test]
fn rejections_return_stable_codes() {
    let mut net = Net::new();
    let (w1, w2) = (net.wallet1.clone(), net.wallet2.clone());

    assert_eq!(net.deposit(0, &w1).result.err_code(), Some(101));
    net.deposit(1000, &w1);

    assert_eq!(net.send(0, &w2, &w1).result.err_code(), Some(101));
    assert_eq!(net.send(1500, &w2, &w1).result.err_code(), Some(100));
    assert_eq!(net.send(100, &w1, &w1).result.err_code(), Some(102));
    assert_eq!(net.withdraw(0, &w1).result.err_code(), Some(101));
    assert_eq!(net.withdraw(2000, &w1).result.err_code(), Some(100));

    assert_eq!(net.balance(&w1), 1000);
    assert_eq!(net.balance(&w2), 0);
    assert_eq!(net.send(300, &w2, &w1).result.ok_uint(), Some(300));
    assert_eq!(net.balance(&w1), 700);
    net.assert_conserved();
}

#[test]
fn zero_self_transfer_reports_zero_amount_first() {
    let mut net = Net::new();
    let w1 = net.wallet1.clone();
    assert_eq!(net.send(0, &w1, &w1).result.err_code(), Some(101));
}

#[test]
fn deposit_beyond_wallet_funds_is_transfer_failed() {
    let mut net = Net::new();
    let w1 = net.wallet1.clone();
    let held = net.sim.stx_balance(&w1);

    let receipt = net.deposit(held + 1, &w1);

    assert_eq!(
        receipt.result.err_code(),
        Some(u128::from(constants::ERR_TRANSFER_FAILED))
    );
    assert!(receipt.events.is_empty());
    assert_eq!(net.balance(&w1), 0);
    assert_eq!(net.sim.stx_balance(&w1), held);
}

#[test]
fn only_the_owner_can_spend_a_balance() {
    let mut net = Net::new();
    let (w1, w2, w3) = (net.wallet1.clone(), net.wallet2.clone(), net.wallet3.clone());
    net.deposit(500, &w1);

    assert_eq!(net.withdraw(100, &w2).result.err_code(), Some(100));
    assert_eq!(net.send(100, &w3, &w2).result.err_code(), Some(100));
    assert_eq!(net.balance(&w1), 500);
}

// =============================================================================
// Host atomicity
// =============================================================================

#[test]
fn failed_withdraw_movement_rolls_back_everything() {
    let mut net = Net::new();
    let w1 = net.wallet1.clone();
    net.deposit(1000, &w1);
    let wallet_stx = net.sim.stx_balance(&w1);

    net.sim.inject_transfer_fault(TransferError::InsufficientFunds);
    let receipt = net.withdraw(500, &w1);

    assert_eq!(receipt.result.err_code(), Some(103));
    assert!(receipt.events.is_empty());
    assert_eq!(net.balance(&w1), 1000);
    assert_eq!(net.sim.stx_balance(&w1), wallet_stx);
    assert_eq!(net.sim.custody_balance(), 1000);
    net.assert_conserved();

    assert_eq!(net.withdraw(500, &w1).result.ok_uint(), Some(500));
    net.assert_conserved();
}

#[test]
fn failed_deposit_movement_leaves_no_trace() {
    let mut net = Net::new();
    let w1 = net.wallet1.clone();
    net.deposit(500, &w1);

    net.sim.inject_transfer_fault(TransferError::NonPositiveAmount);
    assert_eq!(net.deposit(100, &w1).result.err_code(), Some(103));

    assert_eq!(net.balance(&w1), 500);
    assert_eq!(net.sim.ledger().supply().total_deposits(), 500);
    net.assert_conserved();
}

#[test]
fn transfer_ignores_pending_movement_fault() {
    let mut net = Net::new();
    let (w1, w2) = (net.wallet1.clone(), net.wallet2.clone());
    net.deposit(1000, &w1);

    net.sim.inject_transfer_fault(TransferError::InsufficientFunds);
    assert_eq!(net.send(100, &w2, &w1).result.ok_uint(), Some(100));
    // The fault was never consumed; the next movement trips it.
    assert_eq!(net.withdraw(100, &w2).result.err_code(), Some(103));
    assert_eq!(net.balance(&w2), 100);
}

// =============================================================================
// Host errors
// =============================================================================

#[test]
fn unknown_contract_and_function_are_host_errors() {
    let mut net = Net::new();
    let w1 = net.wallet1.clone();
    let args = [ClarityValue::uint(1_u32)];

    let err = net.sim.call_public_fn("other", "deposit", &args, &w1).unwrap_err();
    assert!(matches!(err, SimnetError::UnknownContract(_)), "{err}");

    let err = net.sim.call_public_fn(CONTRACT, "mint", &args, &w1).unwrap_err();
    assert!(matches!(err, SimnetError::UnknownFunction(_)), "{err}");

    let err = net
        .sim
        .call_read_only_fn("other", "get-balance", &[ClarityValue::principal(&w1)], &w1)
        .unwrap_err();
    assert!(matches!(err, SimnetError::UnknownContract(_)));
    assert_eq!(net.sim.block_height(), 1);
}

#[test]
fn call_kind_is_enforced() {
    let mut net = Net::new();
    let w1 = net.wallet1.clone();

    let err = net
        .sim
        .call_public_fn(CONTRACT, "get-balance", &[ClarityValue::principal(&w1)], &w1)
        .unwrap_err();
    assert!(matches!(err, SimnetError::WrongCallKind { .. }), "{err}");

    let err = net
        .sim
        .call_read_only_fn(CONTRACT, "deposit", &[ClarityValue::uint(1_u32)], &w1)
        .unwrap_err();
    assert!(matches!(err, SimnetError::WrongCallKind { .. }), "{err}");
    assert_eq!(net.balance(&w1), 0);
}

#[test]
fn malformed_arguments_are_rejected_before_execution() {
    let mut net = Net::new();
    let w1 = net.wallet1.clone();

    let cases: [(&str, Vec<ClarityValue>); 4] = [
        ("deposit", vec![]),
        ("deposit", vec![ClarityValue::principal(&w1)]),
        ("send-stx", vec![ClarityValue::uint(5_u32)]),
        (
            "send-stx",
            vec![ClarityValue::principal(&w1), ClarityValue::uint(5_u32)],
        ),
    ];
    for (function, args) in cases {
        let err = net.sim.call_public_fn(CONTRACT, function, &args, &w1).unwrap_err();
        assert!(
            matches!(err, SimnetError::BadArguments { .. }),
            "{function}: {err}"
        );
    }
    assert_eq!(net.sim.custody_balance(), 0);
}

#[test]
fn contract_principal_cannot_send_transactions() {
    let mut net = Net::new();
    let contract = net.sim.contract_principal().clone();
    let err = net
        .sim
        .call_public_fn(CONTRACT, "withdraw", &[ClarityValue::uint(1_u32)], &contract)
        .unwrap_err();
    assert!(matches!(err, SimnetError::InvalidSender(_)));
}

#[test]
fn unknown_account_lookup() {
    let net = Net::new();
    let err = net.sim.account("wallet_42").unwrap_err();
    assert!(matches!(err, SimnetError::UnknownAccount(name) if name == "wallet_42"));
}

#[test]
fn invalid_config_is_refused() {
    let mut cfg = SimnetConfig::devnet().unwrap();
    cfg.accounts.push(cfg.accounts[0].clone());
    let err = Simnet::new(&cfg).unwrap_err();
    assert!(matches!(
        err,
        SimnetError::Config(XwalletError::Configuration(_))
    ));
}

#[test]
fn custom_config_funds_named_accounts() {
    let json = r#"{
        "network": "mainnet",
        "contract_name": "vault",
        "deployer": {
            "name": "deployer",
            "address": "SP1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM",
            "balance": 10
        },
        "accounts": [
            { "name": "alice", "address": "SP2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG", "balance": 500 }
        ]
    }"#;
    let cfg = SimnetConfig::from_json_str(json).unwrap();
    let mut sim = Simnet::new(&cfg).unwrap();
    let alice = sim.account("alice").unwrap().clone();
    assert_eq!(sim.stx_balance(&alice), 500);
    assert_eq!(sim.contract_name(), "vault");

    let r = sim
        .call_public_fn("vault", "deposit", &[ClarityValue::uint(501_u32)], &alice)
        .unwrap();
    assert_eq!(r.result.err_code(), Some(103));
    let r = sim
        .call_public_fn("vault", "deposit", &[ClarityValue::uint(500_u32)], &alice)
        .unwrap();
    assert_eq!(r.result.ok_uint(), Some(500));
    assert_eq!(sim.stx_balance(&alice), 0);
}
