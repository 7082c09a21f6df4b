//! System-wide constants for the xWallet ledger.

// ---------------------------------------------------------------------------
// Boundary error codes
// ---------------------------------------------------------------------------
//
// These values are an external contract: clients map them to messages.
// They must never be renumbered.

/// Stored balance below the requested amount.
pub const ERR_INSUFFICIENT_BALANCE: u32 = 100;

/// Amount argument was zero.
pub const ERR_ZERO_AMOUNT: u32 = 101;

/// Transfer recipient equals the caller.
pub const ERR_SELF_TRANSFER: u32 = 102;

/// The native asset movement reported failure.
pub const ERR_TRANSFER_FAILED: u32 = 103;

// ---------------------------------------------------------------------------
// Units
// ---------------------------------------------------------------------------

/// Decimal places of one STX.
pub const STX_DECIMALS: u32 = 6;

/// micro-STX per STX.
pub const MICRO_PER_STX: u128 = 1_000_000;

/// Minimum number of fraction digits shown by `format_stx`.
pub const DISPLAY_MIN_FRACTION_DIGITS: usize = 2;

// ---------------------------------------------------------------------------
// Principals
// ---------------------------------------------------------------------------

/// Mainnet standard principal prefix.
pub const MAINNET_PREFIX: &str = "SP";

/// Testnet standard principal prefix.
pub const TESTNET_PREFIX: &str = "ST";

/// Shortest body (after the prefix) of a standard principal.
pub const STANDARD_BODY_MIN_LEN: usize = 38;

/// Longest body (after the prefix) of a standard principal.
pub const STANDARD_BODY_MAX_LEN: usize = 40;

/// Maximum length of a contract name.
pub const MAX_CONTRACT_NAME_LEN: usize = 128;

/// Characters kept at the start of a shortened principal.
pub const SHORT_PRINCIPAL_HEAD: usize = 6;

/// Characters kept at the end of a shortened principal.
pub const SHORT_PRINCIPAL_TAIL: usize = 4;

// ---------------------------------------------------------------------------
// Deployments
// ---------------------------------------------------------------------------

/// Name under which the ledger contract is deployed.
pub const DEFAULT_CONTRACT_NAME: &str = "xwallet";

/// Testnet deployer address.
pub const TESTNET_DEPLOYER: &str = "STGDS0Y17973EN5TCHNHGJJ9B31XWQ5YXBQ0KQ2Y";

/// Mainnet deployer address.
pub const MAINNET_DEPLOYER: &str = "SPGDS0Y17973EN5TCHNHGJJ9B31XWQ5YX8A36C9B";

/// Hiro API base URL for testnet.
pub const TESTNET_API_URL: &str = "https://api.testnet.hiro.so";

/// Hiro API base URL for mainnet.
pub const MAINNET_API_URL: &str = "https://api.mainnet.hiro.so";

/// Explorer base URL for transactions (both networks; `?chain=` selects).
pub const EXPLORER_TX_URL: &str = "https://explorer.stacks.co/txid";
