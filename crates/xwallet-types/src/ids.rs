//! Identities used throughout xWallet.
//!
//! A [`Principal`] is any Stacks address (standard or contract). A [`Caller`]
//! is a principal the host has already authenticated; it is a distinct type
//! so an arbitrary user-supplied principal can never stand in for the invoker.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Result, XwalletError, constants};

// ---------------------------------------------------------------------------
// Principal
// ---------------------------------------------------------------------------

/// A Stacks principal: `ST...`/`SP...`, optionally followed by `.contract-name`.
///
/// The ledger treats it as opaque and only compares it for equality; the
/// format checks here exist so malformed input is rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Principal(String);

impl Principal {
    /// Parse and validate a standard or contract principal.
    ///
    /// # Errors
    /// Returns [`XwalletError::InvalidPrincipal`] if the input is malformed.
    pub fn parse(input: &str) -> Result<Self> {
        let (address, name) = match input.split_once('.') {
            Some((address, name)) => (address, Some(name)),
            None => (input, None),
        };
        validate_standard(address).map_err(|reason| invalid(input, reason))?;
        if let Some(name) = name {
            validate_contract_name(name).map_err(|reason| invalid(input, reason))?;
        }
        Ok(Self(input.to_string()))
    }

    /// Build the contract principal `<self>.<name>`.
    ///
    /// # Errors
    /// Returns [`XwalletError::InvalidPrincipal`] if `self` is already a
    /// contract principal or `name` is not a valid contract name.
    pub fn contract(&self, name: &str) -> Result<Self> {
        if self.is_contract() {
            return Err(invalid(&self.0, "contract principals cannot own contracts"));
        }
        Self::parse(&format!("{}.{name}", self.0))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The standard-address part (everything before the `.`).
    #[must_use]
    pub fn address(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(a, _)| a)
    }

    #[must_use]
    pub fn contract_name(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, n)| n)
    }

    #[must_use]
    pub fn is_contract(&self) -> bool {
        self.0.contains('.')
    }

    /// Whether the address carries the mainnet `SP` prefix.
    #[must_use]
    pub fn is_mainnet(&self) -> bool {
        self.0.starts_with(constants::MAINNET_PREFIX)
    }

    /// Truncated display form, e.g. `ST1PQH...GZGM`.
    #[must_use]
    pub fn short(&self) -> String {
        self.short_with(constants::SHORT_PRINCIPAL_HEAD, constants::SHORT_PRINCIPAL_TAIL)
    }

    /// Truncated display form keeping `head` leading and `tail` trailing characters.
    #[must_use]
    pub fn short_with(&self, head: usize, tail: usize) -> String {
        // Principals are ASCII, so byte slicing is safe.
        if self.0.len() <= head.saturating_add(tail) {
            return self.0.clone();
        }
        format!("{}...{}", &self.0[..head], &self.0[self.0.len() - tail..])
    }
}

fn invalid(input: &str, reason: &str) -> XwalletError {
    XwalletError::InvalidPrincipal {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_standard(address: &str) -> std::result::Result<(), &'static str> {
    let body = address
        .strip_prefix(constants::MAINNET_PREFIX)
        .or_else(|| address.strip_prefix(constants::TESTNET_PREFIX))
        .ok_or("standard principal must start with SP or ST")?;
    if !(constants::STANDARD_BODY_MIN_LEN..=constants::STANDARD_BODY_MAX_LEN).contains(&body.len())
    {
        return Err("standard principal has the wrong length");
    }
    if !body
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    {
        return Err("standard principal must be upper-case alphanumeric");
    }
    Ok(())
}

fn validate_contract_name(name: &str) -> std::result::Result<(), &'static str> {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() => {}
        Some(_) => return Err("contract name must start with a letter"),
        None => return Err("contract name is empty"),
    }
    if name.len() > constants::MAX_CONTRACT_NAME_LEN {
        return Err("contract name is too long");
    }
    if !bytes.all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
        return Err("contract name contains invalid characters");
    }
    Ok(())
}

impl FromStr for Principal {
    type Err = XwalletError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Principal {
    type Error = XwalletError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Principal> for String {
    fn from(value: Principal) -> Self {
        value.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Principal {
    /// A random testnet standard principal (c32 alphabet, 39-char body).
    #[must_use]
    pub fn random() -> Self {
        use rand::Rng;
        const C32: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
        let mut rng = rand::thread_rng();
        let body: String = (0..39)
            .map(|_| C32[rng.gen_range(0..C32.len())] as char)
            .collect();
        Self(format!("{}{body}", constants::TESTNET_PREFIX))
    }
}

// ---------------------------------------------------------------------------
// Caller
// ---------------------------------------------------------------------------

/// The authenticated invoker of a ledger operation.
///
/// Constructed only by the host environment after it has verified the
/// transaction sender. Deliberately not `Deserialize`: a caller can never be
/// read off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Caller(Principal);

impl Caller {
    /// Wrap a principal whose identity the host has already verified.
    #[must_use]
    pub fn authenticated(principal: Principal) -> Self {
        Self(principal)
    }

    #[must_use]
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "caller:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TxId
// ---------------------------------------------------------------------------

/// Transaction identifier assigned by the host to each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TxId(pub [u8; 32]);

impl TxId {
    /// Deterministic `TxId` from the host's call nonce, sender and function.
    #[must_use]
    pub fn derive(nonce: u64, sender: &Principal, function: &str) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"xwallet:txid:v1:");
        hasher.update(nonce.to_le_bytes());
        hasher.update(sender.as_str().as_bytes());
        hasher.update(b":");
        hasher.update(function.as_bytes());
        Self(hasher.finalize().into())
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
