//! Simnet configuration: deployer, funded accounts, contract name.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};
use xwallet_types::{Amount, NetworkType, Principal, XwalletError, constants};

use crate::Result;

/// STX every default devnet account starts with (100,000,000 STX).
pub const DEFAULT_ACCOUNT_BALANCE: Amount = 100_000_000 * constants::MICRO_PER_STX;

/// A named, pre-funded account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub name: String,
    pub address: Principal,
    /// Initial native balance in micro-STX.
    pub balance: Amount,
}

impl AccountConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, address: Principal, balance: Amount) -> Self {
        Self {
            name: name.into(),
            address,
            balance,
        }
    }
}

/// Configuration for a [`crate::Simnet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimnetConfig {
    #[serde(default)]
    pub network: NetworkType,
    #[serde(default = "default_contract_name")]
    pub contract_name: String,
    /// Deploys the contract; also a funded account named `deployer`.
    pub deployer: AccountConfig,
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

fn default_contract_name() -> String {
    constants::DEFAULT_CONTRACT_NAME.to_string()
}

impl SimnetConfig {
    /// Parse a JSON configuration and validate it.
    ///
    /// # Errors
    /// Returns `Config` for malformed JSON or inconsistent settings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json).map_err(XwalletError::from)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON configuration file.
    ///
    /// # Errors
    /// Returns `Config` if the file cannot be read or is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(XwalletError::from)?;
        Self::from_json_str(&json)
    }

    /// Check names are unique and the deployer can own a contract.
    ///
    /// # Errors
    /// Returns `Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.deployer.address.is_contract() {
            return Err(configuration("deployer must be a standard principal"));
        }
        self.deployer.address.contract(&self.contract_name)?;

        let mut names = HashSet::new();
        let mut addresses = HashSet::new();
        for account in self.all_accounts() {
            if !names.insert(account.name.as_str()) {
                return Err(configuration(&format!(
                    "duplicate account name {:?}",
                    account.name
                )));
            }
            if !addresses.insert(&account.address) {
                return Err(configuration(&format!(
                    "duplicate account address {}",
                    account.address
                )));
            }
            if account.address.is_contract() {
                return Err(configuration(&format!(
                    "account {:?} is a contract principal",
                    account.name
                )));
            }
        }
        Ok(())
    }

    /// Deployer followed by the other accounts.
    pub fn all_accounts(&self) -> impl Iterator<Item = &AccountConfig> {
        std::iter::once(&self.deployer).chain(self.accounts.iter())
    }

    /// The standard devnet: `deployer` and `wallet_1`..`wallet_3`, each
    /// holding [`DEFAULT_ACCOUNT_BALANCE`].
    ///
    /// # Errors
    /// Fails only if a built-in devnet address is malformed.
    pub fn devnet() -> Result<Self> {
        let account = |name: &str, addr: &str| -> Result<AccountConfig> {
            Ok(AccountConfig::new(
                name,
                Principal::parse(addr)?,
                DEFAULT_ACCOUNT_BALANCE,
            ))
        };
        Ok(Self {
            network: NetworkType::Testnet,
            contract_name: default_contract_name(),
            deployer: account("deployer", "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")?,
            accounts: vec![
                account("wallet_1", "ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5")?,
                account("wallet_2", "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG")?,
                account("wallet_3", "ST2JHG361ZXG51QTKY2NQCVBPPRRE2KZB1HR05NNC")?,
            ],
        })
    }
}

fn configuration(reason: &str) -> crate::SimnetError {
    XwalletError::Configuration(reason.to_string()).into()
}
