//! Network and deployment configuration for the xWallet contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Principal, Result, TxId, constants};

/// The Stacks network a deployment lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[default]
    Testnet,
    Mainnet,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Testnet => write!(f, "testnet"),
            Self::Mainnet => write!(f, "mainnet"),
        }
    }
}

/// Where the ledger contract is deployed: `<address>.<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDeployment {
    /// Deployer (standard principal).
    pub address: Principal,
    /// Contract name.
    pub name: String,
}

impl ContractDeployment {
    /// The contract principal that holds custody.
    ///
    /// # Errors
    /// Returns `InvalidPrincipal` if `name` is not a valid contract name.
    pub fn principal(&self) -> Result<Principal> {
        self.address.contract(&self.name)
    }
}

/// Per-network client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub network: NetworkType,
    pub contract: ContractDeployment,
    /// Base URL of the chain API.
    pub api_url: String,
    /// Base URL for transaction links.
    pub explorer_url: String,
}

impl NetworkConfig {
    /// Published testnet deployment.
    ///
    /// # Errors
    /// Fails only if the built-in deployer constant is malformed.
    pub fn testnet() -> Result<Self> {
        Self::published(NetworkType::Testnet)
    }

    /// Published mainnet deployment.
    ///
    /// # Errors
    /// Fails only if the built-in deployer constant is malformed.
    pub fn mainnet() -> Result<Self> {
        Self::published(NetworkType::Mainnet)
    }

    /// Published deployment for `network`.
    ///
    /// # Errors
    /// Fails only if the built-in deployer constant is malformed.
    pub fn published(network: NetworkType) -> Result<Self> {
        let (deployer, api_url) = match network {
            NetworkType::Testnet => (constants::TESTNET_DEPLOYER, constants::TESTNET_API_URL),
            NetworkType::Mainnet => (constants::MAINNET_DEPLOYER, constants::MAINNET_API_URL),
        };
        Ok(Self {
            network,
            contract: ContractDeployment {
                address: Principal::parse(deployer)?,
                name: constants::DEFAULT_CONTRACT_NAME.to_string(),
            },
            api_url: api_url.to_string(),
            explorer_url: constants::EXPLORER_TX_URL.to_string(),
        })
    }

    /// Explorer link for a transaction on this network.
    #[must_use]
    pub fn explorer_tx_url(&self, tx_id: &TxId) -> String {
        format!("{}/{tx_id}?chain={}", self.explorer_url, self.network)
    }
}
