// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Per-network deployment parameters.
//!
//! The built-in table covers the local Nitro devnode and the public test networks. A
//! `networks.toml` file can replace entries (matched by name) or add new ones:
//!
//! ```toml
//! development-chains = ["devnode", "localhost"]
//!
//! [[network]]
//! name = "arbitrumSepolia"
//! chain-id = 421614
//! mint-fee = "0.01"
//! max-supply = 5
//! min-tip = "0.001"
//! block-confirmations = 2
//! rpc-env = "ARB_SEPOLIA_RPC_URL"
//!
//! [network.explorer]
//! kind = "etherscan"
//! api-url = "https://api-sepolia.arbiscan.io/api"
//! ```

use std::{fs, path::Path};

use alloy::primitives::{
    address,
    utils::{format_ether, parse_ether},
    Address, U256,
};
use serde::{Deserialize, Serialize};

use super::{ConfigError, Environment};

/// Default RPC endpoint of a local Nitro devnode.
pub const DEVNODE_RPC_URL: &str = "http://localhost:8547";

/// Chain id of a local Nitro devnode.
pub const DEVNODE_CHAIN_ID: u64 = 412346;

/// Prefunded chain-owner key of the Nitro devnode.
pub const DEVNODE_PRIVATE_KEY: &str =
    "b6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

/// Named deployer account on the public networks.
pub const PUBLIC_DEPLOYER: Address = address!("0x0fdB63105291aB806c09274FA8Df08F58A07d811");

const DEFAULT_MINT_FEE: &str = "0.01";
const DEFAULT_MIN_TIP: &str = "0.001";
const DEFAULT_MAX_SUPPLY: u64 = 5;
const DEFAULT_PARTICIPANTS: u64 = 5;
const PUBLIC_CONFIRMATIONS: u64 = 6;

/// Block explorer flavors with an Etherscan-compatible API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplorerKind {
    Etherscan,
    Polygonscan,
}

impl ExplorerKind {
    /// Environment variable holding the API key for this explorer.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Self::Etherscan => super::env::ETHERSCAN_API_KEY,
            Self::Polygonscan => super::env::POLYGONSCAN_API_KEY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Explorer {
    pub kind: ExplorerKind,
    pub api_url: String,
}

/// Deployment parameters of a single network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    pub mint_fee: Option<U256>,
    pub max_supply: Option<U256>,
    pub min_tip: Option<U256>,
    /// Number of minters (or tippers) the staging runs use.
    pub participants: Option<u64>,
    pub block_confirmations: Option<u64>,
    /// Fixed RPC endpoint, used when `rpc_env` is unset or empty.
    pub rpc_url: Option<String>,
    /// Environment variable holding the RPC endpoint.
    pub rpc_env: Option<String>,
    pub explorer: Option<Explorer>,
    /// Account expected to sign deployments.
    pub deployer: Option<Address>,
}

impl NetworkConfig {
    fn dev(name: &str, block_confirmations: Option<u64>) -> Self {
        Self {
            name: name.to_string(),
            chain_id: DEVNODE_CHAIN_ID,
            mint_fee: parse_ether(DEFAULT_MINT_FEE).ok(),
            max_supply: Some(U256::from(DEFAULT_MAX_SUPPLY)),
            min_tip: parse_ether(DEFAULT_MIN_TIP).ok(),
            participants: Some(DEFAULT_PARTICIPANTS),
            block_confirmations,
            rpc_url: Some(DEVNODE_RPC_URL.to_string()),
            rpc_env: None,
            explorer: None,
            deployer: None,
        }
    }

    fn public(name: &str, chain_id: u64, rpc_env: &str, explorer: Explorer) -> Self {
        Self {
            name: name.to_string(),
            chain_id,
            mint_fee: parse_ether(DEFAULT_MINT_FEE).ok(),
            max_supply: Some(U256::from(DEFAULT_MAX_SUPPLY)),
            min_tip: parse_ether(DEFAULT_MIN_TIP).ok(),
            participants: Some(DEFAULT_PARTICIPANTS),
            block_confirmations: Some(PUBLIC_CONFIRMATIONS),
            rpc_url: None,
            rpc_env: Some(rpc_env.to_string()),
            explorer: Some(explorer),
            deployer: Some(PUBLIC_DEPLOYER),
        }
    }

    /// Number of blocks to wait for after a transaction, at least one.
    pub fn confirmations(&self) -> u64 {
        self.block_confirmations.unwrap_or(1).max(1)
    }

    /// Resolves the RPC endpoint, preferring the configured environment variable.
    pub fn rpc_url(&self, env: &Environment) -> Result<String, ConfigError> {
        if let Some(url) = self.rpc_env.as_deref().and_then(|var| env.get(var)) {
            return Ok(url.to_string());
        }
        self.rpc_url
            .clone()
            .ok_or_else(|| ConfigError::MissingRpcUrl {
                network: self.name.clone(),
                var: self
                    .rpc_env
                    .clone()
                    .unwrap_or_else(|| "an rpc-url entry".to_string()),
            })
    }
}

/// Names of the networks treated as local development chains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DevelopmentChains(Vec<String>);

impl DevelopmentChains {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, network: &str) -> bool {
        self.0.iter().any(|name| name == network)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl Default for DevelopmentChains {
    fn default() -> Self {
        Self::new(["devnode", "localhost"])
    }
}

/// All known networks, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkTable {
    networks: Vec<NetworkConfig>,
    development_chains: DevelopmentChains,
}

impl Default for NetworkTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NetworkTable {
    /// The built-in table.
    pub fn builtin() -> Self {
        let etherscan = |api_url: &str| Explorer {
            kind: ExplorerKind::Etherscan,
            api_url: api_url.to_string(),
        };
        Self {
            networks: vec![
                NetworkConfig::dev("devnode", Some(1)),
                NetworkConfig::dev("localhost", None),
                NetworkConfig::public(
                    "rinkeby",
                    4,
                    "RINKEBY_RPC_URL",
                    etherscan("https://api-rinkeby.etherscan.io/api"),
                ),
                NetworkConfig::public(
                    "goerli",
                    5,
                    "GOERLI_RPC_URL",
                    etherscan("https://api-goerli.etherscan.io/api"),
                ),
                NetworkConfig::public(
                    "polygonMumbai",
                    80001,
                    "POLYMUMBAI_RPC_URL",
                    Explorer {
                        kind: ExplorerKind::Polygonscan,
                        api_url: "https://api-testnet.polygonscan.com/api".to_string(),
                    },
                ),
            ],
            development_chains: DevelopmentChains::default(),
        }
    }

    /// The built-in table, merged with `path` if that file exists.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut table = Self::builtin();
        if path.exists() {
            debug!(@grey, "reading network overrides from {}", path.display());
            let contents = fs::read_to_string(path)?;
            table.merge_toml(&contents)?;
        }
        Ok(table)
    }

    /// Merges a TOML override file into the table.
    ///
    /// Entries whose name matches an existing network replace it; the rest are appended.
    pub fn merge_toml(&mut self, contents: &str) -> Result<(), ConfigError> {
        let file: NetworksFile = toml::from_str(contents)?;
        if let Some(chains) = file.development_chains {
            self.development_chains = DevelopmentChains::new(chains);
        }
        for entry in file.network {
            let config = entry.into_config()?;
            match self.networks.iter_mut().find(|n| n.name == config.name) {
                Some(existing) => *existing = config,
                None => self.networks.push(config),
            }
        }
        Ok(())
    }

    pub fn by_name(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .iter()
            .find(|n| n.name == name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }

    /// First network declared with `chain_id`.
    pub fn by_chain_id(&self, chain_id: u64) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .iter()
            .find(|n| n.chain_id == chain_id)
            .ok_or(ConfigError::UnknownChainId(chain_id))
    }

    pub fn development_chains(&self) -> &DevelopmentChains {
        &self.development_chains
    }

    pub fn is_development(&self, network: &str) -> bool {
        self.development_chains.contains(network)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkConfig> {
        self.networks.iter()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct NetworksFile {
    development_chains: Option<Vec<String>>,
    #[serde(default)]
    network: Vec<NetworkEntry>,
}

/// A network as written in `networks.toml`, with ether amounts as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct NetworkEntry {
    name: String,
    chain_id: u64,
    mint_fee: Option<String>,
    max_supply: Option<u64>,
    min_tip: Option<String>,
    participants: Option<u64>,
    block_confirmations: Option<u64>,
    rpc_url: Option<String>,
    rpc_env: Option<String>,
    explorer: Option<Explorer>,
    deployer: Option<Address>,
}

impl NetworkEntry {
    fn into_config(self) -> Result<NetworkConfig, ConfigError> {
        let mint_fee = parse_amount(&self.name, "mint-fee", self.mint_fee)?;
        let min_tip = parse_amount(&self.name, "min-tip", self.min_tip)?;
        Ok(NetworkConfig {
            name: self.name,
            chain_id: self.chain_id,
            mint_fee,
            max_supply: self.max_supply.map(U256::from),
            min_tip,
            participants: self.participants,
            block_confirmations: self.block_confirmations,
            rpc_url: self.rpc_url,
            rpc_env: self.rpc_env,
            explorer: self.explorer,
            deployer: self.deployer,
        })
    }
}

fn parse_amount(
    network: &str,
    field: &'static str,
    value: Option<String>,
) -> Result<Option<U256>, ConfigError> {
    value
        .map(|value| {
            parse_ether(&value).map_err(|_| ConfigError::InvalidAmount {
                network: network.to_string(),
                field,
                value,
            })
        })
        .transpose()
}

/// Formats an optional wei amount in ether, for display.
pub fn format_amount(amount: Option<U256>) -> String {
    amount
        .map(|wei| format!("{} ETH", format_ether(wei)))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_matches_defaults() {
        let table = NetworkTable::builtin();
        let names: Vec<_> = table.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(
            names,
            ["devnode", "localhost", "rinkeby", "goerli", "polygonMumbai"]
        );

        for network in table.iter() {
            assert_eq!(network.mint_fee, Some(parse_ether("0.01").unwrap()));
            assert_eq!(network.max_supply, Some(U256::from(5)));
            assert_eq!(network.min_tip, Some(parse_ether("0.001").unwrap()));
            assert_eq!(network.participants, Some(5));
        }

        let goerli = table.by_name("goerli").unwrap();
        assert_eq!(goerli.chain_id, 5);
        assert_eq!(goerli.confirmations(), 6);
        assert_eq!(goerli.deployer, Some(PUBLIC_DEPLOYER));
        assert_eq!(
            goerli.explorer.as_ref().map(|e| e.kind),
            Some(ExplorerKind::Etherscan)
        );

        let mumbai = table.by_chain_id(80001).unwrap();
        assert_eq!(mumbai.name, "polygonMumbai");
        assert_eq!(
            mumbai.explorer.as_ref().map(|e| e.kind),
            Some(ExplorerKind::Polygonscan)
        );
    }

    #[test]
    fn confirmations_default_to_one() {
        let table = NetworkTable::builtin();
        let localhost = table.by_name("localhost").unwrap();
        assert_eq!(localhost.block_confirmations, None);
        assert_eq!(localhost.confirmations(), 1);
        assert_eq!(table.by_name("devnode").unwrap().confirmations(), 1);
    }

    #[test]
    fn development_chains() {
        let table = NetworkTable::builtin();
        assert!(table.is_development("devnode"));
        assert!(table.is_development("localhost"));
        assert!(!table.is_development("goerli"));
        assert_eq!(table.by_chain_id(DEVNODE_CHAIN_ID).unwrap().name, "devnode");
    }

    #[test]
    fn unknown_network_is_an_error() {
        let table = NetworkTable::builtin();
        assert!(matches!(
            table.by_name("mainnet"),
            Err(ConfigError::UnknownNetwork(name)) if name == "mainnet"
        ));
        assert!(matches!(
            table.by_chain_id(1),
            Err(ConfigError::UnknownChainId(1))
        ));
    }

    #[test]
    fn rpc_url_prefers_environment() {
        let table = NetworkTable::builtin();
        let goerli = table.by_name("goerli").unwrap();

        let env = Environment::from_vars([("GOERLI_RPC_URL", "https://goerli.example")]);
        assert_eq!(goerli.rpc_url(&env).unwrap(), "https://goerli.example");

        let err = goerli.rpc_url(&Environment::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRpcUrl { var, .. } if var == "GOERLI_RPC_URL"));

        let devnode = table.by_name("devnode").unwrap();
        assert_eq!(devnode.rpc_url(&Environment::default()).unwrap(), DEVNODE_RPC_URL);
    }

    #[test]
    fn toml_overrides_and_extends() {
        let mut table = NetworkTable::builtin();
        table
            .merge_toml(
                r#"
                development-chains = ["devnode"]

                [[network]]
                name = "goerli"
                chain-id = 5
                max-supply = 10

                [[network]]
                name = "arbitrumSepolia"
                chain-id = 421614
                mint-fee = "0.02"
                block-confirmations = 2
                rpc-env = "ARB_SEPOLIA_RPC_URL"
                deployer = "0x0fdB63105291aB806c09274FA8Df08F58A07d811"

                [network.explorer]
                kind = "etherscan"
                api-url = "https://api-sepolia.arbiscan.io/api"
                "#,
            )
            .unwrap();

        assert!(!table.is_development("localhost"));

        let goerli = table.by_name("goerli").unwrap();
        assert_eq!(goerli.max_supply, Some(U256::from(10)));
        assert_eq!(goerli.mint_fee, None);
        assert_eq!(goerli.confirmations(), 1);

        let sepolia = table.by_chain_id(421614).unwrap();
        assert_eq!(sepolia.mint_fee, Some(parse_ether("0.02").unwrap()));
        assert_eq!(sepolia.confirmations(), 2);
        assert_eq!(sepolia.deployer, Some(PUBLIC_DEPLOYER));
        assert_eq!(table.iter().count(), 6);
    }

    #[test]
    fn toml_rejects_bad_amounts() {
        let mut table = NetworkTable::builtin();
        let err = table
            .merge_toml(
                r#"
                [[network]]
                name = "broken"
                chain-id = 1
                mint-fee = "lots"
                "#,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidAmount { field: "mint-fee", .. }
        ));
    }

    #[test]
    fn load_without_file_is_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let table = NetworkTable::load(dir.path().join("networks.toml")).unwrap();
        assert_eq!(table, NetworkTable::builtin());
    }
}
