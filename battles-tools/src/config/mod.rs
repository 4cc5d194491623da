// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Static configuration: the network parameter table, the contract config and the environment.
//!
//! Everything here is built once at startup and passed to the routines that need it.

pub mod contract;
pub mod env;
pub mod network;

pub use contract::{ContractConfig, ContractKind, FrontendConfig, TokenConfig};
pub use env::Environment;
pub use network::{
    DevelopmentChains, Explorer, ExplorerKind, NetworkConfig, NetworkTable, DEVNODE_CHAIN_ID,
    DEVNODE_PRIVATE_KEY, DEVNODE_RPC_URL,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml deserialize error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("no network configured for chain id {0}")]
    UnknownChainId(u64),
    #[error("invalid ether amount for {field} on {network}: {value}")]
    InvalidAmount {
        network: String,
        field: &'static str,
        value: String,
    },
    #[error("no rpc url for network {network} (set {var})")]
    MissingRpcUrl { network: String, var: String },
    #[error("no private key configured (set PRIVATE_KEY)")]
    MissingPrivateKey,
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
}
