// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt, path::PathBuf};

const FRONT_END_ADDRESSES: &str = "../wk2-fe/buymeacoffee-app/constants/contractAddress.json";
const FRONT_END_ABI: &str = "../wk2-fe/buymeacoffee-app/constants/abi.json";

/// The contracts this workspace knows how to deploy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ContractKind {
    #[default]
    ChainBattles,
    BuyMeACoffee,
}

impl ContractKind {
    /// Contract name, used for deployment records and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChainBattles => "ChainBattles",
            Self::BuyMeACoffee => "BuyMeACoffee",
        }
    }

    /// Cargo package holding the contract source.
    pub fn package(&self) -> &'static str {
        match self {
            Self::ChainBattles => "chain-battles",
            Self::BuyMeACoffee => "buy-me-a-coffee",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
}

/// Where the front-end application reads its contract data from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    pub addresses_file: PathBuf,
    pub abi_file: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            addresses_file: FRONT_END_ADDRESSES.into(),
            abi_file: FRONT_END_ABI.into(),
        }
    }
}

/// Static description of the contract being deployed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractConfig {
    pub kind: ContractKind,
    pub token: TokenConfig,
    pub frontend: FrontendConfig,
}

impl ContractConfig {
    pub fn new(kind: ContractKind) -> Self {
        Self {
            kind,
            token: TokenConfig {
                name: "Chain Battles".to_string(),
                symbol: "CBTLS".to_string(),
            },
            frontend: FrontendConfig::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn with_frontend(mut self, frontend: FrontendConfig) -> Self {
        self.frontend = frontend;
        self
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self::new(ContractKind::default())
    }
}
