// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use alloy::providers::{Provider, WalletProvider};
use battles_tools::{
    config::{
        ConfigError, ContractConfig, ContractKind, Environment, FrontendConfig, NetworkConfig,
        NetworkTable,
    },
    core::{activation::ActivationConfig, deployment::DeploymentConfig},
    ops,
};

use crate::{
    constants::{DEFAULT_NETWORK, DEFAULT_NETWORKS_FILE},
    utils::convert_gwei_to_wei,
};

#[derive(Debug, clap::Args)]
pub struct ActivationArgs {
    /// Percent to bump the estimated activation data fee by
    #[arg(long, default_value = "20")]
    pub data_fee_bump_percent: u64,
}

impl ActivationArgs {
    pub fn config(&self) -> ActivationConfig {
        ActivationConfig {
            data_fee_bump_percent: self.data_fee_bump_percent,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network to operate on, as named in the network table
    #[arg(long, default_value = DEFAULT_NETWORK)]
    pub network: String,
    /// TOML file overriding or extending the built-in network table
    #[arg(long, default_value = DEFAULT_NETWORKS_FILE)]
    pub networks_file: PathBuf,
}

impl NetworkArgs {
    pub fn table(&self) -> Result<NetworkTable, ConfigError> {
        NetworkTable::load(&self.networks_file)
    }

    /// Network table and the selected network.
    pub fn resolve(&self) -> Result<(NetworkTable, NetworkConfig), ConfigError> {
        let table = self.table()?;
        let network = table.by_name(&self.network)?.clone();
        Ok((table, network))
    }
}

#[derive(Debug, clap::Args)]
pub struct ContractArgs {
    /// Contract to operate on
    #[arg(long, value_enum, default_value_t = ContractKind::default())]
    pub contract: ContractKind,
    /// Front-end file listing deployed addresses per chain id
    #[arg(long)]
    pub addresses_file: Option<PathBuf>,
    /// Front-end file holding the contract ABI
    #[arg(long)]
    pub abi_file: Option<PathBuf>,
}

impl ContractArgs {
    pub fn config(&self) -> ContractConfig {
        let defaults = FrontendConfig::default();
        ContractConfig::new(self.contract).with_frontend(FrontendConfig {
            addresses_file: self
                .addresses_file
                .clone()
                .unwrap_or(defaults.addresses_file),
            abi_file: self.abi_file.clone().unwrap_or(defaults.abi_file),
        })
    }
}

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Workspace root holding `contracts/`, `deployments/` and `reports/`
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_deref()
            .map(convert_gwei_to_wei)
            .transpose()
    }

    pub fn deployment_config(&self, activation: &ActivationArgs) -> eyre::Result<DeploymentConfig> {
        Ok(DeploymentConfig::builder()
            .activation(activation.config())
            .max_fee_per_gas_wei(self.get_max_fee_per_gas_wei()?)
            .build())
    }

    /// Provider signing with `PRIVATE_KEY`, or the devnode key on development chains.
    pub async fn build_provider_with_wallet(
        &self,
        table: &NetworkTable,
        network: &NetworkConfig,
        env: &Environment,
    ) -> Result<impl Provider + WalletProvider, battles_tools::Error> {
        ops::connect(network, table.development_chains(), env).await
    }
}

#[derive(Debug, clap::Args)]
pub struct ReflectionArgs {
    /// The output file (defaults to stdout).
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Write the JSON ABI instead of the Solidity interface.
    #[arg(long)]
    pub json: bool,
}
