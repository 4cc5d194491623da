// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The routines behind each `cargo battles` command.

use std::path::Path;

use alloy::{
    network::EthereumWallet,
    primitives::{Address, TxHash},
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{local::PrivateKeySigner, Signer},
};

use crate::{
    config::{ConfigError, ContractConfig, DevelopmentChains, Environment, NetworkConfig},
    core::deployment::{record::DeploymentRecord, resolve},
    utils::decode0x,
    Error, Result,
};

pub use deploy::{deploy, DeployOptions, DeployTag};
pub use export_abi::export_abi;
pub use sync::sync_frontend;
pub use verify::{check_deployment, verify};

mod deploy;
mod export_abi;
mod sync;
mod verify;

/// Signer for `network`, from `PRIVATE_KEY` or the devnode key on development chains.
pub fn signer(
    network: &NetworkConfig,
    dev_chains: &DevelopmentChains,
    env: &Environment,
) -> Result<PrivateKeySigner, ConfigError> {
    let key = match env.private_key() {
        Some(key) => key,
        None if dev_chains.contains(&network.name) => crate::config::DEVNODE_PRIVATE_KEY,
        None => return Err(ConfigError::MissingPrivateKey),
    };
    let bytes =
        decode0x(key.trim()).map_err(|err| ConfigError::InvalidPrivateKey(err.to_string()))?;
    let signer = PrivateKeySigner::from_slice(&bytes)
        .map_err(|err| ConfigError::InvalidPrivateKey(err.to_string()))?;
    Ok(signer.with_chain_id(Some(network.chain_id)))
}

/// Wallet provider for `network`.
pub async fn connect(
    network: &NetworkConfig,
    dev_chains: &DevelopmentChains,
    env: &Environment,
) -> Result<impl Provider + WalletProvider> {
    let signer = signer(network, dev_chains, env)?;
    let rpc_url = network.rpc_url(env)?;
    debug!(@grey, "connecting to {} at {rpc_url}", network.name);
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect(&rpc_url)
        .await?;
    Ok(provider)
}

/// The saved deployment of `contract` on `network`, or one standing for `address`.
///
/// An explicit address that differs from the saved one wins, without a transaction hash.
pub fn deployment_record(
    root: impl AsRef<Path>,
    network: &NetworkConfig,
    contract: &ContractConfig,
    address: Option<Address>,
) -> Result<DeploymentRecord> {
    let saved = DeploymentRecord::load(&root, &network.name, contract.name())?;
    match (saved, address) {
        (Some(record), None) => Ok(record),
        (Some(record), Some(address)) if record.address == address => Ok(record),
        (_, Some(address)) => {
            let plan = resolve(network, contract);
            Ok(DeploymentRecord {
                contract_name: contract.name().to_string(),
                network: network.name.clone(),
                chain_id: network.chain_id,
                address,
                tx_hash: TxHash::ZERO,
                constructor_args: plan.args.to_strings(),
                constructor_calldata: plan.args.abi_encode().into(),
                confirmations: plan.confirmations,
            })
        }
        (None, None) => Err(Error::NoDeployment {
            contract: contract.name().to_string(),
            network: network.name.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::config::{ContractKind, NetworkTable};

    const DEPLOYED: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

    #[test]
    fn dev_chains_fall_back_to_devnode_key() {
        let table = NetworkTable::builtin();
        let env = Environment::default();
        let devnode = table.by_name("devnode").unwrap();
        let signer = signer(devnode, table.development_chains(), &env).unwrap();
        assert_eq!(signer.chain_id(), Some(devnode.chain_id));

        let goerli = table.by_name("goerli").unwrap();
        assert!(matches!(
            super::signer(goerli, table.development_chains(), &env),
            Err(ConfigError::MissingPrivateKey)
        ));
    }

    #[test]
    fn private_key_accepts_prefix() {
        let table = NetworkTable::builtin();
        let goerli = table.by_name("goerli").unwrap();
        let key = format!("0x{}", crate::config::DEVNODE_PRIVATE_KEY);
        let env = Environment::from_vars([("PRIVATE_KEY", key.as_str())]);
        let signer = signer(goerli, table.development_chains(), &env).unwrap();
        assert_eq!(signer.chain_id(), Some(5));

        let env = Environment::from_vars([("PRIVATE_KEY", "0x1234")]);
        assert!(matches!(
            super::signer(goerli, table.development_chains(), &env),
            Err(ConfigError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn explicit_address_stands_in_for_record() {
        let dir = tempfile::tempdir().unwrap();
        let table = NetworkTable::builtin();
        let goerli = table.by_name("goerli").unwrap();
        let contract = ContractConfig::new(ContractKind::BuyMeACoffee);

        assert!(matches!(
            deployment_record(dir.path(), goerli, &contract, None),
            Err(Error::NoDeployment { .. })
        ));

        let record = deployment_record(dir.path(), goerli, &contract, Some(DEPLOYED)).unwrap();
        assert_eq!(record.address, DEPLOYED);
        assert_eq!(record.chain_id, 5);
        assert_eq!(record.tx_hash, TxHash::ZERO);
        assert_eq!(record.constructor_args, ["1000000000000000"]);

        let saved = DeploymentRecord {
            tx_hash: TxHash::repeat_byte(1),
            ..record
        };
        saved.save(dir.path()).unwrap();
        let loaded = deployment_record(dir.path(), goerli, &contract, None).unwrap();
        assert_eq!(loaded, saved);
        let loaded = deployment_record(dir.path(), goerli, &contract, Some(DEPLOYED)).unwrap();
        assert_eq!(loaded.tx_hash, TxHash::repeat_byte(1));
    }
}
