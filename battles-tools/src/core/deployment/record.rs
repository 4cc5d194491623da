// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    io,
    path::{Path, PathBuf},
};

use alloy::primitives::{Address, Bytes, TxHash};
use serde::{Deserialize, Serialize};

use crate::utils::fs;

/// Directory deployment records are kept under, one subdirectory per network.
pub const DEPLOYMENTS_DIR: &str = "deployments";

/// Outcome of a deployment, written once and read back by later steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub contract_name: String,
    pub network: String,
    pub chain_id: u64,
    pub address: Address,
    pub tx_hash: TxHash,
    pub constructor_args: Vec<String>,
    /// ABI-encoded constructor arguments, as explorers expect them.
    pub constructor_calldata: Bytes,
    pub confirmations: u64,
}

impl DeploymentRecord {
    /// `<root>/deployments/<network>/<contract>.json`
    pub fn path(root: impl AsRef<Path>, network: &str, contract_name: &str) -> PathBuf {
        root.as_ref()
            .join(DEPLOYMENTS_DIR)
            .join(network)
            .join(format!("{contract_name}.json"))
    }

    pub fn save(&self, root: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = Self::path(root, &self.network, &self.contract_name);
        fs::write_json_atomic(&path, self, true)?;
        debug!(@grey, "saved deployment record to {}", path.display());
        Ok(path)
    }

    /// Loads the latest record for a contract on a network, if one exists.
    pub fn load(
        root: impl AsRef<Path>,
        network: &str,
        contract_name: &str,
    ) -> io::Result<Option<Self>> {
        fs::read_json(Self::path(root, network, contract_name))
    }
}
