// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use alloy::primitives::Address;

use crate::{
    config::{ContractConfig, NetworkConfig},
    core::{deployment::record::DeploymentRecord, frontend},
    interfaces,
    ops::deployment_record,
    Result,
};

/// Publishes a deployment to the front end, regardless of `UPDATE_FRONT_END`.
pub fn sync_frontend(
    root: impl AsRef<Path>,
    network: &NetworkConfig,
    contract: &ContractConfig,
    address: Option<Address>,
) -> Result<DeploymentRecord> {
    let record = deployment_record(root, network, contract, address)?;
    let abi = interfaces::abi(contract.kind);
    frontend::sync(&contract.frontend, record.chain_id, record.address, &abi)?;
    Ok(record)
}
