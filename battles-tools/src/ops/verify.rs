// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Explorer verification of an existing deployment.

use std::path::Path;

use alloy::{primitives::Address, providers::Provider};

use crate::{
    config::{ContractConfig, DevelopmentChains, Environment, NetworkConfig},
    core::{
        code::ContractCode,
        verification::{self, should_verify, VerificationOutcome},
    },
    ops::{deploy::source_bundle, deployment_record},
    Result,
};

/// Checks the recorded deployment transaction of `contract` against a local build.
///
/// Returns `None` when there is no transaction to check, as for a bare `--address`.
pub async fn check_deployment(
    root: impl AsRef<Path>,
    network: &NetworkConfig,
    contract: &ContractConfig,
    address: Option<Address>,
    wasm_file: impl AsRef<Path>,
    provider: &impl Provider,
) -> Result<Option<bool>> {
    let record = deployment_record(root, network, contract, address)?;
    if record.tx_hash.is_zero() {
        warn!(@yellow, "no deployment transaction recorded, skipping code check");
        return Ok(None);
    }
    let code = ContractCode::from_wasm_file(wasm_file)?;
    let matches = verification::check_deployed_code(&record, &code, provider).await?;
    if matches {
        info!(@grey, "deployed code matches the local build");
    }
    Ok(Some(matches))
}

/// Verifies the deployment of `contract` on `network` with its block explorer.
///
/// Returns `None` when verification does not apply: development chains, networks without an
/// explorer, or a missing API key.
pub async fn verify(
    root: impl AsRef<Path>,
    network: &NetworkConfig,
    dev_chains: &DevelopmentChains,
    contract: &ContractConfig,
    env: &Environment,
    address: Option<Address>,
) -> Result<Option<VerificationOutcome>> {
    let root = root.as_ref();
    let record = deployment_record(root, network, contract, address)?;

    let Some(explorer) = &network.explorer else {
        info!(@grey, "{} has no block explorer, nothing to verify", network.name);
        return Ok(None);
    };
    let api_key = env.explorer_api_key(explorer.kind);
    if !should_verify(&network.name, dev_chains, api_key) {
        info!(@grey,
            "skipping verification on {} (set {} to verify)",
            network.name,
            explorer.kind.api_key_var()
        );
        return Ok(None);
    }
    let api_key = api_key.unwrap_or_default();

    let package_dir = root.join("contracts").join(contract.kind.package());
    let source = source_bundle(&package_dir, &record)?;
    let client = reqwest::Client::new();
    let outcome = verification::verify(&record, &source, explorer, api_key, &client).await?;
    info!(@grey, "verification result: {outcome:?}");
    Ok(Some(outcome))
}
