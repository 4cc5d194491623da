// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Source verification on Etherscan-compatible block explorers.
//!
//! Verification is best-effort: a deployment is complete whether or not the explorer accepts
//! the source, so callers normally go through [`verify_best_effort`].
//!
//! Stock Etherscan and Polygonscan instances only take Solidity and Vyper code formats. They
//! reject [`CODE_FORMAT`], and the submission ends in
//! [`VerificationError::UnsupportedCodeFormat`]. Only explorers that index Stylus Rust sources
//! get past the submission step.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use alloy::{
    consensus::Transaction,
    primitives::TxHash,
    providers::Provider,
    sol_types::SolCall,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::{
    config::{DevelopmentChains, Explorer},
    core::{
        code::ContractCode,
        deployment::{
            deployer::{stylus_constructorCall, StylusDeployer::deployCall},
            prelude::DeploymentCalldata,
            record::DeploymentRecord,
        },
    },
    utils::color::DebugColor,
};

/// Number of `checkverifystatus` polls before giving up.
pub const MAX_STATUS_CHECKS: usize = 10;

/// Delay between status polls.
pub const STATUS_CHECK_INTERVAL: Duration = Duration::from_secs(5);

/// Code format reported to the explorer for a bundle of Rust sources.
pub const CODE_FORMAT: &str = "stylus-rust-json-input";

/// Whether a deployment on `network` should be submitted for verification.
pub fn should_verify(network: &str, dev_chains: &DevelopmentChains, api_key: Option<&str>) -> bool {
    !dev_chains.contains(network) && api_key.is_some_and(|key| !key.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("explorer does not accept the {} code format: {}", CODE_FORMAT, .0)]
    UnsupportedCodeFormat(String),
    #[error("explorer rejected the request: {0}")]
    Rejected(String),
    #[error("explorer could not verify the source: {0}")]
    Failed(String),
    #[error("verification still pending after {0} status checks")]
    Timeout(usize),
    #[error("deployment transaction {} not found", .0.debug_red())]
    NoDeploymentTx(TxHash),
    #[error("deployment transaction is not a StylusDeployer.deploy call")]
    InvalidDeploymentTx,
    #[error("deployment did not call the contract constructor")]
    InvalidInitData,
}

/// Result of a verification that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    AlreadyVerified,
}

/// Contract sources submitted to the explorer.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceBundle {
    pub contract_name: String,
    pub compiler_version: String,
    /// JSON document mapping relative paths to file contents.
    pub source_code: String,
}

impl SourceBundle {
    /// Collects `Cargo.toml` and the `src/` files of a contract package.
    pub fn from_package_dir(
        dir: impl AsRef<Path>,
        contract_name: &str,
        compiler_version: &str,
    ) -> io::Result<Self> {
        let dir = dir.as_ref();
        let mut files: Vec<PathBuf> = vec!["Cargo.toml".into()];
        let mut sources: Vec<PathBuf> = fs::read_dir(dir.join("src"))?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
            .filter_map(|path| path.strip_prefix(dir).ok().map(Path::to_path_buf))
            .collect();
        sources.sort();
        files.extend(sources);

        let mut entries = Map::new();
        for file in files {
            let content = fs::read_to_string(dir.join(&file))?;
            let key = file.to_string_lossy().replace('\\', "/");
            entries.insert(key, json!({ "content": content }));
        }
        let source_code = json!({ "language": "Rust", "sources": entries }).to_string();

        Ok(Self {
            contract_name: contract_name.to_string(),
            compiler_version: compiler_version.to_string(),
            source_code,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    status: String,
    #[serde(default)]
    message: String,
    result: Value,
}

impl ExplorerResponse {
    fn result_text(&self) -> String {
        match &self.result {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

enum Submission {
    Queued(String),
    AlreadyVerified,
}

enum Status {
    Pending,
    Done(VerificationOutcome),
}

fn submission_outcome(response: &ExplorerResponse) -> Result<Submission, VerificationError> {
    let result = response.result_text();
    if response.status == "1" {
        return Ok(Submission::Queued(result));
    }
    let lower = result.to_lowercase();
    if lower.contains("already verified") {
        return Ok(Submission::AlreadyVerified);
    }
    if lower.contains("codeformat") {
        return Err(VerificationError::UnsupportedCodeFormat(result));
    }
    Err(VerificationError::Rejected(format!(
        "{} ({})",
        result, response.message
    )))
}

fn status_outcome(response: &ExplorerResponse) -> Result<Status, VerificationError> {
    let result = response.result_text();
    let lower = result.to_lowercase();
    if lower.contains("pending") {
        Ok(Status::Pending)
    } else if lower.contains("already verified") {
        Ok(Status::Done(VerificationOutcome::AlreadyVerified))
    } else if response.status == "1" {
        Ok(Status::Done(VerificationOutcome::Verified))
    } else {
        Err(VerificationError::Failed(result))
    }
}

fn submission_form(
    record: &DeploymentRecord,
    source: &SourceBundle,
    api_key: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("apikey", api_key.to_string()),
        ("module", "contract".to_string()),
        ("action", "verifysourcecode".to_string()),
        ("contractaddress", record.address.to_string()),
        ("sourceCode", source.source_code.clone()),
        ("codeformat", CODE_FORMAT.to_string()),
        ("contractname", source.contract_name.clone()),
        ("compilerversion", source.compiler_version.clone()),
        // sic: the explorer API spells it this way
        (
            "constructorArguements",
            hex::encode(&record.constructor_calldata),
        ),
    ]
}

/// Submits the contract source and polls until the explorer reaches a verdict.
pub async fn verify(
    record: &DeploymentRecord,
    source: &SourceBundle,
    explorer: &Explorer,
    api_key: &str,
    client: &reqwest::Client,
) -> Result<VerificationOutcome, VerificationError> {
    info!(@grey, "verifying {} at {}", record.contract_name, record.address.debug_lavender());

    let response: ExplorerResponse = client
        .post(&explorer.api_url)
        .form(&submission_form(record, source, api_key))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    let guid = match submission_outcome(&response)? {
        Submission::Queued(guid) => guid,
        Submission::AlreadyVerified => return Ok(VerificationOutcome::AlreadyVerified),
    };
    debug!(@grey, "verification queued with guid {guid}");

    for _ in 0..MAX_STATUS_CHECKS {
        tokio::time::sleep(STATUS_CHECK_INTERVAL).await;
        let response: ExplorerResponse = client
            .get(&explorer.api_url)
            .query(&[
                ("apikey", api_key),
                ("module", "contract"),
                ("action", "checkverifystatus"),
                ("guid", guid.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        match status_outcome(&response)? {
            Status::Pending => debug!(@grey, "verification pending"),
            Status::Done(outcome) => return Ok(outcome),
        }
    }
    Err(VerificationError::Timeout(MAX_STATUS_CHECKS))
}

/// Runs [`verify`], logging any failure instead of returning it.
pub async fn verify_best_effort(
    record: &DeploymentRecord,
    source: &SourceBundle,
    explorer: &Explorer,
    api_key: &str,
    client: &reqwest::Client,
) -> Option<VerificationOutcome> {
    match verify(record, source, explorer, api_key, client).await {
        Ok(outcome) => {
            info!(@grey, "verification result: {outcome:?}");
            Some(outcome)
        }
        Err(err) => {
            warn!(@yellow, "verification of {} failed: {err}", record.contract_name);
            None
        }
    }
}

/// Checks that the deployment transaction carried `code` and called the constructor.
pub async fn check_deployed_code(
    record: &DeploymentRecord,
    code: &ContractCode,
    provider: &impl Provider,
) -> Result<bool, VerificationError> {
    let tx = provider
        .get_transaction_by_hash(record.tx_hash)
        .await?
        .ok_or(VerificationError::NoDeploymentTx(record.tx_hash))?;
    let call =
        deployCall::abi_decode(tx.input()).map_err(|_| VerificationError::InvalidDeploymentTx)?;
    if !call
        .initData
        .starts_with(stylus_constructorCall::SELECTOR.as_slice())
    {
        return Err(VerificationError::InvalidInitData);
    }

    let expected: alloy::primitives::Bytes = DeploymentCalldata::new(code.bytes()).into();
    let matches = call.bytecode == expected;
    if !matches {
        warn!(@yellow,
            "deployed code ({} bytes) differs from local build ({} bytes)",
            call.bytecode.len(),
            expected.len()
        );
    }
    Ok(matches)
}
