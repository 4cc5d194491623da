// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The deploy pipeline: build, deploy, record, report, verify and publish to the front end.

use std::path::{Path, PathBuf};

use alloy::providers::{Provider, WalletProvider};
use typed_builder::TypedBuilder;

use crate::{
    config::{ContractConfig, DevelopmentChains, Environment, NetworkConfig},
    core::{
        build::{build_contract, BuildConfig},
        code::ContractCode,
        deployment::{self, record::DeploymentRecord, resolve, Deployment, DeploymentConfig},
        frontend,
        gas_report::{self, GasReport},
        verification::{self, should_verify, SourceBundle},
    },
    interfaces, Error, Result,
};

/// Toolchain reported to explorers alongside the contract sources.
pub const COMPILER_VERSION: &str = concat!("rustc-", env!("CARGO_PKG_RUST_VERSION"));

/// Steps of the deploy pipeline that can be selected with `--tags`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DeployTag {
    /// Build, deploy, report and verify.
    All,
    /// Publish the address and ABI to the front end.
    Frontend,
}

#[derive(Clone, Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct DeployOptions {
    #[builder(!default)]
    pub network: NetworkConfig,
    pub dev_chains: DevelopmentChains,
    pub contract: ContractConfig,
    pub env: Environment,
    /// Workspace root holding `contracts/`, `deployments/` and `reports/`.
    #[builder(default = PathBuf::from("."))]
    pub root: PathBuf,
    /// Prebuilt contract, skipping the cargo build.
    pub wasm_file: Option<PathBuf>,
    pub deployment: DeploymentConfig,
    /// Selected steps; empty runs all of them.
    pub tags: Vec<DeployTag>,
}

impl DeployOptions {
    fn runs(&self, tag: DeployTag) -> bool {
        self.tags.is_empty() || self.tags.contains(&tag)
    }

    fn package_dir(&self) -> PathBuf {
        self.root.join("contracts").join(self.contract.kind.package())
    }
}

/// Runs the selected deploy steps against `provider`.
///
/// Returns the record of the deployment made, if the `all` step ran. Gas report and
/// verification failures are logged and never fail the deployment.
pub async fn deploy(
    options: &DeployOptions,
    provider: &(impl Provider + WalletProvider),
) -> Result<Option<DeploymentRecord>> {
    let mut deployed = None;
    if options.runs(DeployTag::All) {
        greyln!("----------------------------------------------------");
        let code = contract_code(options)?;
        let plan = resolve(&options.network, &options.contract);
        let deployment = deployment::deploy(&plan, &code, &options.deployment, provider).await?;
        deployed = Some(record_deployment(options, deployment).await?);
        greyln!("----------------------------------------------------");
    }

    if options.runs(DeployTag::Frontend) {
        if options.env.update_front_end() {
            let record = match &deployed {
                Some(record) => record.clone(),
                None => saved_record(options)?,
            };
            let abi = interfaces::abi(options.contract.kind);
            frontend::sync(&options.contract.frontend, record.chain_id, record.address, &abi)?;
        } else {
            debug!(@grey, "UPDATE_FRONT_END not set, skipping front end");
        }
    }
    Ok(deployed)
}

/// Saves, reports and verifies a finished deployment. Only saving the record can fail.
async fn record_deployment(
    options: &DeployOptions,
    deployment: Deployment,
) -> Result<DeploymentRecord> {
    let Deployment { record, gas } = deployment;
    let path = record.save(&options.root)?;
    mintln!("{} deployed at {}", record.contract_name, record.address);
    debug!(@grey, "deployment saved to {}", path.display());

    let mut report = GasReport::new();
    report.record(gas);
    if let Err(err) = gas_report::write_if_enabled(&report, &options.env, &options.root).await {
        warn!(@yellow, "could not write gas report: {err}");
    }

    verify_deployment(options, &record).await;
    Ok(record)
}

fn contract_code(options: &DeployOptions) -> Result<ContractCode> {
    let wasm = match &options.wasm_file {
        Some(wasm) => wasm.clone(),
        None => build_contract(options.contract.kind.package(), &BuildConfig::default())?,
    };
    debug!(@grey, "reading wasm file at {}", wasm.display());
    Ok(ContractCode::from_wasm_file(wasm)?)
}

fn saved_record(options: &DeployOptions) -> Result<DeploymentRecord> {
    let saved =
        DeploymentRecord::load(&options.root, &options.network.name, options.contract.name())?;
    saved.ok_or_else(|| Error::NoDeployment {
        contract: options.contract.name().to_string(),
        network: options.network.name.clone(),
    })
}

async fn verify_deployment(options: &DeployOptions, record: &DeploymentRecord) {
    let network = &options.network;
    let explorer = network.explorer.as_ref();
    let api_key = explorer.and_then(|explorer| options.env.explorer_api_key(explorer.kind));
    let (Some(explorer), Some(api_key)) = (explorer, api_key) else {
        debug!(@grey, "no explorer api key for {}, skipping verification", network.name);
        return;
    };
    if !should_verify(&network.name, &options.dev_chains, Some(api_key)) {
        debug!(@grey, "{} is a development chain, skipping verification", network.name);
        return;
    }

    greyln!("verifying...");
    let source = match source_bundle(&options.package_dir(), record) {
        Ok(source) => source,
        Err(err) => {
            warn!(@yellow, "could not read contract sources: {err}");
            return;
        }
    };
    let client = reqwest::Client::new();
    verification::verify_best_effort(record, &source, explorer, api_key, &client).await;
}

pub(crate) fn source_bundle(
    dir: &Path,
    record: &DeploymentRecord,
) -> std::io::Result<SourceBundle> {
    SourceBundle::from_package_dir(dir, &record.contract_name, COMPILER_VERSION)
}

#[cfg(test)]
mod tests {
    use alloy::{
        network::EthereumWallet,
        primitives::{address, Address, TxHash},
        providers::ProviderBuilder,
    };
    use serde_json::Value;

    use super::*;
    use crate::{
        config::{ContractKind, FrontendConfig, NetworkTable},
        core::gas_report::GasUsage,
    };

    const DEPLOYED: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

    fn options(root: &Path, env: Environment, tags: Vec<DeployTag>) -> DeployOptions {
        let table = NetworkTable::builtin();
        let frontend = FrontendConfig {
            addresses_file: root.join("fe/contractAddress.json"),
            abi_file: root.join("fe/abi.json"),
        };
        DeployOptions::builder()
            .network(table.by_name("devnode").unwrap().clone())
            .dev_chains(table.development_chains().clone())
            .contract(ContractConfig::new(ContractKind::BuyMeACoffee).with_frontend(frontend))
            .env(env)
            .root(root)
            .tags(tags)
            .build()
    }

    /// A provider the front-end step never contacts.
    fn offline_provider(options: &DeployOptions) -> impl Provider + WalletProvider {
        let signer = crate::ops::signer(&options.network, &options.dev_chains, &options.env);
        ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer.unwrap()))
            .connect_http("http://localhost:1".parse().unwrap())
    }

    fn record() -> DeploymentRecord {
        DeploymentRecord {
            contract_name: "BuyMeACoffee".to_string(),
            network: "devnode".to_string(),
            chain_id: 412346,
            address: DEPLOYED,
            tx_hash: TxHash::repeat_byte(7),
            constructor_args: vec!["1000000000000000".to_string()],
            constructor_calldata: Default::default(),
            confirmations: 1,
        }
    }

    #[test]
    fn empty_tags_run_everything() {
        let dir = tempfile::tempdir().unwrap();
        let all = options(dir.path(), Environment::default(), vec![]);
        assert!(all.runs(DeployTag::All));
        assert!(all.runs(DeployTag::Frontend));

        let frontend = options(dir.path(), Environment::default(), vec![DeployTag::Frontend]);
        assert!(!frontend.runs(DeployTag::All));
        assert!(frontend.runs(DeployTag::Frontend));
    }

    #[tokio::test]
    async fn frontend_tag_publishes_saved_deployment() {
        let dir = tempfile::tempdir().unwrap();
        record().save(dir.path()).unwrap();
        let env = Environment::from_vars([("UPDATE_FRONT_END", "true")]);
        let options = options(dir.path(), env, vec![DeployTag::Frontend]);
        let provider = offline_provider(&options);

        let deployed = deploy(&options, &provider).await.unwrap();
        assert_eq!(deployed, None);

        let registry = dir.path().join("fe/contractAddress.json");
        let registry = std::fs::read_to_string(registry).unwrap();
        let registry: Value = serde_json::from_str(&registry).unwrap();
        assert_eq!(registry["412346"][0], DEPLOYED.to_checksum(None));
        assert!(dir.path().join("fe/abi.json").exists());
    }

    #[tokio::test]
    async fn frontend_step_needs_a_deployment() {
        let dir = tempfile::tempdir().unwrap();
        let env = Environment::from_vars([("UPDATE_FRONT_END", "true")]);
        let options = options(dir.path(), env, vec![DeployTag::Frontend]);
        let provider = offline_provider(&options);

        assert!(matches!(
            deploy(&options, &provider).await,
            Err(Error::NoDeployment { .. })
        ));
    }

    #[tokio::test]
    async fn gas_report_failure_keeps_deployment() {
        let dir = tempfile::tempdir().unwrap();
        // a file where the reports directory belongs
        std::fs::write(dir.path().join(gas_report::GAS_REPORT_DIR), "").unwrap();
        let env = Environment::from_vars([("USE_GAS_REPORT", "true")]);
        let options = options(dir.path(), env, vec![]);
        let deployment = Deployment {
            record: record(),
            gas: GasUsage {
                contract: "BuyMeACoffee".to_string(),
                method: "deploy".to_string(),
                gas_used: 1_000_000,
                gas_price: 100_000_000,
            },
        };

        let recorded = record_deployment(&options, deployment).await.unwrap();
        assert_eq!(recorded, record());
        let saved = DeploymentRecord::load(dir.path(), "devnode", "BuyMeACoffee").unwrap();
        assert_eq!(saved, Some(record()));
    }
}
