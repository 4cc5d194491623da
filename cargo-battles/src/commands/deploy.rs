// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use battles_tools::{
    config::Environment,
    ops::{self, DeployOptions, DeployTag},
};

use crate::{
    common_args::{ActivationArgs, AuthArgs, ContractArgs, NetworkArgs, ProjectArgs},
    error::CargoBattlesResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Deploy this wasm file instead of building the contract.
    #[arg(long)]
    wasm_file: Option<PathBuf>,
    /// Steps to run, comma separated. Runs every step when omitted.
    #[arg(long, value_enum, value_delimiter = ',')]
    tags: Vec<DeployTag>,

    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    project: ProjectArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    activation: ActivationArgs,
}

pub async fn exec(args: Args) -> CargoBattlesResult {
    let env = Environment::from_process();
    let (table, network) = args.network.resolve()?;
    let provider = args
        .auth
        .build_provider_with_wallet(&table, &network, &env)
        .await?;

    let options = DeployOptions::builder()
        .network(network)
        .dev_chains(table.development_chains().clone())
        .contract(args.contract.config())
        .env(env)
        .root(args.project.root)
        .wasm_file(args.wasm_file)
        .deployment(args.auth.deployment_config(&args.activation)?)
        .tags(args.tags)
        .build();
    ops::deploy(&options, &provider).await?;
    Ok(())
}
