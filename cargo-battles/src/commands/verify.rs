// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use alloy::{primitives::Address, providers::ProviderBuilder};
use battles_tools::{config::Environment, core::verification::VerificationOutcome, ops};

use crate::{
    common_args::{ContractArgs, NetworkArgs, ProjectArgs},
    error::CargoBattlesResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Deployed contract address, when no deployment is recorded for the network.
    #[arg(long)]
    address: Option<Address>,
    /// Also check the deployment transaction against this local build.
    #[arg(long)]
    wasm_file: Option<PathBuf>,

    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    project: ProjectArgs,
}

pub async fn exec(args: Args) -> CargoBattlesResult {
    let env = Environment::from_process();
    let (table, network) = args.network.resolve()?;
    let contract = args.contract.config();
    let root = &args.project.root;

    if let Some(wasm_file) = &args.wasm_file {
        let provider = ProviderBuilder::new()
            .connect(&network.rpc_url(&env)?)
            .await
            .map_err(battles_tools::Error::from)?;
        match ops::check_deployment(root, &network, &contract, args.address, wasm_file, &provider)
            .await?
        {
            Some(true) => println!("deployed code matches {}", wasm_file.display()),
            Some(false) => println!("deployed code differs from {}", wasm_file.display()),
            None => {}
        }
    }

    let outcome = ops::verify(
        root,
        &network,
        table.development_chains(),
        &contract,
        &env,
        args.address,
    )
    .await?;
    match outcome {
        Some(VerificationOutcome::Verified) => println!("verification successful"),
        Some(VerificationOutcome::AlreadyVerified) => println!("contract already verified"),
        None => {}
    }
    Ok(())
}
