// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use battles_tools::ops;

use crate::{
    common_args::{ContractArgs, NetworkArgs, ProjectArgs},
    error::CargoBattlesResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Deployed contract address, when no deployment is recorded for the network.
    #[arg(long)]
    address: Option<Address>,

    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> CargoBattlesResult {
    let (_, network) = args.network.resolve()?;
    let contract = args.contract.config();
    let record = ops::sync_frontend(&args.project.root, &network, &contract, args.address)?;
    println!(
        "published {} on chain {} to {}",
        record.address,
        record.chain_id,
        contract.frontend.addresses_file.display()
    );
    Ok(())
}
