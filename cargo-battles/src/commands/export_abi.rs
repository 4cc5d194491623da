// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use battles_tools::ops;

use crate::{
    common_args::{ContractArgs, ReflectionArgs},
    error::CargoBattlesResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    reflection: ReflectionArgs,
}

pub fn exec(args: Args) -> CargoBattlesResult {
    ops::export_abi(
        args.contract.contract,
        args.reflection.json,
        args.reflection.output.as_deref(),
    )?;
    Ok(())
}
