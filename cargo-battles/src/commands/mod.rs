// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CargoBattlesResult;

mod deploy;
mod export_abi;
mod networks;
mod sync_frontend;
mod verify;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Build and deploy a contract, then verify it and publish it to the front end
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Export a Solidity interface or JSON ABI
    ExportAbi(export_abi::Args),
    /// List the configured networks and their deployment parameters
    Networks(networks::Args),
    /// Write a deployment's address and ABI to the front end
    SyncFrontend(sync_frontend::Args),
    /// Verify a deployed contract with the network's block explorer
    Verify(verify::Args),
}

pub async fn exec(cmd: Command) -> CargoBattlesResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::ExportAbi(args) => export_abi::exec(args),
        Command::Networks(args) => networks::exec(args),
        Command::SyncFrontend(args) => sync_frontend::exec(args),
        Command::Verify(args) => verify::exec(args).await,
    }
}
