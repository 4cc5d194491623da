// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    io::{self, Write},
    path::Path,
};

use crate::{config::ContractKind, core::reflection, utils::fs, Result};

/// Writes a contract interface to `output`, or stdout.
///
/// The JSON ABI comes from the client bindings; the Solidity interface is exported by running
/// the contract crate natively.
pub fn export_abi(kind: ContractKind, json: bool, output: Option<&Path>) -> Result<()> {
    let abi = if json {
        reflection::json_abi(kind)?
    } else {
        reflection::solidity_abi(kind)?
    };
    match output {
        Some(path) => {
            fs::write_atomic(path, &abi)?;
            info!(@grey, "wrote {} abi to {}", kind, path.display());
        }
        None => io::stdout().write_all(&abi)?,
    }
    Ok(())
}
