// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `cargo-battles`.

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

mod commands;
mod common_args;
mod constants;
mod error;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "battles")]
#[command(bin_name = "cargo battles")]
#[command(author = "Offchain Labs, Inc.")]
#[command(about = "Deploy, verify and publish the ChainBattles and BuyMeACoffee contracts", long_about = None)]
#[command(propagate_version = true)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: commands::Command,

    /// Log deployment steps in detail.
    #[arg(long, global = true)]
    verbose: bool,
}

/// Workspace crates log at `level`; dependencies only report warnings.
fn init_logger(verbose: bool) -> Result<(), SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level("battles_tools", level)
        .with_module_level("cargo_battles", level)
        .init()
}

fn main() -> ExitCode {
    // cargo invokes us as `cargo-battles battles ...`
    let args = Args::parse_from(std::env::args().skip(1));

    if let Err(err) = init_logger(args.verbose) {
        utils::print_error(format!("setting up logger: {err}"));
        return ExitCode::FAILURE;
    }

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Into::into)
        .and_then(|rt| rt.block_on(commands::exec(args.command)));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}
