// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use battles_tools::config::network::format_amount;

use crate::{common_args::NetworkArgs, error::CargoBattlesResult, utils::HEADER};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn exec(args: Args) -> CargoBattlesResult {
    let table = args.network.table()?;
    println!(
        "{HEADER}{:<16} {:>8} {:>26} {:>6} {:>26} {:>5} {:>5}  {}{HEADER:#}",
        "network", "chain id", "mint fee", "supply", "min tip", "users", "confs", "dev"
    );
    for network in table.iter() {
        println!(
            "{:<16} {:>8} {:>26} {:>6} {:>26} {:>5} {:>5}  {}",
            network.name,
            network.chain_id,
            format_amount(network.mint_fee),
            network
                .max_supply
                .map(|supply| supply.to_string())
                .unwrap_or_else(|| "-".to_string()),
            format_amount(network.min_tip),
            network
                .participants
                .map(|count| count.to_string())
                .unwrap_or_else(|| "-".to_string()),
            network.confirmations(),
            if table.is_development(&network.name) { "yes" } else { "" },
        );
    }
    Ok(())
}
