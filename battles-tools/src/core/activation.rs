// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Activation data fee estimation.
//!
//! The Stylus deployer activates the contract in the same transaction that creates it, so the
//! deployment has to carry the activation data fee as value. The fee is found by simulating
//! `ArbWasm.activateProgram` against spoofed state before anything is sent.

use alloy::{
    primitives::{Address, Bytes, U256},
    providers::Provider,
    rpc::types::state::{AccountOverride, StateOverride},
};

use crate::{
    precompiles,
    utils::{
        bump_data_fee,
        color::{GREY, LAVENDER},
        format_data_fee,
    },
};

/// Value sent with the simulated activation, enough for any data fee.
const SIMULATION_VALUE: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

#[derive(Clone, Debug)]
pub struct ActivationConfig {
    pub data_fee_bump_percent: u64,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            data_fee_bump_percent: 20,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ActivationError {
    #[error("{0}")]
    Contract(alloy::contract::Error),

    #[error(
        "contract could not be activated as it is missing an entrypoint; \
         make sure the contract struct is marked #[entrypoint]"
    )]
    MissingEntrypoint,
}

impl From<alloy::contract::Error> for ActivationError {
    fn from(err: alloy::contract::Error) -> Self {
        if err.to_string().contains("pay_for_memory_grow") {
            Self::MissingEntrypoint
        } else {
            Self::Contract(err)
        }
    }
}

/// Estimates the activation data fee for `code`, bumped by the configured percentage.
pub async fn data_fee(
    code: impl Into<Bytes>,
    config: &ActivationConfig,
    provider: &impl Provider,
) -> Result<U256, ActivationError> {
    let arbwasm = precompiles::arb_wasm(provider);
    let program = Address::random();
    let sender = Address::random();
    let state_override = StateOverride::from_iter([
        (program, AccountOverride::default().with_code(code)),
        (sender, AccountOverride::default().with_balance(U256::MAX)),
    ]);

    let result = arbwasm
        .activateProgram(program)
        .state(state_override)
        .from(sender)
        .value(SIMULATION_VALUE)
        .call()
        .await?;

    let data_fee = result.dataFee;
    let bump = config.data_fee_bump_percent;
    let adjusted = bump_data_fee(data_fee, bump);
    info!(@grey,
        "wasm data fee: {} {GREY}(originally {}{GREY} with {LAVENDER}{bump}%{GREY} bump)",
        format_data_fee(adjusted),
        format_data_fee(data_fee)
    );

    Ok(adjusted)
}
