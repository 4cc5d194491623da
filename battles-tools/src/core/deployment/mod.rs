// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Resolving and sending contract deployments.

use alloy::{
    primitives::{Address, TxHash, B256, U256},
    providers::{Provider, WalletProvider},
    sol_types::SolValue,
};
use typed_builder::TypedBuilder;

use crate::{
    config::{ContractConfig, ContractKind, NetworkConfig},
    core::{
        activation::{self, ActivationConfig, ActivationError},
        code::{CodeError, ContractCode},
        gas_report::GasUsage,
    },
    utils::color::{Color, DebugColor},
};
use deployer::get_address_from_receipt;
use record::DeploymentRecord;
use request::DeploymentRequest;

pub mod deployer;
pub mod prelude;
pub mod record;
pub mod request;

/// Ordered constructor arguments of a contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstructorArgs {
    ChainBattles {
        name: String,
        symbol: String,
        mint_fee: U256,
        max_supply: U256,
    },
    BuyMeACoffee {
        min_tip: U256,
    },
}

impl ConstructorArgs {
    /// ABI encoding of the argument tuple, without a selector.
    pub fn abi_encode(&self) -> Vec<u8> {
        match self {
            Self::ChainBattles {
                name,
                symbol,
                mint_fee,
                max_supply,
            } => (name.clone(), symbol.clone(), *mint_fee, *max_supply).abi_encode_params(),
            Self::BuyMeACoffee { min_tip } => (*min_tip,).abi_encode_params(),
        }
    }

    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Self::ChainBattles {
                name,
                symbol,
                mint_fee,
                max_supply,
            } => vec![
                name.clone(),
                symbol.clone(),
                mint_fee.to_string(),
                max_supply.to_string(),
            ],
            Self::BuyMeACoffee { min_tip } => vec![min_tip.to_string()],
        }
    }
}

/// Everything needed to deploy a contract on one network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentPlan {
    pub contract: ContractKind,
    pub network: String,
    pub chain_id: u64,
    pub args: ConstructorArgs,
    pub confirmations: u64,
    /// Account the network expects deployments from, if it names one.
    pub deployer: Option<Address>,
}

/// Resolves constructor arguments and confirmations for `contract` on `network`.
///
/// Missing amounts default to zero and missing confirmations to one.
pub fn resolve(network: &NetworkConfig, contract: &ContractConfig) -> DeploymentPlan {
    let args = match contract.kind {
        ContractKind::ChainBattles => ConstructorArgs::ChainBattles {
            name: contract.token.name.clone(),
            symbol: contract.token.symbol.clone(),
            mint_fee: network.mint_fee.unwrap_or_default(),
            max_supply: network.max_supply.unwrap_or_default(),
        },
        ContractKind::BuyMeACoffee => ConstructorArgs::BuyMeACoffee {
            min_tip: network.min_tip.unwrap_or_default(),
        },
    };
    DeploymentPlan {
        contract: contract.kind,
        network: network.name.clone(),
        chain_id: network.chain_id,
        args,
        confirmations: network.confirmations(),
        deployer: network.deployer,
    }
}

#[derive(Clone, Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct DeploymentConfig {
    #[builder(default = deployer::ADDRESS)]
    pub deployer_address: Address,
    pub deployer_salt: B256,
    pub max_fee_per_gas_wei: Option<u128>,
    pub activation: ActivationConfig,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A finished deployment and the gas it cost.
#[derive(Clone, Debug)]
pub struct Deployment {
    pub record: DeploymentRecord,
    pub gas: GasUsage,
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("{0}")]
    Code(#[from] CodeError),
    #[error("{0}")]
    Build(#[from] crate::core::build::BuildError),

    #[error("provider is on chain {actual}, but {network} expects chain {expected}")]
    ChainIdMismatch {
        network: String,
        expected: u64,
        actual: u64,
    },
    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("failed to get balance")]
    FailedToGetBalance,
    #[error(
        "not enough funds in account {} to pay for data fee\n\
         balance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .data_fee).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        data_fee: U256,
    },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("{0}")]
    ActivationFailure(#[from] ActivationError),
    #[error("missing address: {0}")]
    NoContractAddress(String),
}

/// Deploys and activates a contract through the Stylus deployer, calling its constructor.
///
/// There are no retries: any failure is returned as is.
pub async fn deploy(
    plan: &DeploymentPlan,
    code: &ContractCode,
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<Deployment, DeploymentError> {
    let actual = provider.get_chain_id().await?;
    if actual != plan.chain_id {
        return Err(DeploymentError::ChainIdMismatch {
            network: plan.network.clone(),
            expected: plan.chain_id,
            actual,
        });
    }

    let from_address = provider.default_signer_address();
    debug!(@grey, "sender address: {}", from_address.debug_lavender());
    if let Some(expected) = plan.deployer.filter(|expected| *expected != from_address) {
        warn!(@yellow,
            "deploying from {from_address}, but {} names {expected} as its deployer",
            plan.network
        );
    }

    let data_fee =
        activation::data_fee(code.bytes().to_vec(), &config.activation, provider).await?;
    let balance = provider
        .get_balance(from_address)
        .await
        .map_err(|_| DeploymentError::FailedToGetBalance)?;
    if balance < data_fee {
        return Err(DeploymentError::NotEnoughFunds {
            from_address,
            balance,
            data_fee,
        });
    }

    let constructor_calldata = plan.args.abi_encode();
    let tx_calldata = deployer::deploy_calldata(
        code.bytes(),
        &constructor_calldata,
        U256::ZERO,
        config.deployer_salt,
    );
    info!(@grey,
        "deploying {} to {} with args {:?}",
        plan.contract,
        plan.network,
        plan.args.to_strings()
    );
    let receipt = DeploymentRequest::new(
        from_address,
        config.deployer_address,
        data_fee,
        tx_calldata,
        plan.confirmations,
    )
    .with_max_fee_per_gas(config.max_fee_per_gas_wei)
    .exec(provider)
    .await?;

    let address = get_address_from_receipt(&receipt)?;
    info!(@grey, "deployed code at address: {}", address.debug_lavender());
    info!(@grey, "deployment tx hash: {}", receipt.transaction_hash.debug_lavender());

    Ok(Deployment {
        record: DeploymentRecord {
            contract_name: plan.contract.name().to_string(),
            network: plan.network.clone(),
            chain_id: plan.chain_id,
            address,
            tx_hash: receipt.transaction_hash,
            constructor_args: plan.args.to_strings(),
            constructor_calldata: constructor_calldata.into(),
            confirmations: plan.confirmations,
        },
        gas: GasUsage::from_receipt(plan.contract.name(), "deploy", &receipt),
    })
}
