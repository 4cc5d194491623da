// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The StylusDeployer contract, which deploys, activates and constructs in one transaction.

use alloy::{
    primitives::{address, Address, LogData, B256, U256},
    rpc::types::TransactionReceipt,
    sol,
    sol_types::{SolCall, SolEvent},
};

use super::{prelude::DeploymentCalldata, DeploymentError};

/// StylusDeployer address on public Arbitrum chains.
pub const ADDRESS: Address = address!("cEcba2F1DC234f70Dd89F2041029807F8D03A990");

sol! {
    #[sol(rpc)]
    interface StylusDeployer {
        event ContractDeployed(address deployedContract);

        function deploy(
            bytes calldata bytecode,
            bytes calldata initData,
            uint256 initValue,
            bytes32 salt
        ) public payable returns (address);
    }

    function stylus_constructor();
}

/// Encodes a `StylusDeployer.deploy` call for `code`.
///
/// `constructor_args` is the ABI-encoded argument tuple; it is prefixed with the
/// `stylus_constructor()` selector to form the init data.
pub fn deploy_calldata(
    code: &[u8],
    constructor_args: &[u8],
    init_value: U256,
    salt: B256,
) -> Vec<u8> {
    let mut init_data = Vec::from(stylus_constructorCall::SELECTOR);
    init_data.extend_from_slice(constructor_args);

    StylusDeployer::deployCall {
        bytecode: DeploymentCalldata::new(code).into(),
        initData: init_data.into(),
        initValue: init_value,
        salt,
    }
    .abi_encode()
}

/// Gets the address of the contract created by the deployer from the receipt logs.
pub fn get_address_from_receipt(receipt: &TransactionReceipt) -> Result<Address, DeploymentError> {
    address_from_logs(receipt.inner.logs().iter().map(|log| log.data()))
}

fn address_from_logs<'a>(
    mut logs: impl Iterator<Item = &'a LogData>,
) -> Result<Address, DeploymentError> {
    let topic = StylusDeployer::ContractDeployed::SIGNATURE_HASH;
    let log = logs
        .find(|log| log.topics().first() == Some(&topic))
        .ok_or_else(|| DeploymentError::NoContractAddress("from receipt logs".to_string()))?;
    if log.data.len() != 32 {
        return Err(DeploymentError::NoContractAddress(
            "from ContractDeployed log".to_string(),
        ));
    }
    Ok(Address::from_slice(&log.data[12..32]))
}
