// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment transaction sent to the Stylus deployer.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use super::DeploymentError;
use crate::utils::color::DebugColor;

#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
    confirmations: u64,
}

impl DeploymentRequest {
    pub fn new(
        sender: Address,
        deployer: Address,
        tx_value: U256,
        tx_calldata: Vec<u8>,
        confirmations: u64,
    ) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_to(deployer)
                .with_from(sender)
                .with_value(tx_value)
                .with_input(tx_calldata),
            max_fee_per_gas_wei: None,
            confirmations: confirmations.max(1),
        }
    }

    pub fn with_max_fee_per_gas(mut self, wei: Option<u128>) -> Self {
        self.max_fee_per_gas_wei = wei;
        self
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    /// Sends the transaction and waits for the configured number of confirmations.
    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let max_fee_per_gas = self.fee_per_gas(provider).await?;

        let mut tx = self.tx;
        tx.gas = Some(gas);
        tx.max_fee_per_gas = Some(max_fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let tx = provider.send_transaction(tx).await?;
        let tx_hash = *tx.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());
        debug!(@grey, "waiting for {} confirmation(s)", self.confirmations);

        let receipt = tx
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }

        Ok(receipt)
    }

    async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }
}
