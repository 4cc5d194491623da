// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! A throwaway Nitro devnode for integration tests.

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{address, Address, U256},
    providers::{Provider, ProviderBuilder, WalletProvider},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use eyre::{Result, WrapErr};
use reqwest::{header::HeaderValue, Method, Response};
use testcontainers::{
    core::{wait::HttpWaitStrategy, IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

use crate::{
    config::{ContractConfig, NetworkConfig, NetworkTable, DEVNODE_PRIVATE_KEY},
    core::{
        build::{build_contract, BuildConfig},
        code::ContractCode,
        deployment::{self, resolve, Deployment, DeploymentConfig},
    },
    precompiles::{arb_debug, arb_owner},
};

mod bytecode;

const NITRO_IMAGE_NAME: &str = "offchainlabs/nitro-node";
const NITRO_IMAGE_TAG: &str = "v3.5.6-9a29a1e";
const NITRO_PORT: u16 = 8547;

pub mod addresses {
    use alloy::primitives::{address, Address};

    pub const CREATE2_FACTORY: Address = address!("0x4e59b44847b379578588920ca78fbf26c0b4956c");
    pub const STYLUS_DEPLOYER: Address = address!("0x6ac4839Bfe169CadBBFbDE3f29bd8459037Bf64e");
    pub const CACHE_MANAGER: Address = address!("0x2F8Bd4EaB69764c105aDd7dE7CB0402557a44E6f");
}

/// Sender of the presigned CREATE2 factory transaction.
const FACTORY_DEPLOYER: Address = address!("0x3fab184622dc19b6109349b94811493bf2a45362");

/// A Nitro devnode running in a container, stopped when dropped.
pub struct Node {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl Node {
    /// Starts a devnode with the cache manager and Stylus deployer in place.
    pub async fn new() -> Result<Self> {
        let wait_strategy = HttpWaitStrategy::new("/")
            .with_port(NITRO_PORT.into())
            .with_method(Method::POST)
            .with_header("Content-Type", HeaderValue::from_static("application/json"))
            .with_body(r#"{"jsonrpc":"2.0","method":"net_version","params":[],"id":1}"#)
            .with_response_matcher_async(nitro_response_matcher);
        let container = GenericImage::new(NITRO_IMAGE_NAME, NITRO_IMAGE_TAG)
            .with_exposed_port(NITRO_PORT.tcp())
            .with_wait_for(WaitFor::Http(wait_strategy))
            .with_cmd(vec![
                "--dev",
                "--http.addr",
                "0.0.0.0",
                "--http.api=net,web3,eth,debug",
            ])
            .start()
            .await
            .wrap_err("failed to start Nitro container")?;
        let port = container
            .get_host_port_ipv4(NITRO_PORT)
            .await
            .wrap_err("failed to get Nitro RPC port")?;
        let node = Node {
            _container: container,
            rpc: format!("http://localhost:{port}"),
        };
        node.setup().await?;
        Ok(node)
    }

    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// Deployment settings pointing at this node's Stylus deployer.
    pub fn deployment_config(&self) -> DeploymentConfig {
        DeploymentConfig::builder()
            .deployer_address(addresses::STYLUS_DEPLOYER)
            .build()
    }

    /// The `devnode` entry of the built-in network table, pointed at this node.
    pub fn network(&self) -> Result<NetworkConfig> {
        let mut network = NetworkTable::builtin().by_name("devnode")?.clone();
        network.rpc_url = Some(self.rpc.clone());
        Ok(network)
    }

    /// Builds `contract` and deploys it from the chain owner, with the devnode parameters.
    pub async fn deploy(&self, contract: &ContractConfig) -> Result<Deployment> {
        let wasm = build_contract(contract.kind.package(), &BuildConfig::default())?;
        let code = ContractCode::from_wasm_file(wasm)?;
        let plan = resolve(&self.network()?, contract);
        let provider = self.create_provider().await?;
        let deployment =
            deployment::deploy(&plan, &code, &self.deployment_config(), &provider).await?;
        Ok(deployment)
    }

    /// Provider signing with the prefunded chain owner key.
    pub async fn create_provider(&self) -> Result<impl Provider + WalletProvider + Clone> {
        let signer: PrivateKeySigner = DEVNODE_PRIVATE_KEY
            .parse()
            .wrap_err("failed to parse devnode private key")?;
        self.provider_for(signer).await
    }

    /// Provider signing with `signer`, which may need funding first.
    pub async fn provider_for(
        &self,
        signer: PrivateKeySigner,
    ) -> Result<impl Provider + WalletProvider + Clone> {
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(self.rpc())
            .await?;
        Ok(provider)
    }

    /// Sends `value` wei from the chain owner to `to`.
    pub async fn fund(&self, to: Address, value: U256) -> Result<()> {
        let provider = self.create_provider().await?;
        let tx = TransactionRequest::default().with_to(to).with_value(value);
        provider.send_transaction(tx).await?.watch().await?;
        Ok(())
    }

    async fn setup(&self) -> Result<()> {
        let provider = self.create_provider().await?;

        arb_debug(&provider)
            .becomeChainOwner()
            .send()
            .await?
            .watch()
            .await?;

        // zero L1 pricing keeps gas estimates close to Ethereum and lets the factory tx through
        let owner = arb_owner(&provider);
        owner
            .setL1PricePerUnit(U256::ZERO)
            .send()
            .await?
            .watch()
            .await?;

        let value = alloy::primitives::utils::parse_ether("0.1")?;
        self.fund(FACTORY_DEPLOYER, value).await?;

        let factory_raw_tx = alloy::hex::decode(bytecode::CREATE2_FACTORY_RAW_TX)?;
        provider
            .send_raw_transaction(&factory_raw_tx)
            .await?
            .watch()
            .await?;

        self.create2(&provider, bytecode::CACHE_MANAGER).await?;
        owner
            .addWasmCacheManager(addresses::CACHE_MANAGER)
            .send()
            .await?
            .watch()
            .await?;

        self.create2(&provider, bytecode::STYLUS_DEPLOYER).await?;
        debug!(@grey, "devnode ready at {}", self.rpc);
        Ok(())
    }

    /// Deploys creation code through the CREATE2 factory with a zero salt.
    async fn create2(&self, provider: &impl Provider, code: &str) -> Result<()> {
        let mut input = vec![0; 32];
        input.extend_from_slice(&alloy::hex::decode(code)?);
        let tx = TransactionRequest::default()
            .with_to(addresses::CREATE2_FACTORY)
            .with_input(input);
        provider.send_transaction(tx).await?.get_receipt().await?;
        Ok(())
    }
}

async fn nitro_response_matcher(response: Response) -> bool {
    let Ok(text) = response.text().await else {
        return false;
    };
    text.contains("result")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn node_has_deployer_and_cache_manager() -> Result<()> {
        let node = Node::new().await?;
        let provider = node.create_provider().await?;
        assert_eq!(provider.get_chain_id().await?, crate::config::DEVNODE_CHAIN_ID);
        let cache_manager = provider.get_code_at(addresses::CACHE_MANAGER).await?;
        assert_eq!(cache_manager.len(), 7452);
        let stylus_deployer = provider.get_code_at(addresses::STYLUS_DEPLOYER).await?;
        assert_eq!(stylus_deployer.len(), 2216);
        Ok(())
    }
}
