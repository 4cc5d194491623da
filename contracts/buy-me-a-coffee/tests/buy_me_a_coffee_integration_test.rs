// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

#[cfg(feature = "integration-tests")]
mod integration_test {
    use alloy::{
        primitives::{address, utils::parse_ether, Address, B256, U256},
        providers::{Provider, WalletProvider},
        signers::local::PrivateKeySigner,
    };
    use battles_tools::{
        config::{ContractConfig, ContractKind, Environment},
        core::gas_report::{self, GasReport, GasUsage},
        devnet::Node,
        interfaces::IBuyMeACoffee,
    };
    use eyre::Result;

    const TREASURY: Address = address!("0x000000000000000000000000000000000000C0fe");

    #[tokio::test]
    async fn buy_me_a_coffee() -> Result<()> {
        let devnode = Node::new().await?;
        let config = ContractConfig::new(ContractKind::BuyMeACoffee);
        let network = devnode.network()?;
        let deployment = devnode.deploy(&config).await?;
        let address = deployment.record.address;
        let mut report = GasReport::new();
        report.record(deployment.gas);

        let provider = devnode.create_provider().await?;
        let owner = provider.default_signer_address();
        let contract = IBuyMeACoffee::new(address, &provider);
        assert_eq!(contract.owner().call().await?, owner);
        let min_tip = contract.getMinTip().call().await?;
        assert_eq!(Some(min_tip), network.min_tip);
        assert!(contract.getMemos().call().await?.is_empty());

        // One tipper per network participant
        let participants = network.participants.unwrap_or(1).max(1);
        let mut tippers = vec![];
        for i in 0..participants {
            let signer = PrivateKeySigner::from_bytes(&B256::with_last_byte(0x20 + i as u8))?;
            devnode.fund(signer.address(), parse_ether("1")?).await?;
            tippers.push(devnode.provider_for(signer).await?);
        }
        let as_tipper = IBuyMeACoffee::new(address, &tippers[0]);

        // Tips below the minimum leave no memo
        let err = as_tipper
            .buyCoffee("cheap".to_string(), "hi".to_string())
            .value(min_tip - U256::from(1))
            .send()
            .await
            .err()
            .expect("small tip should revert");
        assert!(err
            .as_decoded_error::<IBuyMeACoffee::DidNotTipEnough>()
            .is_some());
        assert!(contract.getMemos().call().await?.is_empty());

        for (i, tipper) in tippers.iter().enumerate() {
            let receipt = IBuyMeACoffee::new(address, tipper)
                .buyCoffee(format!("tipper {i}"), format!("coffee #{i}"))
                .value(min_tip)
                .send()
                .await?
                .get_receipt()
                .await?;
            assert!(receipt.status());
            report.record(GasUsage::from_receipt("BuyMeACoffee", "buyCoffee", &receipt));
        }
        let memos = contract.getMemos().call().await?;
        assert_eq!(memos.len(), tippers.len());
        for (i, (memo, tipper)) in memos.iter().zip(&tippers).enumerate() {
            assert_eq!(memo.from, tipper.default_signer_address());
            assert_eq!(memo.name, format!("tipper {i}"));
            assert_eq!(memo.message, format!("coffee #{i}"));
        }

        let err = as_tipper
            .withdraw()
            .send()
            .await
            .err()
            .expect("stranger withdrawal should revert");
        assert!(err
            .as_decoded_error::<IBuyMeACoffee::OwnableUnauthorizedAccount>()
            .is_some());

        contract
            .setWithdrawalAddress(TREASURY)
            .send()
            .await?
            .get_receipt()
            .await?;
        let collected = provider.get_balance(address).await?;
        assert_eq!(collected, min_tip * U256::from(tippers.len()));
        let receipt = contract.withdraw().send().await?.get_receipt().await?;
        assert!(receipt.status());
        report.record(GasUsage::from_receipt("BuyMeACoffee", "withdraw", &receipt));
        assert_eq!(provider.get_balance(address).await?, U256::ZERO);
        assert_eq!(provider.get_balance(TREASURY).await?, collected);

        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        gas_report::write_if_enabled(&report, &Environment::from_process(), root).await?;
        Ok(())
    }
}
