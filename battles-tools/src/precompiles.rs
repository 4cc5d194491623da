// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The Arbitrum precompiles used to price and prepare deployments.

use alloy::{network::Network, providers::Provider, sol};

#[rustfmt::skip]
pub mod addresses {
    use alloy::primitives::{address, Address};

    pub const ARB_DEBUG: Address = address!("0x00000000000000000000000000000000000000FF");
    pub const ARB_OWNER: Address = address!("0x0000000000000000000000000000000000000070");
    pub const ARB_WASM:  Address = address!("0x0000000000000000000000000000000000000071");
}

pub fn arb_wasm<P: Provider<N>, N: Network>(provider: P) -> ArbWasm::ArbWasmInstance<P, N> {
    ArbWasm::new(addresses::ARB_WASM, provider)
}

pub fn arb_owner<P: Provider<N>, N: Network>(provider: P) -> ArbOwner::ArbOwnerInstance<P, N> {
    ArbOwner::new(addresses::ARB_OWNER, provider)
}

pub fn arb_debug<P: Provider<N>, N: Network>(provider: P) -> ArbDebug::ArbDebugInstance<P, N> {
    ArbDebug::new(addresses::ARB_DEBUG, provider)
}

sol! {
    #[sol(rpc)]
    interface ArbWasm {
        function activateProgram(address program)
            external
            payable
            returns (uint16 version, uint256 dataFee);

        function stylusVersion() external view returns (uint16 version);

        error ProgramNotActivated();
        error ProgramNeedsUpgrade(uint16 version, uint16 stylusVersion);
        error ProgramExpired(uint64 ageInSeconds);
    }

    #[sol(rpc)]
    interface ArbOwner {
        function addWasmCacheManager(address manager) external;
        function setL1PricePerUnit(uint256 pricePerUnit) external;
    }

    #[sol(rpc)]
    interface ArbDebug {
        function becomeChainOwner() external;
    }
}
