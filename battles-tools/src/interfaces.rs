// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Client bindings for the workspace contracts.
//!
//! These mirror the ABI the contracts export and also provide the JSON ABI written for the
//! front end.

use alloy::{json_abi::JsonAbi, sol};

use crate::config::ContractKind;

sol! {
    #[sol(rpc, abi)]
    #[derive(Debug, PartialEq, Eq)]
    interface IChainBattles {
        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
        event Approval(address indexed owner, address indexed approved, uint256 indexed tokenId);
        event ApprovalForAll(address indexed owner, address indexed operator, bool approved);
        event Minted(address indexed owner, uint256 indexed tokenId);
        event Trained(uint256 indexed tokenId, uint256 level);
        event Withdrawn(address indexed to, uint256 amount);
        event WithdrawalAddressChanged(address indexed previous, address indexed current);

        error NotEnoughFunds(uint256 sent, uint256 fee);
        error MaxSupplyReached(uint256 maxSupply);
        error TokenDoesNotExist(uint256 tokenId);
        error NotApproved(address caller, uint256 tokenId);
        error NotOwner(address from, uint256 tokenId, address realOwner);
        error TransferToZero(uint256 tokenId);
        error OwnableUnauthorizedAccount(address account);
        error WithdrawFailed(address to, uint256 amount);

        function mint() external payable returns (uint256);
        function train(uint256 tokenId) external;
        function withdraw() external;
        function setWithdrawalAddress(address withdrawalAddress) external;

        function getMintFee() external view returns (uint256);
        function getMaxSupply() external view returns (uint256);
        function getMinted() external view returns (uint256);
        function getTokenIdToLevels(uint256 tokenId) external view returns (uint256);
        function getWithdrawalAddress() external view returns (address);
        function owner() external view returns (address);
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function tokenURI(uint256 tokenId) external view returns (string memory);

        function balanceOf(address owner) external view returns (uint256);
        function ownerOf(uint256 tokenId) external view returns (address);
        function approve(address approved, uint256 tokenId) external;
        function setApprovalForAll(address operator, bool approved) external;
        function getApproved(uint256 tokenId) external view returns (address);
        function isApprovedForAll(address owner, address operator) external view returns (bool);
        function transferFrom(address from, address to, uint256 tokenId) external;
    }
}

sol! {
    #[sol(rpc, abi)]
    #[derive(Debug, PartialEq, Eq)]
    interface IBuyMeACoffee {
        struct Memo {
            address from;
            string name;
            string message;
        }

        event NewMemo(address indexed from, string name, string message);
        event Withdrawn(address indexed to, uint256 amount);
        event WithdrawalAddressChanged(address indexed previous, address indexed current);

        error DidNotTipEnough(uint256 sent, uint256 minTip);
        error OwnableUnauthorizedAccount(address account);
        error WithdrawFailed(address to, uint256 amount);

        function buyCoffee(string calldata name, string calldata message) external payable;
        function withdraw() external;
        function setWithdrawalAddress(address withdrawalAddress) external;

        function getMinTip() external view returns (uint256);
        function getMemos() external view returns (Memo[] memory);
        function getWithdrawalAddress() external view returns (address);
        function owner() external view returns (address);
    }
}

/// JSON ABI of a workspace contract.
pub fn abi(kind: ContractKind) -> JsonAbi {
    match kind {
        ContractKind::ChainBattles => IChainBattles::abi::contract(),
        ContractKind::BuyMeACoffee => IBuyMeACoffee::abi::contract(),
    }
}
