// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! ChainBattles: an NFT that can be minted for a fee and trained to level up.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

extern crate alloc;

pub mod erc721;
pub mod metadata;

use alloc::string::String;

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use stylus_sdk::{
    call::call,
    prelude::*,
    storage::{StorageAddress, StorageMap, StorageString, StorageU256},
};

use crate::erc721::{
    Erc721, Erc721Error, NotApproved, NotOwner, TokenDoesNotExist, TransferToZero,
};

sol! {
    event Minted(address indexed owner, uint256 indexed token_id);
    event Trained(uint256 indexed token_id, uint256 level);
    event Withdrawn(address indexed to, uint256 amount);
    event WithdrawalAddressChanged(address indexed previous, address indexed current);

    // Payment is below the mint fee
    #[derive(Debug)]
    error NotEnoughFunds(uint256 sent, uint256 fee);
    // Every token up to the max supply has been minted
    #[derive(Debug)]
    error MaxSupplyReached(uint256 max_supply);
    #[derive(Debug)]
    error OwnableUnauthorizedAccount(address account);
    // Sending the balance to the withdrawal address failed
    #[derive(Debug)]
    error WithdrawFailed(address to, uint256 amount);
}

#[derive(SolidityError, Debug)]
pub enum ChainBattlesError {
    NotEnoughFunds(NotEnoughFunds),
    MaxSupplyReached(MaxSupplyReached),
    TokenDoesNotExist(TokenDoesNotExist),
    NotApproved(NotApproved),
    NotOwner(NotOwner),
    TransferToZero(TransferToZero),
    OwnableUnauthorizedAccount(OwnableUnauthorizedAccount),
    WithdrawFailed(WithdrawFailed),
}

impl From<Erc721Error> for ChainBattlesError {
    fn from(err: Erc721Error) -> Self {
        match err {
            Erc721Error::TokenDoesNotExist(e) => Self::TokenDoesNotExist(e),
            Erc721Error::NotApproved(e) => Self::NotApproved(e),
            Erc721Error::NotOwner(e) => Self::NotOwner(e),
            Erc721Error::TransferToZero(e) => Self::TransferToZero(e),
        }
    }
}

#[storage]
#[entrypoint]
pub struct ChainBattles {
    erc721: Erc721,
    name: StorageString,
    symbol: StorageString,
    owner: StorageAddress,
    withdrawal_address: StorageAddress,
    mint_fee: StorageU256,
    max_supply: StorageU256,
    /// Number of tokens minted so far, which is also the latest token id
    minted: StorageU256,
    token_id_to_levels: StorageMap<U256, StorageU256>,
}

impl ChainBattles {
    fn only_owner(&self) -> Result<(), ChainBattlesError> {
        let account = self.vm().msg_sender();
        if account != self.owner.get() {
            return Err(OwnableUnauthorizedAccount { account }.into());
        }
        Ok(())
    }
}

#[public]
impl ChainBattles {
    /// The owner and the withdrawal address both start as the deploying EOA.
    #[constructor]
    pub fn constructor(
        &mut self,
        name: String,
        symbol: String,
        mint_fee: U256,
        max_supply: U256,
    ) {
        // Use tx_origin instead of msg_sender because we use a factory contract in deployment.
        let owner = self.vm().tx_origin();
        self.owner.set(owner);
        self.withdrawal_address.set(owner);
        self.name.set_str(name);
        self.symbol.set_str(symbol);
        self.mint_fee.set(mint_fee);
        self.max_supply.set(max_supply);
    }

    /// Mints the next warrior to the caller at level 0, returning its token id.
    #[payable]
    pub fn mint(&mut self) -> Result<U256, ChainBattlesError> {
        let sent = self.vm().msg_value();
        let fee = self.mint_fee.get();
        if sent < fee {
            return Err(NotEnoughFunds { sent, fee }.into());
        }

        let max_supply = self.max_supply.get();
        let minted = self.minted.get();
        if minted >= max_supply {
            return Err(MaxSupplyReached { max_supply }.into());
        }

        let token_id = minted + U256::from(1);
        self.minted.set(token_id);

        let owner = self.vm().msg_sender();
        self.erc721.mint(owner, token_id)?;
        self.token_id_to_levels.setter(token_id).set(U256::ZERO);

        self.vm().log(Minted { owner, token_id });
        Ok(token_id)
    }

    /// Raises a warrior's level by one.
    pub fn train(&mut self, token_id: U256) -> Result<(), ChainBattlesError> {
        let caller = self.vm().msg_sender();
        self.erc721.require_approved_or_owner(caller, token_id)?;

        let level = self.token_id_to_levels.get(token_id) + U256::from(1);
        self.token_id_to_levels.setter(token_id).set(level);

        self.vm().log(Trained { token_id, level });
        Ok(())
    }

    /// Sends the whole contract balance to the withdrawal address.
    pub fn withdraw(&mut self) -> Result<(), ChainBattlesError> {
        self.only_owner()?;

        let to = self.withdrawal_address.get();
        let amount = self.vm().balance(self.vm().contract_address());
        let context = Call::new_payable(self, amount);
        call(self.vm(), context, to, &[]).map_err(|_| WithdrawFailed { to, amount })?;

        self.vm().log(Withdrawn { to, amount });
        Ok(())
    }

    pub fn set_withdrawal_address(
        &mut self,
        withdrawal_address: Address,
    ) -> Result<(), ChainBattlesError> {
        self.only_owner()?;

        let previous = self.withdrawal_address.get();
        self.withdrawal_address.set(withdrawal_address);

        self.vm().log(WithdrawalAddressChanged {
            previous,
            current: withdrawal_address,
        });
        Ok(())
    }

    pub fn get_mint_fee(&self) -> U256 {
        self.mint_fee.get()
    }

    pub fn get_max_supply(&self) -> U256 {
        self.max_supply.get()
    }

    pub fn get_minted(&self) -> U256 {
        self.minted.get()
    }

    pub fn get_token_id_to_levels(&self, token_id: U256) -> U256 {
        self.token_id_to_levels.get(token_id)
    }

    pub fn get_withdrawal_address(&self) -> Address {
        self.withdrawal_address.get()
    }

    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    pub fn name(&self) -> String {
        self.name.get_string()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_string()
    }

    /// Base64 JSON metadata with the warrior card inlined as an SVG image.
    #[selector(name = "tokenURI")]
    pub fn token_uri(&self, token_id: U256) -> Result<String, ChainBattlesError> {
        self.erc721.owner_of(token_id)?;
        let level = self.token_id_to_levels.get(token_id);
        Ok(metadata::token_uri(token_id, level))
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.erc721.balance_of(owner)
    }

    pub fn owner_of(&self, token_id: U256) -> Result<Address, ChainBattlesError> {
        Ok(self.erc721.owner_of(token_id)?)
    }

    pub fn approve(&mut self, approved: Address, token_id: U256) -> Result<(), ChainBattlesError> {
        let caller = self.vm().msg_sender();
        Ok(self.erc721.approve(caller, approved, token_id)?)
    }

    pub fn set_approval_for_all(&mut self, operator: Address, approved: bool) {
        let caller = self.vm().msg_sender();
        self.erc721.set_approval_for_all(caller, operator, approved);
    }

    pub fn get_approved(&self, token_id: U256) -> Address {
        self.erc721.get_approved(token_id)
    }

    pub fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.erc721.is_approved_for_all(owner, operator)
    }

    pub fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), ChainBattlesError> {
        let caller = self.vm().msg_sender();
        Ok(self.erc721.transfer_from(caller, from, to, token_id)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::B256;
    use alloy_sol_types::SolEvent;
    use stylus_sdk::testing::*;

    const MAX_SUPPLY: u64 = 5;

    fn mint_fee() -> U256 {
        // 0.01 ETH
        U256::from(10_000_000_000_000_000u64)
    }

    fn deploy(vm: &TestVM) -> ChainBattles {
        let mut contract = ChainBattles::from(vm);
        contract.constructor(
            "Chain Battles".into(),
            "CBTLS".into(),
            mint_fee(),
            U256::from(MAX_SUPPLY),
        );
        contract
    }

    fn mint_as(vm: &TestVM, contract: &mut ChainBattles, minter: Address) -> U256 {
        vm.set_sender(minter);
        vm.set_value(mint_fee());
        let token_id = contract.mint().unwrap();
        vm.set_value(U256::ZERO);
        token_id
    }

    #[test]
    fn constructor_sets_state() {
        let vm = TestVM::default();
        let deployer = vm.msg_sender();
        let contract = deploy(&vm);

        assert_eq!(contract.get_mint_fee(), mint_fee());
        assert_eq!(contract.get_max_supply(), U256::from(MAX_SUPPLY));
        assert_eq!(contract.get_minted(), U256::ZERO);
        assert_eq!(contract.get_withdrawal_address(), deployer);
        assert_eq!(contract.owner(), deployer);
        assert_eq!(contract.name(), "Chain Battles");
        assert_eq!(contract.symbol(), "CBTLS");
    }

    #[test]
    fn constructor_uses_tx_origin() {
        let vm = TestVM::default();
        let origin = Address::from([0x11; 20]);
        vm.set_tx_origin(origin);
        vm.set_sender(Address::from([0x22; 20]));

        let contract = deploy(&vm);
        assert_eq!(contract.owner(), origin);
        assert_eq!(contract.get_withdrawal_address(), origin);
    }

    #[test]
    fn mints_until_max_supply() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);
        let minter = vm.msg_sender();

        for expected in 1..=MAX_SUPPLY {
            let token_id = mint_as(&vm, &mut contract, minter);
            assert_eq!(token_id, U256::from(expected));
        }
        assert_eq!(contract.get_minted(), U256::from(MAX_SUPPLY));
        for token_id in 1..=MAX_SUPPLY {
            assert_eq!(contract.get_token_id_to_levels(U256::from(token_id)), U256::ZERO);
            assert_eq!(contract.owner_of(U256::from(token_id)).unwrap(), minter);
        }
        assert_eq!(contract.balance_of(minter), U256::from(MAX_SUPPLY));

        vm.set_value(mint_fee());
        let err = contract.mint().unwrap_err();
        assert!(matches!(
            err,
            ChainBattlesError::MaxSupplyReached(MaxSupplyReached { max_supply })
                if max_supply == U256::from(MAX_SUPPLY)
        ));
        assert_eq!(contract.get_minted(), U256::from(MAX_SUPPLY));
    }

    #[test]
    fn mint_below_fee_fails() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);

        let sent = mint_fee() - U256::from(1);
        vm.set_value(sent);
        let err = contract.mint().unwrap_err();
        assert!(matches!(
            err,
            ChainBattlesError::NotEnoughFunds(NotEnoughFunds { sent: s, fee })
                if s == sent && fee == mint_fee()
        ));
        assert_eq!(contract.get_minted(), U256::ZERO);
    }

    #[test]
    fn zero_fee_mints_for_free() {
        let vm = TestVM::default();
        let mut contract = ChainBattles::from(&vm);
        contract.constructor("A".into(), "B".into(), U256::ZERO, U256::from(1));

        assert_eq!(contract.mint().unwrap(), U256::from(1));
        assert!(matches!(
            contract.mint().unwrap_err(),
            ChainBattlesError::MaxSupplyReached(_)
        ));
    }

    #[test]
    fn mint_emits_events() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);
        let minter = vm.msg_sender();
        mint_as(&vm, &mut contract, minter);

        let logs = vm.get_emitted_logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].0[0], erc721::Transfer::SIGNATURE_HASH);
        assert_eq!(logs[1].0[0], Minted::SIGNATURE_HASH);
        assert_eq!(logs[1].0[1], minter.into_word());
        assert_eq!(logs[1].0[2], B256::from(U256::from(1)));
    }

    #[test]
    fn train_levels_up() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);
        let minter = vm.msg_sender();
        let token_id = mint_as(&vm, &mut contract, minter);

        for expected in 1..=3u64 {
            contract.train(token_id).unwrap();
            assert_eq!(contract.get_token_id_to_levels(token_id), U256::from(expected));
        }

        let logs = vm.get_emitted_logs();
        let last = logs.last().unwrap();
        assert_eq!(last.0[0], Trained::SIGNATURE_HASH);
        let decoded = Trained::decode_raw_log(last.0.iter().copied(), &last.1).unwrap();
        assert_eq!(decoded.token_id, token_id);
        assert_eq!(decoded.level, U256::from(3));
    }

    #[test]
    fn train_unknown_token_fails() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);

        let err = contract.train(U256::from(42)).unwrap_err();
        assert!(matches!(
            err,
            ChainBattlesError::TokenDoesNotExist(TokenDoesNotExist { token_id })
                if token_id == U256::from(42)
        ));
    }

    #[test]
    fn train_requires_owner_or_approval() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);
        let owner = vm.msg_sender();
        let token_id = mint_as(&vm, &mut contract, owner);

        let stranger = Address::from([0x33; 20]);
        vm.set_sender(stranger);
        let err = contract.train(token_id).unwrap_err();
        assert!(matches!(
            err,
            ChainBattlesError::NotApproved(NotApproved { caller, token_id: id })
                if caller == stranger && id == token_id
        ));
        assert_eq!(contract.get_token_id_to_levels(token_id), U256::ZERO);

        // single-token approval
        vm.set_sender(owner);
        contract.approve(stranger, token_id).unwrap();
        assert_eq!(contract.get_approved(token_id), stranger);
        vm.set_sender(stranger);
        contract.train(token_id).unwrap();
        assert_eq!(contract.get_token_id_to_levels(token_id), U256::from(1));

        // operator approval
        let operator = Address::from([0x44; 20]);
        vm.set_sender(owner);
        contract.set_approval_for_all(operator, true);
        assert!(contract.is_approved_for_all(owner, operator));
        vm.set_sender(operator);
        contract.train(token_id).unwrap();
        assert_eq!(contract.get_token_id_to_levels(token_id), U256::from(2));
    }

    #[test]
    fn transfer_moves_training_rights() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);
        let owner = vm.msg_sender();
        let token_id = mint_as(&vm, &mut contract, owner);
        let buyer = Address::from([0x55; 20]);

        contract.transfer_from(owner, buyer, token_id).unwrap();
        assert_eq!(contract.owner_of(token_id).unwrap(), buyer);
        assert_eq!(contract.balance_of(owner), U256::ZERO);
        assert_eq!(contract.balance_of(buyer), U256::from(1));

        assert!(matches!(
            contract.train(token_id).unwrap_err(),
            ChainBattlesError::NotApproved(_)
        ));
        vm.set_sender(buyer);
        contract.train(token_id).unwrap();

        assert!(matches!(
            contract.transfer_from(buyer, Address::ZERO, token_id).unwrap_err(),
            ChainBattlesError::TransferToZero(_)
        ));
        assert!(matches!(
            contract.transfer_from(owner, buyer, token_id).unwrap_err(),
            ChainBattlesError::NotOwner(_)
        ));
    }

    #[test]
    fn withdraw_sweeps_balance() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);
        let owner = vm.msg_sender();
        let balance = mint_fee() * U256::from(3);
        vm.set_balance(vm.contract_address(), balance);

        contract.withdraw().unwrap();

        let logs = vm.get_emitted_logs();
        let last = logs.last().unwrap();
        let decoded = Withdrawn::decode_raw_log(last.0.iter().copied(), &last.1).unwrap();
        assert_eq!(decoded.to, owner);
        assert_eq!(decoded.amount, balance);
    }

    #[test]
    fn withdraw_requires_owner() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);
        let stranger = Address::from([0x66; 20]);
        vm.set_sender(stranger);

        let err = contract.withdraw().unwrap_err();
        assert!(matches!(
            err,
            ChainBattlesError::OwnableUnauthorizedAccount(OwnableUnauthorizedAccount { account })
                if account == stranger
        ));
    }

    #[test]
    fn withdraw_reports_failed_transfer() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);
        let owner = vm.msg_sender();
        let balance = mint_fee();
        vm.set_balance(vm.contract_address(), balance);
        vm.mock_call(owner, vec![], balance, Err(vec![]));

        let err = contract.withdraw().unwrap_err();
        assert!(matches!(
            err,
            ChainBattlesError::WithdrawFailed(WithdrawFailed { to, amount })
                if to == owner && amount == balance
        ));
    }

    #[test]
    fn withdrawal_address_can_change() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);
        let owner = vm.msg_sender();
        let treasury = Address::from([0x77; 20]);

        vm.set_sender(treasury);
        assert!(matches!(
            contract.set_withdrawal_address(treasury).unwrap_err(),
            ChainBattlesError::OwnableUnauthorizedAccount(_)
        ));

        vm.set_sender(owner);
        contract.set_withdrawal_address(treasury).unwrap();
        assert_eq!(contract.get_withdrawal_address(), treasury);

        let balance = mint_fee() * U256::from(2);
        vm.set_balance(vm.contract_address(), balance);
        contract.withdraw().unwrap();

        let logs = vm.get_emitted_logs();
        let last = logs.last().unwrap();
        let decoded = Withdrawn::decode_raw_log(last.0.iter().copied(), &last.1).unwrap();
        assert_eq!(decoded.to, treasury);
        assert_eq!(decoded.amount, balance);
    }

    #[test]
    fn token_uri_requires_existing_token() {
        let vm = TestVM::default();
        let mut contract = deploy(&vm);
        assert!(matches!(
            contract.token_uri(U256::from(1)).unwrap_err(),
            ChainBattlesError::TokenDoesNotExist(_)
        ));

        let minter = vm.msg_sender();
        let token_id = mint_as(&vm, &mut contract, minter);
        let uri = contract.token_uri(token_id).unwrap();
        assert_eq!(uri, metadata::token_uri(token_id, U256::ZERO));
    }
}
