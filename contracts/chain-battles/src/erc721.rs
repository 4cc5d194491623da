// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Token ownership bookkeeping for ChainBattles warriors.
//!
//! [`Erc721`] keeps the owner, balance and approval tables of the ERC-721 standard. It has no
//! public methods of its own: the hosting contract exposes them and passes the caller in
//! explicitly, so the same checks can back both the ERC-721 surface and `train`.

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use stylus_sdk::{
    prelude::*,
    storage::{StorageAddress, StorageBool, StorageMap, StorageU256},
};

sol! {
    event Transfer(address indexed from, address indexed to, uint256 indexed token_id);
    event Approval(address indexed owner, address indexed approved, uint256 indexed token_id);
    event ApprovalForAll(address indexed owner, address indexed operator, bool approved);

    // Token id has not been minted
    #[derive(Debug)]
    error TokenDoesNotExist(uint256 token_id);
    // The caller is neither the owner, the approved address, nor an operator
    #[derive(Debug)]
    error NotApproved(address caller, uint256 token_id);
    // The specified address is not the owner of the specified token id
    #[derive(Debug)]
    error NotOwner(address from, uint256 token_id, address real_owner);
    // Attempt to transfer token id to the zero address
    #[derive(Debug)]
    error TransferToZero(uint256 token_id);
}

/// Represents the ways token bookkeeping may fail.
#[derive(SolidityError, Debug)]
pub enum Erc721Error {
    TokenDoesNotExist(TokenDoesNotExist),
    NotApproved(NotApproved),
    NotOwner(NotOwner),
    TransferToZero(TransferToZero),
}

#[storage]
pub struct Erc721 {
    /// Token id to owner map
    owners: StorageMap<U256, StorageAddress>,
    /// User to balance map
    balances: StorageMap<Address, StorageU256>,
    /// Token id to approved user map
    token_approvals: StorageMap<U256, StorageAddress>,
    /// User to operator map (the operator can manage all tokens of the owner)
    operator_approvals: StorageMap<Address, StorageMap<Address, StorageBool>>,
}

impl Erc721 {
    /// Gets the owner of the token, if it exists.
    pub fn owner_of(&self, token_id: U256) -> Result<Address, Erc721Error> {
        let owner = self.owners.get(token_id);
        if owner.is_zero() {
            return Err(TokenDoesNotExist { token_id }.into());
        }
        Ok(owner)
    }

    /// Gets the number of tokens owned by an account.
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(owner)
    }

    /// Gets the account managing a token, or zero if unmanaged.
    pub fn get_approved(&self, token_id: U256) -> Address {
        self.token_approvals.get(token_id)
    }

    /// Determines if an account manages all of a user's tokens.
    pub fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.operator_approvals.getter(owner).get(operator)
    }

    /// Requires that `caller` owns `token_id`, is approved for it, or operates for its owner.
    pub fn require_approved_or_owner(
        &self,
        caller: Address,
        token_id: U256,
    ) -> Result<Address, Erc721Error> {
        let owner = self.owner_of(token_id)?;
        if caller == owner
            || self.is_approved_for_all(owner, caller)
            || caller == self.token_approvals.get(token_id)
        {
            return Ok(owner);
        }
        Err(NotApproved { caller, token_id }.into())
    }

    /// Mints `token_id` to `to`. The caller picks the id.
    pub fn mint(&mut self, to: Address, token_id: U256) -> Result<(), Erc721Error> {
        if to.is_zero() {
            return Err(TransferToZero { token_id }.into());
        }
        self.transfer(token_id, Address::ZERO, to)
    }

    /// Transfers the token after checking that `caller` may move it.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), Erc721Error> {
        if to.is_zero() {
            return Err(TransferToZero { token_id }.into());
        }
        self.require_approved_or_owner(caller, token_id)?;
        self.transfer(token_id, from, to)
    }

    /// Grants `approved` the ability to manage one of the caller's tokens.
    pub fn approve(
        &mut self,
        caller: Address,
        approved: Address,
        token_id: U256,
    ) -> Result<(), Erc721Error> {
        let owner = self.owner_of(token_id)?;
        if caller != owner && !self.is_approved_for_all(owner, caller) {
            return Err(NotApproved { caller, token_id }.into());
        }
        self.token_approvals.insert(token_id, approved);

        self.vm().log(Approval {
            owner,
            approved,
            token_id,
        });
        Ok(())
    }

    /// Grants or revokes `operator` over all of the caller's tokens.
    pub fn set_approval_for_all(&mut self, caller: Address, operator: Address, approved: bool) {
        self.operator_approvals
            .setter(caller)
            .insert(operator, approved);

        self.vm().log(ApprovalForAll {
            owner: caller,
            operator,
            approved,
        });
    }

    /// Moves `token_id` from `from` to `to` without any authorization check.
    /// Minting passes the zero address as `from`.
    fn transfer(&mut self, token_id: U256, from: Address, to: Address) -> Result<(), Erc721Error> {
        let mut owner = self.owners.setter(token_id);
        let previous_owner = owner.get();
        if previous_owner != from {
            return Err(NotOwner {
                from,
                token_id,
                real_owner: previous_owner,
            }
            .into());
        }
        owner.set(to);

        if !from.is_zero() {
            let mut from_balance = self.balances.setter(from);
            let balance = from_balance.get() - U256::from(1);
            from_balance.set(balance);
        }

        let mut to_balance = self.balances.setter(to);
        let balance = to_balance.get() + U256::from(1);
        to_balance.set(balance);

        self.token_approvals.delete(token_id);

        self.vm().log(Transfer { from, to, token_id });
        Ok(())
    }
}
