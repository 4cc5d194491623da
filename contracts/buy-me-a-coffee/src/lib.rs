// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! BuyMeACoffee: a tip jar that keeps an append-only list of memos.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

extern crate alloc;

use alloc::{string::String, vec::Vec};

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use stylus_sdk::{
    call::call,
    prelude::*,
    storage::{StorageAddress, StorageString, StorageU256, StorageVec},
};

sol! {
    #[derive(Debug, AbiType)]
    struct Memo {
        address from;
        string name;
        string message;
    }

    event NewMemo(address indexed from, string name, string message);
    event Withdrawn(address indexed to, uint256 amount);
    event WithdrawalAddressChanged(address indexed previous, address indexed current);

    // Tip is below the minimum
    #[derive(Debug)]
    error DidNotTipEnough(uint256 sent, uint256 min_tip);
    #[derive(Debug)]
    error OwnableUnauthorizedAccount(address account);
    // Sending the balance to the withdrawal address failed
    #[derive(Debug)]
    error WithdrawFailed(address to, uint256 amount);
}

#[derive(SolidityError, Debug)]
pub enum BuyMeACoffeeError {
    DidNotTipEnough(DidNotTipEnough),
    OwnableUnauthorizedAccount(OwnableUnauthorizedAccount),
    WithdrawFailed(WithdrawFailed),
}

#[storage]
struct StorageMemo {
    from: StorageAddress,
    name: StorageString,
    message: StorageString,
}

#[storage]
#[entrypoint]
pub struct BuyMeACoffee {
    owner: StorageAddress,
    withdrawal_address: StorageAddress,
    min_tip: StorageU256,
    memos: StorageVec<StorageMemo>,
}

impl BuyMeACoffee {
    fn only_owner(&self) -> Result<(), BuyMeACoffeeError> {
        let account = self.vm().msg_sender();
        if account != self.owner.get() {
            return Err(OwnableUnauthorizedAccount { account }.into());
        }
        Ok(())
    }
}

#[public]
impl BuyMeACoffee {
    #[constructor]
    pub fn constructor(&mut self, min_tip: U256) {
        // Use tx_origin instead of msg_sender because we use a factory contract in deployment.
        let owner = self.vm().tx_origin();
        self.owner.set(owner);
        self.withdrawal_address.set(owner);
        self.min_tip.set(min_tip);
    }

    /// Records a memo from the caller, who must tip at least the minimum.
    #[payable]
    pub fn buy_coffee(&mut self, name: String, message: String) -> Result<(), BuyMeACoffeeError> {
        let sent = self.vm().msg_value();
        let min_tip = self.min_tip.get();
        if sent < min_tip {
            return Err(DidNotTipEnough { sent, min_tip }.into());
        }

        let from = self.vm().msg_sender();
        let mut memo = self.memos.grow();
        memo.from.set(from);
        memo.name.set_str(&name);
        memo.message.set_str(&message);

        self.vm().log(NewMemo {
            from,
            name,
            message,
        });
        Ok(())
    }

    /// Sends the whole contract balance to the withdrawal address.
    pub fn withdraw(&mut self) -> Result<(), BuyMeACoffeeError> {
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
    ) -> Result<(), BuyMeACoffeeError> {
        self.only_owner()?;

        let previous = self.withdrawal_address.get();
        self.withdrawal_address.set(withdrawal_address);

        self.vm().log(WithdrawalAddressChanged {
            previous,
            current: withdrawal_address,
        });
        Ok(())
    }

    pub fn get_min_tip(&self) -> U256 {
        self.min_tip.get()
    }

    /// All memos, oldest first.
    pub fn get_memos(&self) -> Vec<Memo> {
        let len = self.memos.len();
        let mut memos = Vec::with_capacity(len);
        for i in 0..len {
            let Some(entry) = self.memos.get(i) else {
                break;
            };
            memos.push(Memo {
                from: entry.from.get(),
                name: entry.name.get_string(),
                message: entry.message.get_string(),
            });
        }
        memos
    }

    pub fn get_withdrawal_address(&self) -> Address {
        self.withdrawal_address.get()
    }

    pub fn owner(&self) -> Address {
        self.owner.get()
    }
}
