//! Non-transferable share ledger. `mint` and `burn` are the only mutators.

use crate::types::DataKey;
use lockup_common::{ttl, ContractError};
use soroban_sdk::{Address, Env};

pub fn balance(e: &Env, account: &Address) -> i128 {
    let key = DataKey::Balance(account.clone());
    match e.storage().persistent().get(&key) {
        Some(amount) => {
            ttl::extend_persistent(e, &key);
            amount
        }
        None => 0,
    }
}

pub fn total_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn mint(e: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    let new_balance = balance(e, to)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    let new_supply = total_supply(e)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    let key = DataKey::Balance(to.clone());
    e.storage().persistent().set(&key, &new_balance);
    ttl::extend_persistent(e, &key);
    e.storage()
        .instance()
        .set(&DataKey::TotalSupply, &new_supply);
    Ok(())
}

pub fn burn(e: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    let current = balance(e, from);
    if current < amount {
        return Err(ContractError::InsufficientShares);
    }
    let new_supply = total_supply(e)
        .checked_sub(amount)
        .ok_or(ContractError::Underflow)?;

    let key = DataKey::Balance(from.clone());
    let remaining = current - amount;
    if remaining == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &remaining);
        ttl::extend_persistent(e, &key);
    }
    e.storage()
        .instance()
        .set(&DataKey::TotalSupply, &new_supply);
    Ok(())
}
