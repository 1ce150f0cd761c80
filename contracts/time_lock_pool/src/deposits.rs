//! Per-account position storage.
//!
//! Positions live in an index-addressed `Vec`. Removal swaps the last entry
//! into the freed slot and truncates, so indices are NOT stable across
//! removals: after removing `i`, whatever was last now sits at `i`.

use crate::types::{DataKey, Deposit};
use lockup_common::{ttl, ContractError};
use soroban_sdk::{Address, Env, Vec};

pub fn load(e: &Env, owner: &Address) -> Vec<Deposit> {
    let key = DataKey::Deposits(owner.clone());
    match e.storage().persistent().get(&key) {
        Some(deposits) => {
            ttl::extend_persistent(e, &key);
            deposits
        }
        None => Vec::new(e),
    }
}

pub fn store(e: &Env, owner: &Address, deposits: &Vec<Deposit>) {
    let key = DataKey::Deposits(owner.clone());
    if deposits.is_empty() {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, deposits);
        ttl::extend_persistent(e, &key);
    }
}

/// Append a position and return its index.
pub fn append(e: &Env, owner: &Address, deposit: Deposit) -> u32 {
    let mut deposits = load(e, owner);
    deposits.push_back(deposit);
    store(e, owner, &deposits);
    deposits.len() - 1
}

pub fn get(e: &Env, owner: &Address, index: u32) -> Result<Deposit, ContractError> {
    load(e, owner)
        .get(index)
        .ok_or(ContractError::DepositNotFound)
}

/// Remove `index` by moving the last entry into its slot, then truncating.
pub fn swap_remove(deposits: &mut Vec<Deposit>, index: u32) -> Result<Deposit, ContractError> {
    let removed = deposits.get(index).ok_or(ContractError::DepositNotFound)?;
    let last_index = deposits.len() - 1;
    if index != last_index {
        let last = deposits
            .get(last_index)
            .ok_or(ContractError::DepositNotFound)?;
        deposits.set(index, last);
    }
    deposits.pop_back();
    Ok(removed)
}

/// Sum of principal across every open position of `owner`.
pub fn total_of(e: &Env, owner: &Address) -> Result<i128, ContractError> {
    load(e, owner).iter().try_fold(0_i128, |acc, d| {
        acc.checked_add(d.amount).ok_or(ContractError::Overflow)
    })
}
