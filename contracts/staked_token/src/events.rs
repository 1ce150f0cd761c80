use soroban_sdk::{Address, Env, String, Symbol};

use crate::types::StakedInfo;

/// Emitted when a staked position is minted.
///
/// # Topics
/// * `Symbol` - "staked_minted"
/// * `Address` - The owner
///
/// # Data
/// * `u64` - The id
/// * `u64` - Start timestamp
/// * `u64` - Duration in seconds
/// * `u64` - End timestamp
pub fn emit_minted(e: &Env, to: &Address, id: u64, info: &StakedInfo) {
    let topics = (Symbol::new(e, "staked_minted"), to.clone());
    let data = (id, info.start, info.duration, info.end);
    e.events().publish(topics, data);
}

/// Emitted when a staked position is burned. Data is the id.
pub fn emit_burned(e: &Env, owner: &Address, id: u64) {
    let topics = (Symbol::new(e, "staked_burned"), owner.clone());
    e.events().publish(topics, id);
}

pub fn emit_transfer(e: &Env, from: &Address, to: &Address, id: u64) {
    let topics = (Symbol::new(e, "staked_transfer"), from.clone(), to.clone());
    e.events().publish(topics, id);
}

/// Emitted when `owner` approves `spender` for one id.
///
/// # Topics
/// * `Symbol` - "staked_approval"
/// * `Address` - The owner
///
/// # Data
/// * `Address` - The approved spender
/// * `u64` - The id
pub fn emit_approval(e: &Env, owner: &Address, spender: &Address, id: u64) {
    let topics = (Symbol::new(e, "staked_approval"), owner.clone());
    e.events().publish(topics, (spender.clone(), id));
}

pub fn emit_base_uri_set(e: &Env, uri: &String) {
    e.events()
        .publish((Symbol::new(e, "base_uri_set"),), uri.clone());
}

pub fn emit_transfer_toggled(e: &Env, enabled: bool) {
    e.events()
        .publish((Symbol::new(e, "transfer_toggled"),), enabled);
}
