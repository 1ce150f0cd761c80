use soroban_sdk::{Address, Env, Symbol};

use crate::types::LockConfig;

/// Emitted once when the pool is initialized.
///
/// # Topics
/// * `Symbol` - "pool_initialized"
///
/// # Data
/// * `Address` - The deposit token
/// * `i128` - Maximum bonus (1e18 scale)
/// * `u64` - Minimum lock duration
/// * `u64` - Maximum lock duration
pub fn emit_pool_initialized(e: &Env, deposit_token: &Address, lock: &LockConfig) {
    let topics = (Symbol::new(e, "pool_initialized"),);
    let data = (
        deposit_token.clone(),
        lock.max_bonus,
        lock.min_lock_duration,
        lock.max_lock_duration,
    );
    e.events().publish(topics, data);
}

/// Emitted when a position is opened.
///
/// # Topics
/// * `Symbol` - "deposited"
/// * `Address` - The receiver owning the new position
///
/// # Data
/// * `i128` - The principal locked
/// * `u64` - The effective (clamped) lock duration
/// * `Address` - The receiver
/// * `Address` - The account the tokens were pulled from
pub fn emit_deposited(e: &Env, amount: i128, duration: u64, receiver: &Address, from: &Address) {
    let topics = (Symbol::new(e, "deposited"), receiver.clone());
    let data = (amount, duration, receiver.clone(), from.clone());
    e.events().publish(topics, data);
}

/// Emitted when a position is closed, by its owner or by a forced withdrawal.
///
/// # Topics
/// * `Symbol` - "withdrawn"
/// * `Address` - The receiver of the principal
///
/// # Data
/// * `u32` - The index the position had before removal
/// * `Address` - The receiver
/// * `Address` - The caller
/// * `i128` - The full principal of the position, before any fee
pub fn emit_withdrawn(
    e: &Env,
    deposit_id: u32,
    receiver: &Address,
    from: &Address,
    amount: i128,
) {
    let topics = (Symbol::new(e, "withdrawn"), receiver.clone());
    let data = (deposit_id, receiver.clone(), from.clone(), amount);
    e.events().publish(topics, data);
}
