use crate::types::DataKey;
use lockup_common::ContractError;
use soroban_sdk::Env;

pub fn is_locked(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

fn acquire_lock(e: &Env) -> Result<(), ContractError> {
    if is_locked(e) {
        return Err(ContractError::ReentrancyDetected);
    }
    e.storage().instance().set(&DataKey::Locked, &true);
    Ok(())
}

fn release_lock(e: &Env) {
    e.storage().instance().set(&DataKey::Locked, &false);
}

/// Run `f` while holding the pool-wide lock. The lock is released whether
/// `f` succeeds or fails.
pub fn with_reentrancy_guard<T, F>(e: &Env, f: F) -> Result<T, ContractError>
where
    F: FnOnce() -> Result<T, ContractError>,
{
    acquire_lock(e)?;
    let result = f();
    release_lock(e);
    result
}
