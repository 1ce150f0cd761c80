#![no_std]

//! Role registry for the lockup contracts.
//!
//! Holds `(role, account)` grants and answers `has_role` for any contract
//! that consumes the `RoleOracle` interface. Only `Role::Admin` holders may
//! grant or revoke, and the last admin can never be removed.
//!
//! Role grants are read on every gated registry call, so each read or write
//! bumps the grant's TTL together with the instance.

use lockup_common::{ttl, ContractError, Role, RoleOracle};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol, Vec};


#[contracttype]
#[derive(Clone)]
enum DataKey {
    Initialized,
    HasRole(Role, Address),
    /// Role -> Vec<Address> of current holders
    RoleMembers(Role),
}

fn holds(e: &Env, role: Role, account: &Address) -> bool {
    let key = DataKey::HasRole(role, account.clone());
    let held = e.storage().persistent().has(&key);
    if held {
        ttl::extend_persistent(e, &key);
    }
    held
}

fn members(e: &Env, role: Role) -> Vec<Address> {
    let key = DataKey::RoleMembers(role);
    match e.storage().persistent().get(&key) {
        Some(list) => {
            ttl::extend_persistent(e, &key);
            list
        }
        None => Vec::new(e),
    }
}

fn store_members(e: &Env, role: Role, list: &Vec<Address>) {
    let key = DataKey::RoleMembers(role);
    e.storage().persistent().set(&key, list);
    ttl::extend_persistent(e, &key);
}

fn require_initialized(e: &Env) -> Result<(), ContractError> {
    if !e.storage().instance().has(&DataKey::Initialized) {
        return Err(ContractError::NotInitialized);
    }
    ttl::extend_instance(e);
    Ok(())
}

fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    require_initialized(e)?;
    caller.require_auth();
    if !holds(e, Role::Admin, caller) {
        return Err(ContractError::MissingRole);
    }
    Ok(())
}

/// Returns `false` when `account` already held `role`.
fn grant(e: &Env, role: Role, account: &Address) -> bool {
    if holds(e, role, account) {
        return false;
    }
    let key = DataKey::HasRole(role, account.clone());
    e.storage().persistent().set(&key, &true);
    ttl::extend_persistent(e, &key);

    let mut list = members(e, role);
    list.push_back(account.clone());
    store_members(e, role, &list);
    true
}

/// Returns `Ok(false)` when `account` did not hold `role`.
fn revoke(e: &Env, role: Role, account: &Address) -> Result<bool, ContractError> {
    if !holds(e, role, account) {
        return Ok(false);
    }
    let mut list = members(e, role);
    if role == Role::Admin && list.len() <= 1 {
        return Err(ContractError::LastAdmin);
    }

    e.storage()
        .persistent()
        .remove(&DataKey::HasRole(role, account.clone()));
    if let Some(index) = list.first_index_of(account) {
        list.remove(index);
    }
    store_members(e, role, &list);
    Ok(true)
}

fn emit_role_event(e: &Env, name: &str, role: Role, account: &Address, caller: &Address) {
    e.events().publish(
        (Symbol::new(e, name), role),
        (account.clone(), caller.clone()),
    );
}

#[contract]
pub struct AccessControl;

#[contractimpl]
impl AccessControl {
    /// Initialize with `admin` as the first `Role::Admin` holder.
    pub fn initialize(e: Env, admin: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Initialized) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Initialized, &true);
        ttl::extend_instance(&e);
        grant(&e, Role::Admin, &admin);
        emit_role_event(&e, "role_granted", Role::Admin, &admin, &admin);
        Ok(())
    }

    /// Grant `role` to `account`. No-op if already held.
    ///
    /// # Errors
    /// * `MissingRole` - `caller` is not an admin
    pub fn grant_role(
        e: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ContractError> {
        require_admin(&e, &caller)?;
        if grant(&e, role, &account) {
            emit_role_event(&e, "role_granted", role, &account, &caller);
        }
        Ok(())
    }

    /// Revoke `role` from `account`. No-op if not held.
    ///
    /// # Errors
    /// * `MissingRole` - `caller` is not an admin
    /// * `LastAdmin` - would leave no admin
    pub fn revoke_role(
        e: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ContractError> {
        require_admin(&e, &caller)?;
        if revoke(&e, role, &account)? {
            emit_role_event(&e, "role_revoked", role, &account, &caller);
        }
        Ok(())
    }

    /// Drop `role` from the calling `account` itself.
    pub fn renounce_role(e: Env, account: Address, role: Role) -> Result<(), ContractError> {
        require_initialized(&e)?;
        account.require_auth();
        if revoke(&e, role, &account)? {
            emit_role_event(&e, "role_revoked", role, &account, &account);
        }
        Ok(())
    }

    pub fn get_role_members(e: Env, role: Role) -> Vec<Address> {
        ttl::extend_instance(&e);
        members(&e, role)
    }
}

#[contractimpl]
impl RoleOracle for AccessControl {
    fn has_role(env: Env, role: Role, account: Address) -> bool {
        ttl::extend_instance(&env);
        holds(&env, role, &account)
    }
}
