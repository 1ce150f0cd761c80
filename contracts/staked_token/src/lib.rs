#![no_std]

//! # Staked Token Contract
//!
//! Registry of staked positions keyed by a numeric id. Each minted id has an
//! owner and a [`StakedInfo`] describing when the stake started and when it
//! may be released.
//!
//! ## Features
//! - Mint and burn gated by roles held in an external role oracle
//! - Burn only once the stake's end time has passed
//! - Token URI built from an admin-managed base URI
//! - Holder transfers and single-spender approvals, behind an admin switch
//!   that starts disabled
//!
//! ## Security
//! - Every gated call requires the caller's auth and a positive
//!   `has_role` answer from the oracle
//! - A burned id keeps no owner, record or approval, so it may be minted again
//! - Initialization is authorized by the deploying admin
//!
//! ## Storage
//! Every entry point bumps the instance TTL, and every per-id or per-owner
//! entry read or written is bumped with it, so a stake stays reachable
//! until it can be burned.

mod events;
mod types;
mod uri;

pub use lockup_common::{ContractError, Role};
pub use types::StakedInfo;
pub use uri::MAX_BASE_URI_LEN;

use core::fmt::Debug;
use lockup_common::{ttl, RoleOracleClient};
use soroban_sdk::{contract, contractimpl, Address, Env, IntoVal, String, TryFromVal, Val};
use types::DataKey;




// ─── Helpers ───────────────────────────────────────────────────────────────

fn read<V>(e: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
    V::Error: Debug,
{
    let value = e.storage().persistent().get(key);
    if value.is_some() {
        ttl::extend_persistent(e, key);
    }
    value
}

fn write<V>(e: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    e.storage().persistent().set(key, value);
    ttl::extend_persistent(e, key);
}

fn require_role(e: &Env, role: Role, account: &Address) -> Result<(), ContractError> {
    account.require_auth();
    ttl::extend_instance(e);
    let oracle: Address = e
        .storage()
        .instance()
        .get(&DataKey::RoleOracle)
        .ok_or(ContractError::NotInitialized)?;
    if !RoleOracleClient::new(e, &oracle).has_role(&role, account) {
        return Err(ContractError::MissingRole);
    }
    Ok(())
}

fn load_owner(e: &Env, id: u64) -> Result<Address, ContractError> {
    read(e, &DataKey::Owner(id)).ok_or(ContractError::TokenNotFound)
}

fn balance(e: &Env, owner: &Address) -> u32 {
    read(e, &DataKey::Balance(owner.clone())).unwrap_or(0)
}

fn set_balance(e: &Env, owner: &Address, count: u32) {
    let key = DataKey::Balance(owner.clone());
    if count == 0 {
        e.storage().persistent().remove(&key);
    } else {
        write(e, &key, &count);
    }
}

fn increment_balance(e: &Env, owner: &Address) -> Result<(), ContractError> {
    let count = balance(e, owner)
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;
    set_balance(e, owner, count);
    Ok(())
}

fn decrement_balance(e: &Env, owner: &Address) -> Result<(), ContractError> {
    let count = balance(e, owner)
        .checked_sub(1)
        .ok_or(ContractError::Underflow)?;
    set_balance(e, owner, count);
    Ok(())
}

fn transferable(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Transferable)
        .unwrap_or(false)
}

fn require_transferable(e: &Env) -> Result<(), ContractError> {
    if !transferable(e) {
        return Err(ContractError::TransfersDisabled);
    }
    Ok(())
}

/// Caller has already checked auth and the transfer switch.
fn move_token(e: &Env, from: &Address, to: &Address, id: u64) -> Result<(), ContractError> {
    if load_owner(e, id)? != *from {
        return Err(ContractError::NotTokenOwner);
    }

    e.storage().persistent().remove(&DataKey::Approved(id));
    decrement_balance(e, from)?;
    increment_balance(e, to)?;
    write(e, &DataKey::Owner(id), to);

    events::emit_transfer(e, from, to, id);
    Ok(())
}

fn instance_string(e: &Env, key: &DataKey) -> Result<String, ContractError> {
    e.storage()
        .instance()
        .get(key)
        .ok_or(ContractError::NotInitialized)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct StakedToken;

#[contractimpl]
impl StakedToken {
    /// Initialize the registry.
    ///
    /// # Arguments
    /// * `admin` - Deployer authorizing this call. Gated calls still consult
    ///   the oracle, not this address.
    /// * `name`, `symbol` - Display metadata
    /// * `base_uri` - Prefix for [`Self::token_uri`], at most 200 bytes
    /// * `role_oracle` - Contract answering `has_role(role, account)`
    pub fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
        base_uri: String,
        role_oracle: Address,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::RoleOracle) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        uri::validate_base_uri(&base_uri)?;

        let storage = e.storage().instance();
        storage.set(&DataKey::Admin, &admin);
        storage.set(&DataKey::Name, &name);
        storage.set(&DataKey::Symbol, &symbol);
        storage.set(&DataKey::BaseUri, &base_uri);
        storage.set(&DataKey::RoleOracle, &role_oracle);
        storage.set(&DataKey::Transferable, &false);
        ttl::extend_instance(&e);
        Ok(())
    }

    // ── Mint / burn ────────────────────────────────────────────────────────

    /// Mint `id` to `to` with the given time bounds.
    ///
    /// # Errors
    /// * `MissingRole` - `caller` lacks `Role::Minter`
    /// * `InvalidDuration` - `info.duration` is zero
    /// * `InvalidTimeRange` - `info.end` is not after `info.start`
    /// * `TokenAlreadyMinted` - `id` currently has an owner
    pub fn mint(
        e: Env,
        caller: Address,
        to: Address,
        id: u64,
        info: StakedInfo,
    ) -> Result<(), ContractError> {
        require_role(&e, Role::Minter, &caller)?;

        if info.duration == 0 {
            return Err(ContractError::InvalidDuration);
        }
        if info.end <= info.start {
            return Err(ContractError::InvalidTimeRange);
        }
        if e.storage().persistent().has(&DataKey::Owner(id)) {
            return Err(ContractError::TokenAlreadyMinted);
        }

        write(&e, &DataKey::Owner(id), &to);
        write(&e, &DataKey::Info(id), &info);
        increment_balance(&e, &to)?;

        events::emit_minted(&e, &to, id, &info);
        Ok(())
    }

    /// Burn `id` once its end time has passed.
    ///
    /// # Errors
    /// * `MissingRole` - `caller` lacks `Role::Burner`
    /// * `TokenNotFound` - `id` is not minted
    /// * `TooSoon` - ledger time is before `info.end`
    pub fn burn(e: Env, caller: Address, id: u64) -> Result<(), ContractError> {
        require_role(&e, Role::Burner, &caller)?;

        let holder = load_owner(&e, id)?;
        let info = Self::staked_info_of(e.clone(), id)?;
        if e.ledger().timestamp() < info.end {
            return Err(ContractError::TooSoon);
        }

        let storage = e.storage().persistent();
        storage.remove(&DataKey::Info(id));
        storage.remove(&DataKey::Owner(id));
        storage.remove(&DataKey::Approved(id));
        decrement_balance(&e, &holder)?;

        events::emit_burned(&e, &holder, id);
        Ok(())
    }

    // ── Lookups ────────────────────────────────────────────────────────────

    pub fn staked_info_of(e: Env, id: u64) -> Result<StakedInfo, ContractError> {
        ttl::extend_instance(&e);
        read(&e, &DataKey::Info(id)).ok_or(ContractError::TokenNotFound)
    }

    pub fn owner_of(e: Env, id: u64) -> Result<Address, ContractError> {
        ttl::extend_instance(&e);
        load_owner(&e, id)
    }

    pub fn balance_of(e: Env, owner: Address) -> u32 {
        ttl::extend_instance(&e);
        balance(&e, &owner)
    }

    pub fn exists(e: Env, id: u64) -> bool {
        ttl::extend_instance(&e);
        e.storage().persistent().has(&DataKey::Owner(id))
    }

    /// `base_uri` followed by the decimal `id`, or an empty string when no
    /// base URI is set. Fails `TokenNotFound` for an unminted id.
    pub fn token_uri(e: Env, id: u64) -> Result<String, ContractError> {
        ttl::extend_instance(&e);
        load_owner(&e, id)?;
        let base = instance_string(&e, &DataKey::BaseUri)?;
        uri::compose(&e, &base, id)
    }

    // ── Admin ──────────────────────────────────────────────────────────────

    pub fn set_base_uri(e: Env, caller: Address, uri: String) -> Result<(), ContractError> {
        require_role(&e, Role::Admin, &caller)?;
        uri::validate_base_uri(&uri)?;
        e.storage().instance().set(&DataKey::BaseUri, &uri);
        events::emit_base_uri_set(&e, &uri);
        Ok(())
    }

    pub fn enable_transfer(e: Env, caller: Address) -> Result<(), ContractError> {
        require_role(&e, Role::Admin, &caller)?;
        e.storage().instance().set(&DataKey::Transferable, &true);
        events::emit_transfer_toggled(&e, true);
        Ok(())
    }

    pub fn disable_transfer(e: Env, caller: Address) -> Result<(), ContractError> {
        require_role(&e, Role::Admin, &caller)?;
        e.storage().instance().set(&DataKey::Transferable, &false);
        events::emit_transfer_toggled(&e, false);
        Ok(())
    }

    // ── Holder transfers ───────────────────────────────────────────────────

    /// Let `spender` move `id` on `owner`'s behalf. Replaces any previous
    /// approval for `id`.
    pub fn approve(
        e: Env,
        owner: Address,
        spender: Address,
        id: u64,
    ) -> Result<(), ContractError> {
        owner.require_auth();
        ttl::extend_instance(&e);
        if load_owner(&e, id)? != owner {
            return Err(ContractError::NotTokenOwner);
        }
        write(&e, &DataKey::Approved(id), &spender);
        events::emit_approval(&e, &owner, &spender, id);
        Ok(())
    }

    pub fn get_approved(e: Env, id: u64) -> Option<Address> {
        ttl::extend_instance(&e);
        read(&e, &DataKey::Approved(id))
    }

    pub fn transfer(e: Env, from: Address, to: Address, id: u64) -> Result<(), ContractError> {
        from.require_auth();
        ttl::extend_instance(&e);
        require_transferable(&e)?;
        move_token(&e, &from, &to, id)
    }

    /// Move `id` from `from` to `to` as `spender`, who must be the owner or
    /// the approved address.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        id: u64,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        ttl::extend_instance(&e);
        require_transferable(&e)?;
        if spender != from && Self::get_approved(e.clone(), id) != Some(spender.clone()) {
            return Err(ContractError::NotTokenOwner);
        }
        move_token(&e, &from, &to, id)
    }

    // ── Metadata ───────────────────────────────────────────────────────────

    pub fn name(e: Env) -> Result<String, ContractError> {
        ttl::extend_instance(&e);
        instance_string(&e, &DataKey::Name)
    }

    pub fn symbol(e: Env) -> Result<String, ContractError> {
        ttl::extend_instance(&e);
        instance_string(&e, &DataKey::Symbol)
    }

    pub fn base_uri(e: Env) -> Result<String, ContractError> {
        ttl::extend_instance(&e);
        instance_string(&e, &DataKey::BaseUri)
    }

    pub fn is_transferable(e: Env) -> bool {
        ttl::extend_instance(&e);
        transferable(&e)
    }

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        ttl::extend_instance(&e);
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn role_oracle(e: Env) -> Result<Address, ContractError> {
        ttl::extend_instance(&e);
        e.storage()
            .instance()
            .get(&DataKey::RoleOracle)
            .ok_or(ContractError::NotInitialized)
    }
}
