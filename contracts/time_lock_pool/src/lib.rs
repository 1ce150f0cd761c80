#![no_std]

//! Time-Lock Pool Contract
//!
//! Any address may lock the deposit token for a chosen duration and receive
//! shares boosted by a multiplier that grows with the lock duration. Once a
//! position reaches its end time the owner withdraws the full principal, or
//! anyone may force the withdrawal and keep a 1% fee for doing so.
//!
//! ## Key design decisions
//!
//! - **Many positions per owner**: each owner holds an index-addressed list;
//!   removal is swap-with-last-then-truncate, so indices shift on removal.
//! - **Clamped durations**: requests outside the configured bounds are capped,
//!   then raised, never rejected.
//! - **Checks-Effects-Interactions**: positions and shares are updated before
//!   tokens leave the pool, and one lock flag guards every mutating entry point.
//! - **Wide share math**: `amount * multiplier` is evaluated in 256 bits.
//! - **Shares never move**: `transfer` and `transfer_from` always fail.
//! - **Storage stays live**: every entry point bumps the instance TTL and
//!   each touched position list or share balance is bumped with it, so a
//!   position outlives a full-year lock.

mod deposits;
mod events;
pub mod math;
mod reentrancy;
mod shares;
mod token_integration;
mod types;
mod validation;

use lockup_common::ttl;
pub use lockup_common::ContractError;
pub use types::{BasePoolConfig, Deposit, LockConfig, ShareMetadata};

use types::DataKey;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};






#[cfg(test)]
mod test_reentrancy;

#[cfg(test)]
mod test_math;


// ─── Helpers ───────────────────────────────────────────────────────────────

fn lock_config(e: &Env) -> Result<LockConfig, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Lock)
        .ok_or(ContractError::NotInitialized)
}

fn require_valid_receiver(e: &Env, receiver: &Address) -> Result<(), ContractError> {
    if *receiver == e.current_contract_address() {
        return Err(ContractError::InvalidReceiver);
    }
    Ok(())
}

/// Shares minted for `amount` locked for `duration`, with no clamping.
fn shares_for(
    e: &Env,
    lock: &LockConfig,
    amount: i128,
    duration: u64,
) -> Result<i128, ContractError> {
    let multiplier = math::multiplier(lock.max_bonus, lock.max_lock_duration, duration)?;
    math::share_amount(e, amount, multiplier)
}

/// Validate, remove and burn the shares of `depositor`'s position at
/// `deposit_id`. Returns the removed position. Touches no tokens.
fn close_position(
    e: &Env,
    depositor: &Address,
    deposit_id: u32,
) -> Result<Deposit, ContractError> {
    let lock = lock_config(e)?;
    let mut positions = deposits::load(e, depositor);
    let position = positions
        .get(deposit_id)
        .ok_or(ContractError::DepositNotFound)?;

    if e.ledger().timestamp() < position.end {
        return Err(ContractError::TooSoon);
    }

    let duration = position
        .end
        .checked_sub(position.start)
        .ok_or(ContractError::Underflow)?;
    let share_amount = shares_for(e, &lock, position.amount, duration)?;

    deposits::swap_remove(&mut positions, deposit_id)?;
    deposits::store(e, depositor, &positions);
    shares::burn(e, depositor, share_amount)?;

    Ok(position)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct TimeLockPool;

#[contractimpl]
impl TimeLockPool {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization, authorized by `admin`.
    ///
    /// `name`/`symbol` describe the share unit; its decimals are copied from
    /// `deposit_token`. `base_pool` is stored for the reward/escrow layer.
    /// Fails if already initialized or if `lock` / `base_pool` are invalid.
    pub fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
        deposit_token: Address,
        base_pool: BasePoolConfig,
        lock: LockConfig,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Lock) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        validation::validate_lock_config(&lock)?;
        validation::validate_base_pool(&base_pool)?;

        let metadata = ShareMetadata {
            name,
            symbol,
            decimals: token_integration::token_decimals(&e, &deposit_token),
        };

        let storage = e.storage().instance();
        storage.set(&DataKey::Admin, &admin);
        storage.set(&DataKey::DepositToken, &deposit_token);
        storage.set(&DataKey::Metadata, &metadata);
        storage.set(&DataKey::BasePool, &base_pool);
        storage.set(&DataKey::Lock, &lock);
        ttl::extend_instance(&e);

        events::emit_pool_initialized(&e, &deposit_token, &lock);
        Ok(())
    }

    // ── Positions ──────────────────────────────────────────────────────────

    /// Lock `amount` of the deposit token, pulled from `from`, into a new
    /// position owned by `receiver`.
    ///
    /// `duration` is clamped into `[min_lock_duration, max_lock_duration]`.
    /// `from` must have approved the pool to spend `amount`.
    /// Returns the new position's index in `receiver`'s list.
    pub fn deposit(
        e: Env,
        from: Address,
        amount: i128,
        duration: u64,
        receiver: Address,
    ) -> Result<u32, ContractError> {
        from.require_auth();
        ttl::extend_instance(&e);

        reentrancy::with_reentrancy_guard(&e, || {
            if amount <= 0 {
                return Err(ContractError::InvalidAmount);
            }
            require_valid_receiver(&e, &receiver)?;

            let lock = lock_config(&e)?;
            let effective =
                math::clamp_duration(duration, lock.min_lock_duration, lock.max_lock_duration);
            let start = e.ledger().timestamp();
            let end = start
                .checked_add(effective)
                .ok_or(ContractError::Overflow)?;

            token_integration::transfer_into_pool(&e, &from, amount)?;

            let index = deposits::append(&e, &receiver, Deposit { amount, start, end });
            let mint_amount = shares_for(&e, &lock, amount, effective)?;
            shares::mint(&e, &receiver, mint_amount)?;

            events::emit_deposited(&e, amount, effective, &receiver, &from);
            Ok(index)
        })
    }

    /// Close `from`'s own expired position `deposit_id` and send the full
    /// principal to `receiver`. Returns the principal.
    ///
    /// Indices are unstable: the caller's last position moves into the
    /// freed slot.
    pub fn withdraw(
        e: Env,
        from: Address,
        deposit_id: u32,
        receiver: Address,
    ) -> Result<i128, ContractError> {
        from.require_auth();
        ttl::extend_instance(&e);

        reentrancy::with_reentrancy_guard(&e, || {
            require_valid_receiver(&e, &receiver)?;

            let position = close_position(&e, &from, deposit_id)?;
            token_integration::transfer_from_pool(&e, &receiver, position.amount)?;

            events::emit_withdrawn(&e, deposit_id, &receiver, &from, position.amount);
            Ok(position.amount)
        })
    }

    /// Close `depositor`'s expired position `deposit_id` on their behalf.
    ///
    /// Anyone may call this. The caller keeps `amount / 100`; the depositor
    /// receives the rest. The emitted event carries the full pre-fee amount.
    /// Returns the fee paid to the caller.
    pub fn force_withdraw(
        e: Env,
        caller: Address,
        deposit_id: u32,
        depositor: Address,
    ) -> Result<i128, ContractError> {
        caller.require_auth();
        ttl::extend_instance(&e);

        reentrancy::with_reentrancy_guard(&e, || {
            let position = close_position(&e, &depositor, deposit_id)?;
            let (fee, remainder) = math::split_force_withdraw(position.amount);

            token_integration::transfer_from_pool(&e, &caller, fee)?;
            token_integration::transfer_from_pool(&e, &depositor, remainder)?;

            events::emit_withdrawn(&e, deposit_id, &depositor, &caller, position.amount);
            Ok(fee)
        })
    }

    // ── Share unit ─────────────────────────────────────────────────────────

    pub fn balance(e: Env, id: Address) -> i128 {
        ttl::extend_instance(&e);
        shares::balance(&e, &id)
    }

    pub fn total_supply(e: Env) -> i128 {
        ttl::extend_instance(&e);
        shares::total_supply(&e)
    }

    /// Always fails: shares are an accounting unit, not an asset.
    pub fn transfer(
        e: Env,
        _from: Address,
        _to: Address,
        _amount: i128,
    ) -> Result<(), ContractError> {
        ttl::extend_instance(&e);
        Err(ContractError::SharesNotTransferable)
    }

    /// Always fails: shares are an accounting unit, not an asset.
    pub fn transfer_from(
        e: Env,
        _spender: Address,
        _from: Address,
        _to: Address,
        _amount: i128,
    ) -> Result<(), ContractError> {
        ttl::extend_instance(&e);
        Err(ContractError::SharesNotTransferable)
    }

    pub fn name(e: Env) -> Result<String, ContractError> {
        ttl::extend_instance(&e);
        Ok(Self::metadata(&e)?.name)
    }

    pub fn symbol(e: Env) -> Result<String, ContractError> {
        ttl::extend_instance(&e);
        Ok(Self::metadata(&e)?.symbol)
    }

    pub fn decimals(e: Env) -> Result<u32, ContractError> {
        ttl::extend_instance(&e);
        Ok(Self::metadata(&e)?.decimals)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Boost factor for a lock of `lock_duration` seconds (1e18 = 1x).
    /// The duration is not clamped.
    pub fn get_multiplier(e: Env, lock_duration: u64) -> Result<i128, ContractError> {
        ttl::extend_instance(&e);
        let lock = lock_config(&e)?;
        math::multiplier(lock.max_bonus, lock.max_lock_duration, lock_duration)
    }

    /// Shares `deposit(amount, duration)` would mint right now.
    pub fn preview_shares(e: Env, amount: i128, duration: u64) -> Result<i128, ContractError> {
        ttl::extend_instance(&e);
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let lock = lock_config(&e)?;
        let effective =
            math::clamp_duration(duration, lock.min_lock_duration, lock.max_lock_duration);
        shares_for(&e, &lock, amount, effective)
    }

    /// Sum of principal over every open position of `account`.
    pub fn get_total_deposit(e: Env, account: Address) -> Result<i128, ContractError> {
        ttl::extend_instance(&e);
        deposits::total_of(&e, &account)
    }

    pub fn get_deposits_of(e: Env, account: Address) -> Vec<Deposit> {
        ttl::extend_instance(&e);
        deposits::load(&e, &account)
    }

    pub fn get_deposits_of_length(e: Env, account: Address) -> u32 {
        ttl::extend_instance(&e);
        deposits::load(&e, &account).len()
    }

    pub fn get_deposit(
        e: Env,
        account: Address,
        deposit_id: u32,
    ) -> Result<Deposit, ContractError> {
        ttl::extend_instance(&e);
        deposits::get(&e, &account, deposit_id)
    }

    /// Seconds until position `deposit_id` of `account` can be withdrawn;
    /// 0 once it has expired.
    pub fn get_time_remaining(
        e: Env,
        account: Address,
        deposit_id: u32,
    ) -> Result<u64, ContractError> {
        ttl::extend_instance(&e);
        let position = deposits::get(&e, &account, deposit_id)?;
        Ok(position.end.saturating_sub(e.ledger().timestamp()))
    }

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        ttl::extend_instance(&e);
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_lock_config(e: Env) -> Result<LockConfig, ContractError> {
        ttl::extend_instance(&e);
        lock_config(&e)
    }

    pub fn get_base_pool_config(e: Env) -> Result<BasePoolConfig, ContractError> {
        ttl::extend_instance(&e);
        e.storage()
            .instance()
            .get(&DataKey::BasePool)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn deposit_token(e: Env) -> Result<Address, ContractError> {
        ttl::extend_instance(&e);
        token_integration::get_token(&e)
    }

    /// True while a guarded entry point is executing.
    pub fn is_locked(e: Env) -> bool {
        ttl::extend_instance(&e);
        reentrancy::is_locked(&e)
    }
}

impl TimeLockPool {
    fn metadata(e: &Env) -> Result<ShareMetadata, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(ContractError::NotInitialized)
    }
}
