//! Storage TTL bumping shared by the lockup contracts.
//!
//! Positions may stay open for the whole configured lock, so every entry
//! point bumps the contract instance and every touched persistent key back
//! up to [`BUMP_TARGET`] once its remaining TTL drops below
//! [`BUMP_THRESHOLD`]. The host caps the target at the network maximum.

use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers closed per day at a 5 second close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// One year of ledgers plus a day.
pub const BUMP_TARGET: u32 = 366 * DAY_IN_LEDGERS;

pub const BUMP_THRESHOLD: u32 = BUMP_TARGET - DAY_IN_LEDGERS;

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

/// `key` must exist in persistent storage.
pub fn extend_persistent<K>(e: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    e.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}
