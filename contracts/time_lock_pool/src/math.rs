//! Overflow-safe arithmetic for share and fee calculations.
//!
//! Every function either returns an exact result or
//! `ContractError::Overflow`; nothing wraps.

use lockup_common::ContractError;
use soroban_sdk::{Env, I256};

/// Fixed-point scale of multipliers and the escrow portion (1e18).
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Hard floor for `min_lock_duration`, in seconds.
pub const MIN_LOCK_DURATION_FLOOR: u64 = 600;

/// Forced withdrawals pay `amount / FORCE_WITHDRAW_FEE_DIVIDER` to the caller (1%).
pub const FORCE_WITHDRAW_FEE_DIVIDER: i128 = 100;

/// Cap `requested` to `max`, then raise it to `min`.
#[inline]
#[must_use]
pub fn clamp_duration(requested: u64, min: u64, max: u64) -> u64 {
    requested.min(max).max(min)
}

/// `SCALE + max_bonus * lock_duration / max_lock_duration`, floored.
///
/// No clamping happens here; callers pass a duration already within bounds.
pub fn multiplier(
    max_bonus: i128,
    max_lock_duration: u64,
    lock_duration: u64,
) -> Result<i128, ContractError> {
    let bonus = max_bonus
        .checked_mul(i128::from(lock_duration))
        .ok_or(ContractError::Overflow)?
        .checked_div(i128::from(max_lock_duration))
        .ok_or(ContractError::Overflow)?;
    SCALE.checked_add(bonus).ok_or(ContractError::Overflow)
}

/// `amount * multiplier / SCALE`, evaluated in 256 bits.
///
/// The host traps if the 256-bit product overflows; a quotient outside
/// `i128` is reported as `Overflow`.
pub fn share_amount(e: &Env, amount: i128, multiplier: i128) -> Result<i128, ContractError> {
    let product = I256::from_i128(e, amount).mul(&I256::from_i128(e, multiplier));
    product
        .div(&I256::from_i128(e, SCALE))
        .to_i128()
        .ok_or(ContractError::Overflow)
}

/// Split a forced-withdrawal principal into `(fee, remainder)`.
///
/// `fee + remainder == amount` for every non-negative `amount`.
#[inline]
#[must_use]
pub fn split_force_withdraw(amount: i128) -> (i128, i128) {
    let fee = amount / FORCE_WITHDRAW_FEE_DIVIDER;
    (fee, amount - fee)
}
