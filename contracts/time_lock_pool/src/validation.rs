//! Initialization-time validation of the pool configuration.
//!
//! ## Constraints
//! - `min_lock_duration` is at least [`MIN_LOCK_DURATION_FLOOR`] (600 seconds).
//! - `max_lock_duration` is at least `min_lock_duration`.
//! - `max_bonus` is non-negative, and both `max_bonus * max_lock_duration` and
//!   `SCALE + max_bonus` fit in `i128`, so the multiplier of any in-range
//!   duration is computable.
//! - `escrow_portion` lies within `0..=SCALE`.

use crate::math::{MIN_LOCK_DURATION_FLOOR, SCALE};
use crate::types::{BasePoolConfig, LockConfig};
use lockup_common::ContractError;

pub fn validate_lock_config(lock: &LockConfig) -> Result<(), ContractError> {
    if lock.min_lock_duration < MIN_LOCK_DURATION_FLOOR {
        return Err(ContractError::LockDurationBelowFloor);
    }
    if lock.max_lock_duration < lock.min_lock_duration {
        return Err(ContractError::MaxLockBelowMin);
    }
    if lock.max_bonus < 0 {
        return Err(ContractError::InvalidMaxBonus);
    }
    lock.max_bonus
        .checked_mul(i128::from(lock.max_lock_duration))
        .ok_or(ContractError::Overflow)?;
    SCALE
        .checked_add(lock.max_bonus)
        .ok_or(ContractError::Overflow)?;
    Ok(())
}

pub fn validate_base_pool(base: &BasePoolConfig) -> Result<(), ContractError> {
    if base.escrow_portion < 0 || base.escrow_portion > SCALE {
        return Err(ContractError::InvalidEscrowPortion);
    }
    Ok(())
}
