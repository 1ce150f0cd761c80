#![cfg(test)]

use crate::math::*;
use crate::types::LockConfig;
use crate::test_helpers::{base_pool, default_lock, MIN_LOCK, ONE_YEAR};
use crate::validation::{validate_base_pool, validate_lock_config};
use crate::ContractError;
use soroban_sdk::Env;

#[test]
fn test_clamp_duration_bounds() {
    assert_eq!(clamp_duration(0, MIN_LOCK, ONE_YEAR), MIN_LOCK);
    assert_eq!(clamp_duration(MIN_LOCK - 1, MIN_LOCK, ONE_YEAR), MIN_LOCK);
    assert_eq!(clamp_duration(MIN_LOCK, MIN_LOCK, ONE_YEAR), MIN_LOCK);
    assert_eq!(clamp_duration(12_345, MIN_LOCK, ONE_YEAR), 12_345);
    assert_eq!(clamp_duration(ONE_YEAR, MIN_LOCK, ONE_YEAR), ONE_YEAR);
    assert_eq!(clamp_duration(u64::MAX, MIN_LOCK, ONE_YEAR), ONE_YEAR);
}

#[test]
fn test_multiplier_endpoints() {
    assert_eq!(multiplier(SCALE, ONE_YEAR, 0), Ok(SCALE));
    assert_eq!(multiplier(SCALE, ONE_YEAR, ONE_YEAR), Ok(2 * SCALE));
    assert_eq!(
        multiplier(SCALE, ONE_YEAR, MIN_LOCK),
        Ok(1_000_019_025_875_190_258)
    );
}

#[test]
fn test_multiplier_without_bonus_is_one() {
    for duration in [0, MIN_LOCK, ONE_YEAR / 3, ONE_YEAR] {
        assert_eq!(multiplier(0, ONE_YEAR, duration), Ok(SCALE));
    }
}

#[test]
fn test_multiplier_overflow() {
    assert_eq!(
        multiplier(i128::MAX, ONE_YEAR, 2),
        Err(ContractError::Overflow)
    );
    assert_eq!(
        multiplier(SCALE, 0, MIN_LOCK),
        Err(ContractError::Overflow)
    );
}

#[test]
fn test_share_amount_uses_wide_product() {
    let e = Env::default();
    // 1e30 * 2e18 exceeds i128 before the division brings it back.
    let amount: i128 = 1_000_000_000_000_000_000_000_000_000_000;
    assert_eq!(share_amount(&e, amount, 2 * SCALE), Ok(2 * amount));
}

#[test]
fn test_share_amount_floors() {
    let e = Env::default();
    assert_eq!(
        share_amount(&e, 1_000_000_000, 1_000_019_025_875_190_258),
        Ok(1_000_019_025)
    );
    assert_eq!(share_amount(&e, 1, SCALE + SCALE / 2), Ok(1));
}

#[test]
fn test_share_amount_result_out_of_range() {
    let e = Env::default();
    assert_eq!(
        share_amount(&e, i128::MAX, 2 * SCALE),
        Err(ContractError::Overflow)
    );
}

#[test]
fn test_split_force_withdraw() {
    assert_eq!(split_force_withdraw(1_000), (10, 990));
    assert_eq!(split_force_withdraw(99), (0, 99));
    assert_eq!(split_force_withdraw(100), (1, 99));
    assert_eq!(split_force_withdraw(0), (0, 0));
}

#[test]
fn test_validate_lock_config() {
    assert_eq!(validate_lock_config(&default_lock()), Ok(()));
    assert_eq!(
        validate_lock_config(&LockConfig {
            min_lock_duration: MIN_LOCK_DURATION_FLOOR - 1,
            ..default_lock()
        }),
        Err(ContractError::LockDurationBelowFloor)
    );
    assert_eq!(
        validate_lock_config(&LockConfig {
            max_lock_duration: MIN_LOCK - 1,
            ..default_lock()
        }),
        Err(ContractError::MaxLockBelowMin)
    );
}

#[test]
fn test_validate_base_pool_portion_bounds() {
    let e = Env::default();
    let mut base = base_pool(&e);

    base.escrow_portion = 0;
    assert_eq!(validate_base_pool(&base), Ok(()));
    base.escrow_portion = SCALE;
    assert_eq!(validate_base_pool(&base), Ok(()));
    base.escrow_portion = -1;
    assert_eq!(
        validate_base_pool(&base),
        Err(ContractError::InvalidEscrowPortion)
    );
}
