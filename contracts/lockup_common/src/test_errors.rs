#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ContractError, ErrorCategory, ErrorExt};
    use std::vec::Vec;

    fn all_variants() -> Vec<ContractError> {
        std::vec![
            ContractError::NotInitialized,
            ContractError::AlreadyInitialized,
            ContractError::MissingRole,
            ContractError::NotTokenOwner,
            ContractError::LastAdmin,
            ContractError::InvalidAmount,
            ContractError::InvalidReceiver,
            ContractError::InvalidDuration,
            ContractError::InvalidTimeRange,
            ContractError::LockDurationBelowFloor,
            ContractError::MaxLockBelowMin,
            ContractError::InvalidMaxBonus,
            ContractError::InvalidEscrowPortion,
            ContractError::BaseUriTooLong,
            ContractError::TokenAlreadyMinted,
            ContractError::TooSoon,
            ContractError::DepositNotFound,
            ContractError::TokenNotFound,
            ContractError::SharesNotTransferable,
            ContractError::TransfersDisabled,
            ContractError::InsufficientShares,
            ContractError::ReentrancyDetected,
            ContractError::Overflow,
            ContractError::Underflow,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(ContractError::NotInitialized as u32, 1);
        assert_eq!(ContractError::AlreadyInitialized as u32, 2);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(ContractError::MissingRole as u32, 100);
        assert_eq!(ContractError::NotTokenOwner as u32, 101);
        assert_eq!(ContractError::LastAdmin as u32, 102);
    }

    #[test]
    fn test_codes_validation() {
        assert_eq!(ContractError::InvalidAmount as u32, 200);
        assert_eq!(ContractError::InvalidReceiver as u32, 201);
        assert_eq!(ContractError::InvalidDuration as u32, 202);
        assert_eq!(ContractError::InvalidTimeRange as u32, 203);
        assert_eq!(ContractError::LockDurationBelowFloor as u32, 204);
        assert_eq!(ContractError::MaxLockBelowMin as u32, 205);
        assert_eq!(ContractError::InvalidMaxBonus as u32, 206);
        assert_eq!(ContractError::InvalidEscrowPortion as u32, 207);
        assert_eq!(ContractError::BaseUriTooLong as u32, 208);
        assert_eq!(ContractError::TokenAlreadyMinted as u32, 209);
    }

    #[test]
    fn test_codes_remaining_blocks() {
        assert_eq!(ContractError::TooSoon as u32, 300);
        assert_eq!(ContractError::DepositNotFound as u32, 400);
        assert_eq!(ContractError::TokenNotFound as u32, 401);
        assert_eq!(ContractError::SharesNotTransferable as u32, 500);
        assert_eq!(ContractError::TransfersDisabled as u32, 501);
        assert_eq!(ContractError::InsufficientShares as u32, 502);
        assert_eq!(ContractError::ReentrancyDetected as u32, 600);
        assert_eq!(ContractError::Overflow as u32, 700);
        assert_eq!(ContractError::Underflow as u32, 701);
    }

    // --- Category mapping tests ---

    #[test]
    fn test_category_matches_code_block() {
        for e in all_variants() {
            let expected = match e as u32 {
                1..=99 => ErrorCategory::Initialization,
                100..=199 => ErrorCategory::Authorization,
                200..=299 => ErrorCategory::Validation,
                300..=399 => ErrorCategory::Temporal,
                400..=499 => ErrorCategory::NotFound,
                500..=599 => ErrorCategory::Transfer,
                600..=699 => ErrorCategory::Concurrency,
                700..=799 => ErrorCategory::Arithmetic,
                other => panic!("code {} outside every block", other),
            };
            assert_eq!(e.category(), expected, "{:?}", e);
        }
    }

    #[test]
    fn test_too_soon_is_temporal() {
        assert_eq!(ContractError::TooSoon.category(), ErrorCategory::Temporal);
    }

    // --- Description tests ---

    #[test]
    fn test_descriptions_non_empty() {
        for e in all_variants() {
            assert!(!e.description().is_empty(), "{:?} has empty description", e);
        }
    }

    #[test]
    fn test_descriptions_unique() {
        let variants = all_variants();
        for i in 0..variants.len() {
            for j in (i + 1)..variants.len() {
                assert_ne!(variants[i].description(), variants[j].description());
            }
        }
    }

    #[test]
    fn test_codes_unique() {
        let variants = all_variants();
        for i in 0..variants.len() {
            for j in (i + 1)..variants.len() {
                assert_ne!(variants[i] as u32, variants[j] as u32);
            }
        }
    }

    // --- Variant count guard ---

    #[test]
    fn test_all_variants_count() {
        assert_eq!(
            all_variants().len(),
            24,
            "Update all_variants() and this count when adding new errors"
        );
    }

    // --- Result integration (mirrors real call sites) ---

    fn mock_withdraw(now: u64, end: u64) -> Result<(), ContractError> {
        if now < end {
            return Err(ContractError::TooSoon);
        }
        Ok(())
    }

    fn mock_checked_add(a: i128, b: i128) -> Result<i128, ContractError> {
        a.checked_add(b).ok_or(ContractError::Overflow)
    }

    #[test]
    fn test_too_soon_boundary() {
        assert_eq!(mock_withdraw(99, 100), Err(ContractError::TooSoon));
        assert!(mock_withdraw(100, 100).is_ok());
    }

    #[test]
    fn test_overflow_propagates() {
        assert_eq!(mock_checked_add(i128::MAX, 1), Err(ContractError::Overflow));
        assert_eq!(mock_checked_add(1, 1), Ok(2));
    }
}
