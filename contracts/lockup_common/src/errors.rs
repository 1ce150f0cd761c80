use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by failure class for monitoring and off-chain display.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and role errors (codes 100-199).
    Authorization,
    /// Malformed arguments or configuration (codes 200-299).
    Validation,
    /// Time-gated operation attempted before its unlock time (codes 300-399).
    Temporal,
    /// Unknown position index or token id (codes 400-499).
    NotFound,
    /// Share and staked-token transfer errors (codes 500-599).
    Transfer,
    /// Reentrancy guard errors (codes 600-699).
    Concurrency,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by every lockup contract.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Validation
///   300 - 399 : Temporal
///   400 - 499 : NotFound
///   500 - 599 : Transfer
///   600 - 699 : Concurrency
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    /// Contracts: pool, staked token, access control
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    /// Contracts: pool, staked token, access control
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller does not hold the role required for the operation.
    /// Contracts: staked token, access control
    MissingRole = 100,

    /// Caller is neither the owner of the token nor its approved spender.
    /// Contracts: staked token
    NotTokenOwner = 101,

    /// The operation would leave the oracle without any admin.
    /// Contracts: access control
    LastAdmin = 102,

    // --- Validation (200-299) ---
    /// Amount argument must be strictly positive.
    /// Contracts: pool
    InvalidAmount = 200,

    /// Receiver cannot hold the withdrawn or deposited funds.
    /// Contracts: pool
    InvalidReceiver = 201,

    /// Duration must be strictly positive.
    /// Contracts: staked token
    InvalidDuration = 202,

    /// End timestamp must be strictly after the start timestamp.
    /// Contracts: staked token
    InvalidTimeRange = 203,

    /// Minimum lock duration is below the hard floor.
    /// Contracts: pool
    LockDurationBelowFloor = 204,

    /// Maximum lock duration is below the minimum lock duration.
    /// Contracts: pool
    MaxLockBelowMin = 205,

    /// Maximum bonus must be non-negative.
    /// Contracts: pool
    InvalidMaxBonus = 206,

    /// Escrow portion must lie within `0..=SCALE`.
    /// Contracts: pool
    InvalidEscrowPortion = 207,

    /// Base URI exceeds the maximum supported length.
    /// Contracts: staked token
    BaseUriTooLong = 208,

    /// The token id is currently owned.
    /// Contracts: staked token
    TokenAlreadyMinted = 209,

    // --- Temporal (300-399) ---
    /// The position or staked token has not reached its end time yet.
    /// Contracts: pool, staked token
    TooSoon = 300,

    // --- NotFound (400-499) ---
    /// The deposit index is out of range for the account.
    /// Contracts: pool
    DepositNotFound = 400,

    /// The token id was never minted or has been burned.
    /// Contracts: staked token
    TokenNotFound = 401,

    // --- Transfer (500-599) ---
    /// Pool shares can never be transferred.
    /// Contracts: pool
    SharesNotTransferable = 500,

    /// Staked-token transfers are currently switched off.
    /// Contracts: staked token
    TransfersDisabled = 501,

    /// Share balance is lower than the amount being burned.
    /// Contracts: pool
    InsufficientShares = 502,

    // --- Concurrency (600-699) ---
    /// A guarded entry point was re-entered; the call is rejected.
    /// Contracts: pool
    ReentrancyDetected = 600,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    /// Contracts: pool, staked token
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    /// Contracts: pool, staked token
    Underflow = 701,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            ContractError::MissingRole
            | ContractError::NotTokenOwner
            | ContractError::LastAdmin => ErrorCategory::Authorization,

            ContractError::InvalidAmount
            | ContractError::InvalidReceiver
            | ContractError::InvalidDuration
            | ContractError::InvalidTimeRange
            | ContractError::LockDurationBelowFloor
            | ContractError::MaxLockBelowMin
            | ContractError::InvalidMaxBonus
            | ContractError::InvalidEscrowPortion
            | ContractError::BaseUriTooLong
            | ContractError::TokenAlreadyMinted => ErrorCategory::Validation,

            ContractError::TooSoon => ErrorCategory::Temporal,

            ContractError::DepositNotFound | ContractError::TokenNotFound => {
                ErrorCategory::NotFound
            }

            ContractError::SharesNotTransferable
            | ContractError::TransfersDisabled
            | ContractError::InsufficientShares => ErrorCategory::Transfer,

            ContractError::ReentrancyDetected => ErrorCategory::Concurrency,

            ContractError::Overflow | ContractError::Underflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::MissingRole => "Caller does not hold the required role",
            ContractError::NotTokenOwner => "Caller is not the token owner or approved spender",
            ContractError::LastAdmin => "Cannot remove the last admin",
            ContractError::InvalidAmount => "Amount must be strictly positive (> 0)",
            ContractError::InvalidReceiver => "Receiver is not a valid destination",
            ContractError::InvalidDuration => "Duration must be strictly positive (> 0)",
            ContractError::InvalidTimeRange => "End must be strictly after start",
            ContractError::LockDurationBelowFloor => {
                "Minimum lock duration is below the 600 second floor"
            }
            ContractError::MaxLockBelowMin => {
                "Maximum lock duration is below the minimum lock duration"
            }
            ContractError::InvalidMaxBonus => "Maximum bonus must be non-negative",
            ContractError::InvalidEscrowPortion => "Escrow portion must be within 0 and 1e18",
            ContractError::BaseUriTooLong => "Base URI exceeds the maximum length",
            ContractError::TokenAlreadyMinted => "Token id is already minted",
            ContractError::TooSoon => "Too soon: end time has not been reached",
            ContractError::DepositNotFound => "No deposit found at the given index",
            ContractError::TokenNotFound => "Token id does not exist",
            ContractError::SharesNotTransferable => "Pool shares are non-transferable",
            ContractError::TransfersDisabled => "Staked token transfers are disabled",
            ContractError::InsufficientShares => "Insufficient share balance to burn",
            ContractError::ReentrancyDetected => "Reentrancy detected; call rejected",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::Underflow => "Integer underflow in checked arithmetic",
        }
    }
}
