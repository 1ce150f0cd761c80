use soroban_sdk::{contracttype, Address, String};

// ─── Positions ─────────────────────────────────────────────────────────────

/// One lock-up position owned by a depositor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    /// Principal locked, in deposit-token units.
    pub amount: i128,
    /// Ledger timestamp at the moment the position was opened.
    pub start: u64,
    /// `start` plus the clamped lock duration.
    pub end: u64,
}

// ─── Configuration ─────────────────────────────────────────────────────────

/// Lock-duration bounds and the bonus applied at the maximum duration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockConfig {
    /// Extra multiplier at `max_lock_duration`, scaled by 1e18.
    pub max_bonus: i128,
    /// Shortest lock, in seconds. Shorter requests are raised to this.
    pub min_lock_duration: u64,
    /// Longest lock, in seconds. Longer requests are capped to this.
    pub max_lock_duration: u64,
}

/// Parameters owned by the reward/escrow pool this ledger plugs into.
/// Stored verbatim and exposed read-only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BasePoolConfig {
    pub reward_token: Address,
    pub escrow_pool: Address,
    /// Fraction of rewards escrowed, scaled by 1e18.
    pub escrow_portion: i128,
    pub escrow_duration: u64,
}

/// Display metadata of the share accounting unit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareMetadata {
    pub name: String,
    pub symbol: String,
    /// Mirrors the deposit token's decimals.
    pub decimals: u32,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address that authorized initialization.
    Admin,
    /// Deposit token address.
    DepositToken,
    /// ShareMetadata.
    Metadata,
    /// LockConfig.
    Lock,
    /// BasePoolConfig.
    BasePool,
    /// Total shares outstanding.
    TotalSupply,
    /// Reentrancy flag shared by deposit / withdraw / force_withdraw.
    Locked,
    /// Per-account share balance.
    Balance(Address),
    /// Per-account open positions, index addressed.
    Deposits(Address),
}
