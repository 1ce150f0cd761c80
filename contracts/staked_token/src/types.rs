use soroban_sdk::{contracttype, Address};

/// Time bounds of one staked position.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedInfo {
    pub start: u64,
    pub duration: u64,
    pub end: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address that authorized initialization.
    Admin,
    Name,
    Symbol,
    BaseUri,
    /// Address of the role oracle consulted on every gated call.
    RoleOracle,
    /// Registry-wide transfer switch, off by default.
    Transferable,
    /// id -> StakedInfo
    Info(u64),
    /// id -> owner
    Owner(u64),
    /// id -> approved spender
    Approved(u64),
    /// owner -> number of ids held
    Balance(Address),
}
