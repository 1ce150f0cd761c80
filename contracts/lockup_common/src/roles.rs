use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Roles understood by the authorization oracle.
///
/// Discriminants are part of the cross-contract wire format; append only.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// Manages roles and registry-wide settings.
    Admin = 0,
    /// May mint staked-position tokens.
    Minter = 1,
    /// May burn expired staked-position tokens.
    Burner = 2,
}

/// Capability check consumed by contracts that gate operations on roles.
///
/// Any contract exposing `has_role(role, account) -> bool` satisfies it.
#[contractclient(name = "RoleOracleClient")]
pub trait RoleOracle {
    fn has_role(env: Env, role: Role, account: Address) -> bool;
}
