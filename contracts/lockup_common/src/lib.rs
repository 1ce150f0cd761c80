#![no_std]

//! Types shared by the lockup contracts: the wire-stable error enum and the
//! role vocabulary spoken between the staked-token registry and its
//! authorization oracle. [`ttl`] holds the storage bump policy.

pub mod errors;
pub mod roles;
pub mod ttl;

pub use errors::{ContractError, ErrorCategory, ErrorExt};
pub use roles::{Role, RoleOracle, RoleOracleClient};

#[cfg(test)]
mod test_errors;

#[cfg(test)]
mod test_ttl;
