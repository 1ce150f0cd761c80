//! Deposit-token plumbing: configuration lookup and the two transfer
//! directions used by the pool.

use crate::types::DataKey;
use lockup_common::ContractError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

fn token_client(e: &Env) -> Result<TokenClient<'_>, ContractError> {
    let token = get_token(e)?;
    Ok(TokenClient::new(e, &token))
}

/// @notice Returns the configured deposit token address.
pub fn get_token(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::DepositToken)
        .ok_or(ContractError::NotInitialized)
}

/// @notice Reads `decimals()` from a token contract.
pub fn token_decimals(e: &Env, token: &Address) -> u32 {
    TokenClient::new(e, token).decimals()
}

/// @notice Pulls `amount` from `owner` into the pool.
/// @dev Requires a prior allowance for the pool as spender. A failing pull
///      aborts the whole invocation.
pub fn transfer_into_pool(e: &Env, owner: &Address, amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    token_client(e)?.transfer_from(&contract, owner, &contract, &amount);
    Ok(())
}

/// @notice Pushes `amount` from the pool to `recipient`.
pub fn transfer_from_pool(e: &Env, recipient: &Address, amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    token_client(e)?.transfer(&contract, recipient, &amount);
    Ok(())
}
