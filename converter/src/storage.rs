use soroban_sdk::{token, Address, Env};

use crate::error::ConverterError;
use crate::types::{Asset, DataKey};

// TTL constants for instance storage
const DAY_IN_LEDGERS: u32 = 17280; // ~24 hours at 5s per ledger
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Extend the TTL of instance storage
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

/// Get the owner address
pub fn get_owner(env: &Env) -> Result<Address, ConverterError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ConverterError::NotInitialized)
}

/// Set the owner address
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

/// Get the token contract address for a side of the pair
pub fn get_token(env: &Env, asset: Asset) -> Result<Address, ConverterError> {
    let key = match asset {
        Asset::A => DataKey::TokenA,
        Asset::B => DataKey::TokenB,
    };
    env.storage()
        .instance()
        .get(&key)
        .ok_or(ConverterError::NotInitialized)
}

pub fn set_tokens(env: &Env, token_a: &Address, token_b: &Address) {
    env.storage().instance().set(&DataKey::TokenA, token_a);
    env.storage().instance().set(&DataKey::TokenB, token_b);
}

/// Map a token address onto its side of the pair.
/// Fails with `InvalidToken` for any address other than token A or B.
pub fn resolve_asset(env: &Env, token: &Address) -> Result<Asset, ConverterError> {
    if *token == get_token(env, Asset::A)? {
        Ok(Asset::A)
    } else if *token == get_token(env, Asset::B)? {
        Ok(Asset::B)
    } else {
        Err(ConverterError::InvalidToken)
    }
}

/// Returns false until the owner first toggles it
pub fn is_bidirectional(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Bidirectional)
        .unwrap_or(false)
}

pub fn set_bidirectional(env: &Env, enabled: bool) {
    env.storage()
        .instance()
        .set(&DataKey::Bidirectional, &enabled);
}

/// Balance of a side held by this contract, as reported by the token contract
pub fn custody_balance(env: &Env, asset: Asset) -> Result<i128, ConverterError> {
    let token_address = get_token(env, asset)?;
    let token_client = token::Client::new(env, &token_address);
    Ok(token_client.balance(&env.current_contract_address()))
}
