#![no_std]

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

mod error;
mod events;
mod storage;
mod types;

pub use error::ConverterError;
use types::Asset;

/// Rejects zero and negative amounts
fn check_positive_amount(amount: i128) -> Result<(), ConverterError> {
    if amount < 0 {
        Err(ConverterError::NegativeAmount)
    } else if amount == 0 {
        Err(ConverterError::ZeroAmount)
    } else {
        Ok(())
    }
}

/// Authenticates `caller` and checks it is the recorded owner.
fn require_owner(env: &Env, caller: &Address) -> Result<Address, ConverterError> {
    caller.require_auth();
    let owner = storage::get_owner(env)?;
    if *caller != owner {
        return Err(ConverterError::Unauthorized);
    }
    Ok(owner)
}

/// Moves `amount` of a custodied token to the owner.
/// Callers check liquidity beforehand.
fn withdraw_to_owner(env: &Env, owner: &Address, token_address: &Address, amount: i128) {
    let token_client = token::Client::new(env, token_address);
    token_client.transfer(&env.current_contract_address(), owner, &amount);

    events::emit_withdraw(env, token_address, amount);
    log!(env, "withdraw", token_address.clone(), amount);
}

#[contract]
pub struct ConverterContract;

#[contractimpl]
impl ConverterContract {
    /// Initialize the converter with its owner and the two token contracts.
    ///
    /// # Arguments
    /// * `owner` - The address allowed to manage liquidity and directionality
    /// * `token_a` - Token contract address for asset A
    /// * `token_b` - Token contract address for asset B
    ///
    /// # Errors
    /// `AlreadyInitialized` on a second call, `ConfigError` if the tokens are
    /// the same contract or report different decimals
    pub fn initialize(
        env: Env,
        owner: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<(), ConverterError> {
        if storage::is_initialized(&env) {
            return Err(ConverterError::AlreadyInitialized);
        }
        owner.require_auth();

        if token_a == token_b {
            return Err(ConverterError::ConfigError);
        }
        let decimals_a = token::Client::new(&env, &token_a).decimals();
        let decimals_b = token::Client::new(&env, &token_b).decimals();
        if decimals_a != decimals_b {
            return Err(ConverterError::ConfigError);
        }

        storage::set_owner(&env, &owner);
        storage::set_tokens(&env, &token_a, &token_b);
        storage::set_bidirectional(&env, false);
        storage::extend_instance_ttl(&env);

        events::emit_initialized(&env, &owner, &token_a, &token_b);
        Ok(())
    }

    /// Swap `amount` of `token` for the same amount of the other token.
    ///
    /// Token A can always be converted. Token B only once the owner has
    /// enabled bidirectional mode.
    ///
    /// # Arguments
    /// * `user` - The user converting, pays the input and receives the output
    /// * `token` - The input token (A or B)
    /// * `amount` - Amount to convert (must be positive)
    ///
    /// # Errors
    /// `InvalidToken`, `ZeroAmount`, `NegativeAmount`, `Paused`, or
    /// `InsufficientLiquidity` if the contract lacks the output token
    pub fn convert(
        env: Env,
        user: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ConverterError> {
        user.require_auth();

        let input = storage::resolve_asset(&env, &token)?;
        check_positive_amount(amount)?;
        if input != Asset::A && !storage::is_bidirectional(&env) {
            return Err(ConverterError::Paused);
        }

        let output = input.other();
        if storage::custody_balance(&env, output)? < amount {
            return Err(ConverterError::InsufficientLiquidity);
        }

        storage::extend_instance_ttl(&env);

        // Pull first; a failed push below aborts the whole invocation
        let contract_address = env.current_contract_address();
        token::Client::new(&env, &token).transfer(&user, &contract_address, &amount);

        let output_address = storage::get_token(&env, output)?;
        token::Client::new(&env, &output_address).transfer(&contract_address, &user, &amount);

        events::emit_convert(&env, &user, &token, amount);
        log!(&env, "convert", user, token, amount);
        Ok(())
    }

    /// Add liquidity: move `amount` of `token` from the owner into custody.
    ///
    /// # Errors
    /// `Unauthorized` unless `caller` is the owner, then `InvalidToken`,
    /// `ZeroAmount` or `NegativeAmount`
    pub fn deposit(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ConverterError> {
        let owner = require_owner(&env, &caller)?;
        storage::resolve_asset(&env, &token)?;
        check_positive_amount(amount)?;

        storage::extend_instance_ttl(&env);

        let token_client = token::Client::new(&env, &token);
        token_client.transfer(&owner, &env.current_contract_address(), &amount);

        events::emit_deposit(&env, &token, amount);
        log!(&env, "deposit", token, amount);
        Ok(())
    }

    /// Remove liquidity: move `amount` of `token` from custody to the owner.
    ///
    /// # Errors
    /// `Unauthorized`, `InvalidToken`, `ZeroAmount`, `NegativeAmount`, or
    /// `InsufficientLiquidity` if custody holds less than `amount`
    pub fn withdraw(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ConverterError> {
        let owner = require_owner(&env, &caller)?;
        let asset = storage::resolve_asset(&env, &token)?;
        check_positive_amount(amount)?;

        if storage::custody_balance(&env, asset)? < amount {
            return Err(ConverterError::InsufficientLiquidity);
        }

        storage::extend_instance_ttl(&env);
        withdraw_to_owner(&env, &owner, &token, amount);
        Ok(())
    }

    /// Drain the whole custody balance of `token` to the owner.
    ///
    /// Unlike `withdraw`, a zero balance is not an error.
    ///
    /// # Returns
    /// The amount withdrawn
    pub fn max_withdraw(env: Env, caller: Address, token: Address) -> Result<i128, ConverterError> {
        let owner = require_owner(&env, &caller)?;
        let asset = storage::resolve_asset(&env, &token)?;

        storage::extend_instance_ttl(&env);

        let amount = storage::custody_balance(&env, asset)?;
        withdraw_to_owner(&env, &owner, &token, amount);
        Ok(amount)
    }

    /// Flip between unidirectional (A -> B only) and bidirectional mode.
    ///
    /// # Returns
    /// The new state, true when B -> A is enabled
    pub fn toggle_bidirectional(env: Env, caller: Address) -> Result<bool, ConverterError> {
        require_owner(&env, &caller)?;

        let enabled = !storage::is_bidirectional(&env);
        storage::set_bidirectional(&env, enabled);
        storage::extend_instance_ttl(&env);

        events::emit_toggle_bidirectional(&env, enabled);
        log!(&env, "toggle_bidirectional", enabled);
        Ok(enabled)
    }

    /// Hand ownership to `new_owner`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ConverterError> {
        let previous = require_owner(&env, &caller)?;

        storage::set_owner(&env, &new_owner);
        storage::extend_instance_ttl(&env);

        events::emit_ownership_transferred(&env, &previous, &new_owner);
        log!(&env, "transfer_ownership", previous, new_owner);
        Ok(())
    }

    /// Get the amount of `token` the owner could withdraw right now.
    ///
    /// # Returns
    /// The contract's custody balance of `token`
    pub fn max_owner_withdraw(env: Env, token: Address) -> Result<i128, ConverterError> {
        storage::extend_instance_ttl(&env);
        let asset = storage::resolve_asset(&env, &token)?;
        storage::custody_balance(&env, asset)
    }

    /// Get the largest amount of `token` that could be converted right now.
    ///
    /// # Returns
    /// The contract's custody balance of the other token
    pub fn max_convert(env: Env, token: Address) -> Result<i128, ConverterError> {
        storage::extend_instance_ttl(&env);
        let asset = storage::resolve_asset(&env, &token)?;
        storage::custody_balance(&env, asset.other())
    }

    /// Get the owner address.
    ///
    /// # Returns
    /// The owner address
    pub fn owner(env: Env) -> Result<Address, ConverterError> {
        storage::extend_instance_ttl(&env);
        storage::get_owner(&env)
    }

    /// Get the token contract address for asset A.
    ///
    /// # Returns
    /// The token contract address
    pub fn token_a(env: Env) -> Result<Address, ConverterError> {
        storage::extend_instance_ttl(&env);
        storage::get_token(&env, Asset::A)
    }

    /// Get the token contract address for asset B.
    ///
    /// # Returns
    /// The token contract address
    pub fn token_b(env: Env) -> Result<Address, ConverterError> {
        storage::extend_instance_ttl(&env);
        storage::get_token(&env, Asset::B)
    }

    /// Whether B -> A conversions are currently enabled
    pub fn is_bidirectional(env: Env) -> Result<bool, ConverterError> {
        storage::extend_instance_ttl(&env);
        storage::get_owner(&env)?;
        Ok(storage::is_bidirectional(&env))
    }
}
