#![no_std]

mod access;
mod errors;
mod events;
mod liquidity;
mod math;
mod rate;
mod registry;
mod reserves;
mod settlement;
mod storage;
mod transfer;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; the pool is no_std so we must opt-in explicitly.

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env};

pub use errors::PoolError;
pub use settlement::RATE_REFRESH_ID;
pub use storage::{PendingSwap, PoolConfig};

/// Two-asset pool priced by an external rate provider.
///
/// Swaps settle in two calls: `request_swap` escrows the input and emits a
/// rate request; the provider later answers with `settle_swap`, which pays
/// the output at the reported rate.
#[contract]
pub struct RatePool;

#[contractimpl]
impl RatePool {
    pub fn initialize(
        env: Env,
        owner: Address,
        rate_provider: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<(), PoolError> {
        if storage::has_config(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if token_a == token_b {
            return Err(PoolError::IdenticalTokens);
        }
        owner.require_auth();

        let config = PoolConfig {
            owner,
            rate_provider,
            token_a,
            token_b,
        };
        storage::set_config(&env, &config);
        storage::set_reserves(&env, &storage::Reserves::default());
        storage::set_rate(&env, 0);
        storage::set_next_tx_id(&env, 0);
        storage::extend_instance_ttl(&env);

        events::PoolEvents::initialized(
            &env,
            &config.owner,
            &config.rate_provider,
            &config.token_a,
            &config.token_b,
        );
        Ok(())
    }

    pub fn add_liquidity(
        env: Env,
        owner: Address,
        amount_a: i128,
        amount_b: i128,
    ) -> Result<(), PoolError> {
        liquidity::add_liquidity(&env, &owner, amount_a, amount_b)
    }

    pub fn remove_liquidity(
        env: Env,
        owner: Address,
        amount_a: i128,
        amount_b: i128,
    ) -> Result<(), PoolError> {
        liquidity::remove_liquidity(&env, &owner, amount_a, amount_b)
    }

    /// Escrows `amount_in` of `token_in` and returns the transaction id the
    /// provider will settle against. `requester` must have approved the pool.
    pub fn request_swap(
        env: Env,
        requester: Address,
        amount_in: i128,
        token_in: Address,
        token_out: Address,
    ) -> Result<u64, PoolError> {
        settlement::request_swap(&env, &requester, amount_in, &token_in, &token_out)
    }

    /// Rate-provider callback. Returns the amount paid to the requester.
    pub fn settle_swap(
        env: Env,
        provider: Address,
        rate: i128,
        tx_id: u64,
    ) -> Result<i128, PoolError> {
        settlement::settle_swap(&env, &provider, rate, tx_id)
    }

    pub fn refresh_rate(env: Env, provider: Address, rate: i128) -> Result<(), PoolError> {
        settlement::refresh_rate(&env, &provider, rate)
    }

    pub fn trigger_rate_refresh(env: Env) -> Result<(), PoolError> {
        settlement::trigger_rate_refresh(&env)
    }

    pub fn get_rate(env: Env) -> i128 {
        rate::read(&env)
    }

    pub fn get_reserves(env: Env) -> (i128, i128) {
        let reserves = storage::get_reserves(&env);
        (reserves.reserve_a, reserves.reserve_b)
    }

    pub fn get_pending_swap(env: Env, tx_id: u64) -> Option<PendingSwap> {
        registry::get(&env, tx_id)
    }

    pub fn next_tx_id(env: Env) -> u64 {
        storage::get_next_tx_id(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, PoolError> {
        storage::load_config(&env)
    }

    pub fn is_owner(env: Env, caller: Address) -> bool {
        storage::get_config(&env)
            .map(|config| access::is_owner(&config, &caller))
            .unwrap_or(false)
    }

    pub fn is_rate_provider(env: Env, caller: Address) -> bool {
        storage::get_config(&env)
            .map(|config| access::is_rate_provider(&config, &caller))
            .unwrap_or(false)
    }
}
