use soroban_sdk::{Address, Env};

use crate::{access, errors::PoolError, events::PoolEvents, reserves::Asset, storage, transfer};

/// Deposits both assets from the owner and credits both reserves.
///
/// No ratio check against the current rate: the owner picks both amounts.
/// The owner must have approved the pool for each token beforehand.
pub fn add_liquidity(
    env: &Env,
    owner: &Address,
    amount_a: i128,
    amount_b: i128,
) -> Result<(), PoolError> {
    let config = storage::load_config(env)?;
    access::require_owner(&config, owner)?;
    if amount_a < 0 || amount_b < 0 {
        return Err(PoolError::InvalidAmount);
    }

    let mut reserves = storage::get_reserves(env);
    reserves.credit(Asset::A, amount_a)?;
    reserves.credit(Asset::B, amount_b)?;

    transfer::pull(env, config.token_of(Asset::A), owner, amount_a);
    transfer::pull(env, config.token_of(Asset::B), owner, amount_b);

    storage::set_reserves(env, &reserves);
    storage::extend_instance_ttl(env);

    PoolEvents::liquidity_added(env, owner, amount_a, amount_b);
    Ok(())
}

/// Withdraws both assets to the owner. Both debits must fit or nothing moves.
pub fn remove_liquidity(
    env: &Env,
    owner: &Address,
    amount_a: i128,
    amount_b: i128,
) -> Result<(), PoolError> {
    let config = storage::load_config(env)?;
    access::require_owner(&config, owner)?;
    if amount_a < 0 || amount_b < 0 {
        return Err(PoolError::InvalidAmount);
    }

    let mut reserves = storage::get_reserves(env);
    reserves.debit(Asset::A, amount_a)?;
    reserves.debit(Asset::B, amount_b)?;
    storage::set_reserves(env, &reserves);

    transfer::push(env, config.token_of(Asset::A), owner, amount_a);
    transfer::push(env, config.token_of(Asset::B), owner, amount_b);
    storage::extend_instance_ttl(env);

    PoolEvents::liquidity_removed(env, owner, amount_a, amount_b);
    Ok(())
}
