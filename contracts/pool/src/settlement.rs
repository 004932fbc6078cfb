use soroban_sdk::{log, Address, Env};

use crate::{access, errors::PoolError, events::PoolEvents, math, rate, registry, storage, transfer};

/// Transaction id carried by a `rate_req` event that is not tied to any
/// pending swap. Never allocated by the registry.
pub const RATE_REFRESH_ID: u64 = u64::MAX;

/// Phase one: escrows `amount_in` of `token_in` and opens a pending swap.
///
/// # Flow
/// 1. Validate the pair (either order) and the amount.
/// 2. Pull the input from `requester` and credit its reserve.
/// 3. Open the pending entry.
/// 4. Emit `rate_req` with the new id for the off-chain provider.
///
/// Funds are escrowed before any rate is known; the output leg happens in
/// [`settle_swap`].
pub fn request_swap(
    env: &Env,
    requester: &Address,
    amount_in: i128,
    token_in: &Address,
    token_out: &Address,
) -> Result<u64, PoolError> {
    requester.require_auth();
    let config = storage::load_config(env)?;

    let asset_in = config.asset_of(token_in).ok_or(PoolError::InvalidToken)?;
    let asset_out = config.asset_of(token_out).ok_or(PoolError::InvalidToken)?;
    if asset_in == asset_out {
        return Err(PoolError::InvalidToken);
    }
    if amount_in <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    let mut reserves = storage::get_reserves(env);
    reserves.credit(asset_in, amount_in)?;

    transfer::pull(env, token_in, requester, amount_in);
    storage::set_reserves(env, &reserves);

    let tx_id = registry::open(env, amount_in, token_in, token_out, requester)?;
    storage::extend_instance_ttl(env);

    PoolEvents::rate_requested(env, tx_id);
    Ok(tx_id)
}

/// Phase two: prices pending swap `tx_id` at `rate` and pays the requester.
///
/// # Errors
/// | Error                 | Condition                                        |
/// |-----------------------|--------------------------------------------------|
/// | `Unauthorized`        | `provider` is not the configured rate provider   |
/// | `InvalidRate`         | `rate` is negative                               |
/// | `UnknownTransaction`  | no pending swap under `tx_id` (settled or bogus) |
/// | `ArithmeticOverflow`  | `amount_in * rate` overflows                     |
/// | `InsufficientReserve` | output reserve below the computed payout         |
///
/// Any error reverts the invocation, including the `take` of the pending
/// entry, so a failed settlement can be resubmitted.
pub fn settle_swap(
    env: &Env,
    provider: &Address,
    rate: i128,
    tx_id: u64,
) -> Result<i128, PoolError> {
    let config = storage::load_config(env)?;
    access::require_rate_provider(&config, provider)?;
    if rate < 0 {
        return Err(PoolError::InvalidRate);
    }

    let swap = registry::take(env, tx_id)?;
    let amount_out = math::quote(swap.amount_in, rate).ok_or(PoolError::ArithmeticOverflow)?;
    let asset_out = config
        .asset_of(&swap.token_out)
        .ok_or(PoolError::InvalidToken)?;

    let mut reserves = storage::get_reserves(env);
    reserves.debit(asset_out, amount_out)?;
    storage::set_reserves(env, &reserves);

    transfer::push(env, &swap.token_out, &swap.requester, amount_out);

    rate::write(env, rate);
    storage::extend_instance_ttl(env);

    log!(env, "swap settled", tx_id, rate, amount_out);
    PoolEvents::swap_settled(env, tx_id, amount_out);
    Ok(amount_out)
}

/// Provider push of a rate that answers no particular swap.
pub fn refresh_rate(env: &Env, provider: &Address, rate: i128) -> Result<(), PoolError> {
    let config = storage::load_config(env)?;
    access::require_rate_provider(&config, provider)?;
    if rate < 0 {
        return Err(PoolError::InvalidRate);
    }

    rate::write(env, rate);
    storage::extend_instance_ttl(env);

    PoolEvents::rate_updated(env, rate);
    Ok(())
}

/// Asks the provider for a fresh rate without escrowing anything.
pub fn trigger_rate_refresh(env: &Env) -> Result<(), PoolError> {
    storage::load_config(env)?;
    PoolEvents::rate_requested(env, RATE_REFRESH_ID);
    Ok(())
}
