use soroban_sdk::{log, Address, Env};

use crate::{
    errors::PoolError,
    storage::{self, PendingSwap},
};

/// Opens a pending swap under the next transaction id and returns that id.
///
/// Ids start at 0 and only ever grow; a removed entry's id is never handed
/// out again, so a late or duplicated settlement cannot land on a newer
/// request.
pub fn open(
    env: &Env,
    amount_in: i128,
    token_in: &Address,
    token_out: &Address,
    requester: &Address,
) -> Result<u64, PoolError> {
    let tx_id = storage::get_next_tx_id(env);
    let next = tx_id.checked_add(1).ok_or(PoolError::ArithmeticOverflow)?;

    storage::set_pending_swap(
        env,
        &PendingSwap {
            tx_id,
            amount_in,
            token_in: token_in.clone(),
            token_out: token_out.clone(),
            requester: requester.clone(),
            requested_at: env.ledger().timestamp(),
        },
    );
    storage::set_next_tx_id(env, next);

    log!(env, "pending swap opened", tx_id, amount_in);
    Ok(tx_id)
}

/// Removes and returns the pending swap for `tx_id`.
///
/// Settled and never-issued ids both fail with `UnknownTransaction`.
pub fn take(env: &Env, tx_id: u64) -> Result<PendingSwap, PoolError> {
    let swap = storage::get_pending_swap(env, tx_id).ok_or(PoolError::UnknownTransaction)?;
    storage::remove_pending_swap(env, tx_id);
    Ok(swap)
}

pub fn get(env: &Env, tx_id: u64) -> Option<PendingSwap> {
    storage::get_pending_swap(env, tx_id)
}
