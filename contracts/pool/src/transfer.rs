use soroban_sdk::{token::TokenClient, Address, Env};

/// Pulls `amount` of `token` from `from` into the pool.
///
/// Spends the allowance `from` granted the pool with `approve`; a missing or
/// short allowance makes the token contract trap, which aborts the whole
/// invocation.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    let pool = env.current_contract_address();
    TokenClient::new(env, token).transfer_from(&pool, from, &pool, &amount);
}

/// Pays `amount` of `token` from the pool to `to`.
pub fn push(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    TokenClient::new(env, token).transfer(&env.current_contract_address(), to, &amount);
}
