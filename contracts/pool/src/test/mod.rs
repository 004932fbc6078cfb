#![cfg(test)]

// ---------------------------------------------------------------------------
// RatePool test suite
//
// Structure
// ─────────
// 1. units      — ledger, registry and math helpers run inside `as_contract`
// 2. events     — PoolEvents helpers against a bare contract id
// 3. init       — construction, roles and views on a fresh pool
// 4. liquidity  — owner add/remove against real Stellar Asset Contracts
// 5. swap       — the request/settle lifecycle end to end
// 6. rate       — refresh and trigger paths
// 7. provider   — settlement through the relay contract
// 8. auth       — recorded signatures and unsigned role calls
// ---------------------------------------------------------------------------

mod events;

use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env, Val, Vec,
};

use crate::{RatePool, RatePoolClient};

/// One whole token at 18 decimals.
pub const E18: i128 = 1_000_000_000_000_000_000;

/// Supply minted to every funded account.
pub const TOTAL_SUPPLY: i128 = 800_000_000 * E18;

/// A rate of 10 units of B per unit of A.
pub const RATE_TEN: i128 = 10 * crate::math::SCALE;

/// Stellar Asset Contract `AllowanceError`, raised when `transfer_from`
/// exceeds the approved amount.
pub const SAC_ALLOWANCE_ERROR: u32 = 9;

/// Registers a Stellar Asset Contract for testing and returns its address.
pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}

/// Mints `amount` of `token` to `to` and approves `spender` for all of it.
pub fn fund_and_approve(env: &Env, token: &Address, to: &Address, spender: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
    TokenClient::new(env, token).approve(to, spender, &amount, &(env.ledger().sequence() + 1_000));
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    TokenClient::new(env, token).balance(id)
}

/// Asserts the most recent event was published by `contract` with the given
/// topics and data.
pub fn assert_last_event(env: &Env, contract: &Address, topics: Vec<Val>, data: Val) {
    let last = env.events().all().last().expect("no events published");
    assert_eq!(
        vec![env, last],
        vec![env, (contract.clone(), topics, data)],
        "unexpected last event"
    );
}

/// A pool over two fresh tokens with the owner and a user funded and
/// approved. No liquidity is added.
pub struct Setup {
    pub env: Env,
    pub pool_id: Address,
    pub pool: RatePoolClient<'static>,
    pub owner: Address,
    pub provider: Address,
    pub user: Address,
    pub token_a: Address,
    pub token_b: Address,
}

impl Setup {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        let provider = Address::generate(&env);
        Self::with_provider(env, provider)
    }

    /// Same as `new`, but with `provider` as the pool's rate provider.
    pub fn with_provider(env: Env, provider: Address) -> Self {
        let admin = Address::generate(&env);
        let owner = Address::generate(&env);
        let user = Address::generate(&env);
        let token_a = create_token(&env, &admin);
        let token_b = create_token(&env, &admin);

        let pool_id = env.register_contract(None, RatePool);
        let pool = RatePoolClient::new(&env, &pool_id);
        pool.initialize(&owner, &provider, &token_a, &token_b);

        for token in [&token_a, &token_b] {
            fund_and_approve(&env, token, &owner, &pool_id, TOTAL_SUPPLY);
            fund_and_approve(&env, token, &user, &pool_id, TOTAL_SUPPLY);
        }

        Setup {
            env,
            pool_id,
            pool,
            owner,
            provider,
            user,
            token_a,
            token_b,
        }
    }

    /// Seeds the pool with 1M A and 10M B, matching a 10 B/A rate.
    pub fn seeded() -> Self {
        let s = Self::new();
        s.pool.add_liquidity(&s.owner, &(1_000_000 * E18), &(10_000_000 * E18));
        s
    }
}
