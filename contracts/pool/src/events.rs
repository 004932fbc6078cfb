use soroban_sdk::{symbol_short, Address, Env};

pub struct PoolEvents;

impl PoolEvents {
    /// Emits `init` once the pool's roles and pair are fixed.
    ///
    /// Topics: `("init",)`
    /// Data:   `(owner, rate_provider, token_a, token_b)`
    pub fn initialized(
        env: &Env,
        owner: &Address,
        rate_provider: &Address,
        token_a: &Address,
        token_b: &Address,
    ) {
        env.events().publish(
            (symbol_short!("init"),),
            (owner.clone(), rate_provider.clone(), token_a.clone(), token_b.clone()),
        );
    }

    /// Emits a `rate_req` event asking the off-chain provider for a rate.
    ///
    /// Topics: `("rate_req",)`
    /// Data:   `tx_id`
    ///
    /// The provider answers a real id with `settle_swap` and the
    /// `RATE_REFRESH_ID` sentinel with `refresh_rate`.
    pub fn rate_requested(env: &Env, tx_id: u64) {
        env.events().publish((symbol_short!("rate_req"),), tx_id);
    }

    /// Topics: `("settled",)`
    /// Data:   `(tx_id, amount_out)`
    pub fn swap_settled(env: &Env, tx_id: u64, amount_out: i128) {
        env.events()
            .publish((symbol_short!("settled"),), (tx_id, amount_out));
    }

    pub fn rate_updated(env: &Env, rate: i128) {
        env.events().publish((symbol_short!("rate_upd"),), rate);
    }

    pub fn liquidity_added(env: &Env, owner: &Address, amount_a: i128, amount_b: i128) {
        env.events()
            .publish((symbol_short!("liq_add"), owner.clone()), (amount_a, amount_b));
    }

    pub fn liquidity_removed(env: &Env, owner: &Address, amount_a: i128, amount_b: i128) {
        env.events()
            .publish((symbol_short!("liq_rem"), owner.clone()), (amount_a, amount_b));
    }
}
