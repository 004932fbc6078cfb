#![no_std]

use soroban_sdk::{contractclient, Address, Env};

/// Rate settlement interface.
/// The narrow surface a rate provider uses to report rates back to a pool.
/// Both mutating calls are authorized against the pool's configured
/// provider; any other `provider` is rejected.
#[contractclient(name = "SettlementClient")]
pub trait RateSettlement {
    /// Prices and pays out pending swap `tx_id`. Returns the output amount.
    fn settle_swap(env: Env, provider: Address, rate: i128, tx_id: u64) -> i128;

    /// Pushes a rate that is not tied to any pending swap.
    fn refresh_rate(env: Env, provider: Address, rate: i128);

    fn get_rate(env: Env) -> i128;
}
