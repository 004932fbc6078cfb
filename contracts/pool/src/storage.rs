use soroban_sdk::{contracttype, Address, Env};

use crate::errors::PoolError;

pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

// Pending swaps have no expiry, so their entries are bumped further out.
pub(crate) const PENDING_LIFETIME_THRESHOLD: u32 = 518400;
pub(crate) const PENDING_BUMP_AMOUNT: u32 = 3110400; // ~180 days in 5s ledgers

/// Roles and the token pair, fixed by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub owner: Address,
    pub rate_provider: Address,
    pub token_a: Address,
    pub token_b: Address,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Reserves {
    pub reserve_a: i128,
    pub reserve_b: i128,
}

/// An escrowed swap awaiting its rate.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingSwap {
    pub tx_id: u64,
    pub amount_in: i128,
    pub token_in: Address,
    pub token_out: Address,
    pub requester: Address,
    pub requested_at: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    Reserves,
    Rate,
    NextTxId,
    PendingSwap(u64),
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<PoolConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn load_config(env: &Env) -> Result<PoolConfig, PoolError> {
    get_config(env).ok_or(PoolError::NotInitialized)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_reserves(env: &Env) -> Reserves {
    env.storage()
        .instance()
        .get(&DataKey::Reserves)
        .unwrap_or_default()
}

pub fn set_reserves(env: &Env, reserves: &Reserves) {
    env.storage().instance().set(&DataKey::Reserves, reserves);
}

pub fn get_rate(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Rate).unwrap_or(0)
}

pub fn set_rate(env: &Env, rate: i128) {
    env.storage().instance().set(&DataKey::Rate, &rate);
}

pub fn get_next_tx_id(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::NextTxId).unwrap_or(0)
}

pub fn set_next_tx_id(env: &Env, next: u64) {
    env.storage().instance().set(&DataKey::NextTxId, &next);
}

pub fn get_pending_swap(env: &Env, tx_id: u64) -> Option<PendingSwap> {
    env.storage().persistent().get(&DataKey::PendingSwap(tx_id))
}

pub fn set_pending_swap(env: &Env, swap: &PendingSwap) {
    let key = DataKey::PendingSwap(swap.tx_id);
    env.storage().persistent().set(&key, swap);
    env.storage()
        .persistent()
        .extend_ttl(&key, PENDING_LIFETIME_THRESHOLD, PENDING_BUMP_AMOUNT);
}

pub fn remove_pending_swap(env: &Env, tx_id: u64) {
    env.storage().persistent().remove(&DataKey::PendingSwap(tx_id));
}

/// Extend instance storage TTL to keep the pool alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
