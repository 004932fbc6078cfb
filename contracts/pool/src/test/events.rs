//! Unit tests for PoolEvents emission.
//!
//! Each test calls a single PoolEvents helper inside `env.as_contract` and
//! checks the published topics and data payload.

use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env, IntoVal};

use super::assert_last_event;
use crate::{events::PoolEvents, RatePool};

fn stub(env: &Env) -> Address {
    env.register_contract(None, RatePool)
}

#[test]
fn rate_requested_carries_tx_id() {
    let env = Env::default();
    let contract_id = stub(&env);

    env.as_contract(&contract_id, || PoolEvents::rate_requested(&env, 3));

    assert_last_event(
        &env,
        &contract_id,
        (symbol_short!("rate_req"),).into_val(&env),
        3_u64.into_val(&env),
    );
}

#[test]
fn swap_settled_carries_tx_id_and_amount_out() {
    let env = Env::default();
    let contract_id = stub(&env);

    env.as_contract(&contract_id, || PoolEvents::swap_settled(&env, 9, 1_500_i128));

    assert_last_event(
        &env,
        &contract_id,
        (symbol_short!("settled"),).into_val(&env),
        (9_u64, 1_500_i128).into_val(&env),
    );
}

#[test]
fn rate_updated_carries_rate() {
    let env = Env::default();
    let contract_id = stub(&env);

    env.as_contract(&contract_id, || PoolEvents::rate_updated(&env, 250_000_000));

    assert_last_event(
        &env,
        &contract_id,
        (symbol_short!("rate_upd"),).into_val(&env),
        250_000_000_i128.into_val(&env),
    );
}

#[test]
fn liquidity_events_are_topic_keyed_by_owner() {
    let env = Env::default();
    let contract_id = stub(&env);
    let owner = Address::generate(&env);

    env.as_contract(&contract_id, || PoolEvents::liquidity_added(&env, &owner, 10, 20));
    assert_last_event(
        &env,
        &contract_id,
        (symbol_short!("liq_add"), owner.clone()).into_val(&env),
        (10_i128, 20_i128).into_val(&env),
    );

    env.as_contract(&contract_id, || PoolEvents::liquidity_removed(&env, &owner, 5, 6));
    assert_last_event(
        &env,
        &contract_id,
        (symbol_short!("liq_rem"), owner.clone()).into_val(&env),
        (5_i128, 6_i128).into_val(&env),
    );
}
