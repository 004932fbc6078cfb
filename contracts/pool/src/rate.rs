use soroban_sdk::Env;

use crate::storage;

/// Last confirmed rate, asset B per asset A scaled by `math::SCALE`.
/// Zero means no rate has been confirmed yet.
pub fn read(env: &Env) -> i128 {
    storage::get_rate(env)
}

pub(crate) fn write(env: &Env, rate: i128) {
    storage::set_rate(env, rate);
}
