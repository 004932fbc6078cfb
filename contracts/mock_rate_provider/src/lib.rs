#![no_std]

use ratebridge_settlement_interface::SettlementClient;
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RelayError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    /// The pool refused the forwarded rate; its own error is in the
    /// pool's invocation.
    Rejected = 402,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Operator,
}

/// On-chain relay for an off-chain rate provider.
///
/// The off-chain process signs as `operator`; the relay forwards the rate to
/// the pool under its own contract address, which is the address the pool
/// was configured with as its rate provider.
#[contract]
pub struct MockRateProvider;

#[contractimpl]
impl MockRateProvider {
    pub fn initialize(env: Env, operator: Address) -> Result<(), RelayError> {
        if env.storage().instance().has(&DataKey::Operator) {
            return Err(RelayError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Operator, &operator);
        Ok(())
    }

    pub fn fulfill(env: Env, pool: Address, rate: i128, tx_id: u64) -> Result<i128, RelayError> {
        Self::require_operator(&env)?;
        match SettlementClient::new(&env, &pool).try_settle_swap(
            &env.current_contract_address(),
            &rate,
            &tx_id,
        ) {
            Ok(Ok(amount_out)) => Ok(amount_out),
            _ => Err(RelayError::Rejected),
        }
    }

    pub fn push_rate(env: Env, pool: Address, rate: i128) -> Result<(), RelayError> {
        Self::require_operator(&env)?;
        match SettlementClient::new(&env, &pool)
            .try_refresh_rate(&env.current_contract_address(), &rate)
        {
            Ok(Ok(())) => Ok(()),
            _ => Err(RelayError::Rejected),
        }
    }
}

impl MockRateProvider {
    fn require_operator(env: &Env) -> Result<(), RelayError> {
        let operator: Address = env
            .storage()
            .instance()
            .get(&DataKey::Operator)
            .ok_or(RelayError::NotInitialized)?;
        operator.require_auth();
        Ok(())
    }
}
