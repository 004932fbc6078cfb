use soroban_sdk::Address;

use crate::{errors::PoolError, storage::PoolConfig};

pub fn is_owner(config: &PoolConfig, caller: &Address) -> bool {
    config.owner == *caller
}

pub fn is_rate_provider(config: &PoolConfig, caller: &Address) -> bool {
    config.rate_provider == *caller
}

/// Checks `caller`'s signature, then that it holds the owner role.
pub fn require_owner(config: &PoolConfig, caller: &Address) -> Result<(), PoolError> {
    caller.require_auth();
    if !is_owner(config, caller) {
        return Err(PoolError::Unauthorized);
    }
    Ok(())
}

/// Checks `caller`'s signature, then that it is the verified rate provider.
pub fn require_rate_provider(config: &PoolConfig, caller: &Address) -> Result<(), PoolError> {
    caller.require_auth();
    if !is_rate_provider(config, caller) {
        return Err(PoolError::Unauthorized);
    }
    Ok(())
}
