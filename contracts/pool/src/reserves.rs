use soroban_sdk::Address;

use crate::{
    errors::PoolError,
    storage::{PoolConfig, Reserves},
};

/// One side of the pool.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    A,
    B,
}

impl PoolConfig {
    pub fn asset_of(&self, token: &Address) -> Option<Asset> {
        if *token == self.token_a {
            Some(Asset::A)
        } else if *token == self.token_b {
            Some(Asset::B)
        } else {
            None
        }
    }

    pub fn token_of(&self, asset: Asset) -> &Address {
        match asset {
            Asset::A => &self.token_a,
            Asset::B => &self.token_b,
        }
    }
}

impl Reserves {
    fn slot(&mut self, asset: Asset) -> &mut i128 {
        match asset {
            Asset::A => &mut self.reserve_a,
            Asset::B => &mut self.reserve_b,
        }
    }

    pub fn credit(&mut self, asset: Asset, amount: i128) -> Result<(), PoolError> {
        if amount < 0 {
            return Err(PoolError::InvalidAmount);
        }
        let slot = self.slot(asset);
        *slot = slot.checked_add(amount).ok_or(PoolError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, asset: Asset, amount: i128) -> Result<(), PoolError> {
        if amount < 0 {
            return Err(PoolError::InvalidAmount);
        }
        let slot = self.slot(asset);
        if amount > *slot {
            return Err(PoolError::InsufficientReserve);
        }
        *slot -= amount;
        Ok(())
    }
}
