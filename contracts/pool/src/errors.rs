use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    Unauthorized = 102,
    InvalidToken = 103,
    UnknownTransaction = 104,
    InsufficientReserve = 105,
    ArithmeticOverflow = 106,
    InvalidAmount = 107,
    InvalidRate = 108,
    IdenticalTokens = 109,
}
