use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ConverterError {
    /// Token is neither token A nor token B
    InvalidToken = 1,
    ZeroAmount = 2,
    /// B -> A conversion attempted while unidirectional
    Paused = 3,
    /// Custody balance is below the requested amount
    InsufficientLiquidity = 4,
    Unauthorized = 5,
    /// Tokens are identical or disagree on decimals
    ConfigError = 6,
    AlreadyInitialized = 7,
    NotInitialized = 8,
    NegativeAmount = 9,
}
