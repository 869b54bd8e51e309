use soroban_sdk::contracttype;

/// Storage keys for the contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// The owner address
    Owner,
    /// Token contract address for asset A
    TokenA,
    /// Token contract address for asset B
    TokenB,
    /// Whether B -> A conversions are enabled
    Bidirectional,
}

/// Which side of the pair a token address resolved to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Asset {
    A,
    B,
}

impl Asset {
    /// The side a conversion pays out from
    pub fn other(self) -> Asset {
        match self {
            Asset::A => Asset::B,
            Asset::B => Asset::A,
        }
    }
}
