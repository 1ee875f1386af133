use sysgen_shared::primitives::{Address, B256, U256};

/// The subset of genesis header fields that is visible to code executing inside the ephemeral
/// EVM. Construction always happens "inside" the genesis block, so this is derived from the
/// header that is about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderForExecution {
    pub number: u64,
    pub timestamp: u64,
    pub gas_limit: u64,
    pub difficulty: U256,
    pub coinbase: Address,
    pub mix_hash: B256,
}

impl Default for HeaderForExecution {
    fn default() -> Self {
        Self {
            number: 0,
            timestamp: 0,
            gas_limit: 30_000_000,
            difficulty: U256::from(1),
            coinbase: Address::ZERO,
            mix_hash: B256::ZERO,
        }
    }
}
