pub use alloy::primitives::{Address, B256, Bytes, U256};

pub trait ToWord {
    /// Left-pads the value into a 32-byte EVM word.
    fn to_word(&self) -> B256;
}

impl ToWord for Address {
    fn to_word(&self) -> B256 {
        self.into_word()
    }
}

impl ToWord for U256 {
    fn to_word(&self) -> B256 {
        B256::from(self.to_be_bytes::<32>())
    }
}
