use {
    alloy::primitives::keccak256,
    revm::{bytecode::Bytecode, primitives::KECCAK_EMPTY, state::AccountInfo},
    std::collections::BTreeMap,
    sysgen_shared::primitives::{Bytes, U256},
};

/// Snapshot of one account in the scratch store.
///
/// Storage holds every slot the account ever wrote, including slots that were written back to
/// zero. Consumers filter zero values out when extracting a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScratchAccount {
    pub balance: U256,
    pub nonce: u64,
    pub code: Bytes,
    pub storage: BTreeMap<U256, U256>,
}

impl ScratchAccount {
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }

    pub fn info(&self) -> AccountInfo {
        if self.code.is_empty() {
            return AccountInfo {
                balance: self.balance,
                nonce: self.nonce,
                code_hash: KECCAK_EMPTY,
                code: None,
            };
        }

        AccountInfo {
            balance: self.balance,
            nonce: self.nonce,
            code_hash: keccak256(&self.code),
            code: Some(Bytecode::new_legacy(self.code.clone())),
        }
    }
}
