use {
    super::ScratchAccount,
    revm::database::in_memory_db::InMemoryDB,
    std::collections::BTreeMap,
    sysgen_shared::primitives::{Address, B256, Bytes, ToWord, U256},
};

/// Read and seed access to the accounts of one scratch construction.
///
/// Every query is answered from ordered maps so iterating the result never depends on hashing.
pub trait StateStore {
    /// Sets the balance of `address`, creating the account when it does not exist yet.
    fn set_balance(&mut self, address: Address, balance: U256);

    fn account(&self, address: &Address) -> Option<&ScratchAccount>;

    /// Non-zero storage slots of `address` as 32-byte words.
    fn storage_diff(&self, address: &Address) -> BTreeMap<B256, B256>;

    /// All accounts that were seeded or modified, in address order.
    fn touched(&self) -> Vec<Address>;
}

/// An in-memory EVM database paired with an ordered record of every account written to it.
///
/// The database is what the EVM reads from. The record is what callers read back, so it must be
/// updated together with the database on every write.
#[derive(Debug, Default)]
pub struct ScratchState {
    pub(crate) db: InMemoryDB,
    accounts: BTreeMap<Address, ScratchAccount>,
}

impl ScratchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `code` on `address`, keeping the existing balance and nonce.
    pub fn set_code(&mut self, address: Address, code: Bytes) {
        self.accounts.entry(address).or_default().code = code;
        self.sync(address);
    }

    pub(crate) fn accounts_mut(&mut self) -> &mut BTreeMap<Address, ScratchAccount> {
        &mut self.accounts
    }

    pub(crate) fn sync(&mut self, address: Address) {
        if let Some(account) = self.accounts.get(&address) {
            self.db.insert_account_info(address, account.info());
        }
    }
}

impl StateStore for ScratchState {
    fn set_balance(&mut self, address: Address, balance: U256) {
        self.accounts.entry(address).or_default().balance = balance;
        self.sync(address);
    }

    fn account(&self, address: &Address) -> Option<&ScratchAccount> {
        self.accounts.get(address)
    }

    fn storage_diff(&self, address: &Address) -> BTreeMap<B256, B256> {
        let Some(account) = self.accounts.get(address) else {
            return BTreeMap::new();
        };

        account
            .storage
            .iter()
            .filter(|(_, value)| !value.is_zero())
            .map(|(slot, value)| (slot.to_word(), value.to_word()))
            .collect()
    }

    fn touched(&self) -> Vec<Address> {
        self.accounts.keys().copied().collect()
    }
}
