use {
    crate::{
        error::ConfigError,
        harness::{Captured, CapturedAccount},
    },
    alloy::genesis::GenesisAccount,
    std::collections::BTreeMap,
    sysgen_shared::primitives::{Address, U256},
};

/// The genesis allocation being assembled, one entry per address.
///
/// Entries only change through the methods below. Iteration is in address order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenesisAlloc {
    accounts: BTreeMap<Address, GenesisAccount>,
}

impl GenesisAlloc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `address`.
    pub fn record(&mut self, address: Address, account: CapturedAccount) {
        let CapturedAccount {
            balance,
            nonce,
            code,
            storage,
        } = account;
        let entry = GenesisAccount::default()
            .with_balance(balance)
            .with_nonce((nonce != 0).then_some(nonce))
            .with_code((!code.is_empty()).then_some(code))
            .with_storage((!storage.is_empty()).then_some(storage));

        self.accounts.insert(address, entry);
    }

    /// Records every account of a construction.
    pub fn record_captured(&mut self, captured: Captured) {
        for (address, account) in captured.accounts {
            self.record(address, account);
        }
    }

    /// Sets the balance of `address`, keeping its code and storage.
    pub fn adjust_balance(&mut self, address: Address, balance: U256) {
        self.accounts.entry(address).or_default().balance = balance;
    }

    /// Removes an entry that only exists because of the simulation, such as the synthetic sender.
    pub fn purge_incidental(&mut self, address: &Address) -> Option<GenesisAccount> {
        self.accounts.remove(address)
    }

    /// Installs a reserved address with zero balance and nothing else.
    pub fn install_reserved(&mut self, address: Address) {
        self.accounts.insert(address, GenesisAccount::default());
    }

    /// Replaces the entry of every faucet address with a plain balance.
    ///
    /// Faucet grants must not land on contract code. The whole table is checked before anything
    /// is written, so a conflict leaves the allocation untouched.
    pub fn apply_faucet(&mut self, faucet: &BTreeMap<Address, U256>) -> Result<(), ConfigError> {
        if let Some(address) = faucet.keys().find(|address| self.has_code(address)) {
            return Err(ConfigError::FaucetConflict(*address));
        }

        for (address, balance) in faucet {
            self.accounts
                .insert(*address, GenesisAccount::default().with_balance(*balance));
        }

        Ok(())
    }

    pub fn has_code(&self, address: &Address) -> bool {
        self.accounts
            .get(address)
            .and_then(|account| account.code.as_ref())
            .is_some_and(|code| !code.is_empty())
    }

    pub fn get(&self, address: &Address) -> Option<&GenesisAccount> {
        self.accounts.get(address)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<Address, GenesisAccount> {
        self.accounts
    }
}
