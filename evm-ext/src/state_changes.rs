use {
    crate::state::ScratchState,
    revm::{DatabaseCommit, state::EvmState},
};

/// Commits the outcome of one transaction to the scratch database and mirrors every touched
/// account into the ordered record.
///
/// Self-destructed accounts are removed from the record. Code is only replaced when the
/// transaction left non-empty code on the account, so accounts that were merely read keep
/// what they had.
pub fn apply_state_changes(state: &mut ScratchState, changes: EvmState) {
    let mut touched = 0usize;

    for (address, account) in &changes {
        // If the account is not touched then there are no changes.
        if !account.is_touched() {
            continue;
        }

        if account.is_selfdestructed() {
            state.accounts_mut().remove(address);
            continue;
        }

        let entry = state.accounts_mut().entry(*address).or_default();
        entry.balance = account.info.balance;
        entry.nonce = account.info.nonce;
        if let Some(code) = account.info.code.as_ref().filter(|code| !code.is_empty()) {
            entry.code = code.original_bytes();
        }
        for (slot, value) in &account.storage {
            entry.storage.insert(*slot, value.present_value);
        }
        touched += 1;
    }

    state.db.commit(changes);
    tracing::trace!(accounts = touched, "Applied scratch state changes");
}
