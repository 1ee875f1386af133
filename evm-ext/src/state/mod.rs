mod account;
mod store;

pub use {
    account::ScratchAccount,
    store::{ScratchState, StateStore},
};
