pub use self::{
    engine::{EphemeralEvm, ExecutionEngine},
    error::{EncodingError, ExecutionError},
    header::HeaderForExecution,
    revert::decode_revert_reason,
    state::{ScratchAccount, ScratchState, StateStore},
};

use revm::primitives::hardfork::SpecId;

mod engine;
pub mod error;
mod header;
mod revert;
pub mod solidity_abi;
pub mod state;
mod state_changes;

/// Fork rules constructions run under, matching the forks a Parlia genesis activates at block 0.
pub const EXECUTION_SPEC: SpecId = SpecId::MUIR_GLACIER;

/// Gas available to every construction and call.
pub const DEFAULT_GAS_LIMIT: u64 = 10_000_000;

/// Largest deployable contract code in bytes, see EIP-170.
pub const MAX_CODE_SIZE: usize = 0x6000;
