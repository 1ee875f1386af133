//! # The error module
//!
//! Structured errors for encoding call data and for running code inside the ephemeral EVM. They
//! implement [`Display`] and [`Debug`] so they can be printed by the caller, but no logic should
//! depend on the rendered message.
//!
//! [`Display`]: std::fmt::Display

use {alloy::dyn_abi, sysgen_shared::primitives::Address, thiserror::Error};

/// Failure to turn typed arguments into Solidity ABI bytes.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("Unknown Solidity type {ty:?}: {source}")]
    UnknownType {
        ty: String,
        #[source]
        source: dyn_abi::Error,
    },
    #[error("Argument {index} does not match its declared type {ty}")]
    TypeMismatch { index: usize, ty: String },
    #[error("Expected {types} arguments, got {values}")]
    ArityMismatch { types: usize, values: usize },
}

/// Failure of a creation or a call inside the ephemeral EVM.
///
/// # Variants
/// * [`Reverted`] means the code executed `REVERT`. The `reason` holds the printable part of the
///   revert payload.
/// * [`Halted`] means execution stopped exceptionally, e.g. out of gas or an invalid opcode.
/// * [`CodeTooLarge`] means a constructor returned code above the EIP-170 limit.
/// * [`Engine`] is a failure of the EVM itself rather than of the executed code.
///
/// [`Reverted`]: ExecutionError::Reverted
/// [`Halted`]: ExecutionError::Halted
/// [`CodeTooLarge`]: ExecutionError::CodeTooLarge
/// [`Engine`]: ExecutionError::Engine
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Execution at {address} reverted: {reason:?}")]
    Reverted { address: Address, reason: String },
    #[error("Execution at {address} halted: {reason}")]
    Halted { address: Address, reason: String },
    #[error("Code returned for {address} is {size} bytes, above the {limit} bytes limit")]
    CodeTooLarge {
        address: Address,
        size: usize,
        limit: usize,
    },
    #[error("EVM error at {address}: {message}")]
    Engine { address: Address, message: String },
}
