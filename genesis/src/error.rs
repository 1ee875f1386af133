//! # The error module
//!
//! Every failure of a synthesis run is represented by [`Error`]. Nothing is retried or recovered
//! locally: the first error stops the run and no output is written.
//!
//! # Variants
//! * [`Config`] covers problems in the input document. These are found before any contract code
//!   runs.
//! * [`Artifact`] covers missing or malformed compiled contracts.
//! * [`Encoding`] covers initializer arguments that do not match their declared types.
//! * [`Construction`] is a revert or halt while building a system contract. It carries the
//!   contract and the stage that failed.
//! * [`Serialization`] covers writing the resulting document.
//!
//! [`Config`]: Error::Config
//! [`Artifact`]: Error::Artifact
//! [`Encoding`]: Error::Encoding
//! [`Construction`]: Error::Construction
//! [`Serialization`]: Error::Serialization

use {
    crate::{artifact::ArtifactId, harness::Stage},
    std::path::PathBuf,
    sysgen_evm_ext::{EncodingError, ExecutionError},
    sysgen_shared::{
        primitives::{Address, U256},
        quantity::QuantityError,
    },
    thiserror::Error,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("Construction of {contract} failed while {stage}: {source}")]
    Construction {
        contract: ArtifactId,
        stage: Stage,
        #[source]
        source: ExecutionError,
    },
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse genesis config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to read genesis config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Validator and voting key counts do not match ({validators} != {keys})")]
    VotingKeyCountMismatch { validators: usize, keys: usize },
    #[error("Voting key {index} has incorrect length, must be 48, instead of {length}")]
    VotingKeyLength { index: usize, length: usize },
    #[error("Extra data can hold at most 255 validators, got {0}")]
    TooManyValidators(usize),
    #[error("Validator and owner counts do not match ({validators} != {owners})")]
    OwnerCountMismatch { validators: usize, owners: usize },
    #[error("Initial stake is not found for validator {0}")]
    MissingInitialStake(Address),
    #[error("Sum of initial stakes overflows")]
    InitialStakeOverflow,
    #[error("Invalid {field} for {address}: {source}")]
    InvalidQuantity {
        field: &'static str,
        address: Address,
        #[source]
        source: QuantityError,
    },
    #[error("The {role} address {address} is reserved for a system contract")]
    ReservedAddress { role: &'static str, address: Address },
    #[error("Faucet grant to {0} conflicts with contract code at that address")]
    FaucetConflict(Address),
    #[error("Block rewards {0} exceed the largest number the chain config can carry")]
    BlockRewardsTooLarge(U256),
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read artifact {id} from {path}: {source}")]
    Read {
        id: ArtifactId,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse artifact {id}: {source}")]
    Parse {
        id: ArtifactId,
        #[source]
        source: serde_json::Error,
    },
    #[error("Malformed bytecode in artifact {id}: {source}")]
    Bytecode {
        id: ArtifactId,
        #[source]
        source: alloy::primitives::hex::FromHexError,
    },
    #[error("Artifact {0} has no bytecode")]
    EmptyBytecode(ArtifactId),
    #[error("Artifact {0} is not available")]
    Missing(ArtifactId),
}

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("Failed to encode genesis document: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to write genesis document to {sink}: {source}")]
    Write {
        sink: String,
        #[source]
        source: std::io::Error,
    },
}
