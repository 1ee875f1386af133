pub use self::{
    alloc::GenesisAlloc,
    artifact::{Artifact, ArtifactId, ArtifactRepository, DirectoryArtifacts, InMemoryArtifacts},
    config::GenesisConfig,
    error::{ArtifactError, ConfigError, Error, Result, SerializationError},
    harness::Stage,
    serde::{ChainConfig, GenesisDocument, OutputSink, ParliaConfig},
};

use {
    crate::{
        harness::Construction,
        system_contracts::{
            Deployment, INTERMEDIARY_SYSTEM_ADDRESS, RUNTIME_UPGRADE_ADDRESS, STAKING_ADDRESS,
            STAKING_PROBE_CALL, SYSTEM_CONTRACTS,
        },
    },
    sysgen_evm_ext::{EphemeralEvm, HeaderForExecution},
    sysgen_shared::primitives::{Address, Bytes, U256},
};

mod alloc;
mod artifact;
pub mod bytecode;
pub mod config;
mod error;
pub mod extra_data;
pub mod harness;
pub mod initializer;
mod serde;
pub mod system_contracts;
#[cfg(test)]
mod tests;

/// Header context every construction runs in.
pub fn execution_header() -> HeaderForExecution {
    HeaderForExecution {
        number: 0,
        timestamp: config::GENESIS_TIMESTAMP,
        gas_limit: config::GENESIS_GAS_LIMIT,
        difficulty: U256::from(config::GENESIS_DIFFICULTY),
        ..Default::default()
    }
}

/// Synthesizes the genesis document for `config`.
///
/// The configuration is fully validated before any artifact is loaded. Each system contract is
/// then built in its own scratch EVM in deployment order and its accounts are recorded.
pub fn build(config: &GenesisConfig, artifacts: &impl ArtifactRepository) -> Result<GenesisDocument> {
    config.validate()?;
    let extra_data = extra_data::encode(config)?;
    let stakes = config.initial_stakes()?;
    let total_stake = config.total_stake()?;
    let faucet = config.faucet_balances()?;

    let proxy = artifacts.artifact(ArtifactId::RuntimeProxy)?;
    let header = execution_header();
    let mut alloc = GenesisAlloc::new();

    for contract in SYSTEM_CONTRACTS {
        let artifact = artifacts.artifact(contract.id)?;
        let init_code = match contract.deployment {
            Deployment::Direct => bytecode::direct(&artifact)?,
            Deployment::Proxy => {
                let initializer = initializer::for_contract(contract.id, config, &stakes).encode()?;
                bytecode::proxy(&proxy, RUNTIME_UPGRADE_ADDRESS, &artifact, initializer)?
            }
        };
        let is_staking = contract.address == STAKING_ADDRESS;
        let construction = Construction {
            contract,
            init_code,
            prefund: is_staking.then_some(total_stake),
            post_init_call: is_staking.then(|| Bytes::from_static(&STAKING_PROBE_CALL)),
        };

        let engine = EphemeralEvm::new(header.clone(), config.chain_id);
        let captured = harness::construct(engine, construction)?;
        alloc.record_captured(captured);
        alloc.purge_incidental(&Address::ZERO);
    }

    alloc.adjust_balance(STAKING_ADDRESS, total_stake);
    alloc.install_reserved(INTERMEDIARY_SYSTEM_ADDRESS);
    alloc.purge_incidental(&Address::ZERO);
    alloc.apply_faucet(&faucet)?;
    tracing::info!(accounts = alloc.len(), "Genesis allocation assembled");

    Ok(GenesisDocument::new(config, extra_data, alloc.into_inner()))
}

/// Serializes `document` and writes it to `sink` in one piece.
pub fn write(document: &GenesisDocument, sink: &OutputSink) -> Result<()> {
    let json = document.to_json()?;
    sink.write(&json)?;
    tracing::info!(%sink, bytes = json.len(), "Genesis document written");

    Ok(())
}

/// Builds the document and writes it only if the whole build succeeded.
pub fn build_and_write(
    config: &GenesisConfig,
    artifacts: &impl ArtifactRepository,
    sink: &OutputSink,
) -> Result<GenesisDocument> {
    let document = build(config, artifacts)?;
    write(&document, sink)?;

    Ok(document)
}
