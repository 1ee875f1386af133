pub use utils::*;

use {
    crate::{
        ArtifactId, ConfigError, Error, GenesisDocument, OutputSink, Stage,
        system_contracts::{
            INTERMEDIARY_SYSTEM_ADDRESS, RUNTIME_UPGRADE_ADDRESS, STAKING_ADDRESS,
            SYSTEM_CONTRACTS,
        },
    },
    std::collections::BTreeSet,
    sysgen_shared::primitives::{Address, U256},
};

mod failures;
mod utils;

fn alloc_addresses(document: &GenesisDocument) -> BTreeSet<Address> {
    document.alloc.keys().copied().collect()
}
