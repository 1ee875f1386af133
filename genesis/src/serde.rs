use {
    crate::{
        config::{GENESIS_DIFFICULTY, GENESIS_GAS_LIMIT, GENESIS_TIMESTAMP, GenesisConfig, PARLIA_PERIOD},
        error::SerializationError,
    },
    alloy::genesis::GenesisAccount,
    serde::{Serialize, Serializer, ser::Error as _},
    std::{
        collections::BTreeMap,
        fmt,
        io::Write,
        path::PathBuf,
        str::FromStr,
    },
    sysgen_shared::primitives::{Address, B256, Bytes, U256},
};

/// A geth style genesis document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisDocument {
    pub config: ChainConfig,
    #[serde(with = "alloy::serde::quantity")]
    pub nonce: u64,
    #[serde(with = "alloy::serde::quantity")]
    pub timestamp: u64,
    pub extra_data: Bytes,
    #[serde(with = "alloy::serde::quantity")]
    pub gas_limit: u64,
    pub difficulty: U256,
    pub mix_hash: B256,
    pub coinbase: Address,
    pub alloc: BTreeMap<Address, GenesisAccount>,
    #[serde(with = "alloy::serde::quantity")]
    pub number: u64,
    #[serde(with = "alloy::serde::quantity")]
    pub gas_used: u64,
    pub parent_hash: B256,
}

/// Chain config with every pre-Parlia fork active from genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    pub chain_id: u64,
    pub homestead_block: u64,
    pub eip150_block: u64,
    pub eip155_block: u64,
    pub eip158_block: u64,
    pub byzantium_block: u64,
    pub constantinople_block: u64,
    pub petersburg_block: u64,
    pub istanbul_block: u64,
    pub muir_glacier_block: u64,
    pub ramanujan_block: u64,
    pub niels_block: u64,
    pub mirror_sync_block: u64,
    pub bruno_block: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_parlia_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_rewards_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_finality_block: Option<u64>,
    pub parlia: ParliaConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParliaConfig {
    pub period: u64,
    pub epoch: u64,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_number"
    )]
    pub block_rewards: Option<U256>,
}

/// Big integers in the chain config are plain JSON numbers. `GenesisConfig::validate` keeps them
/// within `u128`.
fn serialize_opt_number<S: Serializer>(value: &Option<U256>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => u128::try_from(*value)
            .map_err(|_| S::Error::custom(format!("{value} does not fit into a JSON number")))?
            .serialize(s),
        None => s.serialize_none(),
    }
}

impl ChainConfig {
    pub fn new(config: &GenesisConfig) -> Self {
        let forks = &config.supported_forks;
        Self {
            chain_id: config.chain_id,
            homestead_block: 0,
            eip150_block: 0,
            eip155_block: 0,
            eip158_block: 0,
            byzantium_block: 0,
            constantinople_block: 0,
            petersburg_block: 0,
            istanbul_block: 0,
            muir_glacier_block: 0,
            ramanujan_block: 0,
            niels_block: 0,
            mirror_sync_block: 0,
            bruno_block: 0,
            verify_parlia_block: forks.verify_parlia_block,
            block_rewards_block: forks.block_rewards_block,
            fast_finality_block: forks.fast_finality_block,
            parlia: ParliaConfig {
                period: PARLIA_PERIOD,
                epoch: config.consensus_params.epoch_block_interval.into(),
                block_rewards: config.block_rewards,
            },
        }
    }
}

impl GenesisDocument {
    pub fn new(
        config: &GenesisConfig,
        extra_data: Bytes,
        alloc: BTreeMap<Address, GenesisAccount>,
    ) -> Self {
        Self {
            config: ChainConfig::new(config),
            nonce: 0,
            timestamp: GENESIS_TIMESTAMP,
            extra_data,
            gas_limit: GENESIS_GAS_LIMIT,
            difficulty: U256::from(GENESIS_DIFFICULTY),
            mix_hash: B256::ZERO,
            coinbase: Address::ZERO,
            alloc,
            number: 0,
            gas_used: 0,
            parent_hash: B256::ZERO,
        }
    }

    /// Pretty printed JSON, the exact bytes written to a sink.
    pub fn to_json(&self) -> Result<Vec<u8>, SerializationError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// Where the genesis document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    Stderr,
    /// Created or truncated.
    File(PathBuf),
}

impl OutputSink {
    pub fn write(&self, bytes: &[u8]) -> Result<(), SerializationError> {
        let result = match self {
            Self::Stdout => std::io::stdout().lock().write_all(bytes),
            Self::Stderr => std::io::stderr().lock().write_all(bytes),
            Self::File(path) => std::fs::write(path, bytes),
        };

        result.map_err(|source| SerializationError::Write {
            sink: self.to_string(),
            source,
        })
    }
}

impl FromStr for OutputSink {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "stdout" => Self::Stdout,
            "stderr" => Self::Stderr,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Stderr => f.write_str("stderr"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
