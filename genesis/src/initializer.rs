use {
    crate::{
        artifact::ArtifactId,
        config::{GOVERNANCE_NAME, GenesisConfig},
    },
    alloy::dyn_abi::DynSolValue,
    sysgen_evm_ext::{
        EncodingError,
        solidity_abi::{
            abi_encode_call, sol_addresses, sol_bytes_array, sol_string, sol_uint, sol_uints,
        },
    },
    sysgen_shared::primitives::U256,
};

/// An `initialize(...)` call under construction.
#[derive(Debug, Clone, Default)]
pub struct Initializer {
    types: Vec<&'static str>,
    values: Vec<DynSolValue>,
}

impl Initializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, ty: &'static str, value: DynSolValue) -> Self {
        self.types.push(ty);
        self.values.push(value);
        self
    }

    pub fn encode(self) -> Result<Vec<u8>, EncodingError> {
        abi_encode_call("initialize", &self.types, self.values)
    }
}

/// The initializer a proxied system contract is set up with. `stakes` are the initial stakes in
/// validator order.
pub fn for_contract(id: ArtifactId, config: &GenesisConfig, stakes: &[U256]) -> Initializer {
    let params = &config.consensus_params;

    match id {
        ArtifactId::Staking => Initializer::new()
            .arg("address[]", sol_addresses(&config.validators))
            .arg("bytes[]", sol_bytes_array(&config.voting_keys))
            .arg("address[]", sol_addresses(config.effective_owners()))
            .arg("uint256[]", sol_uints(stakes.iter().copied(), 256))
            .arg("uint16", sol_uint(U256::from(config.commission_rate), 16)),
        ArtifactId::ChainConfig => Initializer::new()
            .arg("uint32", sol_uint(U256::from(params.active_validators_length), 32))
            .arg("uint32", sol_uint(U256::from(params.epoch_block_interval), 32))
            .arg("uint32", sol_uint(U256::from(params.misdemeanor_threshold), 32))
            .arg("uint32", sol_uint(U256::from(params.felony_threshold), 32))
            .arg("uint32", sol_uint(U256::from(params.validator_jail_epoch_length), 32))
            .arg("uint32", sol_uint(U256::from(params.undelegate_period), 32))
            .arg("uint256", sol_uint(U256::from(params.min_validator_stake_amount), 256))
            .arg("uint256", sol_uint(U256::from(params.min_staking_amount), 256))
            .arg("uint16", sol_uint(U256::from(params.finality_reward_ratio), 16)),
        ArtifactId::SystemReward => {
            let (accounts, shares): (Vec<_>, Vec<_>) = config
                .system_treasury
                .iter()
                .map(|(account, share)| (*account, U256::from(*share)))
                .unzip();
            Initializer::new()
                .arg("address[]", sol_addresses(&accounts))
                .arg("uint16[]", sol_uints(shares, 16))
        }
        ArtifactId::Governance => Initializer::new()
            .arg("uint256", sol_uint(U256::from(config.voting_period), 256))
            .arg("string", sol_string(GOVERNANCE_NAME)),
        ArtifactId::DeployerProxy => {
            Initializer::new().arg("address[]", sol_addresses(&config.deployers))
        }
        ArtifactId::SlashingIndicator
        | ArtifactId::StakingPool
        | ArtifactId::RuntimeUpgrade
        | ArtifactId::RuntimeProxy => Initializer::new(),
    }
}
