use {
    crate::{error::ConfigError, system_contracts::is_reserved},
    serde::Deserialize,
    std::{collections::BTreeMap, path::Path},
    sysgen_shared::{
        primitives::{Address, Bytes, U256},
        quantity::{hex_or_decimal, parse_u256},
    },
};

/// Genesis block timestamp.
pub const GENESIS_TIMESTAMP: u64 = 0x5e9da7ce;
/// Genesis block gas limit.
pub const GENESIS_GAS_LIMIT: u64 = 0x2625a00;
pub const GENESIS_DIFFICULTY: u64 = 1;
/// Block period in seconds written to the Parlia chain config.
pub const PARLIA_PERIOD: u64 = 3;
/// Name passed to the governance initializer.
pub const GOVERNANCE_NAME: &str = "Governance";

/// Input document describing the network to synthesize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisConfig {
    pub chain_id: u64,
    #[serde(default)]
    pub supported_forks: SupportedForks,
    #[serde(default)]
    pub deployers: Vec<Address>,
    #[serde(default)]
    pub validators: Vec<Address>,
    #[serde(default)]
    pub voting_keys: Vec<Bytes>,
    /// Validator owners. Empty means every validator owns itself.
    #[serde(default)]
    pub owners: Vec<Address>,
    /// Address to share in basis points. The sum is not checked.
    #[serde(default)]
    pub system_treasury: BTreeMap<Address, u16>,
    pub consensus_params: ConsensusParams,
    #[serde(default)]
    pub voting_period: u64,
    #[serde(default)]
    pub faucet: BTreeMap<Address, String>,
    #[serde(default)]
    pub commission_rate: u16,
    #[serde(default)]
    pub initial_stakes: BTreeMap<Address, String>,
    #[serde(default, deserialize_with = "hex_or_decimal::deserialize_opt")]
    pub block_rewards: Option<U256>,
}

/// Fork activation blocks. `None` means the fork is never active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedForks {
    #[serde(default, deserialize_with = "hex_or_decimal::deserialize_opt_u64")]
    pub verify_parlia_block: Option<u64>,
    #[serde(default, deserialize_with = "hex_or_decimal::deserialize_opt_u64")]
    pub block_rewards_block: Option<u64>,
    #[serde(default, deserialize_with = "hex_or_decimal::deserialize_opt_u64")]
    pub fast_finality_block: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusParams {
    pub active_validators_length: u32,
    pub epoch_block_interval: u32,
    pub misdemeanor_threshold: u32,
    pub felony_threshold: u32,
    pub validator_jail_epoch_length: u32,
    pub undelegate_period: u32,
    #[serde(deserialize_with = "hex_or_decimal::deserialize")]
    pub min_validator_stake_amount: U256,
    #[serde(deserialize_with = "hex_or_decimal::deserialize")]
    pub min_staking_amount: U256,
    #[serde(default)]
    pub finality_reward_ratio: u16,
}

impl GenesisConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Whether the extra data carries voting keys next to validator addresses.
    pub fn fast_finality_at_genesis(&self) -> bool {
        self.supported_forks.fast_finality_block == Some(0)
    }

    /// Owners as passed to the staking initializer.
    pub fn effective_owners(&self) -> &[Address] {
        if self.owners.is_empty() {
            &self.validators
        } else {
            &self.owners
        }
    }

    /// Initial stake of every validator, in validator order.
    pub fn initial_stakes(&self) -> Result<Vec<U256>, ConfigError> {
        self.validators
            .iter()
            .map(|validator| {
                let raw = self
                    .initial_stakes
                    .get(validator)
                    .ok_or(ConfigError::MissingInitialStake(*validator))?;
                parse_u256(raw).map_err(|source| ConfigError::InvalidQuantity {
                    field: "initial stake",
                    address: *validator,
                    source,
                })
            })
            .collect()
    }

    /// Sum of the initial stakes of all validators.
    pub fn total_stake(&self) -> Result<U256, ConfigError> {
        self.initial_stakes()?
            .into_iter()
            .try_fold(U256::ZERO, |total, stake| total.checked_add(stake))
            .ok_or(ConfigError::InitialStakeOverflow)
    }

    pub fn faucet_balances(&self) -> Result<BTreeMap<Address, U256>, ConfigError> {
        self.faucet
            .iter()
            .map(|(address, raw)| {
                let balance = parse_u256(raw).map_err(|source| ConfigError::InvalidQuantity {
                    field: "faucet balance",
                    address: *address,
                    source,
                })?;
                Ok((*address, balance))
            })
            .collect()
    }

    /// Cross-field checks that must hold before any contract is constructed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.owners.is_empty() && self.owners.len() != self.validators.len() {
            return Err(ConfigError::OwnerCountMismatch {
                validators: self.validators.len(),
                owners: self.owners.len(),
            });
        }

        let roles = [
            ("validator", &self.validators),
            ("owner", &self.owners),
            ("deployer", &self.deployers),
        ];
        for (role, addresses) in roles {
            if let Some(address) = addresses.iter().find(|a| is_reserved(a)) {
                return Err(ConfigError::ReservedAddress {
                    role,
                    address: *address,
                });
            }
        }
        if let Some(address) = self.system_treasury.keys().find(|a| is_reserved(a)) {
            return Err(ConfigError::ReservedAddress {
                role: "treasury",
                address: *address,
            });
        }
        if let Some(address) = self.faucet.keys().find(|a| is_reserved(a)) {
            return Err(ConfigError::FaucetConflict(*address));
        }
        if let Some(rewards) = self
            .block_rewards
            .filter(|rewards| u128::try_from(*rewards).is_err())
        {
            return Err(ConfigError::BlockRewardsTooLarge(rewards));
        }

        self.total_stake()?;
        self.faucet_balances()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::system_contracts::{INTERMEDIARY_SYSTEM_ADDRESS, STAKING_ADDRESS},
        alloy::primitives::address,
        sysgen_shared::quantity::QuantityError,
    };

    const VALIDATOR: Address = address!("00a601f45688dba8a070722073b015277cf36725");
    const OTHER: Address = address!("57ba24be2cf17400f37db3566e839bfa6a2d018a");

    fn config() -> GenesisConfig {
        GenesisConfig {
            chain_id: 1337,
            validators: vec![VALIDATOR, OTHER],
            initial_stakes: BTreeMap::from([
                (VALIDATOR, "0x3635c9adc5dea00000".to_owned()),
                (OTHER, "1000".to_owned()),
            ]),
            ..Default::default()
        }
    }

    #[test]
    fn test_config_document_is_parsed() {
        let json = r#"{
            "chainId": 1337,
            "supportedForks": {
                "verifyParliaBlock": 0,
                "blockRewardsBlock": "0x10",
                "fastFinalityBlock": null
            },
            "deployers": ["0x00a601f45688dba8a070722073b015277cf36725"],
            "validators": ["0x00a601f45688dba8a070722073b015277cf36725"],
            "votingKeys": ["0x8b09f47df1cdb2d2a90b213726c46412059425a7034b3f0f22f611b8748113893a77220cbdf520057785512062a83541"],
            "systemTreasury": {"0x00a601f45688dba8a070722073b015277cf36725": 10000},
            "consensusParams": {
                "activeValidatorsLength": 1,
                "epochBlockInterval": 100,
                "misdemeanorThreshold": 10,
                "felonyThreshold": 100,
                "validatorJailEpochLength": 1,
                "undelegatePeriod": 0,
                "minValidatorStakeAmount": "0xde0b6b3a7640000",
                "minStakingAmount": "1000000000000000000"
            },
            "initialStakes": {"0x00a601f45688dba8a070722073b015277cf36725": "0x3635c9adc5dea00000"},
            "votingPeriod": 20,
            "faucet": {"0x57BA24bE2cF17400f37dB3566e839bfA6A2d018a": "0x21e19e0c9bab2400000"},
            "blockRewards": "0x1"
        }"#;

        let actual = GenesisConfig::from_json(json).unwrap();

        assert_eq!(actual.chain_id, 1337);
        assert_eq!(actual.supported_forks.verify_parlia_block, Some(0));
        assert_eq!(actual.supported_forks.block_rewards_block, Some(16));
        assert_eq!(actual.supported_forks.fast_finality_block, None);
        assert!(!actual.fast_finality_at_genesis());
        assert_eq!(actual.voting_keys[0].len(), 48);
        assert_eq!(
            actual.consensus_params.min_validator_stake_amount,
            actual.consensus_params.min_staking_amount
        );
        assert_eq!(actual.consensus_params.finality_reward_ratio, 0);
        assert_eq!(actual.block_rewards, Some(U256::from(1)));
        assert_eq!(actual.faucet[&OTHER], "0x21e19e0c9bab2400000");
        assert!(actual.owners.is_empty());
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let actual = GenesisConfig::from_json(r#"{"chainId": "one"}"#).unwrap_err();

        assert!(matches!(actual, ConfigError::Parse(_)));
    }

    #[test]
    fn test_owners_default_to_validators() {
        let mut config = config();
        assert_eq!(config.effective_owners(), &[VALIDATOR, OTHER]);

        config.owners = vec![OTHER, OTHER];
        assert_eq!(config.effective_owners(), &[OTHER, OTHER]);
    }

    #[test]
    fn test_initial_stakes_follow_validator_order() {
        let actual = config().initial_stakes().unwrap();

        let expected = vec![
            U256::from(1_000_000_000_000_000_000_000u128),
            U256::from(1000),
        ];
        assert_eq!(actual, expected);
        assert_eq!(
            config().total_stake().unwrap(),
            U256::from(1_000_000_000_000_000_001_000u128)
        );
    }

    #[test]
    fn test_validator_without_stake_is_rejected() {
        let mut config = config();
        config.initial_stakes.remove(&OTHER);

        let actual = config.validate().unwrap_err();

        assert!(matches!(actual, ConfigError::MissingInitialStake(a) if a == OTHER));
    }

    #[test]
    fn test_malformed_stake_is_rejected() {
        let mut config = config();
        config.initial_stakes.insert(OTHER, "0xnope".to_owned());

        let actual = config.validate().unwrap_err();

        assert!(matches!(
            actual,
            ConfigError::InvalidQuantity {
                field: "initial stake",
                source: QuantityError::Invalid { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_stake_sum_overflow_is_rejected() {
        let mut config = config();
        let max = format!("0x{}", "f".repeat(64));
        config.initial_stakes.insert(VALIDATOR, max.clone());
        config.initial_stakes.insert(OTHER, max);

        let actual = config.validate().unwrap_err();

        assert!(matches!(actual, ConfigError::InitialStakeOverflow));
    }

    #[test]
    fn test_malformed_faucet_balance_is_rejected() {
        let mut config = config();
        config.faucet.insert(OTHER, "".to_owned());

        let actual = config.validate().unwrap_err();

        assert!(matches!(
            actual,
            ConfigError::InvalidQuantity {
                field: "faucet balance",
                source: QuantityError::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_faucet_to_system_contract_conflicts() {
        let mut config = config();
        config.faucet.insert(STAKING_ADDRESS, "1".to_owned());

        let actual = config.validate().unwrap_err();

        assert!(matches!(actual, ConfigError::FaucetConflict(a) if a == STAKING_ADDRESS));
    }

    #[test]
    fn test_validator_at_reserved_address_is_rejected() {
        let mut config = config();
        config.validators.push(INTERMEDIARY_SYSTEM_ADDRESS);

        let actual = config.validate().unwrap_err();

        assert!(matches!(
            actual,
            ConfigError::ReservedAddress {
                role: "validator",
                ..
            }
        ));
    }

    #[test]
    fn test_owner_count_must_match_validators() {
        let mut config = config();
        config.owners = vec![OTHER];

        let actual = config.validate().unwrap_err();

        assert!(matches!(
            actual,
            ConfigError::OwnerCountMismatch {
                validators: 2,
                owners: 1
            }
        ));
    }

    #[test]
    fn test_block_rewards_wider_than_u128_are_rejected() {
        let mut config = config();
        let too_large = U256::from(u128::MAX) + U256::from(1);
        config.block_rewards = Some(too_large);

        let actual = config.validate().unwrap_err();

        assert!(matches!(actual, ConfigError::BlockRewardsTooLarge(r) if r == too_large));
    }

    #[test]
    fn test_largest_serializable_block_rewards_are_accepted() {
        let mut config = config();
        config.block_rewards = Some(U256::from(u128::MAX));

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_address_treasury_is_allowed() {
        let mut config = config();
        config.system_treasury.insert(Address::ZERO, 10_000);

        assert!(config.validate().is_ok());
    }
}
