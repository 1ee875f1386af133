use {
    crate::{config::GenesisConfig, error::ConfigError},
    sysgen_shared::primitives::{Address, Bytes},
};

const VANITY_LENGTH: usize = 32;
const SEAL_LENGTH: usize = 65;
pub const VOTING_KEY_LENGTH: usize = 48;

/// Header extra data announcing the genesis validator set.
///
/// With fast finality active at genesis every validator is followed by its voting key and the
/// list is prefixed with its length. Otherwise only the addresses are listed.
pub fn encode(config: &GenesisConfig) -> Result<Bytes, ConfigError> {
    if config.fast_finality_at_genesis() {
        encode_with_voting_keys(&config.validators, &config.voting_keys)
    } else {
        Ok(encode_validators(&config.validators))
    }
}

pub fn encode_validators(validators: &[Address]) -> Bytes {
    let mut extra = vec![0u8; VANITY_LENGTH];
    for validator in validators {
        extra.extend_from_slice(validator.as_slice());
    }
    extra.resize(extra.len() + SEAL_LENGTH, 0);

    extra.into()
}

pub fn encode_with_voting_keys(
    validators: &[Address],
    voting_keys: &[Bytes],
) -> Result<Bytes, ConfigError> {
    if validators.len() != voting_keys.len() {
        return Err(ConfigError::VotingKeyCountMismatch {
            validators: validators.len(),
            keys: voting_keys.len(),
        });
    }
    let count =
        u8::try_from(validators.len()).map_err(|_| ConfigError::TooManyValidators(validators.len()))?;

    let mut extra = vec![0u8; VANITY_LENGTH];
    extra.push(count);
    for (index, (validator, key)) in validators.iter().zip(voting_keys).enumerate() {
        if key.len() != VOTING_KEY_LENGTH {
            return Err(ConfigError::VotingKeyLength {
                index,
                length: key.len(),
            });
        }
        extra.extend_from_slice(validator.as_slice());
        extra.extend_from_slice(key);
    }
    extra.resize(extra.len() + SEAL_LENGTH, 0);

    Ok(extra.into())
}
