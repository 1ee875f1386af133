//! Numeric quantities as they appear in chain configuration documents.
//!
//! A quantity is either a JSON number, a decimal string or a `0x`-prefixed hex string. This is the
//! same set of inputs go-ethereum accepts for its `HexOrDecimal256` type, so configuration files
//! written for the geth tooling keep working.

use {
    crate::primitives::U256,
    serde::{Deserialize, Deserializer, de::Error as _},
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("Quantity is empty")]
    Empty,
    #[error("Invalid quantity {value:?}: {reason}")]
    Invalid { value: String, reason: String },
    #[error("Quantity {0} does not fit into 64 bits")]
    Overflow(U256),
}

/// Parses a hex (`0x` prefix) or decimal string into a [`U256`].
pub fn parse_u256(value: &str) -> Result<U256, QuantityError> {
    let trimmed = value.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };

    if digits.is_empty() {
        return Err(QuantityError::Empty);
    }

    U256::from_str_radix(digits, radix).map_err(|e| QuantityError::Invalid {
        value: value.to_owned(),
        reason: e.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(u64),
    Text(String),
}

impl RawQuantity {
    fn into_u256(self) -> Result<U256, QuantityError> {
        match self {
            Self::Number(n) => Ok(U256::from(n)),
            Self::Text(s) => parse_u256(&s),
        }
    }
}

/// Serde adapters for hex-or-decimal fields, used through `deserialize_with`.
pub mod hex_or_decimal {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        RawQuantity::deserialize(deserializer)?
            .into_u256()
            .map_err(D::Error::custom)
    }

    pub fn deserialize_opt<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        Option::<RawQuantity>::deserialize(deserializer)?
            .map(RawQuantity::into_u256)
            .transpose()
            .map_err(D::Error::custom)
    }

    pub fn deserialize_opt_u64<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        let Some(wide) = deserialize_opt(deserializer)? else {
            return Ok(None);
        };
        u64::try_from(wide)
            .map(Some)
            .map_err(|_| D::Error::custom(QuantityError::Overflow(wide)))
    }
}
