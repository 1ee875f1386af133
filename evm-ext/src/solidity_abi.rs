use {
    crate::error::EncodingError,
    alloy::{
        dyn_abi::{DynSolType, DynSolValue},
        primitives::keccak256,
    },
    sysgen_shared::primitives::{Address, Bytes, U256},
};

/// Encodes `values` as a Solidity parameter list of the given `types`.
///
/// Type names are regular Solidity type strings such as `address`, `uint16`, `bytes` or
/// `address[]`. Every value is checked against its declared type before encoding so a shape
/// mismatch is reported instead of silently producing a different encoding.
pub fn abi_encode_params(types: &[&str], values: Vec<DynSolValue>) -> Result<Vec<u8>, EncodingError> {
    let sol_types = parse_types(types)?;
    check_values(&sol_types, &values)?;

    Ok(DynSolValue::Tuple(values).abi_encode_params())
}

/// Builds call data for `name(types...)`: a 4-byte selector followed by the encoded arguments.
///
/// The signature used for the selector is built from canonical type names, so `uint` and
/// `uint256` produce the same selector.
pub fn abi_encode_call(
    name: &str,
    types: &[&str],
    values: Vec<DynSolValue>,
) -> Result<Vec<u8>, EncodingError> {
    let sol_types = parse_types(types)?;
    check_values(&sol_types, &values)?;

    let signature = canonical_signature(name, &sol_types);
    let mut payload = selector(&signature).to_vec();
    payload.extend(DynSolValue::Tuple(values).abi_encode_params());

    Ok(payload)
}

/// First 4 bytes of the keccak-256 hash of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn canonical_signature(name: &str, types: &[DynSolType]) -> String {
    let params = types
        .iter()
        .map(|ty| ty.sol_type_name())
        .collect::<Vec<_>>()
        .join(",");
    format!("{name}({params})")
}

fn parse_types(types: &[&str]) -> Result<Vec<DynSolType>, EncodingError> {
    types
        .iter()
        .map(|ty| {
            DynSolType::parse(ty).map_err(|source| EncodingError::UnknownType {
                ty: ty.to_string(),
                source,
            })
        })
        .collect()
}

fn check_values(types: &[DynSolType], values: &[DynSolValue]) -> Result<(), EncodingError> {
    if types.len() != values.len() {
        return Err(EncodingError::ArityMismatch {
            types: types.len(),
            values: values.len(),
        });
    }

    for (index, (ty, value)) in types.iter().zip(values).enumerate() {
        if !ty.matches(value) {
            return Err(EncodingError::TypeMismatch {
                index,
                ty: ty.sol_type_name().into_owned(),
            });
        }
    }

    Ok(())
}

pub fn sol_address(address: Address) -> DynSolValue {
    DynSolValue::Address(address)
}

pub fn sol_addresses(addresses: &[Address]) -> DynSolValue {
    DynSolValue::Array(addresses.iter().copied().map(sol_address).collect())
}

pub fn sol_bytes(bytes: impl Into<Vec<u8>>) -> DynSolValue {
    DynSolValue::Bytes(bytes.into())
}

pub fn sol_bytes_array(items: &[Bytes]) -> DynSolValue {
    DynSolValue::Array(items.iter().map(|b| sol_bytes(b.to_vec())).collect())
}

/// An unsigned integer of `bits` width, e.g. `sol_uint(10_000, 16)` for a `uint16`.
pub fn sol_uint(value: impl Into<U256>, bits: usize) -> DynSolValue {
    DynSolValue::Uint(value.into(), bits)
}

pub fn sol_uints(values: impl IntoIterator<Item = U256>, bits: usize) -> DynSolValue {
    DynSolValue::Array(values.into_iter().map(|v| sol_uint(v, bits)).collect())
}

pub fn sol_string(value: &str) -> DynSolValue {
    DynSolValue::String(value.to_owned())
}
