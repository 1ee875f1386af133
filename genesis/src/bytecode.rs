use {
    crate::{artifact::Artifact, system_contracts::SIBLING_ADDRESSES},
    sysgen_evm_ext::{
        EncodingError,
        solidity_abi::{abi_encode_params, sol_address, sol_bytes},
    },
    sysgen_shared::primitives::{Address, Bytes},
};

/// Constructor arguments naming every system contract.
pub fn sibling_arguments() -> Result<Vec<u8>, EncodingError> {
    abi_encode_params(
        &["address"; SIBLING_ADDRESSES.len()],
        SIBLING_ADDRESSES.map(sol_address).to_vec(),
    )
}

/// Creation code deploying `artifact` as is.
pub fn direct(artifact: &Artifact) -> Result<Bytes, EncodingError> {
    let mut code = artifact.bytecode.to_vec();
    code.extend(sibling_arguments()?);

    Ok(code.into())
}

/// Creation code deploying `proxy` in front of `implementation`.
///
/// The proxy constructor receives the address allowed to upgrade it, the direct creation code of
/// the implementation and the call data it runs against the implementation once deployed.
pub fn proxy(
    proxy: &Artifact,
    upgrade_authority: Address,
    implementation: &Artifact,
    initializer_call: Vec<u8>,
) -> Result<Bytes, EncodingError> {
    let implementation_init = direct(implementation)?;
    let arguments = abi_encode_params(
        &["address", "bytes", "bytes"],
        vec![
            sol_address(upgrade_authority),
            sol_bytes(implementation_init),
            sol_bytes(initializer_call),
        ],
    )?;

    let mut code = proxy.bytecode.to_vec();
    code.extend(arguments);

    Ok(code.into())
}
