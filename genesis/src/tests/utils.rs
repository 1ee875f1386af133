use {
    crate::{
        Artifact, ArtifactError, ArtifactId, ArtifactRepository, GenesisConfig, InMemoryArtifacts,
    },
    alloy::primitives::{Bytes, address, bytes},
    std::cell::Cell,
    sysgen_evm_ext::solidity_abi::{abi_encode_params, selector, sol_string},
    sysgen_shared::primitives::Address,
};

pub const LOCALNET_VALIDATOR: Address = address!("00a601f45688dba8a070722073b015277cf36725");
pub const FAUCET_ADDRESSES: [Address; 3] = [
    LOCALNET_VALIDATOR,
    address!("57ba24be2cf17400f37db3566e839bfa6a2d018a"),
    address!("ebcf9d06cf9333706e61213f17a795b2f7c55f1b"),
];

/// Returns a single `STOP` byte as runtime code.
pub const STOP_RUNTIME: Bytes = bytes!("600138f3");

/// Stores the last constructor argument word in slot 0 and deploys no code.
pub const ECHO_LAST_ARGUMENT: Bytes = bytes!("60206020380360003960005160005500");

/// A proxy stand-in: deploys the implementation creation code it is given, bubbling up a
/// failure, stores the implementation in slot 0 and the upgrade authority in slot 1 and
/// returns a `STOP` runtime. The initializer call is not executed.
pub const CREATING_PROXY: Bytes = bytes!(
    "3860006000396052516032018051906020016000f08015602757600055603251600155600138f35b3d600060003e3d6000fd"
);

/// Stores `TIMESTAMP`, `CHAINID`, `GASLIMIT`, `COINBASE`, `NUMBER` and `DIFFICULTY` in slots 0 to
/// 5 and returns a `STOP` runtime.
pub const CONTEXT_RECORDER: Bytes =
    bytes!("426000554660015545600255416003554360045544600555600138f3");

/// A proxy stand-in for a one-entry treasury. The `SystemReward` initializer call is the last
/// constructor argument, so its share word sits 60 bytes and its account word 124 bytes before
/// the end of the creation code. Stores the share in slot 0 and the account in slot 1 and returns
/// a `STOP` runtime.
pub const TREASURY_RECORDING_PROXY: Bytes = bytes!(
    "6020603c38036000396000516000556020607c3803600039600051600155600138f3"
);

/// Deploys a runtime that reverts on every call.
pub const REVERTING_RUNTIME: Bytes = bytes!("6005600c60003960056000f360006000fd");

pub fn localnet() -> GenesisConfig {
    GenesisConfig::from_json(include_str!("res/localnet.json")).unwrap()
}

/// Every artifact deploys `STOP_RUNTIME`, the proxy included.
pub fn stub_artifacts() -> InMemoryArtifacts {
    ArtifactId::ALL
        .into_iter()
        .map(|id| (id, Artifact::new(STOP_RUNTIME)))
        .collect()
}

/// Stand-ins that exercise the proxy layout: implementations are deployed by the proxy and
/// `RuntimeUpgrade` records the last sibling address it is given.
pub fn proxy_artifacts() -> InMemoryArtifacts {
    stub_artifacts()
        .with(ArtifactId::RuntimeProxy, Artifact::new(CREATING_PROXY))
        .with(ArtifactId::RuntimeUpgrade, Artifact::new(ECHO_LAST_ARGUMENT))
}

/// Creation code reverting with `Error(reason)`.
pub fn reverting_with(reason: &str) -> Bytes {
    let mut payload = selector("Error(string)").to_vec();
    payload.extend(abi_encode_params(&["string"], vec![sol_string(reason)]).unwrap());
    let len = u8::try_from(payload.len()).unwrap();
    let head = [0x60, len, 0x60, 0x0c, 0x60, 0x00, 0x39, 0x60, len, 0x60, 0x00, 0xfd];

    [head.as_slice(), payload.as_slice()].concat().into()
}

/// Counts how many artifacts were requested.
pub struct CountingArtifacts<R> {
    inner: R,
    loads: Cell<usize>,
}

impl<R> CountingArtifacts<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            loads: Cell::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.get()
    }
}

impl<R: ArtifactRepository> ArtifactRepository for CountingArtifacts<R> {
    fn artifact(&self, id: ArtifactId) -> Result<Artifact, ArtifactError> {
        self.loads.set(self.loads.get() + 1);
        self.inner.artifact(id)
    }
}
