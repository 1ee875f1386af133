use {
    crate::artifact::ArtifactId,
    alloy::primitives::{address, hex},
    sysgen_shared::primitives::Address,
};

pub const STAKING_ADDRESS: Address = address!("0000000000000000000000000000000000001000");
pub const SLASHING_INDICATOR_ADDRESS: Address = address!("0000000000000000000000000000000000001001");
pub const SYSTEM_REWARD_ADDRESS: Address = address!("0000000000000000000000000000000000001002");
pub const STAKING_POOL_ADDRESS: Address = address!("0000000000000000000000000000000000007001");
pub const GOVERNANCE_ADDRESS: Address = address!("0000000000000000000000000000000000007002");
pub const CHAIN_CONFIG_ADDRESS: Address = address!("0000000000000000000000000000000000007003");
pub const RUNTIME_UPGRADE_ADDRESS: Address = address!("0000000000000000000000000000000000007004");
pub const DEPLOYER_PROXY_ADDRESS: Address = address!("0000000000000000000000000000000000007005");

/// Reserved for protocol upgrades to write into. Installed with zero balance.
pub const INTERMEDIARY_SYSTEM_ADDRESS: Address =
    address!("fffffffffffffffffffffffffffffffffffffffe");

/// Call made to the staking contract once it is constructed: `0xfacd743b` with a zero address.
pub const STAKING_PROBE_CALL: [u8; 36] =
    hex!("facd743b0000000000000000000000000000000000000000000000000000000000000000");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    /// Artifact bytecode with the sibling addresses as constructor arguments.
    Direct,
    /// A `RuntimeProxy` that deploys the direct shape and calls its initializer.
    Proxy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemContract {
    pub id: ArtifactId,
    pub address: Address,
    pub deployment: Deployment,
}

impl SystemContract {
    const fn new(id: ArtifactId, address: Address, deployment: Deployment) -> Self {
        Self {
            id,
            address,
            deployment,
        }
    }
}

/// System contracts in deployment order.
pub const SYSTEM_CONTRACTS: [SystemContract; 8] = [
    SystemContract::new(ArtifactId::Staking, STAKING_ADDRESS, Deployment::Proxy),
    SystemContract::new(ArtifactId::ChainConfig, CHAIN_CONFIG_ADDRESS, Deployment::Proxy),
    SystemContract::new(
        ArtifactId::SlashingIndicator,
        SLASHING_INDICATOR_ADDRESS,
        Deployment::Proxy,
    ),
    SystemContract::new(ArtifactId::StakingPool, STAKING_POOL_ADDRESS, Deployment::Proxy),
    SystemContract::new(ArtifactId::SystemReward, SYSTEM_REWARD_ADDRESS, Deployment::Proxy),
    SystemContract::new(ArtifactId::Governance, GOVERNANCE_ADDRESS, Deployment::Proxy),
    SystemContract::new(
        ArtifactId::RuntimeUpgrade,
        RUNTIME_UPGRADE_ADDRESS,
        Deployment::Direct,
    ),
    SystemContract::new(
        ArtifactId::DeployerProxy,
        DEPLOYER_PROXY_ADDRESS,
        Deployment::Proxy,
    ),
];

/// Constructor arguments every system contract receives so it can find its siblings.
pub const SIBLING_ADDRESSES: [Address; 8] = [
    STAKING_ADDRESS,
    SLASHING_INDICATOR_ADDRESS,
    SYSTEM_REWARD_ADDRESS,
    STAKING_POOL_ADDRESS,
    GOVERNANCE_ADDRESS,
    CHAIN_CONFIG_ADDRESS,
    RUNTIME_UPGRADE_ADDRESS,
    DEPLOYER_PROXY_ADDRESS,
];

/// Whether `address` belongs to a system contract or the intermediary system address.
pub fn is_reserved(address: &Address) -> bool {
    *address == INTERMEDIARY_SYSTEM_ADDRESS || SIBLING_ADDRESSES.contains(address)
}
