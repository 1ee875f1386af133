use {
    crate::error::ArtifactError,
    alloy::primitives::hex,
    serde::Deserialize,
    std::{
        collections::BTreeMap,
        fmt,
        path::{Path, PathBuf},
    },
    sysgen_shared::primitives::Bytes,
};

/// Compiled contracts the synthesizer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArtifactId {
    RuntimeProxy,
    Staking,
    SlashingIndicator,
    SystemReward,
    StakingPool,
    Governance,
    ChainConfig,
    RuntimeUpgrade,
    DeployerProxy,
}

impl ArtifactId {
    pub const ALL: [Self; 9] = [
        Self::RuntimeProxy,
        Self::Staking,
        Self::SlashingIndicator,
        Self::SystemReward,
        Self::StakingPool,
        Self::Governance,
        Self::ChainConfig,
        Self::RuntimeUpgrade,
        Self::DeployerProxy,
    ];

    /// Contract name as emitted by the compiler, which is also the artifact file stem.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RuntimeProxy => "RuntimeProxy",
            Self::Staking => "Staking",
            Self::SlashingIndicator => "SlashingIndicator",
            Self::SystemReward => "SystemReward",
            Self::StakingPool => "StakingPool",
            Self::Governance => "Governance",
            Self::ChainConfig => "ChainConfig",
            Self::RuntimeUpgrade => "RuntimeUpgrade",
            Self::DeployerProxy => "DeployerProxy",
        }
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Creation and runtime bytecode of one compiled contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub bytecode: Bytes,
    pub deployed_bytecode: Bytes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    bytecode: String,
    #[serde(default)]
    deployed_bytecode: String,
}

impl Artifact {
    pub fn new(bytecode: impl Into<Bytes>) -> Self {
        Self {
            bytecode: bytecode.into(),
            deployed_bytecode: Bytes::new(),
        }
    }

    /// Parses a truffle style artifact. Only `bytecode` and `deployedBytecode` are read.
    pub fn from_json(id: ArtifactId, json: &[u8]) -> Result<Self, ArtifactError> {
        let raw: RawArtifact =
            serde_json::from_slice(json).map_err(|source| ArtifactError::Parse { id, source })?;
        let decode = |value: &str| {
            hex::decode(value)
                .map(Bytes::from)
                .map_err(|source| ArtifactError::Bytecode { id, source })
        };

        let bytecode = decode(&raw.bytecode)?;
        if bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(id));
        }

        Ok(Self {
            bytecode,
            deployed_bytecode: decode(&raw.deployed_bytecode)?,
        })
    }
}

/// Source of compiled system contracts.
pub trait ArtifactRepository {
    fn artifact(&self, id: ArtifactId) -> Result<Artifact, ArtifactError>;
}

/// Reads `<root>/<Name>.json` files as produced by a truffle build.
#[derive(Debug, Clone)]
pub struct DirectoryArtifacts {
    root: PathBuf,
}

impl DirectoryArtifacts {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self, id: ArtifactId) -> PathBuf {
        self.root.join(format!("{}.json", id.name()))
    }
}

impl ArtifactRepository for DirectoryArtifacts {
    fn artifact(&self, id: ArtifactId) -> Result<Artifact, ArtifactError> {
        let path = self.path(id);
        let json = std::fs::read(&path).map_err(|source| ArtifactError::Read {
            id,
            path: path.clone(),
            source,
        })?;
        tracing::debug!(%id, path = %path.display(), "Loaded artifact");

        Artifact::from_json(id, &json)
    }
}

/// Artifacts held in memory, keyed by contract.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifacts {
    artifacts: BTreeMap<ArtifactId, Artifact>,
}

impl InMemoryArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: ArtifactId, artifact: Artifact) -> Self {
        self.artifacts.insert(id, artifact);
        self
    }
}

impl FromIterator<(ArtifactId, Artifact)> for InMemoryArtifacts {
    fn from_iter<T: IntoIterator<Item = (ArtifactId, Artifact)>>(iter: T) -> Self {
        Self {
            artifacts: iter.into_iter().collect(),
        }
    }
}

impl ArtifactRepository for InMemoryArtifacts {
    fn artifact(&self, id: ArtifactId) -> Result<Artifact, ArtifactError> {
        self.artifacts
            .get(&id)
            .cloned()
            .ok_or(ArtifactError::Missing(id))
    }
}
