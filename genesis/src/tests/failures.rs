use {
    super::*,
    crate::{
        Artifact, ArtifactError, DirectoryArtifacts, InMemoryArtifacts, build, build_and_write,
        system_contracts::GOVERNANCE_ADDRESS,
    },
    sysgen_evm_ext::ExecutionError,
};

#[test]
fn test_voting_key_mismatch_fails_before_any_artifact_is_loaded() {
    let mut config = localnet();
    config.voting_keys.clear();
    let artifacts = CountingArtifacts::new(stub_artifacts());

    let actual = build(&config, &artifacts).unwrap_err();

    assert!(matches!(
        actual,
        Error::Config(ConfigError::VotingKeyCountMismatch {
            validators: 1,
            keys: 0
        })
    ));
    assert_eq!(artifacts.loads(), 0);
}

#[test]
fn test_missing_initial_stake_fails_before_any_artifact_is_loaded() {
    let mut config = localnet();
    config.initial_stakes.clear();
    let artifacts = CountingArtifacts::new(stub_artifacts());

    let actual = build(&config, &artifacts).unwrap_err();

    assert!(matches!(
        actual,
        Error::Config(ConfigError::MissingInitialStake(a)) if a == LOCALNET_VALIDATOR
    ));
    assert_eq!(artifacts.loads(), 0);
}

#[test]
fn test_faucet_on_system_contract_is_rejected_before_execution() {
    let mut config = localnet();
    config.faucet.insert(GOVERNANCE_ADDRESS, "0x1".to_owned());
    let artifacts = CountingArtifacts::new(stub_artifacts());

    let actual = build(&config, &artifacts).unwrap_err();

    assert!(matches!(
        actual,
        Error::Config(ConfigError::FaucetConflict(a)) if a == GOVERNANCE_ADDRESS
    ));
    assert_eq!(artifacts.loads(), 0);
}

#[test]
fn test_oversized_block_rewards_fail_before_any_artifact_is_loaded() {
    let mut config = localnet();
    config.block_rewards = Some(U256::MAX);
    let artifacts = CountingArtifacts::new(stub_artifacts());

    let actual = build(&config, &artifacts).unwrap_err();

    assert!(matches!(
        actual,
        Error::Config(ConfigError::BlockRewardsTooLarge(r)) if r == U256::MAX
    ));
    assert_eq!(artifacts.loads(), 0);
}

#[test]
fn test_faucet_on_side_effect_contract_is_rejected() {
    let mut config = localnet();
    let implementation = STAKING_ADDRESS.create(0);
    config.faucet.insert(implementation, "0x1".to_owned());

    let actual = build(&config, &proxy_artifacts()).unwrap_err();

    assert!(matches!(
        actual,
        Error::Config(ConfigError::FaucetConflict(a)) if a == implementation
    ));
}

#[test]
fn test_reverting_constructor_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("genesis.json");
    let artifacts =
        proxy_artifacts().with(ArtifactId::Staking, Artifact::new(reverting_with("boom")));

    let actual =
        build_and_write(&localnet(), &artifacts, &OutputSink::File(path.clone())).unwrap_err();

    assert!(matches!(
        actual,
        Error::Construction {
            contract: ArtifactId::Staking,
            stage: Stage::Created,
            source: ExecutionError::Reverted { ref reason, .. },
        } if reason == "boom"
    ));
    assert!(!path.exists());
}

#[test]
fn test_failing_staking_probe_aborts() {
    let artifacts =
        stub_artifacts().with(ArtifactId::RuntimeProxy, Artifact::new(REVERTING_RUNTIME));

    let actual = build(&localnet(), &artifacts).unwrap_err();

    assert!(matches!(
        actual,
        Error::Construction {
            contract: ArtifactId::Staking,
            stage: Stage::PostInitialized,
            ..
        }
    ));
}

#[test]
fn test_halting_direct_deployment_names_the_contract() {
    let artifacts = stub_artifacts().with(ArtifactId::RuntimeUpgrade, Artifact::new(vec![0xfe]));

    let actual = build(&localnet(), &artifacts).unwrap_err();

    assert!(matches!(
        actual,
        Error::Construction {
            contract: ArtifactId::RuntimeUpgrade,
            stage: Stage::Created,
            source: ExecutionError::Halted { .. },
        }
    ));
}

#[test]
fn test_missing_artifact_is_reported() {
    let artifacts: InMemoryArtifacts = ArtifactId::ALL
        .into_iter()
        .filter(|id| *id != ArtifactId::Governance)
        .map(|id| (id, Artifact::new(STOP_RUNTIME)))
        .collect();

    let actual = build(&localnet(), &artifacts).unwrap_err();

    assert!(matches!(
        actual,
        Error::Artifact(ArtifactError::Missing(ArtifactId::Governance))
    ));
}

#[test]
fn test_malformed_artifact_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    for id in ArtifactId::ALL {
        std::fs::write(
            dir.path().join(format!("{}.json", id.name())),
            r#"{"bytecode": "0x600138f3", "deployedBytecode": "0x00"}"#,
        )
        .unwrap();
    }
    std::fs::write(dir.path().join("ChainConfig.json"), "{").unwrap();

    let actual = build(&localnet(), &DirectoryArtifacts::new(dir.path())).unwrap_err();

    assert!(matches!(
        actual,
        Error::Artifact(ArtifactError::Parse {
            id: ArtifactId::ChainConfig,
            ..
        })
    ));
}
