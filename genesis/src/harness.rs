use {
    crate::{error::Error, system_contracts::SystemContract},
    alloy::primitives::hex,
    std::{collections::BTreeMap, fmt},
    sysgen_evm_ext::{ExecutionEngine, StateStore},
    sysgen_shared::primitives::{Address, B256, Bytes, U256},
};

/// Progress of one system contract through its scratch environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Provisioned,
    Created,
    PostInitialized,
    Captured,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::Provisioned => "provisioning",
            Self::Created => "creating",
            Self::PostInitialized => "post-initializing",
            Self::Captured => "capturing",
        };
        f.write_str(stage)
    }
}

/// Everything needed to build one system contract.
#[derive(Debug, Clone)]
pub struct Construction {
    pub contract: SystemContract,
    pub init_code: Bytes,
    /// Balance set on the target before its constructor runs.
    pub prefund: Option<U256>,
    /// Call made to the target once it is constructed.
    pub post_init_call: Option<Bytes>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedAccount {
    pub balance: U256,
    pub nonce: u64,
    pub code: Bytes,
    /// Non-zero slots only.
    pub storage: BTreeMap<B256, B256>,
}

impl CapturedAccount {
    /// Empty in the EIP-161 sense, with no storage either.
    pub fn is_empty(&self) -> bool {
        self.balance.is_zero() && self.nonce == 0 && self.code.is_empty() && self.storage.is_empty()
    }
}

/// Accounts left behind by one construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub target: Address,
    pub accounts: BTreeMap<Address, CapturedAccount>,
}

/// Runs one construction to completion and extracts the accounts it touched.
///
/// Capture happens after the post-initialization call, so anything that call writes is part of
/// the result. The target is always captured. Other touched accounts are captured unless they are empty,
/// which covers accounts a constructor merely called or probed. The engine is consumed so
/// nothing of the scratch state outlives the capture.
pub fn construct<E>(mut engine: E, construction: Construction) -> Result<Captured, Error>
where
    E: ExecutionEngine + StateStore,
{
    let Construction {
        contract,
        init_code,
        prefund,
        post_init_call,
    } = construction;
    let target = contract.address;
    let failed = |stage| {
        move |source| Error::Construction {
            contract: contract.id,
            stage,
            source,
        }
    };

    if let Some(balance) = prefund {
        engine.set_balance(target, balance);
    }
    tracing::info!(
        contract = %contract.id,
        address = %target,
        init_code = init_code.len(),
        prefund = %prefund.unwrap_or_default(),
        "Constructing system contract"
    );

    let code = engine
        .create(target, init_code)
        .map_err(failed(Stage::Created))?;
    tracing::debug!(contract = %contract.id, code = code.len(), "Created");

    if let Some(payload) = post_init_call {
        let output = engine
            .call(target, payload)
            .map_err(failed(Stage::PostInitialized))?;
        tracing::info!(
            contract = %contract.id,
            output = %hex::encode_prefixed(&output),
            "Post-initialization call returned"
        );
    }

    let accounts: BTreeMap<_, _> = engine
        .touched()
        .into_iter()
        .filter_map(|address| {
            let account = engine.account(&address)?;
            let captured = CapturedAccount {
                balance: account.balance,
                nonce: account.nonce,
                code: account.code.clone(),
                storage: engine.storage_diff(&address),
            };
            (address == target || !captured.is_empty()).then_some((address, captured))
        })
        .collect();
    tracing::debug!(
        contract = %contract.id,
        accounts = accounts.len(),
        slots = accounts.get(&target).map_or(0, |a| a.storage.len()),
        "Captured"
    );

    Ok(Captured { target, accounts })
}
