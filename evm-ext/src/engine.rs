use {
    crate::{
        DEFAULT_GAS_LIMIT, EXECUTION_SPEC, MAX_CODE_SIZE,
        error::ExecutionError,
        header::HeaderForExecution,
        revert::decode_revert_reason,
        state::{ScratchAccount, ScratchState, StateStore},
        state_changes::apply_state_changes,
    },
    alloy::eips::eip2930::AccessList,
    revm::{
        Journal, JournalEntry, MainBuilder, MainContext,
        context::{BlockEnv, CfgEnv, Context, Evm, TxEnv},
        context_interface::{
            block::BlobExcessGasAndPrice,
            result::{EVMError, ExecutionResult, ResultAndState},
        },
        database::in_memory_db::InMemoryDB,
        handler::{EthFrame, EthPrecompiles, Handler, MainnetHandler, instructions::EthInstructions},
        interpreter::interpreter::EthInterpreter,
        primitives::TxKind,
    },
    std::{collections::BTreeMap, convert::Infallible},
    sysgen_shared::primitives::{Address, B256, Bytes, U256},
};

/// Runs construction code and calls against a single-use state.
pub trait ExecutionEngine {
    /// Runs `init_code` as if it were the constructor of a contract living at `target` and
    /// installs the returned bytes as the code of `target`.
    fn create(&mut self, target: Address, init_code: Bytes) -> Result<Bytes, ExecutionError>;

    /// Calls `target` with `payload` and returns the output.
    fn call(&mut self, target: Address, payload: Bytes) -> Result<Bytes, ExecutionError>;
}

/// A throwaway `revm` instance over an in-memory database.
///
/// Transactions are sent from the zero address with a zero gas price. Nonce and balance checks
/// are disabled because the sender is synthetic. Everything runs under [`EXECUTION_SPEC`].
///
/// Construction does not go through `CREATE`, because the resulting address must be the fixed
/// `target` rather than one derived from the sender. Instead the init code is installed as the
/// code of `target` and called with empty data, which gives the constructor the same `ADDRESS`,
/// `CODECOPY` and storage view it would have during a regular deployment. The target keeps
/// nonce 0, so the first contract its constructor deploys lands at `target.create(0)`.
#[derive(Debug)]
pub struct EphemeralEvm {
    state: ScratchState,
    header: HeaderForExecution,
    chain_id: u64,
}

impl EphemeralEvm {
    pub fn new(header: HeaderForExecution, chain_id: u64) -> Self {
        Self {
            state: ScratchState::new(),
            header,
            chain_id,
        }
    }

    fn transact(&mut self, target: Address, data: Bytes) -> Result<Bytes, ExecutionError> {
        let engine_error = |e: EVMError<Infallible>| ExecutionError::Engine {
            address: target,
            message: format!("{e:?}"),
        };

        let mut evm = Context::mainnet()
            .with_db(&mut self.state.db)
            .with_tx(TxEnv {
                caller: Address::ZERO,
                gas_limit: DEFAULT_GAS_LIMIT,
                gas_price: 0,
                tx_type: 0,
                kind: TxKind::Call(target),
                value: U256::ZERO,
                data,
                nonce: 0,
                chain_id: None,
                access_list: AccessList::default(),
                gas_priority_fee: None,
                blob_hashes: Vec::new(),
                max_fee_per_blob_gas: 0,
                authorization_list: Vec::new(),
            })
            .with_block(BlockEnv {
                number: self.header.number,
                beneficiary: self.header.coinbase,
                timestamp: self.header.timestamp,
                gas_limit: self.header.gas_limit,
                basefee: 0,
                difficulty: self.header.difficulty,
                prevrandao: Some(self.header.mix_hash),
                blob_excess_gas_and_price: Some(BlobExcessGasAndPrice {
                    excess_blob_gas: 0,
                    blob_gasprice: 0,
                }),
            })
            .modify_cfg_chained(|env| {
                env.chain_id = self.chain_id;
                env.spec = EXECUTION_SPEC;
                env.disable_balance_check = true;
                env.disable_nonce_check = true;
            })
            .build_mainnet();

        let outcome = ScratchHandler::default().run(&mut evm).map_err(engine_error)?;
        drop(evm);

        let ResultAndState { result, state } = outcome;
        apply_state_changes(&mut self.state, state);

        match result {
            ExecutionResult::Success {
                output, gas_used, ..
            } => {
                tracing::debug!(%target, gas_used, "Execution succeeded");
                Ok(output.into_data())
            }
            ExecutionResult::Revert { output, gas_used } => {
                let reason = decode_revert_reason(&output);
                tracing::debug!(%target, gas_used, %reason, "Execution reverted");
                Err(ExecutionError::Reverted {
                    address: target,
                    reason,
                })
            }
            ExecutionResult::Halt { reason, gas_used } => {
                tracing::debug!(%target, gas_used, ?reason, "Execution halted");
                Err(ExecutionError::Halted {
                    address: target,
                    reason: format!("{reason:?}"),
                })
            }
        }
    }
}

impl ExecutionEngine for EphemeralEvm {
    fn create(&mut self, target: Address, init_code: Bytes) -> Result<Bytes, ExecutionError> {
        self.state.set_code(target, init_code);

        let code = self.transact(target, Bytes::new())?;
        if code.len() > MAX_CODE_SIZE {
            return Err(ExecutionError::CodeTooLarge {
                address: target,
                size: code.len(),
                limit: MAX_CODE_SIZE,
            });
        }

        self.state.set_code(target, code.clone());
        Ok(code)
    }

    fn call(&mut self, target: Address, payload: Bytes) -> Result<Bytes, ExecutionError> {
        self.transact(target, payload)
    }
}

impl StateStore for EphemeralEvm {
    fn set_balance(&mut self, address: Address, balance: U256) {
        self.state.set_balance(address, balance)
    }

    fn account(&self, address: &Address) -> Option<&ScratchAccount> {
        self.state.account(address)
    }

    fn storage_diff(&self, address: &Address) -> BTreeMap<B256, B256> {
        self.state.storage_diff(address)
    }

    fn touched(&self) -> Vec<Address> {
        self.state.touched()
    }
}

// Type aliases to make the `revm` types more tractable
type ScratchDB<'a> = &'a mut InMemoryDB;
type ScratchCtx<'a> =
    Context<BlockEnv, TxEnv, CfgEnv, ScratchDB<'a>, Journal<ScratchDB<'a>, JournalEntry>>;
type ScratchEvm<'a> =
    Evm<ScratchCtx<'a>, (), EthInstructions<EthInterpreter, ScratchCtx<'a>>, EthPrecompiles>;
type ScratchHandler<'a> = MainnetHandler<
    ScratchEvm<'a>,
    EVMError<Infallible>,
    EthFrame<ScratchEvm<'a>, EVMError<Infallible>, EthInterpreter>,
>;
