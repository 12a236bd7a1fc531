// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! In-memory chain for exercising deployments without a node.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use alloy::{
    json_abi::JsonAbi,
    primitives::{address, keccak256, Address, Bytes, TxHash, U256},
    transports::TransportError,
};

use crate::core::{
    artifact::{ContractFactory, ResolutionError},
    deployment::{
        ConfirmationError, ConfirmedDeployment, DeploymentClient, PendingDeployment,
        SubmissionError,
    },
    verification::CodeSource,
};

/// Runtime code returning the word 42.
pub const VOTING_RUNTIME_CODE: &str = "0x602a60005260206000f3";

/// Init code copying [`VOTING_RUNTIME_CODE`] into place.
pub const VOTING_INIT_CODE: &str = "0x600a600c600039600a6000f3602a60005260206000f3";

const DEPLOY_COST_WEI: u64 = 53_000;

pub fn voting_factory() -> ContractFactory {
    ContractFactory::new(
        "Voting",
        JsonAbi::default(),
        super::decode0x(VOTING_INIT_CODE).unwrap().into(),
        Some(super::decode0x(VOTING_RUNTIME_CODE).unwrap().into()),
    )
}

#[derive(Debug, Default)]
struct MockChain {
    nonce: u64,
    submitted: usize,
    pending: HashMap<TxHash, (u64, Bytes)>,
    code: HashMap<Address, Bytes>,
}

#[derive(Debug)]
pub struct MockClient {
    factories: HashMap<String, ContractFactory>,
    sender: Address,
    balance: U256,
    confirm: bool,
    revert: bool,
    resolved: AtomicUsize,
    chain: Mutex<MockChain>,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            sender: address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            balance: U256::from(10).pow(U256::from(20)),
            confirm: true,
            revert: false,
            resolved: AtomicUsize::new(0),
            chain: Mutex::default(),
        }
    }

    pub fn with_factory(mut self, factory: ContractFactory) -> Self {
        self.factories.insert(factory.name().to_owned(), factory);
        self
    }

    pub fn with_balance(mut self, balance: U256) -> Self {
        self.balance = balance;
        self
    }

    pub fn never_confirm(mut self) -> Self {
        self.confirm = false;
        self
    }

    pub fn revert(mut self) -> Self {
        self.revert = true;
        self
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    /// Number of artifact lookups made through this client.
    pub fn resolved_count(&self) -> usize {
        self.resolved.load(Ordering::Relaxed)
    }

    pub fn submitted_count(&self) -> usize {
        self.chain.lock().unwrap().submitted
    }

    pub fn deployed_count(&self) -> usize {
        self.chain.lock().unwrap().code.len()
    }
}

impl DeploymentClient for MockClient {
    fn contract_factory(&self, name: &str) -> Result<ContractFactory, ResolutionError> {
        self.resolved.fetch_add(1, Ordering::Relaxed);
        self.factories
            .get(name)
            .cloned()
            .ok_or_else(|| ResolutionError::NotFound {
                name: name.to_owned(),
                root: "mock".into(),
            })
    }

    async fn deploy(
        &self,
        factory: &ContractFactory,
    ) -> Result<PendingDeployment, SubmissionError> {
        let required = U256::from(DEPLOY_COST_WEI);
        if self.balance < required {
            return Err(SubmissionError::NotEnoughFunds {
                from_address: self.sender,
                balance: self.balance,
                required,
            });
        }

        let mut chain = self.chain.lock().unwrap();
        let nonce = chain.nonce;
        chain.nonce += 1;
        chain.submitted += 1;

        let mut preimage = self.sender.to_vec();
        preimage.extend(nonce.to_be_bytes());
        let tx_hash = keccak256(preimage);
        let runtime = factory.deployed_bytecode().cloned().unwrap_or_default();
        chain.pending.insert(tx_hash, (nonce, runtime));
        Ok(PendingDeployment::new(factory.name(), tx_hash))
    }

    async fn wait_for_deployment(
        &self,
        pending: PendingDeployment,
    ) -> Result<ConfirmedDeployment, ConfirmationError> {
        let tx_hash = pending.tx_hash();
        if !self.confirm {
            return Err(ConfirmationError::Timeout { tx_hash });
        }
        if self.revert {
            return Err(ConfirmationError::Reverted { tx_hash });
        }

        let mut chain = self.chain.lock().unwrap();
        let (nonce, runtime) = chain
            .pending
            .remove(&tx_hash)
            .ok_or(ConfirmationError::MissingAddress { tx_hash })?;
        let address = self.sender.create(nonce);
        chain.code.insert(address, runtime);
        let block_number = chain.code.len() as u64;
        Ok(pending.confirm(address, Some(block_number), DEPLOY_COST_WEI))
    }
}

impl CodeSource for MockClient {
    async fn code_at(&self, address: Address) -> Result<Bytes, TransportError> {
        Ok(self
            .chain
            .lock()
            .unwrap()
            .code
            .get(&address)
            .cloned()
            .unwrap_or_default())
    }
}
