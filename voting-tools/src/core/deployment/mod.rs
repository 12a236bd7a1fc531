// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use std::time::Duration;

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::{PendingTransactionError, WatchTxError},
    transports::TransportError,
};

use crate::{
    core::artifact::{ContractFactory, ResolutionError},
    utils::color::{Color, DebugColor},
};

pub use client::{DeploymentClient, ProviderClient};
pub use handle::{ConfirmedDeployment, PendingDeployment};

pub mod client;
pub mod handle;
pub mod request;

/// Contract deployed when no other name is given.
pub const DEFAULT_CONTRACT: &str = "Voting";

#[derive(Debug)]
pub struct DeploymentConfig {
    /// Number of blocks the deployment must be buried under before it is considered final.
    pub confirmations: u64,
    /// How long to wait for confirmation; `None` waits until the provider gives up.
    pub timeout: Option<Duration>,
    pub max_fee_per_gas_wei: Option<u128>,
    pub constructor_args: Vec<String>,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            confirmations: 1,
            timeout: None,
            max_fee_per_gas_wei: None,
            constructor_args: Vec::new(),
        }
    }
}

/// The network refused the deployment transaction before including it.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Rpc(#[from] TransportError),
    #[error("deployment failed during gas estimation")]
    GasEstimation(#[source] TransportError),
    #[error(
        "not enough funds in account {} to deploy\nbalance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .required).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        required: U256,
    },
}

/// The deployment transaction was accepted but did not become final.
#[derive(Debug, thiserror::Error)]
pub enum ConfirmationError {
    #[error("timed out waiting for deploy tx {}", .tx_hash.debug_red())]
    Timeout { tx_hash: TxHash },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt of {}", .tx_hash.debug_red())]
    MissingAddress { tx_hash: TxHash },
    #[error("deploy tx {} failed to complete", .tx_hash.debug_red())]
    FailedToComplete {
        tx_hash: TxHash,
        #[source]
        source: PendingTransactionError,
    },
}

impl ConfirmationError {
    pub(crate) fn from_pending(tx_hash: TxHash, err: PendingTransactionError) -> Self {
        match err {
            PendingTransactionError::TxWatcher(WatchTxError::Timeout) => Self::Timeout { tx_hash },
            source => Self::FailedToComplete { tx_hash, source },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Confirmation(#[from] ConfirmationError),
}

/// Deploys one instance of the named contract and waits for it to be confirmed.
///
/// Every call creates a new contract; deploying the same artifact twice yields two addresses.
pub async fn deploy(
    client: &impl DeploymentClient,
    contract_name: &str,
) -> Result<ConfirmedDeployment, DeploymentError> {
    let factory = client.contract_factory(contract_name)?;
    deploy_factory(client, &factory).await
}

/// Deploys an already resolved contract and waits for it to be confirmed.
pub async fn deploy_factory(
    client: &impl DeploymentClient,
    factory: &ContractFactory,
) -> Result<ConfirmedDeployment, DeploymentError> {
    debug!(@grey, "init code size: {} bytes", factory.init_code().len());

    let pending = client.deploy(factory).await?;
    info!(@grey, "deployment tx hash: {}", pending.tx_hash().debug_lavender());

    let deployment = client.wait_for_deployment(pending).await?;
    info!(@grey, "deployed code at address: {}", deployment.address().debug_lavender());
    debug!(@grey, "gas used: {}", deployment.gas_used());
    Ok(deployment)
}
