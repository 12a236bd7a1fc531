// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Capabilities the deployment procedure depends on.

use alloy::{
    primitives::{Address, Bytes},
    providers::{PendingTransactionBuilder, Provider, WalletProvider},
    transports::TransportError,
};

use super::{
    request::DeploymentRequest, ConfirmationError, ConfirmedDeployment, DeploymentConfig,
    PendingDeployment, SubmissionError,
};
use crate::core::{
    artifact::{ArtifactStore, ContractFactory, ResolutionError},
    verification::CodeSource,
};

/// Access to compiled artifacts and a network able to deploy them.
#[allow(async_fn_in_trait)]
pub trait DeploymentClient {
    /// Resolves a contract name to a factory.
    fn contract_factory(&self, name: &str) -> Result<ContractFactory, ResolutionError>;

    /// Submits a creation transaction for the factory's contract.
    async fn deploy(&self, factory: &ContractFactory)
        -> Result<PendingDeployment, SubmissionError>;

    /// Waits until a submitted deployment is final.
    async fn wait_for_deployment(
        &self,
        pending: PendingDeployment,
    ) -> Result<ConfirmedDeployment, ConfirmationError>;
}

/// [`DeploymentClient`] backed by an artifact directory and a wallet-enabled provider.
#[derive(Debug)]
pub struct ProviderClient<P> {
    provider: P,
    artifacts: ArtifactStore,
    config: DeploymentConfig,
}

impl<P> ProviderClient<P> {
    pub fn new(provider: P, artifacts: ArtifactStore, config: DeploymentConfig) -> Self {
        Self {
            provider,
            artifacts,
            config,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }
}

impl<P: Provider + WalletProvider> DeploymentClient for ProviderClient<P> {
    fn contract_factory(&self, name: &str) -> Result<ContractFactory, ResolutionError> {
        self.artifacts
            .load(name)?
            .with_constructor_args(&self.config.constructor_args)
    }

    async fn deploy(
        &self,
        factory: &ContractFactory,
    ) -> Result<PendingDeployment, SubmissionError> {
        let sender = self.provider.default_signer_address();
        debug!(@grey, "sender address: {}", sender);
        let req = DeploymentRequest::new(
            sender,
            factory.init_code().clone(),
            self.config.max_fee_per_gas_wei,
        );
        let tx_hash = req.send(&self.provider).await?;
        Ok(PendingDeployment::new(factory.name(), tx_hash))
    }

    async fn wait_for_deployment(
        &self,
        pending: PendingDeployment,
    ) -> Result<ConfirmedDeployment, ConfirmationError> {
        let tx_hash = pending.tx_hash();
        debug!(
            @grey,
            "waiting for {} confirmation(s) of {}",
            self.config.confirmations,
            tx_hash
        );
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .with_required_confirmations(self.config.confirmations)
            .with_timeout(self.config.timeout)
            .get_receipt()
            .await
            .map_err(|err| ConfirmationError::from_pending(tx_hash, err))?;
        if !receipt.status() {
            return Err(ConfirmationError::Reverted { tx_hash });
        }
        let address = receipt
            .contract_address
            .ok_or(ConfirmationError::MissingAddress { tx_hash })?;
        Ok(pending.confirm(address, receipt.block_number, receipt.gas_used))
    }
}

impl<P: Provider> CodeSource for ProviderClient<P> {
    async fn code_at(&self, address: Address) -> Result<Bytes, TransportError> {
        self.provider.get_code_at(address).await
    }
}
