// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract creation transaction

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
};

use super::SubmissionError;
use crate::utils::color::DebugColor;

/// Contract creation transaction request
#[derive(Debug)]
pub struct DeploymentRequest {
    sender: Address,
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(sender: Address, init_code: Bytes, max_fee_per_gas_wei: Option<u128>) -> Self {
        Self {
            sender,
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(init_code),
            max_fee_per_gas_wei,
        }
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, SubmissionError> {
        provider
            .estimate_gas(self.tx.clone())
            .await
            .map_err(SubmissionError::GasEstimation)
    }

    /// Sends the transaction, returning once the node has accepted it.
    pub async fn send(self, provider: &impl Provider) -> Result<TxHash, SubmissionError> {
        let gas = self.estimate_gas(provider).await?;
        let fee_per_gas = self.fee_per_gas(provider).await?;
        debug!(@grey, "estimated gas: {} at {} wei", gas, fee_per_gas);

        let required = U256::from(gas) * U256::from(fee_per_gas);
        let balance = provider.get_balance(self.sender).await?;
        if balance < required {
            return Err(SubmissionError::NotEnoughFunds {
                from_address: self.sender,
                balance,
                required,
            });
        }

        let mut tx = self.tx;
        tx.gas = Some(gas);
        if let Some(max_fee_per_gas) = self.max_fee_per_gas_wei {
            tx.max_fee_per_gas = Some(max_fee_per_gas);
            tx.max_priority_fee_per_gas = Some(0);
        }

        let pending = provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());
        Ok(tx_hash)
    }

    async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, SubmissionError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }
}
