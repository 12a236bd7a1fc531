// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment handles.
//!
//! A deployment starts out as a [`PendingDeployment`] and becomes a [`ConfirmedDeployment`] once
//! its transaction is final. Only the confirmed handle carries a contract address.

use std::fmt;

use alloy::primitives::{Address, TxHash};

/// A deployment transaction accepted by the network but not yet final.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDeployment {
    contract: String,
    tx_hash: TxHash,
}

impl PendingDeployment {
    pub fn new(contract: impl Into<String>, tx_hash: TxHash) -> Self {
        Self {
            contract: contract.into(),
            tx_hash,
        }
    }

    pub fn contract(&self) -> &str {
        &self.contract
    }

    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Marks the deployment as final.
    pub fn confirm(
        self,
        address: Address,
        block_number: Option<u64>,
        gas_used: u64,
    ) -> ConfirmedDeployment {
        ConfirmedDeployment {
            contract: self.contract,
            tx_hash: self.tx_hash,
            address,
            block_number,
            gas_used,
        }
    }
}

/// A deployment whose transaction reached the required confirmation depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmedDeployment {
    contract: String,
    tx_hash: TxHash,
    address: Address,
    block_number: Option<u64>,
    gas_used: u64,
}

impl ConfirmedDeployment {
    pub fn contract(&self) -> &str {
        &self.contract
    }

    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Address of the deployed contract.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn block_number(&self) -> Option<u64> {
        self.block_number
    }

    pub fn gas_used(&self) -> u64 {
        self.gas_used
    }
}

impl fmt::Display for ConfirmedDeployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} contract deployed to: {}", self.contract, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256};

    #[test]
    fn confirmation_keeps_tx_and_adds_address() {
        let tx_hash = b256!("0x0101010101010101010101010101010101010101010101010101010101010101");
        let pending = PendingDeployment::new("Voting", tx_hash);
        let confirmed = pending.confirm(
            address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            Some(1),
            21_000,
        );
        assert_eq!(confirmed.contract(), "Voting");
        assert_eq!(confirmed.tx_hash(), tx_hash);
        assert_eq!(confirmed.block_number(), Some(1));
        assert_eq!(confirmed.gas_used(), 21_000);
        assert_eq!(
            confirmed.to_string(),
            "Voting contract deployed to: 0x5FbDB2315678afecb367f032d93F642f64180aa3"
        );
    }
}
