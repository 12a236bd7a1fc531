// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Check that a deployed contract runs the artifact's code.

use alloy::{
    primitives::{Address, Bytes},
    transports::TransportError,
};

use crate::{core::artifact::ContractFactory, utils::color::DebugColor};

/// Reads contract code from a network.
#[allow(async_fn_in_trait)]
pub trait CodeSource {
    async fn code_at(&self, address: Address) -> Result<Bytes, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error(transparent)]
    Rpc(#[from] TransportError),
    #[error("no code at address {}", .0.debug_red())]
    NoCode(Address),
    #[error("artifact for {0} has no runtime bytecode to compare against")]
    NoRuntimeBytecode(String),
    #[error(
        "code at {} does not match artifact (expected {expected_len} bytes, found {actual_len})",
        .address.debug_red()
    )]
    Mismatch {
        address: Address,
        expected_len: usize,
        actual_len: usize,
    },
}

/// Compares the code stored at `address` with the factory's runtime bytecode.
pub async fn verify_deployment(
    source: &impl CodeSource,
    factory: &ContractFactory,
    address: Address,
) -> Result<(), VerificationError> {
    let expected = factory
        .deployed_bytecode()
        .ok_or_else(|| VerificationError::NoRuntimeBytecode(factory.name().to_owned()))?;
    let actual = source.code_at(address).await?;
    if actual.is_empty() {
        return Err(VerificationError::NoCode(address));
    }
    if actual != *expected {
        return Err(VerificationError::Mismatch {
            address,
            expected_len: expected.len(),
            actual_len: actual.len(),
        });
    }
    info!(@grey, "verified code at {} matches {}", address.debug_lavender(), factory.name());
    Ok(())
}
