// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! High-level operations composed from [`crate::core`].

use crate::{
    core::{
        deployment::{self, ConfirmedDeployment, DeploymentClient, DeploymentError},
        verification::{verify_deployment, CodeSource},
    },
    Result,
};

/// Deploys a contract and, if requested, checks the code that landed on chain.
pub async fn deploy(
    client: &(impl DeploymentClient + CodeSource),
    contract_name: &str,
    verify_code: bool,
) -> Result<ConfirmedDeployment> {
    let factory = client
        .contract_factory(contract_name)
        .map_err(DeploymentError::from)?;
    let deployment = deployment::deploy_factory(client, &factory).await?;
    if verify_code {
        verify_deployment(client, &factory, deployment.address()).await?;
    }
    Ok(deployment)
}
