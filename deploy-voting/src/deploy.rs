// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use voting_tools::{
    core::deployment::{DeploymentConfig, ProviderClient, DEFAULT_CONTRACT},
    ops,
};

use crate::{
    common_args::{ArtifactArgs, AuthArgs, ConfirmationArgs, ProviderArgs},
    error::DeployVotingResult,
};

#[derive(Debug, clap::Args)]
pub struct DeployArgs {
    /// Name of the compiled contract to deploy.
    #[arg(long, env = "CONTRACT_NAME", default_value = DEFAULT_CONTRACT)]
    contract: String,
    /// After deploying, check that the code on chain matches the artifact.
    #[arg(long)]
    verify_code: bool,
    /// The constructor arguments.
    #[arg(
        long,
        num_args(0..),
        value_name = "ARGS",
        allow_hyphen_values = true,
    )]
    constructor_args: Vec<String>,

    #[command(flatten)]
    artifacts: ArtifactArgs,
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    confirmation: ConfirmationArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

impl DeployArgs {
    #[cfg(test)]
    pub fn constructor_args(&self) -> &[String] {
        &self.constructor_args
    }

    fn config(&self) -> eyre::Result<DeploymentConfig> {
        Ok(DeploymentConfig {
            confirmations: self.confirmation.confirmations(),
            timeout: self.confirmation.timeout(),
            max_fee_per_gas_wei: self.auth.get_max_fee_per_gas_wei()?,
            constructor_args: self.constructor_args.clone(),
        })
    }
}

pub async fn exec(args: DeployArgs) -> DeployVotingResult {
    let config = args.config()?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let client = ProviderClient::new(provider, args.artifacts.store(), config);
    let deployment = ops::deploy(&client, &args.contract, args.verify_code).await?;
    println!("{deployment}");
    Ok(())
}
