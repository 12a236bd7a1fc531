// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf, time::Duration};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::local::{LocalSigner, PrivateKeySigner},
};
use eyre::{bail, eyre, Context};
use voting_tools::{core::artifact::ArtifactStore, utils::decode0x};

use crate::{
    constants::{DEFAULT_ENDPOINT, FOUNDRY_ARTIFACTS_DIR, HARDHAT_ARTIFACTS_DIR},
    utils::gwei_to_wei,
};

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Directory holding compiled artifacts (defaults to `artifacts`, or `out` if only that exists)
    #[arg(long, env = "ARTIFACTS_DIR")]
    artifacts: Option<PathBuf>,
}

impl ArtifactArgs {
    pub fn store(&self) -> ArtifactStore {
        if let Some(dir) = &self.artifacts {
            return ArtifactStore::new(dir);
        }
        let hardhat = PathBuf::from(HARDHAT_ARTIFACTS_DIR);
        let foundry = PathBuf::from(FOUNDRY_ARTIFACTS_DIR);
        if !hardhat.is_dir() && foundry.is_dir() {
            ArtifactStore::new(foundry)
        } else {
            ArtifactStore::new(hardhat)
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    fn build_wallet(&self) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return signer_from_hex(key);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return signer_from_hex(&key);
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!(
            "no wallet configured; pass --private-key, --private-key-path or --keystore-path"
        ))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer = LocalSigner::decrypt_keystore(keystore, password)?;
        Ok(EthereumWallet::new(signer))
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| gwei_to_wei(fee_str))
            .transpose()
    }
}

fn signer_from_hex(key: &str) -> eyre::Result<EthereumWallet> {
    let key = decode0x(key).wrap_err("invalid private key hex")?;
    if key.len() != 32 {
        bail!("private key must be 32 bytes, got {}", key.len());
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(key.as_slice());
    let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?;
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct ConfirmationArgs {
    /// Number of confirmations to wait for before reporting the address
    #[arg(long, default_value_t = 1)]
    confirmations: u64,
    /// Give up waiting for confirmation after this many seconds (waits indefinitely if unset)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl ConfirmationArgs {
    pub fn confirmations(&self) -> u64 {
        self.confirmations
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint of the target chain
    #[arg(short, long, env = "ETH_RPC_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    /// Builds a signing provider. For HTTP endpoints no request is made until the provider is used.
    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let wallet = auth.build_wallet()?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await
            .wrap_err_with(|| format!("invalid endpoint: {}", self.endpoint))?;
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANVIL_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn auth(private_key: Option<&str>) -> AuthArgs {
        AuthArgs {
            private_key_path: None,
            private_key: private_key.map(str::to_owned),
            keystore_path: None,
            keystore_password_path: None,
            max_fee_per_gas_gwei: Some("1.5".to_owned()),
        }
    }

    #[tokio::test]
    async fn wallet_from_private_key() {
        let provider = ProviderArgs {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
        .build_provider_with_wallet(&auth(Some(ANVIL_KEY)))
        .await
        .unwrap();
        assert_eq!(
            provider.default_signer_address().to_string(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[test]
    fn missing_wallet() {
        let err = auth(None).build_wallet().unwrap_err();
        assert!(err.to_string().contains("no wallet configured"));
    }

    #[test]
    fn short_private_key() {
        assert!(auth(Some("0x1234")).build_wallet().is_err());
    }

    #[tokio::test]
    async fn invalid_endpoint() {
        let result = ProviderArgs {
            endpoint: "not a url".to_owned(),
        }
        .build_provider_with_wallet(&auth(Some(ANVIL_KEY)))
        .await;
        assert!(result.is_err());
    }

    #[test]
    fn max_fee_in_wei() {
        assert_eq!(
            auth(None).get_max_fee_per_gas_wei().unwrap(),
            Some(1_500_000_000)
        );
    }

    #[test]
    fn confirmation_defaults() {
        let args = ConfirmationArgs {
            confirmations: 1,
            timeout_secs: None,
        };
        assert_eq!(args.confirmations(), 1);
        assert_eq!(args.timeout(), None);
    }
}
