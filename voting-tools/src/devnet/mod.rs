// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::local::PrivateKeySigner,
};
use eyre::{Result, WrapErr};
use reqwest::{header::HeaderValue, Method, Response};
use testcontainers::{
    core::{wait::HttpWaitStrategy, IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

/// First prefunded Anvil account.
pub const DEVNET_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

const ANVIL_IMAGE_NAME: &str = "ghcr.io/foundry-rs/foundry";
const ANVIL_IMAGE_TAG: &str = "stable";
const ANVIL_PORT: u16 = 8545;

pub mod addresses {
    pub use alloy::primitives::{address, Address};

    /// Address of [`DEVNET_PRIVATE_KEY`](super::DEVNET_PRIVATE_KEY).
    pub const OWNER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
}

/// Manage an Anvil devnet node for deploying contracts.
pub struct Node {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl Node {
    /// Starts a new Anvil node in the background that mines a block per transaction.
    /// This node will be shutdown when this struct is dropped.
    pub async fn new() -> Result<Self> {
        Self::start(&[]).await
    }

    /// Starts a node that accepts transactions but never mines them.
    pub async fn without_mining() -> Result<Self> {
        Self::start(&["--no-mining"]).await
    }

    async fn start(extra_args: &[&str]) -> Result<Self> {
        let wait_strategy = HttpWaitStrategy::new("/")
            .with_port(ANVIL_PORT.into())
            .with_method(Method::POST)
            .with_header("Content-Type", HeaderValue::from_static("application/json"))
            .with_body(r#"{"jsonrpc":"2.0","method":"net_version","params":[],"id":1}"#)
            .with_response_matcher_async(anvil_response_matcher);
        let mut cmd = vec!["--host", "0.0.0.0"];
        cmd.extend_from_slice(extra_args);
        let container = GenericImage::new(ANVIL_IMAGE_NAME, ANVIL_IMAGE_TAG)
            .with_entrypoint("anvil")
            .with_exposed_port(ANVIL_PORT.tcp())
            .with_wait_for(WaitFor::Http(wait_strategy))
            .with_cmd(cmd)
            .start()
            .await
            .wrap_err("failed to start Anvil container")?;
        let port = container
            .get_host_port_ipv4(ANVIL_PORT)
            .await
            .wrap_err("failed to get Anvil RPC port")?;
        let rpc = format!("http://localhost:{port}");
        Ok(Node {
            _container: container,
            rpc,
        })
    }

    /// Get the Anvil node RPC.
    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// Create a provider signing with the prefunded devnet key.
    pub async fn create_provider(&self) -> Result<impl Provider + WalletProvider> {
        let signer: PrivateKeySigner = DEVNET_PRIVATE_KEY
            .parse()
            .wrap_err("failed to parse devnet private key")?;
        self.provider_with_signer(signer).await
    }

    /// Create a provider signing with a fresh key that holds no funds.
    pub async fn create_unfunded_provider(&self) -> Result<impl Provider + WalletProvider> {
        self.provider_with_signer(PrivateKeySigner::random()).await
    }

    async fn provider_with_signer(
        &self,
        signer: PrivateKeySigner,
    ) -> Result<impl Provider + WalletProvider> {
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(self.rpc())
            .await?;
        Ok(provider)
    }
}

async fn anvil_response_matcher(response: Response) -> bool {
    let Ok(text) = response.text().await else {
        return false;
    };
    text.contains("result")
}
