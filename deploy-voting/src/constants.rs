// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The default endpoint for connections to a local development node.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

/// Hardhat build output.
pub const HARDHAT_ARTIFACTS_DIR: &str = "artifacts";

/// Foundry build output, used when no Hardhat output exists.
pub const FOUNDRY_ARTIFACTS_DIR: &str = "out";
