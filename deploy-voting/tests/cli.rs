// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

const ANVIL_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Nothing listens on the discard port, so any RPC call fails fast.
const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9";

const VOTING_ARTIFACT: &str = r#"{
  "_format": "hh-sol-artifact-1",
  "contractName": "Voting",
  "sourceName": "contracts/Voting.sol",
  "abi": [],
  "bytecode": "0x600a600c600039600a6000f3602a60005260206000f3",
  "deployedBytecode": "0x602a60005260206000f3",
  "linkReferences": {},
  "deployedLinkReferences": {}
}"#;

fn deploy_voting(artifacts: &Path) -> Command {
    let mut cmd = Command::cargo_bin("deploy-voting").unwrap();
    for var in ["ARTIFACTS_DIR", "CONTRACT_NAME", "ETH_RPC_URL", "PRIVATE_KEY"] {
        cmd.env_remove(var);
    }
    cmd.arg("--artifacts")
        .arg(artifacts)
        .args(["--endpoint", UNREACHABLE_ENDPOINT]);
    cmd
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_artifact_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let output = deploy_voting(dir.path())
        .args(["--private-key", ANVIL_KEY])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Voting"), "{stderr}");
    assert!(stderr.contains("not found"), "{stderr}");
}

#[test]
fn missing_artifacts_directory() {
    let dir = TempDir::new().unwrap();
    let output = deploy_voting(&dir.path().join("artifacts"))
        .env("PRIVATE_KEY", ANVIL_KEY)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("artifacts directory not found"));
}

#[test]
fn unreachable_network_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let artifact = dir.path().join("contracts/Voting.sol/Voting.json");
    fs::create_dir_all(artifact.parent().unwrap()).unwrap();
    fs::write(&artifact, VOTING_ARTIFACT).unwrap();

    let output = deploy_voting(dir.path())
        .args(["--private-key", ANVIL_KEY])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("error"));
}

#[test]
fn missing_wallet_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let output = deploy_voting(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("no wallet configured"));
}
