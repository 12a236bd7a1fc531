// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `deploy-voting`.

use std::process::ExitCode;

use clap::Parser;

use crate::error::DeployVotingResult;

mod common_args;
mod constants;
mod deploy;
mod error;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "deploy-voting")]
#[command(author = "Offchain Labs, Inc.")]
#[command(about = "Deploy the Voting contract and print its address", long_about = None)]
#[command(version)]
struct Args {
    #[command(flatten)]
    deploy: deploy::DeployArgs,

    /// Whether to print debug info.
    #[arg(long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Report any error and return proper exit code
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report();
            err.exit_code()
        }
    }
}

fn run(args: Args) -> DeployVotingResult {
    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level).map_err(eyre::Report::new)?;

    // Build async runtime and block on the deployment
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(deploy::exec(args.deploy))
}
