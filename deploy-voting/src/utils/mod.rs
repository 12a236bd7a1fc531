// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::utils::{parse_units, ParseUnits};
use eyre::{bail, WrapErr};

/// Parses a decimal gwei amount, such as `--max-fee-per-gas-gwei 1.5`, into wei.
pub fn gwei_to_wei(gwei: &str) -> eyre::Result<u128> {
    let wei = match parse_units(gwei.trim(), "gwei")
        .wrap_err_with(|| format!("invalid gwei amount: {gwei}"))?
    {
        ParseUnits::U256(wei) => wei,
        ParseUnits::I256(wei) if !wei.is_negative() => wei.into_raw(),
        ParseUnits::I256(_) => bail!("gwei amount must be non-negative: {gwei}"),
    };
    let Ok(wei) = u128::try_from(wei) else {
        bail!("gwei amount out of range: {gwei}");
    };
    Ok(wei)
}
