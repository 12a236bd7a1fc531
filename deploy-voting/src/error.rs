// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt, io, process::ExitCode};

use anstyle::{AnsiColor, Effects, Style};

const BOLD: Style = Style::new().effects(Effects::BOLD);
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);

pub type DeployVotingResult<T = ()> = Result<T, DeployVotingError>;

/// A run that did not end with a confirmed deployment.
///
/// Whatever the cause, the process exits with status 1.
#[derive(Debug)]
pub struct DeployVotingError(eyre::Report);

impl DeployVotingError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }

    /// Writes `error: <message>` to stderr, followed by every cause in the chain.
    pub fn report(&self) {
        eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {self}");
    }
}

impl fmt::Display for DeployVotingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#}", self.0)
    }
}

impl From<eyre::Report> for DeployVotingError {
    fn from(report: eyre::Report) -> Self {
        Self(report)
    }
}

impl From<io::Error> for DeployVotingError {
    fn from(err: io::Error) -> Self {
        Self(err.into())
    }
}

impl From<voting_tools::Error> for DeployVotingError {
    fn from(err: voting_tools::Error) -> Self {
        Self(err.into())
    }
}
