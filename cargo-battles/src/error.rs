// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use battles_tools::{config::ConfigError, core::deployment::DeploymentError};

pub type CargoBattlesResult = Result<(), CargoBattlesError>;

/// Exit code for a bad network table or environment, as opposed to a failed operation.
const CONFIG_EXIT_CODE: u8 = 2;

#[derive(Debug)]
pub struct CargoBattlesError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl CargoBattlesError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for CargoBattlesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for CargoBattlesError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for CargoBattlesError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<battles_tools::Error> for CargoBattlesError {
    fn from(err: battles_tools::Error) -> Self {
        let exit_code = match err {
            battles_tools::Error::Config(_) => ExitCode::from(CONFIG_EXIT_CODE),
            _ => ExitCode::FAILURE,
        };
        Self {
            error: err.into(),
            exit_code,
        }
    }
}

impl From<ConfigError> for CargoBattlesError {
    fn from(err: ConfigError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::from(CONFIG_EXIT_CODE),
        }
    }
}

impl From<DeploymentError> for CargoBattlesError {
    fn from(err: DeploymentError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
