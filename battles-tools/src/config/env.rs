// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Environment variables consumed by the tools.

use std::collections::HashMap;

use crate::config::ExplorerKind;

pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
pub const ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";
pub const POLYGONSCAN_API_KEY: &str = "POLYGONSCAN_API_KEY";
pub const COINMARKETCAP_API_KEY: &str = "COINMARKETCAP_API_KEY";
pub const USE_GAS_REPORT: &str = "USE_GAS_REPORT";
pub const GAS_REPORT_TOKEN: &str = "GAS_REPORT_TOKEN";
pub const UPDATE_FRONT_END: &str = "UPDATE_FRONT_END";

const DEFAULT_GAS_REPORT_TOKEN: &str = "ETH";

/// A snapshot of the variables the tools read.
///
/// Production code builds this from the process environment after loading `.env`; tests build
/// it from a map so they never depend on the shell they run in.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Loads `.env` from the current directory (or a parent) and snapshots the process
    /// environment. Variables already set in the process win over the file.
    pub fn from_process() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!(@grey, "loaded environment from {}", path.display()),
            Err(err) if err.not_found() => debug!(@grey, "no .env file found"),
            Err(err) => warn!(@yellow, "ignoring .env file: {err}"),
        }
        Self::from_vars(std::env::vars())
    }

    /// Gets a variable, treating an empty value as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Boolean-like variables are only on for the literal string `true`.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    pub fn private_key(&self) -> Option<&str> {
        self.get(PRIVATE_KEY)
    }

    pub fn explorer_api_key(&self, kind: ExplorerKind) -> Option<&str> {
        self.get(kind.api_key_var())
    }

    pub fn coinmarketcap_api_key(&self) -> Option<&str> {
        self.get(COINMARKETCAP_API_KEY)
    }

    pub fn use_gas_report(&self) -> bool {
        self.flag(USE_GAS_REPORT)
    }

    pub fn gas_report_token(&self) -> &str {
        self.get(GAS_REPORT_TOKEN)
            .unwrap_or(DEFAULT_GAS_REPORT_TOKEN)
    }

    pub fn update_front_end(&self) -> bool {
        self.flag(UPDATE_FRONT_END)
    }
}
