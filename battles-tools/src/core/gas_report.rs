// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Gas usage per contract method, written as a plain-text table.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Write,
    path::{Path, PathBuf},
};

use alloy::{
    primitives::{utils::format_ether, U256},
    rpc::types::TransactionReceipt,
};
use serde_json::Value;

use crate::{config::Environment, utils::fs};

/// Where reports are written, relative to the workspace root.
pub const GAS_REPORT_DIR: &str = "reports";

const COINMARKETCAP_QUOTES_URL: &str =
    "https://pro-api.coinmarketcap.com/v1/cryptocurrency/quotes/latest";

#[derive(Debug, thiserror::Error)]
pub enum GasReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("no USD quote for {0} in price response")]
    MissingQuote(String),
}

/// Gas spent by a single transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GasUsage {
    pub contract: String,
    pub method: String,
    pub gas_used: u64,
    pub gas_price: u128,
}

impl GasUsage {
    pub fn from_receipt(
        contract: impl Into<String>,
        method: impl Into<String>,
        receipt: &TransactionReceipt,
    ) -> Self {
        Self {
            contract: contract.into(),
            method: method.into(),
            gas_used: receipt.gas_used,
            gas_price: receipt.effective_gas_price,
        }
    }

    /// Cost in wei.
    pub fn cost(&self) -> U256 {
        U256::from(self.gas_used) * U256::from(self.gas_price)
    }
}

#[derive(Clone, Debug, Default)]
pub struct GasReport {
    entries: Vec<GasUsage>,
}

struct MethodStats {
    calls: u64,
    min: u64,
    max: u64,
    total_gas: u64,
    total_cost: U256,
}

impl GasReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, usage: GasUsage) {
        debug!(@grey, "{}.{} used {} gas", usage.contract, usage.method, usage.gas_used);
        self.entries.push(usage);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contracts(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|entry| entry.contract.as_str())
            .collect()
    }

    /// The entries recorded for `contract` alone.
    pub fn for_contract(&self, contract: &str) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|entry| entry.contract == contract)
            .cloned()
            .collect();
        Self { entries }
    }

    fn stats(&self) -> BTreeMap<(&str, &str), MethodStats> {
        let mut stats: BTreeMap<(&str, &str), MethodStats> = BTreeMap::new();
        for entry in &self.entries {
            let key = (entry.contract.as_str(), entry.method.as_str());
            let stat = stats.entry(key).or_insert(MethodStats {
                calls: 0,
                min: u64::MAX,
                max: 0,
                total_gas: 0,
                total_cost: U256::ZERO,
            });
            stat.calls += 1;
            stat.min = stat.min.min(entry.gas_used);
            stat.max = stat.max.max(entry.gas_used);
            stat.total_gas += entry.gas_used;
            stat.total_cost += entry.cost();
        }
        stats
    }

    /// Renders the report, with costs in `token` and optionally in USD.
    pub fn render(&self, token: &str, usd_price: Option<f64>) -> String {
        let mut out = String::new();
        let cost_header = format!("Avg cost ({token})");
        let _ = write!(
            out,
            "{:<16} {:<24} {:>6} {:>10} {:>10} {:>10} {:>22}",
            "Contract", "Method", "Calls", "Min", "Max", "Avg", cost_header
        );
        if usd_price.is_some() {
            let _ = write!(out, " {:>12}", "Avg (USD)");
        }
        out.push('\n');

        for ((contract, method), stat) in self.stats() {
            let avg_gas = stat.total_gas / stat.calls;
            let avg_cost = stat.total_cost / U256::from(stat.calls);
            let _ = write!(
                out,
                "{:<16} {:<24} {:>6} {:>10} {:>10} {:>10} {:>22}",
                contract,
                method,
                stat.calls,
                stat.min,
                stat.max,
                avg_gas,
                format_ether(avg_cost)
            );
            if let Some(price) = usd_price {
                let ether: f64 = format_ether(avg_cost).parse().unwrap_or_default();
                let _ = write!(out, " {:>12.4}", ether * price);
            }
            out.push('\n');
        }
        out
    }

    pub fn write(
        &self,
        path: impl AsRef<Path>,
        token: &str,
        usd_price: Option<f64>,
    ) -> Result<(), GasReportError> {
        let path = path.as_ref();
        fs::write_atomic(path, self.render(token, usd_price))?;
        info!(@grey, "gas report written to {}", path.display());
        Ok(())
    }
}

/// Fetches the USD price of `token` from CoinMarketCap.
pub async fn fetch_usd_price(
    client: &reqwest::Client,
    api_key: &str,
    token: &str,
) -> Result<f64, GasReportError> {
    let body: Value = client
        .get(COINMARKETCAP_QUOTES_URL)
        .header("X-CMC_PRO_API_KEY", api_key)
        .query(&[("symbol", token), ("convert", "USD")])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    usd_quote(&body, token).ok_or_else(|| GasReportError::MissingQuote(token.to_string()))
}

fn usd_quote(body: &Value, token: &str) -> Option<f64> {
    let entry = &body["data"][token];
    // the API returns a list per symbol in v2 and a single object in v1
    let entry = entry.get(0).unwrap_or(entry);
    entry["quote"]["USD"]["price"].as_f64()
}

/// Report file of `contract` under `root`.
pub fn report_path(root: impl AsRef<Path>, contract: &str) -> PathBuf {
    root.as_ref()
        .join(GAS_REPORT_DIR)
        .join(format!("gas-report-{contract}.txt"))
}

/// Writes the report if `USE_GAS_REPORT` is on, pricing in USD when a CoinMarketCap key is set.
///
/// Each contract gets its own file, so runs for different contracts keep each other's tables.
pub async fn write_if_enabled(
    report: &GasReport,
    env: &Environment,
    root: impl AsRef<Path>,
) -> Result<(), GasReportError> {
    if !env.use_gas_report() || report.is_empty() {
        return Ok(());
    }
    let token = env.gas_report_token();
    let usd_price = match env.coinmarketcap_api_key() {
        Some(api_key) => {
            match fetch_usd_price(&reqwest::Client::new(), api_key, token).await {
                Ok(price) => Some(price),
                Err(err) => {
                    warn!(@yellow, "could not fetch {token} price: {err}");
                    None
                }
            }
        }
        None => None,
    };
    for contract in report.contracts() {
        let path = report_path(&root, contract);
        report.for_contract(contract).write(path, token, usd_price)?;
    }
    Ok(())
}
