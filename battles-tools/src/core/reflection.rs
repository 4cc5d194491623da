// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract interfaces, read by running the contract crate as a native binary.

use std::{collections::BTreeMap, process::Stdio};

use alloy::{
    json_abi::JsonAbi,
    primitives::{keccak256, Selector},
};
use escargot::Cargo;

use crate::{config::ContractKind, interfaces};

/// Feature that enables reflection when running the contract binary.
const FEATURE: &str = "export-abi";

#[derive(Debug, thiserror::Error)]
pub enum ReflectionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to run contract{0}")]
    FailedToRunContract(String),
    #[error("malformed interface line: {0}")]
    MalformedInterface(String),
}

/// Solidity interface exported by the contract itself.
pub fn solidity_abi(kind: ContractKind) -> Result<Vec<u8>, ReflectionError> {
    reflect(kind.package(), "abi")
}

/// JSON ABI, as written for the front end.
pub fn json_abi(kind: ContractKind) -> Result<Vec<u8>, ReflectionError> {
    Ok(serde_json::to_vec_pretty(&interfaces::abi(kind))?)
}

/// Functions declared by an exported Solidity interface, keyed by selector.
///
/// Parameters must be elementary types, which holds for every workspace contract.
pub fn interface_functions(solidity: &str) -> Result<BTreeMap<Selector, String>, ReflectionError> {
    let mut functions = BTreeMap::new();
    for line in solidity.lines().map(str::trim) {
        let Some(decl) = line.strip_prefix("function ") else {
            continue;
        };
        let malformed = || ReflectionError::MalformedInterface(line.to_string());
        let (name, rest) = decl.split_once('(').ok_or_else(malformed)?;
        let (params, _) = rest.split_once(')').ok_or_else(malformed)?;
        let types: Vec<_> = params
            .split(',')
            .filter_map(|param| param.split_whitespace().next())
            .collect();
        let signature = format!("{}({})", name.trim(), types.join(","));
        let selector = Selector::from_slice(&keccak256(signature.as_bytes())[..4]);
        functions.insert(selector, signature);
    }
    Ok(functions)
}

/// Differences between the functions a contract exports and its client bindings.
pub fn binding_drift(kind: ContractKind) -> Result<Vec<String>, ReflectionError> {
    let exported = solidity_abi(kind)?;
    let exported = interface_functions(&String::from_utf8_lossy(&exported))?;
    Ok(drift(&exported, &interfaces::abi(kind)))
}

fn drift(exported: &BTreeMap<Selector, String>, abi: &JsonAbi) -> Vec<String> {
    let bound: BTreeMap<Selector, String> = abi
        .functions()
        .map(|function| (function.selector(), function.signature()))
        .collect();
    let unbound = exported
        .iter()
        .filter(|(selector, _)| !bound.contains_key(*selector))
        .map(|(_, signature)| format!("{signature} has no binding"));
    let stale = bound
        .iter()
        .filter(|(selector, _)| !exported.contains_key(*selector))
        .map(|(_, signature)| format!("{signature} is not exported"));
    unbound.chain(stale).collect()
}

fn reflect(package: &str, command: &str) -> Result<Vec<u8>, ReflectionError> {
    debug!(@grey, "running {package} with --features {FEATURE}");
    let output = Cargo::new()
        .into_command()
        .stderr(Stdio::inherit())
        .args(["run", "--quiet"])
        .args(["--package", package])
        .args(["--features", FEATURE])
        .args(["--", command])
        .output()?;
    if !output.status.success() {
        let out = String::from_utf8_lossy(&output.stdout);
        let out = (!out.is_empty())
            .then(|| format!(": {out}"))
            .unwrap_or_default();
        return Err(ReflectionError::FailedToRunContract(out));
    }
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use alloy::json_abi::JsonAbi;

    use super::*;

    const EXPORTED: &str = r#"
/**
 * This file was automatically generated by Stylus and represents a Rust program.
 */

interface IBuyMeACoffee {
    function buyCoffee(string calldata name, string calldata message) external payable;

    function getMinTip() external view returns (uint256);

    function getMemos() external view returns ((address,string,string)[] memory);

    error DidNotTipEnough(uint256, uint256);
}"#;

    #[test]
    fn reads_exported_functions() {
        let functions = interface_functions(EXPORTED).unwrap();
        let signatures: Vec<_> = functions.values().map(String::as_str).collect();
        assert_eq!(functions.len(), 3);
        assert!(signatures.contains(&"buyCoffee(string,string)"));
        assert!(signatures.contains(&"getMemos()"));

        let expected = Selector::from_slice(&keccak256("getMinTip()")[..4]);
        assert_eq!(functions[&expected], "getMinTip()");
    }

    #[test]
    fn flags_missing_and_stale_bindings() {
        let exported = interface_functions(EXPORTED).unwrap();
        let abi = JsonAbi::parse([
            "function buyCoffee(string name, string message) payable",
            "function getMinTip() view returns (uint256)",
            "function withdraw()",
        ])
        .unwrap();
        assert_eq!(
            drift(&exported, &abi),
            ["getMemos() has no binding", "withdraw() is not exported"]
        );
    }

    #[test]
    fn malformed_lines_are_errors() {
        assert!(matches!(
            interface_functions("    function broken external;"),
            Err(ReflectionError::MalformedInterface(_))
        ));
    }

    #[test]
    #[cfg(feature = "integration-tests")]
    fn bindings_match_exported_interfaces() {
        for kind in [ContractKind::ChainBattles, ContractKind::BuyMeACoffee] {
            assert_eq!(binding_drift(kind).unwrap(), Vec::<String>::new(), "{kind}");
        }
    }

    #[test]
    fn json_abi_parses_back() {
        let bytes = json_abi(ContractKind::BuyMeACoffee).unwrap();
        let abi: JsonAbi = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(abi, interfaces::abi(ContractKind::BuyMeACoffee));
    }
}
