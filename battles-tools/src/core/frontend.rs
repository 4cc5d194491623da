// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Publishing deployed addresses and the contract ABI to the front-end application.
//!
//! The address registry is a JSON object from chain id strings to address lists:
//!
//! ```json
//! {"5":["0x5FbDB2315678afecb367f032d93F642f64180aa3"],"412346":["0x..."]}
//! ```
//!
//! Both files are replaced atomically, so the front end never reads a partial write. Two
//! concurrent syncs can still race on the registry, in which case the last writer wins.

use std::path::Path;

use alloy::{json_abi::JsonAbi, primitives::Address};
use serde_json::{Map, Value};

use crate::{config::FrontendConfig, utils::fs};

pub type AddressRegistry = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("address registry entry for chain {0} is not a list of addresses")]
    InvalidRegistryEntry(String),
}

/// Reads the registry, treating a missing file as empty.
pub fn read_registry(path: impl AsRef<Path>) -> Result<AddressRegistry, FrontendError> {
    Ok(fs::read_json(path)?.unwrap_or_default())
}

/// Appends `address` to the list for `chain_id` unless it is already there.
///
/// Returns whether the registry changed. Entries for other chains are left untouched.
pub fn add_address(
    registry: &mut AddressRegistry,
    chain_id: u64,
    address: Address,
) -> Result<bool, FrontendError> {
    let key = chain_id.to_string();
    let address = address.to_checksum(None);

    let entry = registry
        .entry(key.clone())
        .or_insert_with(|| Value::Array(vec![]));
    let Value::Array(addresses) = entry else {
        return Err(FrontendError::InvalidRegistryEntry(key));
    };
    let present = addresses
        .iter()
        .filter_map(Value::as_str)
        .any(|existing| existing.eq_ignore_ascii_case(&address));
    if present {
        return Ok(false);
    }
    addresses.push(Value::String(address));
    Ok(true)
}

/// Records `address` for `chain_id` in the registry file.
pub fn update_addresses(
    path: impl AsRef<Path>,
    chain_id: u64,
    address: Address,
) -> Result<bool, FrontendError> {
    let path = path.as_ref();
    let mut registry = read_registry(path)?;
    let added = add_address(&mut registry, chain_id, address)?;
    if added {
        fs::write_json_atomic(path, &registry, false)?;
        info!(@grey, "added {address} for chain {chain_id} to {}", path.display());
    } else {
        debug!(@grey, "{address} already listed for chain {chain_id}");
    }
    Ok(added)
}

/// Overwrites the ABI file.
pub fn update_abi(path: impl AsRef<Path>, abi: &JsonAbi) -> Result<(), FrontendError> {
    let path = path.as_ref();
    fs::write_json_atomic(path, abi, false)?;
    info!(@grey, "wrote abi to {}", path.display());
    Ok(())
}

/// Updates both front-end files for a deployment.
pub fn sync(
    frontend: &FrontendConfig,
    chain_id: u64,
    address: Address,
    abi: &JsonAbi,
) -> Result<(), FrontendError> {
    greyln!("updating front end...");
    update_addresses(&frontend.addresses_file, chain_id, address)?;
    update_abi(&frontend.abi_file, abi)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs as stdfs;

    use alloy::primitives::address;
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    const FIRST: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
    const SECOND: Address = address!("0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512");

    #[test]
    fn missing_registry_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("constants").join("contractAddress.json");

        assert!(update_addresses(&path, 5, FIRST).unwrap());
        let written = stdfs::read_to_string(&path).unwrap();
        let written: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(written, json!({ "5": [FIRST.to_checksum(None)] }));
    }

    #[test]
    fn appends_without_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contractAddress.json");
        stdfs::write(
            &path,
            r#"{"80001":["0x0000000000000000000000000000000000000001"],"5":[]}"#,
        )
        .unwrap();

        assert!(update_addresses(&path, 5, FIRST).unwrap());
        assert!(!update_addresses(&path, 5, FIRST).unwrap());
        assert!(update_addresses(&path, 5, SECOND).unwrap());

        let registry = read_registry(&path).unwrap();
        assert_eq!(
            registry["80001"],
            json!(["0x0000000000000000000000000000000000000001"])
        );
        assert_eq!(
            registry["5"],
            json!([FIRST.to_checksum(None), SECOND.to_checksum(None)])
        );
        // other chains keep their position
        assert_eq!(registry.keys().next().map(String::as_str), Some("80001"));
    }

    #[test]
    fn lowercase_entries_count_as_present() {
        let mut registry = AddressRegistry::new();
        registry.insert(
            "5".to_string(),
            json!([FIRST.to_checksum(None).to_lowercase()]),
        );
        assert!(!add_address(&mut registry, 5, FIRST).unwrap());
    }

    #[test]
    fn malformed_entry_is_an_error() {
        let mut registry = AddressRegistry::new();
        registry.insert("5".to_string(), json!("0xabc"));
        assert!(matches!(
            add_address(&mut registry, 5, FIRST),
            Err(FrontendError::InvalidRegistryEntry(chain)) if chain == "5"
        ));
    }

    #[test]
    fn abi_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abi.json");
        stdfs::write(&path, "stale").unwrap();

        let abi = JsonAbi::parse(["function mint() payable returns (uint256)"]).unwrap();
        update_abi(&path, &abi).unwrap();
        let written = stdfs::read_to_string(&path).unwrap();
        let written: JsonAbi = serde_json::from_str(&written).unwrap();
        assert_eq!(written, abi);
    }

    fn arb_address() -> impl Strategy<Value = Address> {
        // a small pool so sequences repeat addresses
        (0u8..8).prop_map(Address::repeat_byte)
    }

    proptest! {
        #[test]
        fn registry_updates_dedupe_and_preserve(
            others in prop::collection::btree_map(1u64..100, prop::collection::vec(arb_address(), 0..4), 0..4),
            chain_id in 100u64..200,
            updates in prop::collection::vec(arb_address(), 0..12),
        ) {
            let mut registry = AddressRegistry::new();
            for (chain, addresses) in &others {
                let list: Vec<_> = addresses.iter().map(|a| a.to_checksum(None)).collect();
                registry.insert(chain.to_string(), json!(list));
            }
            let before = registry.clone();

            let mut expected: Vec<String> = vec![];
            for address in &updates {
                let added = add_address(&mut registry, chain_id, *address).unwrap();
                let text = address.to_checksum(None);
                prop_assert_eq!(added, !expected.contains(&text));
                if added {
                    expected.push(text);
                }
            }

            for (chain, value) in &before {
                prop_assert_eq!(&registry[chain], value);
            }
            if updates.is_empty() {
                prop_assert!(!registry.contains_key(&chain_id.to_string()));
            } else {
                prop_assert_eq!(&registry[&chain_id.to_string()], &json!(expected));
            }
        }
    }
}
