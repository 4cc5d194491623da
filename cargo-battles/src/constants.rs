// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Network used when `--network` is not given.
pub const DEFAULT_NETWORK: &str = "devnode";

/// Optional overrides for the built-in network table.
pub const DEFAULT_NETWORKS_FILE: &str = "networks.toml";
