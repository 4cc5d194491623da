// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.
//!
//! None of these know anything about ChainBattles itself; they are shared by the deployment,
//! verification and front-end modules of [`battles-tools`](crate).

use alloy::primitives::{utils::format_ether, U256};
use bytesize::ByteSize;
use color::{Color, GREY, MINT, PINK, YELLOW};

pub mod color;
pub mod fs;
pub(crate) mod wasm;

/// Pretty-prints a data fee.
pub fn format_data_fee(fee: U256) -> String {
    let text = format!("{} ETH", format_ether(fee));
    if fee <= U256::from(500_000_000_000_000u64) {
        text.mint()
    } else if fee <= U256::from(5_000_000_000_000_000u64) {
        text.yellow()
    } else {
        text.red()
    }
}

/// Pretty-prints a file size based on its limits.
pub fn format_file_size(len: ByteSize, mid: ByteSize, max: ByteSize) -> String {
    let color = if len <= mid {
        MINT
    } else if len <= max {
        YELLOW
    } else {
        PINK
    };

    format!("{color}{len}{GREY} ({} bytes)", len.as_u64())
}

pub fn bump_data_fee(data_fee: U256, bump_percent: u64) -> U256 {
    data_fee * U256::from(100 + bump_percent) / U256::from(100)
}

/// Decodes a hex string, with or without a `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bumps_data_fee_by_percent() {
        assert_eq!(bump_data_fee(U256::from(1000), 20), U256::from(1200));
        assert_eq!(bump_data_fee(U256::from(1000), 0), U256::from(1000));
        assert_eq!(bump_data_fee(U256::from(7), 50), U256::from(10));
    }

    #[test]
    fn decodes_with_and_without_prefix() {
        assert_eq!(decode0x("0xdead").unwrap(), vec![0xde, 0xad]);
        assert_eq!(decode0x(" beef\n").unwrap(), vec![0xbe, 0xef]);
        assert!(decode0x("0xzz").is_err());
    }
}
