// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! EVM initcode that returns the contract code when run.

use alloy::primitives::{Bytes, U256};

/// Length of the initcode that copies the code into memory and returns it.
const INITCODE_LENGTH: usize = 42;

/// Length of the trailing version byte.
const METADATA_LENGTH: usize = 1;

/// Offset of the contract code within the initcode.
const PRELUDE_LENGTH: usize = INITCODE_LENGTH + METADATA_LENGTH;

/// Stylus initcode version.
const VERSION: u8 = 0x00;

/// Initcode passed to the Stylus deployer as its `bytecode` argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentCalldata(Vec<u8>);

impl DeploymentCalldata {
    pub fn new(code: &[u8]) -> Self {
        let code_len: [u8; 32] = U256::from(code.len()).to_be_bytes();
        let mut initcode = Vec::with_capacity(PRELUDE_LENGTH + code.len());
        initcode.push(0x7f); // PUSH32 <code length>
        initcode.extend(code_len);
        initcode.extend([
            0x80, // DUP1
            0x60, // PUSH1 <code offset>
            PRELUDE_LENGTH as u8,
            0x60, // PUSH1 0
            0x00,
            0x39, // CODECOPY
            0x60, // PUSH1 0
            0x00,
            0xf3, // RETURN
            VERSION,
        ]);
        initcode.extend(code);
        Self(initcode)
    }

    pub fn prelude(&self) -> &[u8] {
        &self.0[..PRELUDE_LENGTH]
    }

    /// The contract code following the prelude.
    pub fn code(&self) -> &[u8] {
        &self.0[PRELUDE_LENGTH..]
    }
}

impl From<DeploymentCalldata> for Bytes {
    fn from(calldata: DeploymentCalldata) -> Bytes {
        calldata.0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_encodes_code_length() {
        let code = [0xEF, 0xF0, 0x00, 0x00, 0xaa, 0xbb];
        let calldata = DeploymentCalldata::new(&code);

        let prelude = calldata.prelude();
        assert_eq!(prelude.len(), 43);
        assert_eq!(prelude[0], 0x7f);
        assert_eq!(U256::from_be_slice(&prelude[1..33]), U256::from(code.len()));
        assert_eq!(prelude[35], 43);
        assert_eq!(prelude[41], 0xf3);
        assert_eq!(prelude[42], VERSION);
        assert_eq!(calldata.code(), code);
    }
}
