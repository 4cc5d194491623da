// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract wasm, processed and compressed into the form stored on-chain.

use std::{fs, path::Path};

use alloy::primitives::{keccak256, B256};
use bytesize::ByteSize;

use crate::utils::{format_file_size, wasm};

/// Maximum brotli compression level used for Stylus contracts.
pub const BROTLI_COMPRESSION_LEVEL: u32 = 11;

/// EOF prefix used in Stylus compressed wasms on-chain.
pub const EOF_NO_DICT: &[u8] = &[0xEF, 0xF0, 0x00, 0x00];

/// Largest code a single contract account may hold.
pub const MAX_CODE_SIZE: usize = 24 * 1024;

/// Contract code ready to be embedded in a deployment: prefix plus compressed wasm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractCode(Vec<u8>);

impl ContractCode {
    pub fn from_wasm_file(filename: impl AsRef<Path>) -> Result<Self, CodeError> {
        let wasm = fs::read(filename).map_err(CodeError::Read)?;
        Self::from_wasm(&wasm)
    }

    /// Processes and compresses raw wasm, checking the result fits in one account.
    pub fn from_wasm(wasm: &[u8]) -> Result<Self, CodeError> {
        let processed = process_wasm(wasm)?;
        let compressed = wasm::brotli_compress(processed.as_slice(), BROTLI_COMPRESSION_LEVEL)
            .map_err(CodeError::BrotliCompress)?;
        let code = Self::new(&compressed, MAX_CODE_SIZE)?;

        let size = ByteSize::b(code.codesize() as u64);
        let mid = ByteSize::kib(16);
        let max = ByteSize::b(MAX_CODE_SIZE as u64);
        debug!(@grey, "uncompressed wasm size: {}", ByteSize::b(processed.len() as u64));
        info!(@grey, "contract size: {}", format_file_size(size, mid, max));
        Ok(code)
    }

    fn new(compressed: &[u8], max_code_size: usize) -> Result<Self, CodeError> {
        let size = EOF_NO_DICT.len() + compressed.len();
        if size > max_code_size {
            return Err(CodeError::TooLarge {
                size,
                max: max_code_size,
            });
        }
        let mut code = Vec::with_capacity(size);
        code.extend(EOF_NO_DICT);
        code.extend(compressed);
        Ok(Self(code))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Codehash is keccak256 hash of the code bytes
    pub fn codehash(&self) -> B256 {
        keccak256(&self.0)
    }

    pub fn codesize(&self) -> usize {
        self.0.len()
    }
}

fn process_wasm(wasm: &[u8]) -> Result<Vec<u8>, CodeError> {
    let wasm = wasm::remove_dangling_references(wasm)?;
    wasm::strip_user_metadata(wasm).map_err(CodeError::StripUserMetadata)
}

#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    #[error("error reading wasm file: {0}")]
    Read(std::io::Error),
    #[error("error removing dangling references: {0}")]
    RemoveDanglingReferences(#[from] wasm::RemoveDanglingReferencesError),
    #[error("error stripping user metadata: {0}")]
    StripUserMetadata(wasmparser::BinaryReaderError),
    #[error("failed to compress Wasm bytes")]
    BrotliCompress(std::io::Error),
    #[error("compressed contract is {size} bytes, more than the {max} byte limit")]
    TooLarge { size: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use brotli2::read::BrotliDecoder;

    use super::*;

    const WAT: &str = r#"(module
        (func (export "user_entrypoint") (param i32) (result i32) i32.const 0))"#;

    #[test]
    fn code_is_prefixed_compressed_wasm() {
        let wasm = wat::parse_str(WAT).unwrap();
        let code = ContractCode::from_wasm(&wasm).unwrap();
        assert!(code.bytes().starts_with(EOF_NO_DICT));
        assert_eq!(code.codehash(), keccak256(code.bytes()));

        let mut decompressed = vec![];
        BrotliDecoder::new(&code.bytes()[EOF_NO_DICT.len()..])
            .read_to_end(&mut decompressed)
            .unwrap();
        wasmparser::Validator::new()
            .validate_all(&decompressed)
            .unwrap();
    }

    #[test]
    fn oversized_code_is_rejected() {
        let err = ContractCode::new(&[0; 100], 64).unwrap_err();
        assert!(matches!(err, CodeError::TooLarge { size: 104, max: 64 }));
        assert_eq!(ContractCode::new(&[0; 60], 64).unwrap().codesize(), 64);
    }

    #[test]
    fn invalid_wasm_fails() {
        assert!(ContractCode::from_wasm(b"not wasm").is_err());
    }
}
