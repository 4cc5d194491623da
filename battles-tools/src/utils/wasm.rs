// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io::{self, Read};

use brotli2::read::BrotliEncoder;
use wasm_encoder::{Module, RawSection};
use wasmparser::{BinaryReaderError, Parser, Payload};

/// Take Wasm bytecode and return its brotli compressed bytes.
pub fn brotli_compress(wasm: impl Read, compression_level: u32) -> io::Result<Vec<u8>> {
    let mut compressor = BrotliEncoder::new(wasm, compression_level);
    let mut compressed_bytes = vec![];
    compressor.read_to_end(&mut compressed_bytes)?;
    Ok(compressed_bytes)
}

/// Convert the Wasm from binary to text and back to binary.
///
/// This drops dangling mentions of reference types in the Wasm body, which Arbitrum chains do
/// not support yet.
pub fn remove_dangling_references(
    wasm: impl AsRef<[u8]>,
) -> Result<Vec<u8>, RemoveDanglingReferencesError> {
    let wat_string = wasmprinter::print_bytes(wasm)?;
    let wasm = wat::parse_str(wat_string)?;
    Ok(wasm)
}

#[derive(Debug, thiserror::Error)]
pub enum RemoveDanglingReferencesError {
    #[error("failed to convert Wasm to Wat: {0}")]
    Wasm2Wat(#[from] anyhow::Error),
    #[error("failed to convert Wat to Wasm: {0}")]
    Wat2Wasm(#[from] wat::Error),
}

/// Strip all custom and unknown sections from the Wasm binary.
pub fn strip_user_metadata(wasm: impl AsRef<[u8]>) -> Result<Vec<u8>, BinaryReaderError> {
    let wasm = wasm.as_ref();
    let mut module = Module::new();
    for payload in Parser::new(0).parse_all(wasm) {
        match payload? {
            Payload::CustomSection { .. } | Payload::UnknownSection { .. } => {
                debug!(@grey, "stripped custom section from contract wasm");
            }
            item => {
                if let Some((id, range)) = item.as_section() {
                    module.section(&RawSection {
                        id,
                        data: &wasm[range],
                    });
                }
            }
        }
    }
    Ok(module.finish())
}
