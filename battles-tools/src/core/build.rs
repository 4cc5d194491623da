// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use cargo_metadata::MetadataCommand;
use escargot::Cargo;

const WASM_TARGET: &str = "wasm32-unknown-unknown";

#[derive(Clone, Debug, Default)]
pub struct BuildConfig {
    pub features: Vec<String>,
}

/// Errors which can occur while building a contract to wasm.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cargo metadata error: {0}")]
    CargoMetadata(#[from] cargo_metadata::Error),

    #[error("cargo build failed for {package} ({status})")]
    Failed {
        package: String,
        status: std::process::ExitStatus,
    },
    #[error("build did not generate wasm file at {0}")]
    NoWasmFound(PathBuf),
}

/// Builds a workspace contract package to wasm, returning the path to the wasm file.
pub fn build_contract(package: &str, config: &BuildConfig) -> Result<PathBuf, BuildError> {
    info!(@grey, "building {package} for {WASM_TARGET}");

    let mut cmd = Cargo::new()
        .args(["build", "--lib", "--locked", "--release"])
        .args(["--target", WASM_TARGET])
        .args(["--package", package]);
    if !config.features.is_empty() {
        cmd = cmd.args(["--features", &config.features.join(",")]);
    }

    let status = cmd.into_command().status()?;
    if !status.success() {
        return Err(BuildError::Failed {
            package: package.to_string(),
            status,
        });
    }

    let metadata = MetadataCommand::new().no_deps().exec()?;
    let wasm_path = metadata
        .target_directory
        .join(WASM_TARGET)
        .join("release")
        .join("deps")
        .join(wasm_file_name(package));
    if !wasm_path.exists() {
        return Err(BuildError::NoWasmFound(wasm_path.into()));
    }

    debug!(@grey, "built wasm at {wasm_path}");
    Ok(wasm_path.into())
}

fn wasm_file_name(package: &str) -> String {
    format!("{}.wasm", package.replace('-', "_"))
}
