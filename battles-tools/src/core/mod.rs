// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Building blocks for deploying and publishing the workspace contracts.

pub mod activation;
pub mod build;
pub mod code;
pub mod deployment;
pub mod frontend;
pub mod gas_report;
pub mod reflection;
pub mod verification;
