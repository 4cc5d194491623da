// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("{0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("{0}")]
    Build(#[from] crate::core::build::BuildError),
    #[error("{0}")]
    Code(#[from] crate::core::code::CodeError),
    #[error("{0}")]
    Deployment(#[from] crate::core::deployment::DeploymentError),
    #[error("{0}")]
    Verification(#[from] crate::core::verification::VerificationError),
    #[error("{0}")]
    Frontend(#[from] crate::core::frontend::FrontendError),
    #[error("{0}")]
    GasReport(#[from] crate::core::gas_report::GasReportError),
    #[error("{0}")]
    Reflection(#[from] crate::core::reflection::ReflectionError),

    #[error("no deployment of {contract} recorded for {network}; deploy it or pass --address")]
    NoDeployment { contract: String, network: String },
}
