use crate::chainspec::Fork;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while translating a genesis into a client chain spec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainSpecError {
    /// The genesis does not use Ethash, the only engine every dialect understands
    #[error("unsupported consensus engine")]
    UnsupportedConsensusEngine,

    /// A fork is scheduled while a fork it builds on is not
    #[error("invalid genesis, {fork} fork is enabled while {requires} is not")]
    InvalidForkDependency {
        /// The scheduled fork
        fork: Fork,
        /// The missing prerequisite
        requires: Fork,
    },
}

/// Errors from reading a genesis file or writing a chain spec to disk
#[derive(Debug, Error)]
pub enum GenesisIoError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid genesis / chain spec JSON
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// The file being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}
