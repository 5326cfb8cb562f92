//! Chain specification translation
//!
//! This module converts an Ethash [`Genesis`] into the chain spec formats of
//! other Ethereum clients, so nodes of different implementations can start
//! from the same genesis block.
//!
//! Each dialect is built by an independent, pure constructor:
//! - [`AlethGenesisSpec::from_genesis`]
//! - [`ParityChainSpec::from_genesis`]
//! - [`PyEthereumGenesisSpec::from_genesis`]

pub mod aleth;
pub mod aleth_types;
pub mod encoding;
pub mod hardforks;
pub mod parity;
pub mod parity_types;
pub mod precompiles;
pub mod pyethereum;

pub use aleth_types::AlethGenesisSpec;
pub use hardforks::{Fork, ForkSchedule};
pub use parity_types::ParityChainSpec;
pub use pyethereum::PyEthereumGenesisSpec;

use crate::errors::ChainSpecError;
use alloy_genesis::Genesis;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Whether the genesis runs the one consensus engine every dialect supports.
pub fn is_ethash(genesis: &Genesis) -> bool {
    genesis.config.ethash.is_some()
}

/// Fails with [`ChainSpecError::UnsupportedConsensusEngine`] unless the genesis is Ethash.
pub fn ensure_ethash(genesis: &Genesis) -> Result<(), ChainSpecError> {
    if !is_ethash(genesis) {
        return Err(ChainSpecError::UnsupportedConsensusEngine);
    }
    Ok(())
}

/// Target chain spec format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dialect {
    /// C++ client (Aleth)
    Aleth,
    /// Parity / OpenEthereum
    Parity,
    /// PyEthereum
    PyEthereum,
}

impl Dialect {
    /// Every supported dialect.
    pub const ALL: [Dialect; 3] = [Dialect::Aleth, Dialect::Parity, Dialect::PyEthereum];

    /// Suffix used in exported file names, `<network>-<suffix>.json`.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Dialect::Aleth => "aleth",
            Dialect::Parity => "parity",
            Dialect::PyEthereum => "python",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Aleth => "Aleth",
            Dialect::Parity => "Parity",
            Dialect::PyEthereum => "PyEthereum",
        };
        f.write_str(name)
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aleth" => Ok(Dialect::Aleth),
            "parity" => Ok(Dialect::Parity),
            "python" | "pyethereum" => Ok(Dialect::PyEthereum),
            other => Err(format!("unknown chain spec dialect: {other}")),
        }
    }
}

/// A chain spec in any of the supported dialects
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChainSpecDocument {
    /// Aleth genesis spec
    Aleth(AlethGenesisSpec),
    /// Parity chain spec
    Parity(ParityChainSpec),
    /// PyEthereum genesis spec
    PyEthereum(PyEthereumGenesisSpec),
}

impl ChainSpecDocument {
    /// Dialect this document was built for.
    pub fn dialect(&self) -> Dialect {
        match self {
            ChainSpecDocument::Aleth(_) => Dialect::Aleth,
            ChainSpecDocument::Parity(_) => Dialect::Parity,
            ChainSpecDocument::PyEthereum(_) => Dialect::PyEthereum,
        }
    }
}

/// Builds the chain spec for `dialect`.
///
/// `network` and `bootnodes` are only used by the Parity format.
pub fn translate(
    dialect: Dialect,
    network: &str,
    genesis: &Genesis,
    bootnodes: &[String],
) -> Result<ChainSpecDocument, ChainSpecError> {
    Ok(match dialect {
        Dialect::Aleth => ChainSpecDocument::Aleth(AlethGenesisSpec::from_genesis(genesis)?),
        Dialect::Parity => {
            ChainSpecDocument::Parity(ParityChainSpec::from_genesis(network, genesis, bootnodes)?)
        }
        Dialect::PyEthereum => {
            ChainSpecDocument::PyEthereum(PyEthereumGenesisSpec::from_genesis(genesis)?)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genesis::GenesisConfig;

    fn broken_istanbul() -> Genesis {
        GenesisConfig::default()
            .with_chain_id(1234)
            .with_fork(Fork::Homestead, 0)
            .with_fork(Fork::Istanbul, 20)
            .build()
    }

    #[test]
    fn test_is_ethash() {
        let mut genesis = GenesisConfig::default().build();
        assert!(is_ethash(&genesis));
        genesis.config.ethash = None;
        assert!(!is_ethash(&genesis));
    }

    #[test]
    fn test_dialect_parse() {
        assert_eq!("aleth".parse::<Dialect>(), Ok(Dialect::Aleth));
        assert_eq!("Parity".parse::<Dialect>(), Ok(Dialect::Parity));
        assert_eq!("python".parse::<Dialect>(), Ok(Dialect::PyEthereum));
        assert!("geth".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_dialect_suffixes() {
        let suffixes: Vec<_> = Dialect::ALL.iter().map(Dialect::file_suffix).collect();
        assert_eq!(suffixes, vec!["aleth", "parity", "python"]);
    }

    #[test]
    fn test_istanbul_without_byzantium_per_dialect() {
        let genesis = broken_istanbul();
        let expected = ChainSpecError::InvalidForkDependency {
            fork: Fork::Istanbul,
            requires: Fork::Byzantium,
        };

        assert_eq!(
            translate(Dialect::Aleth, "net", &genesis, &[]),
            Err(expected.clone())
        );
        assert_eq!(translate(Dialect::Parity, "net", &genesis, &[]), Err(expected));
        let python = translate(Dialect::PyEthereum, "net", &genesis, &[]).unwrap();
        assert_eq!(python.dialect(), Dialect::PyEthereum);
    }

    #[test]
    fn test_unsupported_engine_fails_every_dialect() {
        // A broken fork schedule must not mask the engine error
        let mut genesis = broken_istanbul();
        genesis.config.ethash = None;

        for dialect in Dialect::ALL {
            assert_eq!(
                translate(dialect, "net", &genesis, &[]),
                Err(ChainSpecError::UnsupportedConsensusEngine),
                "{dialect}"
            );
        }
    }

    #[test]
    fn test_translate_is_deterministic() {
        let genesis = GenesisConfig::default()
            .with_fork(Fork::Byzantium, 10)
            .with_fork(Fork::Istanbul, 20)
            .build();
        for dialect in Dialect::ALL {
            let first = translate(dialect, "net", &genesis, &[]).unwrap();
            let second = translate(dialect, "net", &genesis, &[]).unwrap();
            assert_eq!(first.dialect(), dialect);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }
}
