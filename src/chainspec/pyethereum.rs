//! Genesis → PyEthereum genesis spec
//!
//! PyEthereum pins its consensus rules in code, so the document carries only
//! the genesis header and the allocation. No forks, no builtins.

use super::{
    encoding::{encode_nonce, BigQuantity, Quantity},
    ensure_ethash,
};
use crate::errors::ChainSpecError;
use alloy_genesis::{Genesis, GenesisAccount};
use alloy_primitives::{Address, Bytes, B256, B64};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Genesis specification consumed by PyEthereum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyEthereumGenesisSpec {
    pub nonce: B64,
    pub timestamp: Quantity,
    pub extra_data: Bytes,
    pub gas_limit: Quantity,
    pub difficulty: BigQuantity,
    #[serde(rename = "mixhash")]
    pub mix_hash: B256,
    pub coinbase: Address,
    pub alloc: BTreeMap<Address, GenesisAccount>,
    pub parent_hash: B256,
}

impl PyEthereumGenesisSpec {
    /// Converts a genesis into the PyEthereum format.
    ///
    /// Only the consensus engine is checked; the fork schedule is not part of
    /// this format and is never validated here.
    pub fn from_genesis(genesis: &Genesis) -> Result<Self, ChainSpecError> {
        ensure_ethash(genesis)?;

        Ok(Self {
            nonce: encode_nonce(genesis.nonce),
            timestamp: Quantity::from(genesis.timestamp),
            extra_data: genesis.extra_data.clone(),
            gas_limit: Quantity::from(genesis.gas_limit),
            difficulty: genesis.difficulty,
            mix_hash: genesis.mix_hash,
            coinbase: genesis.coinbase,
            alloc: genesis.alloc.clone(),
            parent_hash: genesis.parent_hash.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainspec::Fork;
    use crate::genesis::GenesisConfig;
    use alloy_primitives::U256;
    use serde_json::json;

    #[test]
    fn test_flat_fields() {
        let mut genesis = GenesisConfig::default()
            .with_prefunded_account(Address::with_last_byte(1), U256::from(100))
            .build();
        genesis.timestamp = 0x10;
        genesis.gas_limit = 0x47b760;
        genesis.coinbase = Address::with_last_byte(0xcb);
        let spec = PyEthereumGenesisSpec::from_genesis(&genesis).unwrap();
        let value = serde_json::to_value(&spec).unwrap();

        assert_eq!(value["nonce"], json!("0x0000000000000000"));
        assert_eq!(value["timestamp"], json!("0x10"));
        assert_eq!(value["gasLimit"], json!("0x47b760"));
        assert_eq!(value["coinbase"], json!("0x00000000000000000000000000000000000000cb"));
        assert!(value.get("mixhash").is_some());
        assert!(value.get("mixHash").is_none());
        assert!(value.get("params").is_none());
        assert!(value.get("accounts").is_none());
    }

    #[test]
    fn test_alloc_copied_verbatim() {
        let genesis = GenesisConfig::default()
            .with_prefunded_account(Address::with_last_byte(1), U256::from(100))
            .build();
        let spec = PyEthereumGenesisSpec::from_genesis(&genesis).unwrap();

        assert_eq!(spec.alloc, genesis.alloc);
        // No builtins are injected
        assert_eq!(spec.alloc.len(), 1);
    }

    #[test]
    fn test_ignores_fork_dependency() {
        let genesis = GenesisConfig::default().with_fork(Fork::Istanbul, 20).build();
        assert!(PyEthereumGenesisSpec::from_genesis(&genesis).is_ok());
    }

    #[test]
    fn test_unsupported_engine() {
        let mut genesis = GenesisConfig::default().build();
        genesis.config.ethash = None;
        assert_eq!(
            PyEthereumGenesisSpec::from_genesis(&genesis),
            Err(ChainSpecError::UnsupportedConsensusEngine)
        );
    }
}
