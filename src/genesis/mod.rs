//! Ethash genesis helpers
//!
//! Builds canonical [`Genesis`] values for tests and the `--sample` mode, and
//! moves genesis / chain spec JSON to and from disk.

pub mod accounts;

pub use accounts::{default_prefund_balance, sample_accounts};

use crate::chainspec::{ChainSpecDocument, Dialect, Fork};
use crate::constants::{DEFAULT_CHAIN_ID, DEFAULT_GAS_LIMIT, MINIMUM_DIFFICULTY};
use crate::errors::GenesisIoError;
use alloy_genesis::{ChainConfig, EthashConfig, Genesis, GenesisAccount};
use alloy_primitives::{Address, Bytes, U256};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Configuration for creating an Ethash genesis
#[derive(Debug, Clone)]
pub struct GenesisConfig {
    /// Chain ID
    pub chain_id: u64,
    /// Gas limit of the genesis block
    pub gas_limit: u64,
    /// Difficulty of the genesis block
    pub difficulty: U256,
    /// Genesis timestamp
    pub timestamp: u64,
    /// Genesis extra data
    pub extra_data: Bytes,
    /// Fork activation blocks; forks not listed stay disabled
    pub forks: BTreeMap<Fork, u64>,
    /// Accounts to prefund with their balances
    pub prefunded_accounts: BTreeMap<Address, U256>,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            gas_limit: DEFAULT_GAS_LIMIT,
            difficulty: U256::from(MINIMUM_DIFFICULTY),
            timestamp: 0,
            extra_data: Bytes::from(vec![0u8; 32]),
            forks: BTreeMap::new(),
            prefunded_accounts: BTreeMap::new(),
        }
    }
}

impl GenesisConfig {
    /// A chain with every recognised fork active from genesis and a few
    /// prefunded accounts.
    pub fn sample() -> Self {
        let balance = default_prefund_balance();
        let mut config = Self::default();
        for fork in Fork::ALL {
            config.forks.insert(fork, 0);
        }
        for account in sample_accounts() {
            config.prefunded_accounts.insert(account, balance);
        }
        config
    }

    /// Builder method to set chain ID
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Builder method to schedule a fork
    pub fn with_fork(mut self, fork: Fork, block: u64) -> Self {
        self.forks.insert(fork, block);
        self
    }

    /// Builder method to add a prefunded account
    pub fn with_prefunded_account(mut self, address: Address, balance: U256) -> Self {
        self.prefunded_accounts.insert(address, balance);
        self
    }

    /// Builder method to set the genesis gas limit
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Creates the genesis described by this config
    pub fn build(self) -> Genesis {
        create_genesis(self)
    }
}

/// Create an Ethash genesis from the config
pub fn create_genesis(config: GenesisConfig) -> Genesis {
    let fork = |fork: Fork| config.forks.get(&fork).copied();

    let chain_config = ChainConfig {
        chain_id: config.chain_id,
        homestead_block: fork(Fork::Homestead),
        eip150_block: fork(Fork::Eip150),
        eip155_block: fork(Fork::Eip155),
        eip158_block: fork(Fork::Eip158),
        byzantium_block: fork(Fork::Byzantium),
        constantinople_block: fork(Fork::Constantinople),
        petersburg_block: fork(Fork::Petersburg),
        istanbul_block: fork(Fork::Istanbul),
        ethash: Some(EthashConfig {}),
        ..Default::default()
    };

    let alloc = config
        .prefunded_accounts
        .iter()
        .map(|(address, balance)| {
            (
                *address,
                GenesisAccount {
                    balance: *balance,
                    ..Default::default()
                },
            )
        })
        .collect();

    Genesis {
        config: chain_config,
        nonce: 0,
        timestamp: config.timestamp,
        extra_data: config.extra_data,
        gas_limit: config.gas_limit,
        difficulty: config.difficulty,
        alloc,
        ..Default::default()
    }
}

/// Reads a geth-style genesis JSON file
pub fn read_genesis_file(path: &Path) -> Result<Genesis, GenesisIoError> {
    let content = fs::read_to_string(path).map_err(|source| GenesisIoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| GenesisIoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// File name a dialect's chain spec is exported under
pub fn spec_file_name(network: &str, dialect: Dialect) -> String {
    format!("{network}-{}.json", dialect.file_suffix())
}

/// Helper to serialize a chain spec to pretty JSON
pub fn spec_to_json(spec: &impl Serialize) -> serde_json::Result<String> {
    serde_json::to_string_pretty(spec)
}

/// Writes the chain spec to `<dir>/<network>-<suffix>.json` and returns the path
pub fn write_spec_file(
    dir: &Path,
    network: &str,
    document: &ChainSpecDocument,
) -> Result<PathBuf, GenesisIoError> {
    let path = dir.join(spec_file_name(network, document.dialect()));
    let json = spec_to_json(document).map_err(|source| GenesisIoError::Json {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, json).map_err(|source| GenesisIoError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainspec::{is_ethash, translate, ForkSchedule};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "chainspec-translator-{name}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_genesis_is_ethash_without_forks() {
        let genesis = GenesisConfig::default().build();

        assert!(is_ethash(&genesis));
        assert_eq!(genesis.config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(ForkSchedule::from_genesis(&genesis).active().count(), 0);
        assert!(genesis.alloc.is_empty());
        assert_eq!(genesis.difficulty, U256::from(131_072));
    }

    #[test]
    fn test_built_genesis_carries_empty_ethash_section() {
        let genesis = GenesisConfig::default().build();
        let value = serde_json::to_value(&genesis).unwrap();

        assert_eq!(value["config"]["ethash"], serde_json::json!({}));
        assert_eq!(genesis.config.ethash, Some(EthashConfig {}));
    }

    #[test]
    fn test_custom_genesis() {
        let funded = Address::with_last_byte(2);
        let genesis = GenesisConfig::default()
            .with_chain_id(12345)
            .with_gas_limit(8_000_000)
            .with_fork(Fork::Byzantium, 7)
            .with_prefunded_account(funded, U256::from(1000))
            .build();

        assert_eq!(genesis.config.chain_id, 12345);
        assert_eq!(genesis.gas_limit, 8_000_000);
        assert_eq!(genesis.config.byzantium_block, Some(7));
        assert_eq!(genesis.config.istanbul_block, None);
        assert_eq!(genesis.alloc[&funded].balance, U256::from(1000));
        assert_eq!(genesis.alloc[&funded].nonce, None);
    }

    #[test]
    fn test_sample_activates_all_forks() {
        let genesis = GenesisConfig::sample().build();
        let schedule = ForkSchedule::from_genesis(&genesis);

        for fork in Fork::ALL {
            assert_eq!(schedule.block(fork), Some(0), "{fork}");
        }
        assert_eq!(genesis.alloc.len(), sample_accounts().len());
    }

    #[test]
    fn test_genesis_json_round_trip() {
        let genesis = GenesisConfig::sample().build();
        let json = serde_json::to_string(&genesis).unwrap();
        let parsed: Genesis = serde_json::from_str(&json).unwrap();

        assert!(is_ethash(&parsed));
        assert_eq!(parsed.config.istanbul_block, Some(0));
        assert_eq!(parsed.alloc, genesis.alloc);
    }

    #[test]
    fn test_read_geth_genesis_file() {
        let dir = temp_dir("read");
        let path = dir.join("genesis.json");
        fs::write(
            &path,
            r#"{
                "config": {
                    "chainId": 1234,
                    "homesteadBlock": 0,
                    "byzantiumBlock": 10,
                    "istanbulBlock": 20,
                    "ethash": {}
                },
                "nonce": "0x0",
                "timestamp": "0x0",
                "extraData": "0x",
                "gasLimit": "0x47b760",
                "difficulty": "0x20000",
                "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
                "coinbase": "0x0000000000000000000000000000000000000000",
                "alloc": {
                    "0x0000000000000000000000000000000000000001": { "balance": "0x64" }
                }
            }"#,
        )
        .unwrap();

        let genesis = read_genesis_file(&path).unwrap();
        assert!(is_ethash(&genesis));
        assert_eq!(genesis.config.chain_id, 1234);
        assert_eq!(genesis.config.byzantium_block, Some(10));
        assert_eq!(
            genesis.alloc[&Address::with_last_byte(1)].balance,
            U256::from(100)
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_genesis_file(Path::new("/nonexistent/genesis.json")).unwrap_err();
        assert!(matches!(err, GenesisIoError::Io { .. }));
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = temp_dir("invalid");
        let path = dir.join("genesis.json");
        fs::write(&path, "not json").unwrap();

        let err = read_genesis_file(&path).unwrap_err();
        assert!(matches!(err, GenesisIoError::Json { .. }));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_spec_file_name() {
        assert_eq!(spec_file_name("mynet", Dialect::Aleth), "mynet-aleth.json");
        assert_eq!(spec_file_name("mynet", Dialect::Parity), "mynet-parity.json");
        assert_eq!(spec_file_name("mynet", Dialect::PyEthereum), "mynet-python.json");
    }

    #[test]
    fn test_write_spec_file() {
        let dir = temp_dir("write");
        let genesis = GenesisConfig::sample().build();
        let document = translate(Dialect::Parity, "mynet", &genesis, &[]).unwrap();

        let path = write_spec_file(&dir, "mynet", &document).unwrap();
        assert_eq!(path, dir.join("mynet-parity.json"));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["name"], "mynet");
        assert_eq!(written["engine"]["Ethash"]["params"]["homesteadTransition"], "0x0");
        fs::remove_dir_all(&dir).unwrap();
    }
}
