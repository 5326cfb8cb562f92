//! Aleth chain spec document
//!
//! Field names and order follow the C++ client's JSON schema.

use super::{
    encoding::{BigQuantity, Quantity},
    precompiles::BuiltinAccount,
};
use alloy_primitives::{Address, Bytes, B256, B64};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Genesis specification consumed by Aleth
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlethGenesisSpec {
    /// Seal engine name, always `Ethash`
    pub seal_engine: String,
    /// Chain parameters and fork blocks
    pub params: AlethParams,
    /// Genesis block header
    pub genesis: AlethGenesisHeader,
    /// Prefunded accounts and precompiled contracts
    pub accounts: BTreeMap<Address, AlethAccount>,
}

/// Protocol parameters. Fork blocks are omitted when the fork is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlethParams {
    /// Nonce new accounts start with
    pub account_start_nonce: Quantity,
    /// Maximum header extra data size in bytes
    pub maximum_extra_data_size: Quantity,
    /// Homestead activation block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homestead_fork_block: Option<BigQuantity>,
    /// DAO fork block, always genesis
    pub dao_hardfork_block: Quantity,
    /// Tangerine Whistle activation block
    #[serde(rename = "EIP150ForkBlock", default, skip_serializing_if = "Option::is_none")]
    pub eip150_fork_block: Option<BigQuantity>,
    /// Spurious Dragon activation block
    #[serde(rename = "EIP158ForkBlock", default, skip_serializing_if = "Option::is_none")]
    pub eip158_fork_block: Option<BigQuantity>,
    /// Byzantium activation block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byzantium_fork_block: Option<BigQuantity>,
    /// Constantinople activation block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constantinople_fork_block: Option<BigQuantity>,
    /// Petersburg activation block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constantinople_fix_fork_block: Option<BigQuantity>,
    /// Istanbul activation block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub istanbul_fork_block: Option<BigQuantity>,
    /// Lowest gas limit a block may have
    pub min_gas_limit: Quantity,
    /// Highest gas limit a block may have
    pub max_gas_limit: Quantity,
    /// Whether gas used breaks ties between equal difficulty chains
    pub tie_breaking_gas: bool,
    /// Divisor bounding the gas limit change per block
    pub gas_limit_bound_divisor: Quantity,
    /// Lower bound of the Ethash difficulty
    pub minimum_difficulty: BigQuantity,
    /// Divisor bounding the difficulty change per block
    pub difficulty_bound_divisor: BigQuantity,
    /// Block time in seconds that decides the difficulty direction
    pub duration_limit: BigQuantity,
    /// Frontier block reward in wei
    pub block_reward: BigQuantity,
    /// Network ID, equal to the chain ID
    #[serde(rename = "networkID")]
    pub network_id: Quantity,
    /// EIP-155 chain ID
    #[serde(rename = "chainID")]
    pub chain_id: Quantity,
    /// Whether blocks with future timestamps are accepted
    pub allow_future_blocks: bool,
}

/// Genesis block header fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlethGenesisHeader {
    pub nonce: B64,
    pub difficulty: BigQuantity,
    pub mix_hash: B256,
    pub author: Address,
    pub timestamp: Quantity,
    pub parent_hash: B256,
    pub extra_data: Bytes,
    pub gas_limit: Quantity,
}

/// Prefunded genesis account and/or precompiled contract definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlethAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<BigQuantity>,
    /// Written as a plain integer, unlike every other numeric field
    #[serde(default, skip_serializing_if = "is_zero")]
    pub nonce: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precompiled: Option<AlethBuiltin>,
}

impl BuiltinAccount for AlethAccount {
    type Builtin = AlethBuiltin;

    fn set_builtin(&mut self, builtin: AlethBuiltin) {
        self.precompiled = Some(builtin);
    }

    fn builtin(&self) -> Option<&AlethBuiltin> {
        self.precompiled.as_ref()
    }
}

/// Precompiled contract definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlethBuiltin {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_block: Option<BigQuantity>,
    /// Absent for contracts whose gas policy is hardcoded in Aleth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linear: Option<AlethLinearPricing>,
}

impl AlethBuiltin {
    /// Builtin available from genesis with linear pricing.
    pub fn linear(name: &str, base: u64, word: u64) -> Self {
        Self {
            name: name.to_string(),
            starting_block: None,
            linear: Some(AlethLinearPricing { base, word }),
        }
    }

    /// Builtin without a declared price.
    pub fn unpriced(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Sets the block the builtin activates at.
    pub fn starting_at(mut self, block: u64) -> Self {
        self.starting_block = Some(BigQuantity::from(block));
        self
    }
}

/// `base + word * ceil(len / 32)` gas pricing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlethLinearPricing {
    pub base: u64,
    pub word: u64,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}
