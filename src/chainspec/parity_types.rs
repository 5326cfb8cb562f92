//! Parity chain spec document
//!
//! Every EIP is its own `*Transition` block number, so a fork is expressed as
//! a group of fields rather than a single entry.

use super::{
    encoding::{BigQuantity, Quantity},
    precompiles::BuiltinAccount,
};
use alloy_primitives::{Address, Bytes, B256, B64};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chain specification consumed by Parity / OpenEthereum
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityChainSpec {
    /// Network name
    pub name: String,
    /// Data directory name, the lowercased network name
    #[serde(rename = "dataDir")]
    pub data_dir: String,
    /// Consensus engine section
    pub engine: ParityEngine,
    /// Protocol parameters and EIP transitions
    pub params: ParityParams,
    /// Genesis block header
    pub genesis: ParityGenesis,
    /// Bootnode enode URLs
    pub nodes: Vec<String>,
    /// Prefunded accounts and builtin contracts
    pub accounts: BTreeMap<Address, ParityAccount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityEngine {
    #[serde(rename = "Ethash")]
    pub ethash: ParityEthash,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityEthash {
    pub params: ParityEthashParams,
}

/// Ethash engine parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityEthashParams {
    pub minimum_difficulty: BigQuantity,
    pub difficulty_bound_divisor: BigQuantity,
    pub duration_limit: BigQuantity,
    /// Block reward by activation block, both as hex big integers
    pub block_reward: BTreeMap<String, String>,
    /// Difficulty bomb delay by activation block
    pub difficulty_bomb_delays: BTreeMap<String, String>,
    pub homestead_transition: Quantity,
    pub eip100b_transition: Quantity,
}

/// Protocol parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityParams {
    /// Nonce new accounts start with
    pub account_start_nonce: Quantity,
    /// Maximum header extra data size in bytes
    pub maximum_extra_data_size: Quantity,
    /// Lowest gas limit a block may have
    pub min_gas_limit: Quantity,
    /// Divisor bounding the gas limit change per block
    pub gas_limit_bound_divisor: Quantity,
    /// Network ID, equal to the chain ID
    #[serde(rename = "networkID")]
    pub network_id: Quantity,
    /// EIP-155 chain ID
    #[serde(rename = "chainID")]
    pub chain_id: Quantity,
    /// Maximum deployed contract code size (EIP-170)
    pub max_code_size: Quantity,
    /// Block the code size limit applies from
    pub max_code_size_transition: Quantity,
    /// Intermediate state roots in receipts, kept disabled
    pub eip98_transition: Quantity,
    /// Gas repricing of IO-heavy operations
    pub eip150_transition: Quantity,
    /// EXP cost increase
    pub eip160_transition: Quantity,
    /// State trie clearing, parts a to c
    pub eip161abc_transition: Quantity,
    /// State trie clearing, part d
    pub eip161d_transition: Quantity,
    /// Replay protection
    pub eip155_transition: Quantity,
    /// REVERT opcode
    pub eip140_transition: Quantity,
    /// RETURNDATASIZE and RETURNDATACOPY
    pub eip211_transition: Quantity,
    /// STATICCALL
    pub eip214_transition: Quantity,
    /// Status code in receipts
    pub eip658_transition: Quantity,
    /// Bitwise shifting instructions
    pub eip145_transition: Quantity,
    /// CREATE2
    pub eip1014_transition: Quantity,
    /// EXTCODEHASH
    pub eip1052_transition: Quantity,
    /// Net gas metering for SSTORE
    pub eip1283_transition: Quantity,
    /// Block EIP-1283 is switched off again (Petersburg)
    pub eip1283_disable_transition: Quantity,
    /// Block net SSTORE metering returns (Istanbul)
    pub eip1283_reenable_transition: Quantity,
    /// CHAINID opcode
    pub eip1344_transition: Quantity,
    /// Repricing of trie-size-dependent opcodes
    pub eip1884_transition: Quantity,
    /// Cheaper calldata
    pub eip2028_transition: Quantity,
}

/// Genesis block header with the Ethash seal split out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityGenesis {
    pub seal: ParitySeal,
    pub difficulty: BigQuantity,
    pub author: Address,
    pub timestamp: Quantity,
    pub parent_hash: B256,
    pub extra_data: Bytes,
    pub gas_limit: Quantity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParitySeal {
    pub ethereum: ParityEthereumSeal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityEthereumSeal {
    pub nonce: B64,
    pub mix_hash: Bytes,
}

/// Prefunded genesis account and/or builtin contract
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityAccount {
    /// Always present; zero for builtin-only accounts
    pub balance: BigQuantity,
    #[serde(default, skip_serializing_if = "Quantity::is_zero")]
    pub nonce: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<ParityBuiltin>,
}

impl BuiltinAccount for ParityAccount {
    type Builtin = ParityBuiltin;

    fn set_builtin(&mut self, builtin: ParityBuiltin) {
        self.builtin = Some(builtin);
    }

    fn builtin(&self) -> Option<&ParityBuiltin> {
        self.builtin.as_ref()
    }
}

/// Builtin contract definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityBuiltin {
    pub name: String,
    pub pricing: ParityPricing,
    /// Omitted means active from genesis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activate_at: Option<BigQuantity>,
}

impl ParityBuiltin {
    /// Builtin active from genesis.
    pub fn new(name: &str, pricing: impl Into<ParityPricing>) -> Self {
        Self {
            name: name.to_string(),
            pricing: pricing.into(),
            activate_at: None,
        }
    }

    /// Sets the activation block.
    pub fn activate_at(mut self, block: u64) -> Self {
        self.activate_at = Some(BigQuantity::from(block));
        self
    }
}

/// Either one pricing rule, or a table of prices keyed by the block they start at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParityPricing {
    Flat(PricingRule),
    Versioned(BTreeMap<String, VersionedPricing>),
}

impl From<PricingRule> for ParityPricing {
    fn from(rule: PricingRule) -> Self {
        ParityPricing::Flat(rule)
    }
}

/// Single pricing rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingRule {
    #[serde(rename = "linear")]
    Linear { base: u64, word: u64 },
    #[serde(rename = "modexp")]
    ModExp { divisor: u64 },
    /// Pre-#11039 Parity format for the bn128 pairing price
    #[serde(rename = "alt_bn128_pairing")]
    AltBnPairing { base: u64, pair: u64 },
    /// Price per round of Blake2 compression
    #[serde(rename = "blake2_f")]
    Blake2F { gas_per_round: u64 },
}

/// One entry of a versioned price table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedPricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<AlternativePrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl From<AlternativePrice> for VersionedPricing {
    fn from(price: AlternativePrice) -> Self {
        Self {
            price: Some(price),
            info: None,
        }
    }
}

/// Price formats allowed inside a versioned table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlternativePrice {
    #[serde(rename = "alt_bn128_const_operations")]
    AltBnConstOperations { price: u64 },
    #[serde(rename = "alt_bn128_pairing")]
    AltBnPairing { base: u64, pair: u64 },
}
