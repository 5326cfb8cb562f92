//! Genesis → Aleth chain spec
//!
//! Aleth reads a flat `params` block where each fork is a single optional
//! block number and every protocol limit comes from the mainnet constants.

use super::{
    aleth_types::{AlethAccount, AlethBuiltin, AlethGenesisHeader, AlethGenesisSpec, AlethParams},
    encoding::{encode_nonce, BigQuantity, Quantity},
    ensure_ethash,
    hardforks::{Fork, ForkSchedule},
    precompiles::PrecompileRegistry,
};
use crate::{constants, errors::ChainSpecError};
use alloy_genesis::Genesis;
use alloy_primitives::Address;
use std::collections::BTreeMap;

impl AlethGenesisSpec {
    /// Converts a genesis into the Aleth chain spec format.
    ///
    /// Fails if the genesis is not Ethash based, or if Istanbul is scheduled
    /// without Byzantium.
    pub fn from_genesis(genesis: &Genesis) -> Result<Self, ChainSpecError> {
        ensure_ethash(genesis)?;
        let forks = ForkSchedule::from_genesis(genesis);
        forks.require(Fork::Istanbul, Fork::Byzantium)?;

        let mut spec = Self {
            seal_engine: "Ethash".to_string(),
            params: aleth_params(genesis, &forks),
            genesis: AlethGenesisHeader {
                nonce: encode_nonce(genesis.nonce),
                difficulty: genesis.difficulty,
                mix_hash: genesis.mix_hash,
                author: genesis.coinbase,
                timestamp: Quantity::from(genesis.timestamp),
                parent_hash: genesis.parent_hash.unwrap_or_default(),
                extra_data: genesis.extra_data.clone(),
                gas_limit: Quantity::from(genesis.gas_limit),
            },
            accounts: BTreeMap::new(),
        };

        for (address, account) in &genesis.alloc {
            let entry = spec.accounts.entry(*address).or_default();
            entry.balance = Some(account.balance);
            entry.nonce = account.nonce.unwrap_or_default();
        }

        set_precompiles(&mut spec.accounts, &forks);
        Ok(spec)
    }
}

fn aleth_params(genesis: &Genesis, forks: &ForkSchedule) -> AlethParams {
    let block = |fork: Fork| forks.block(fork).map(BigQuantity::from);
    let chain_id = Quantity::from(genesis.config.chain_id);

    AlethParams {
        account_start_nonce: Quantity::ZERO,
        maximum_extra_data_size: Quantity::from(constants::MAXIMUM_EXTRA_DATA_SIZE),
        homestead_fork_block: block(Fork::Homestead),
        dao_hardfork_block: Quantity::from(constants::ALETH_DAO_HARDFORK_BLOCK),
        eip150_fork_block: block(Fork::Eip150),
        eip158_fork_block: block(Fork::Eip158),
        byzantium_fork_block: block(Fork::Byzantium),
        constantinople_fork_block: block(Fork::Constantinople),
        constantinople_fix_fork_block: block(Fork::Petersburg),
        istanbul_fork_block: block(Fork::Istanbul),
        min_gas_limit: Quantity::from(constants::MIN_GAS_LIMIT),
        max_gas_limit: Quantity::from(constants::MAX_GAS_LIMIT),
        tie_breaking_gas: false,
        gas_limit_bound_divisor: Quantity::from(constants::GAS_LIMIT_BOUND_DIVISOR),
        minimum_difficulty: BigQuantity::from(constants::MINIMUM_DIFFICULTY),
        difficulty_bound_divisor: BigQuantity::from(constants::DIFFICULTY_BOUND_DIVISOR),
        duration_limit: BigQuantity::from(constants::DURATION_LIMIT),
        block_reward: constants::frontier_block_reward(),
        network_id: chain_id,
        chain_id,
        allow_future_blocks: false,
    }
}

fn set_precompiles(accounts: &mut BTreeMap<Address, AlethAccount>, forks: &ForkSchedule) {
    let mut registry = PrecompileRegistry::new(accounts);

    registry
        .upsert(1, AlethBuiltin::linear("ecrecover", 3000, 0))
        .upsert(2, AlethBuiltin::linear("sha256", 60, 12))
        .upsert(3, AlethBuiltin::linear("ripemd160", 600, 120))
        .upsert(4, AlethBuiltin::linear("identity", 15, 3));

    let Some(byzantium) = forks.block(Fork::Byzantium) else {
        return;
    };
    registry
        .upsert(5, AlethBuiltin::unpriced("modexp").starting_at(byzantium))
        .upsert(6, AlethBuiltin::linear("alt_bn128_G1_add", 500, 0).starting_at(byzantium))
        .upsert(7, AlethBuiltin::linear("alt_bn128_G1_mul", 40000, 0).starting_at(byzantium))
        .upsert(8, AlethBuiltin::unpriced("alt_bn128_pairing_product").starting_at(byzantium));

    // Aleth hardcodes the Istanbul bn128 prices, so the entries lose their linear rule.
    if let Some(istanbul) = forks.block(Fork::Istanbul) {
        registry
            .upsert(6, AlethBuiltin::unpriced("alt_bn128_G1_add").starting_at(byzantium))
            .upsert(7, AlethBuiltin::unpriced("alt_bn128_G1_mul").starting_at(byzantium))
            .upsert(9, AlethBuiltin::unpriced("blake2_compression").starting_at(istanbul));
    }
}
