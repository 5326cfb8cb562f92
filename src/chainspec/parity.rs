//! Genesis → Parity chain spec
//!
//! Parity treats each EIP as an independent feature flag, so every scheduled
//! fork fans out into the transition fields of the EIPs it bundles. Block
//! rewards and difficulty bomb delays are kept as block-keyed schedules.

use super::{
    encoding::{encode_big, encode_nonce, encode_u256, encode_uint64, BigQuantity, Quantity},
    ensure_ethash,
    hardforks::{Fork, ForkSchedule},
    parity_types::{
        AlternativePrice, ParityAccount, ParityBuiltin, ParityChainSpec, ParityEthereumSeal,
        ParityGenesis, ParityPricing, ParitySeal, PricingRule, VersionedPricing,
    },
    precompiles::PrecompileRegistry,
};
use crate::{constants, errors::ChainSpecError};
use alloy_genesis::Genesis;
use alloy_primitives::{Address, Bytes, U256};
use std::collections::BTreeMap;

impl ParityChainSpec {
    /// Converts a genesis into the Parity chain spec format.
    ///
    /// `network` names the chain and its data directory; `bootnodes` are
    /// embedded as-is. Fails if the genesis is not Ethash based, or if
    /// Istanbul is scheduled without Byzantium.
    pub fn from_genesis(
        network: &str,
        genesis: &Genesis,
        bootnodes: &[String],
    ) -> Result<Self, ChainSpecError> {
        ensure_ethash(genesis)?;
        let forks = ForkSchedule::from_genesis(genesis);
        forks.require(Fork::Istanbul, Fork::Byzantium)?;

        let mut spec = Self {
            name: network.to_string(),
            data_dir: network.to_lowercase(),
            nodes: bootnodes.to_vec(),
            ..Default::default()
        };

        let ethash = &mut spec.engine.ethash.params;
        ethash.minimum_difficulty = BigQuantity::from(constants::MINIMUM_DIFFICULTY);
        ethash.difficulty_bound_divisor = BigQuantity::from(constants::DIFFICULTY_BOUND_DIVISOR);
        ethash.duration_limit = BigQuantity::from(constants::DURATION_LIMIT);
        ethash
            .block_reward
            .insert(encode_big(0), encode_u256(constants::frontier_block_reward()));

        for (fork, block) in forks.active() {
            spec.apply_fork(fork, block);
        }

        let chain_id = Quantity::from(genesis.config.chain_id);
        let params = &mut spec.params;
        params.maximum_extra_data_size = Quantity::from(constants::MAXIMUM_EXTRA_DATA_SIZE);
        params.min_gas_limit = Quantity::from(constants::MIN_GAS_LIMIT);
        params.gas_limit_bound_divisor = Quantity::from(constants::GAS_LIMIT_BOUND_DIVISOR);
        params.network_id = chain_id;
        params.chain_id = chain_id;
        params.max_code_size = Quantity::from(constants::MAX_CODE_SIZE);
        // Code size limit applies from genesis
        params.max_code_size_transition = Quantity::ZERO;
        params.eip98_transition = Quantity::from(constants::EIP98_DISABLED_TRANSITION);

        spec.genesis = ParityGenesis {
            seal: ParitySeal {
                ethereum: ParityEthereumSeal {
                    nonce: encode_nonce(genesis.nonce),
                    mix_hash: Bytes::copy_from_slice(genesis.mix_hash.as_slice()),
                },
            },
            difficulty: genesis.difficulty,
            author: genesis.coinbase,
            timestamp: Quantity::from(genesis.timestamp),
            parent_hash: genesis.parent_hash.unwrap_or_default(),
            extra_data: genesis.extra_data.clone(),
            gas_limit: Quantity::from(genesis.gas_limit),
        };

        for (address, account) in &genesis.alloc {
            spec.accounts.insert(
                *address,
                ParityAccount {
                    balance: account.balance,
                    nonce: Quantity::from(account.nonce.unwrap_or_default()),
                    builtin: None,
                },
            );
        }

        set_precompiles(&mut spec.accounts, &forks);
        Ok(spec)
    }

    /// Sets the transition fields (and reward / bomb schedule) a fork activates.
    fn apply_fork(&mut self, fork: Fork, block: u64) {
        let n = Quantity::from(block);
        let ethash = &mut self.engine.ethash.params;
        let params = &mut self.params;

        match fork {
            Fork::Homestead => ethash.homestead_transition = n,
            // Tangerine Whistle
            Fork::Eip150 => params.eip150_transition = n,
            // Spurious Dragon: 155, 160
            Fork::Eip155 => {
                params.eip155_transition = n;
                params.eip160_transition = n;
            }
            // Spurious Dragon: 161
            Fork::Eip158 => {
                params.eip161abc_transition = n;
                params.eip161d_transition = n;
            }
            Fork::Byzantium => {
                ethash.block_reward.insert(
                    encode_big(block),
                    encode_u256(constants::byzantium_block_reward()),
                );
                ethash.difficulty_bomb_delays.insert(
                    encode_big(block),
                    encode_uint64(constants::BYZANTIUM_BOMB_DELAY),
                );
                ethash.eip100b_transition = n;
                params.eip140_transition = n;
                params.eip211_transition = n;
                params.eip214_transition = n;
                params.eip658_transition = n;
            }
            Fork::Constantinople => {
                ethash.block_reward.insert(
                    encode_big(block),
                    encode_u256(constants::constantinople_block_reward()),
                );
                ethash.difficulty_bomb_delays.insert(
                    encode_big(block),
                    encode_uint64(constants::CONSTANTINOPLE_BOMB_DELAY),
                );
                params.eip145_transition = n;
                params.eip1014_transition = n;
                params.eip1052_transition = n;
                params.eip1283_transition = n;
            }
            // ConstantinopleFix removes EIP-1283
            Fork::Petersburg => params.eip1283_disable_transition = n,
            Fork::Istanbul => {
                params.eip1344_transition = n;
                params.eip1884_transition = n;
                params.eip2028_transition = n;
                params.eip1283_reenable_transition = n;
            }
        }
    }
}

fn set_precompiles(accounts: &mut BTreeMap<Address, ParityAccount>, forks: &ForkSchedule) {
    let mut registry = PrecompileRegistry::new(accounts);
    let linear = |base, word| PricingRule::Linear { base, word };

    registry
        .upsert(1, ParityBuiltin::new("ecrecover", linear(3000, 0)))
        .upsert(2, ParityBuiltin::new("sha256", linear(60, 12)))
        .upsert(3, ParityBuiltin::new("ripemd160", linear(600, 120)))
        .upsert(4, ParityBuiltin::new("identity", linear(15, 3)));

    let Some(byzantium) = forks.block(Fork::Byzantium) else {
        return;
    };
    registry
        .upsert(
            5,
            ParityBuiltin::new("modexp", PricingRule::ModExp { divisor: 20 })
                .activate_at(byzantium),
        )
        .upsert(
            6,
            ParityBuiltin::new("alt_bn128_add", linear(500, 0)).activate_at(byzantium),
        )
        .upsert(
            7,
            ParityBuiltin::new("alt_bn128_mul", linear(40000, 0)).activate_at(byzantium),
        )
        .upsert(
            8,
            ParityBuiltin::new(
                "alt_bn128_pairing",
                PricingRule::AltBnPairing {
                    base: 100_000,
                    pair: 80_000,
                },
            )
            .activate_at(byzantium),
        );

    let Some(istanbul) = forks.block(Fork::Istanbul) else {
        return;
    };
    // Parity needs both prices to switch over at the fork block
    let const_op = |price| AlternativePrice::AltBnConstOperations { price };
    let pairing = |base, pair| AlternativePrice::AltBnPairing { base, pair };

    registry
        .upsert(
            6,
            ParityBuiltin::new(
                "alt_bn128_add",
                versioned(istanbul, const_op(500), const_op(150)),
            )
            .activate_at(byzantium),
        )
        .upsert(
            7,
            ParityBuiltin::new(
                "alt_bn128_mul",
                versioned(istanbul, const_op(40000), const_op(6000)),
            )
            .activate_at(byzantium),
        )
        .upsert(
            8,
            ParityBuiltin::new(
                "alt_bn128_pairing",
                versioned(
                    istanbul,
                    pairing(100_000, 80_000),
                    pairing(45_000, 34_000),
                ),
            )
            .activate_at(byzantium),
        )
        .upsert(
            9,
            ParityBuiltin::new("blake2_f", PricingRule::Blake2F { gas_per_round: 1 })
                .activate_at(istanbul),
        );
}

/// Two-entry price table: `before` from genesis, `after` from `fork_block`.
///
/// With `fork_block == 0` both land on the same key and `after` wins.
fn versioned(fork_block: u64, before: AlternativePrice, after: AlternativePrice) -> ParityPricing {
    let mut table = BTreeMap::new();
    table.insert(encode_u256(U256::ZERO), VersionedPricing::from(before));
    table.insert(encode_big(fork_block), VersionedPricing::from(after));
    ParityPricing::Versioned(table)
}
