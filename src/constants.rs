use alloy_primitives::U256;

/// Chain ID of generated genesis files
pub const DEFAULT_CHAIN_ID: u64 = 1337;
/// Gas limit of generated genesis blocks
pub const DEFAULT_GAS_LIMIT: u64 = 4_700_000;

/// Maximum size of the genesis/header extra data in bytes
pub const MAXIMUM_EXTRA_DATA_SIZE: u64 = 32;
/// Minimum gas limit a block may have
pub const MIN_GAS_LIMIT: u64 = 5000;
/// Maximum gas limit a block may have (the largest signed 64-bit value)
pub const MAX_GAS_LIMIT: u64 = i64::MAX as u64;
/// Divisor bounding the gas limit change between consecutive blocks
pub const GAS_LIMIT_BOUND_DIVISOR: u64 = 1024;
/// Lower bound of the Ethash difficulty
pub const MINIMUM_DIFFICULTY: u64 = 131_072;
/// Divisor bounding the difficulty change between consecutive blocks
pub const DIFFICULTY_BOUND_DIVISOR: u64 = 2048;
/// Block time (seconds) deciding whether difficulty goes up or down
pub const DURATION_LIMIT: u64 = 13;
/// Maximum deployed contract code size (EIP-170)
pub const MAX_CODE_SIZE: u64 = 24_576;

/// Difficulty bomb delay introduced by Byzantium (EIP-649)
pub const BYZANTIUM_BOMB_DELAY: u64 = 3_000_000;
/// Difficulty bomb delay introduced by Constantinople (EIP-1234)
pub const CONSTANTINOPLE_BOMB_DELAY: u64 = 2_000_000;

/// Parity reads `eip98Transition` as a block number; this value keeps it off.
pub const EIP98_DISABLED_TRANSITION: u64 = i64::MAX as u64;

/// Aleth always starts the DAO fork at genesis and syncs forward from there.
pub const ALETH_DAO_HARDFORK_BLOCK: u64 = 0;

const ETHER: u64 = 1_000_000_000_000_000_000;

/// Block reward in wei for successfully mining a Frontier block (5 ETH)
pub fn frontier_block_reward() -> U256 {
    U256::from(5 * ETHER)
}

/// Block reward in wei after Byzantium (3 ETH)
pub fn byzantium_block_reward() -> U256 {
    U256::from(3 * ETHER)
}

/// Block reward in wei after Constantinople (2 ETH)
pub fn constantinople_block_reward() -> U256 {
    U256::from(2 * ETHER)
}
