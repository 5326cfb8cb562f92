use crate::errors::ChainSpecError;
use alloy_genesis::{ChainConfig, Genesis};
use std::fmt;

const FORK_COUNT: usize = 8;

/// Block-activated Ethash-era forks the translator knows how to express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fork {
    /// Homestead
    Homestead,
    /// Tangerine Whistle (EIP-150 gas repricing)
    Eip150,
    /// Replay protection (EIP-155)
    Eip155,
    /// Spurious Dragon state clearing (EIP-158)
    Eip158,
    /// Byzantium
    Byzantium,
    /// Constantinople
    Constantinople,
    /// Petersburg, a.k.a. ConstantinopleFix
    Petersburg,
    /// Istanbul
    Istanbul,
}

impl Fork {
    /// All recognised forks, in activation order.
    pub const ALL: [Fork; FORK_COUNT] = [
        Fork::Homestead,
        Fork::Eip150,
        Fork::Eip155,
        Fork::Eip158,
        Fork::Byzantium,
        Fork::Constantinople,
        Fork::Petersburg,
        Fork::Istanbul,
    ];

    /// Lowercase fork name as used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Fork::Homestead => "homestead",
            Fork::Eip150 => "eip150",
            Fork::Eip155 => "eip155",
            Fork::Eip158 => "eip158",
            Fork::Byzantium => "byzantium",
            Fork::Constantinople => "constantinople",
            Fork::Petersburg => "petersburg",
            Fork::Istanbul => "istanbul",
        }
    }

    fn read(&self, config: &ChainConfig) -> Option<u64> {
        match self {
            Fork::Homestead => config.homestead_block,
            Fork::Eip150 => config.eip150_block,
            Fork::Eip155 => config.eip155_block,
            Fork::Eip158 => config.eip158_block,
            Fork::Byzantium => config.byzantium_block,
            Fork::Constantinople => config.constantinople_block,
            Fork::Petersburg => config.petersburg_block,
            Fork::Istanbul => config.istanbul_block,
        }
    }
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Activation blocks of every recognised fork, read once from a genesis.
///
/// A fork is active at its block when set and inactive when unset. Values are
/// taken as-is: no clamping, no ordering checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForkSchedule {
    blocks: [Option<u64>; FORK_COUNT],
}

impl ForkSchedule {
    /// Reads the fork schedule from the genesis chain config.
    pub fn from_genesis(genesis: &Genesis) -> Self {
        Self::from_config(&genesis.config)
    }

    /// Reads the fork schedule from a chain config.
    pub fn from_config(config: &ChainConfig) -> Self {
        let mut blocks = [None; FORK_COUNT];
        for fork in Fork::ALL {
            blocks[fork as usize] = fork.read(config);
        }
        Self { blocks }
    }

    /// Activation block of `fork`, or `None` if it is not scheduled.
    pub fn block(&self, fork: Fork) -> Option<u64> {
        self.blocks[fork as usize]
    }

    /// Whether `fork` is scheduled at all.
    pub fn is_active(&self, fork: Fork) -> bool {
        self.block(fork).is_some()
    }

    /// Scheduled forks with their activation blocks, in declaration order.
    pub fn active(&self) -> impl Iterator<Item = (Fork, u64)> + '_ {
        Fork::ALL
            .into_iter()
            .filter_map(|fork| self.block(fork).map(|block| (fork, block)))
    }

    /// Fails if `fork` is scheduled but `requires` is not.
    pub fn require(&self, fork: Fork, requires: Fork) -> Result<(), ChainSpecError> {
        if self.is_active(fork) && !self.is_active(requires) {
            return Err(ChainSpecError::InvalidForkDependency { fork, requires });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ChainConfig {
        ChainConfig {
            chain_id: 1234,
            homestead_block: Some(0),
            byzantium_block: Some(10),
            istanbul_block: Some(20),
            ..Default::default()
        }
    }

    #[test]
    fn test_reads_set_forks() {
        let schedule = ForkSchedule::from_config(&config());
        assert_eq!(schedule.block(Fork::Homestead), Some(0));
        assert_eq!(schedule.block(Fork::Byzantium), Some(10));
        assert_eq!(schedule.block(Fork::Istanbul), Some(20));
    }

    #[test]
    fn test_unset_forks_are_inactive() {
        let schedule = ForkSchedule::from_config(&config());
        assert!(!schedule.is_active(Fork::Eip150));
        assert!(!schedule.is_active(Fork::Constantinople));
        assert!(!schedule.is_active(Fork::Petersburg));
        assert_eq!(schedule.block(Fork::Eip158), None);
    }

    #[test]
    fn test_block_zero_is_active() {
        let schedule = ForkSchedule::from_config(&config());
        assert!(schedule.is_active(Fork::Homestead));
    }

    #[test]
    fn test_no_monotonicity_enforced() {
        let cfg = ChainConfig {
            byzantium_block: Some(100),
            istanbul_block: Some(5),
            ..Default::default()
        };
        let schedule = ForkSchedule::from_config(&cfg);
        assert_eq!(schedule.block(Fork::Byzantium), Some(100));
        assert_eq!(schedule.block(Fork::Istanbul), Some(5));
        assert!(schedule.require(Fork::Istanbul, Fork::Byzantium).is_ok());
    }

    #[test]
    fn test_active_iterates_in_order() {
        let schedule = ForkSchedule::from_config(&config());
        let active: Vec<_> = schedule.active().collect();
        assert_eq!(
            active,
            vec![
                (Fork::Homestead, 0),
                (Fork::Byzantium, 10),
                (Fork::Istanbul, 20)
            ]
        );
    }

    #[test]
    fn test_require_missing_prerequisite() {
        let cfg = ChainConfig {
            istanbul_block: Some(20),
            ..Default::default()
        };
        let schedule = ForkSchedule::from_config(&cfg);
        assert_eq!(
            schedule.require(Fork::Istanbul, Fork::Byzantium),
            Err(ChainSpecError::InvalidForkDependency {
                fork: Fork::Istanbul,
                requires: Fork::Byzantium,
            })
        );
    }

    #[test]
    fn test_require_inactive_dependent_passes() {
        let schedule = ForkSchedule::default();
        assert!(schedule.require(Fork::Istanbul, Fork::Byzantium).is_ok());
    }
}
