//! Precompiled contract registry shared by the dialect builders.
//!
//! Each dialect stores its builtin definitions inside its account table. The
//! registry only ever inserts or replaces the definition at an address; it
//! never removes one. Callers apply forks in activation order so the last
//! write for an address is the one that ends up in the document.

use alloy_primitives::Address;
use std::collections::BTreeMap;

/// Account entry that can carry a precompiled contract definition.
pub trait BuiltinAccount: Default {
    /// Dialect-specific builtin definition (name, activation and pricing).
    type Builtin;

    /// Replaces the builtin definition, leaving balance and nonce untouched.
    fn set_builtin(&mut self, builtin: Self::Builtin);

    /// Current builtin definition, if any.
    fn builtin(&self) -> Option<&Self::Builtin>;
}

/// Address of the precompile with the given single-byte index (`0x00..0<index>`).
pub fn precompile_address(index: u8) -> Address {
    Address::with_last_byte(index)
}

/// Upsert-only view over a document's account table.
#[derive(Debug)]
pub struct PrecompileRegistry<'a, A> {
    accounts: &'a mut BTreeMap<Address, A>,
}

impl<'a, A: BuiltinAccount> PrecompileRegistry<'a, A> {
    /// Wraps the account table of the document being built.
    pub fn new(accounts: &'a mut BTreeMap<Address, A>) -> Self {
        Self { accounts }
    }

    /// Inserts the builtin at `index`, replacing any earlier definition wholesale.
    pub fn upsert(&mut self, index: u8, builtin: A::Builtin) -> &mut Self {
        self.accounts
            .entry(precompile_address(index))
            .or_default()
            .set_builtin(builtin);
        self
    }
}

#[cfg(test)]
impl<A: BuiltinAccount> PrecompileRegistry<'_, A> {
    /// Builtin currently registered at `index`.
    fn get(&self, index: u8) -> Option<&A::Builtin> {
        self.accounts
            .get(&precompile_address(index))
            .and_then(|account| account.builtin())
    }

    /// Number of addresses that carry a builtin.
    fn len(&self) -> usize {
        self.accounts
            .values()
            .filter(|account| account.builtin().is_some())
            .count()
    }

    /// Whether no builtin has been registered yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
