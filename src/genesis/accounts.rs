use alloy_primitives::{address, Address, U256};

/// Balance given to each sample account (1,000,000 ETH in wei)
pub fn default_prefund_balance() -> U256 {
    U256::from(1_000_000u64) * U256::from(10u64).pow(U256::from(18u64))
}

/// Accounts prefunded by the `--sample` genesis
pub fn sample_accounts() -> Vec<Address> {
    vec![
        address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
        address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
        address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_accounts_are_distinct() {
        let mut accounts = sample_accounts();
        accounts.sort();
        accounts.dedup();
        assert_eq!(accounts.len(), 3);
    }

    #[test]
    fn test_default_prefund_balance() {
        let ether = U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(default_prefund_balance() / ether, U256::from(1_000_000u64));
    }
}
