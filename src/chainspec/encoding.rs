//! Textual encodings shared by the chain spec dialects.
//!
//! Scalar fields use [`U64`] and big integers use [`U256`]. Both serialize
//! as minimal `0x`-prefixed hex and accept hex or decimal text on input.
//! Map keys and values that the clients expect as raw strings go through
//! the helpers below.

use alloy_primitives::{B64, U256, U64};

/// Hex-or-decimal 64-bit scalar.
pub type Quantity = U64;

/// Hex-or-decimal 256-bit integer.
pub type BigQuantity = U256;

/// Encodes a block number or amount as a `0x`-prefixed big integer string.
pub fn encode_big(value: u64) -> String {
    encode_u256(U256::from(value))
}

/// Encodes a 256-bit value as a `0x`-prefixed big integer string.
pub fn encode_u256(value: U256) -> String {
    format!("0x{value:x}")
}

/// Encodes a 64-bit value as a `0x`-prefixed hex string.
pub fn encode_uint64(value: u64) -> String {
    format!("0x{value:x}")
}

/// Encodes a genesis nonce as the 8-byte big-endian block nonce.
pub fn encode_nonce(nonce: u64) -> B64 {
    B64::new(nonce.to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_big_zero() {
        assert_eq!(encode_big(0), "0x0");
    }

    #[test]
    fn test_encode_big_minimal_digits() {
        assert_eq!(encode_big(20), "0x14");
        assert_eq!(encode_u256(U256::from(5_000_000_000_000_000_000u64)), "0x4563918244f40000");
    }

    #[test]
    fn test_encode_uint64() {
        assert_eq!(encode_uint64(3_000_000), "0x2dc6c0");
        assert_eq!(encode_uint64(0), "0x0");
    }

    #[test]
    fn test_encode_nonce_is_big_endian() {
        assert_eq!(encode_nonce(0x42).to_string(), "0x0000000000000042");
    }

    #[test]
    fn test_quantity_serializes_as_hex() {
        let value = serde_json::to_value(Quantity::from(1234u64)).unwrap();
        assert_eq!(value, serde_json::json!("0x4d2"));
        let zero = serde_json::to_value(BigQuantity::ZERO).unwrap();
        assert_eq!(zero, serde_json::json!("0x0"));
    }

    #[test]
    fn test_quantity_accepts_decimal() {
        let parsed: BigQuantity = serde_json::from_value(serde_json::json!("100")).unwrap();
        assert_eq!(parsed, U256::from(100));
        let parsed: Quantity = serde_json::from_value(serde_json::json!("0x64")).unwrap();
        assert_eq!(parsed, U64::from(100));
    }
}
