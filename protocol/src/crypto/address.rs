//! # Operator Addresses
//!
//! An operator is identified on-chain by a 20-byte address derived from its
//! public key:
//!
//! ```text
//! public_key (any length)
//!     -> Keccak-256(public_key) -> 32 bytes
//!     -> low-order 160 bits     -> digest[12..32]
//! ```
//!
//! Reading the digest as a big-endian integer, the low-order 160 bits are
//! the *last* 20 bytes. That is the same truncation the EVM applies when it
//! casts `uint256(keccak256(pk))` down to `address`.
//!
//! [`derive_operator_address`] does not look at what the bytes are. A
//! 64-byte `x || y` point, a 33-byte compressed key, or an empty slice all
//! hash to *some* address. Whether that address means anything is the
//! caller's problem; see [`OperatorPublicKey`](super::keys::OperatorPublicKey)
//! for the validating path.

use crate::config::ADDRESS_LENGTH;
use crate::crypto::hash::keccak256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing an address out of text or bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The string is not valid hexadecimal.
    #[error("invalid hex address: {0}")]
    InvalidHex(String),

    /// The decoded data has the wrong length.
    #[error("invalid address length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        got: usize,
    },
}

/// A 20-byte operator address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    /// Wrap raw address bytes.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build an address from a slice, which must be exactly 20 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let array: [u8; ADDRESS_LENGTH] =
            bytes.try_into().map_err(|_| AddressError::InvalidLength {
                expected: ADDRESS_LENGTH,
                got: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Parse a hex address, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// The raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Consume the address and return its bytes.
    pub fn into_bytes(self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    /// Lowercase hex with a `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

/// Derive the operator address for a public key.
///
/// Computes `keccak256(public_key)` and keeps the low-order 20 bytes of the
/// 32-byte digest. Total over all inputs: any length, including zero, yields
/// an address.
///
/// # Example
///
/// ```
/// use dfns_protocol::crypto::derive_operator_address;
///
/// let address = derive_operator_address(b"");
/// assert_eq!(address.to_hex(), "0xdcc703c0e500b653ca82273b7bfad8045d85a470");
/// ```
pub fn derive_operator_address(public_key: &[u8]) -> Address {
    let digest = keccak256(public_key);
    let mut address = [0u8; ADDRESS_LENGTH];
    address.copy_from_slice(&digest[digest.len() - ADDRESS_LENGTH..]);
    Address(address)
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Address::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            Address::from_slice(&bytes).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// secp256k1 generator point `G`, as 64 raw bytes `x || y`.
    const GENERATOR_XY: &str = concat!(
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    );

    #[test]
    fn test_known_vector_generator_point() {
        // G is the public key of private key 1, whose address is well known.
        let pk = hex::decode(GENERATOR_XY).unwrap();
        let address = derive_operator_address(&pk);
        assert_eq!(
            address.to_hex(),
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
    }

    #[test]
    fn test_known_vector_empty_input() {
        let address = derive_operator_address(&[]);
        assert_eq!(
            address.to_hex(),
            "0xdcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_truncation_keeps_low_order_bytes() {
        let input = b"any public key bytes";
        let digest = keccak256(input);
        let address = derive_operator_address(input);
        assert_eq!(address.as_bytes(), &digest[12..]);
        assert_ne!(address.as_bytes(), &digest[..20]);
    }

    #[test]
    fn test_output_is_always_twenty_bytes() {
        for len in [0usize, 1, 20, 32, 33, 64, 65, 1024] {
            let input = vec![0xABu8; len];
            assert_eq!(derive_operator_address(&input).as_bytes().len(), 20);
        }
    }

    #[test]
    fn test_display_and_parse() {
        let address = derive_operator_address(b"operator-1");
        let text = address.to_string();
        assert!(text.starts_with("0x"));
        assert_eq!(text.len(), 42);
        assert_eq!(text.parse::<Address>().unwrap(), address);
        assert_eq!(Address::from_hex(&text[2..]).unwrap(), address);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = Address::from_hex("0x1234").unwrap_err();
        assert_eq!(
            err,
            AddressError::InvalidLength {
                expected: 20,
                got: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let bad = format!("0x{}", "zz".repeat(20));
        assert!(matches!(
            Address::from_hex(&bad),
            Err(AddressError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(
            format!("{:?}", Address::ZERO),
            "Address(0x0000000000000000000000000000000000000000)"
        );
    }

    #[test]
    fn test_serde_human_readable() {
        let address = derive_operator_address(b"serde");
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", address.to_hex()));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn test_serde_binary_uses_raw_bytes() {
        let address = derive_operator_address(b"bincode");
        let encoded = bincode::serialize(&address).unwrap();
        // u64 length prefix plus the 20 raw bytes.
        assert_eq!(encoded.len(), 8 + 20);
        let back: Address = bincode::deserialize(&encoded).unwrap();
        assert_eq!(back, address);
    }
}
