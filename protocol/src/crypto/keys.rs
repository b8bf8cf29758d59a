//! # Operator Keys
//!
//! Operators in a DFNS-CGGMP21 service publish a secp256k1 ECDSA public key
//! when they register. The chain hands those keys around in whatever SEC1
//! form the operator used, usually the 33-byte compressed one, but the
//! Ethereum-compatible address is defined over the 64-byte `x || y` form.
//! [`OperatorPublicKey`] is the validating bridge between the two:
//!
//! ```text
//! 33-byte compressed  ┐
//! 65-byte uncompressed├─> OperatorPublicKey ─> x || y (64) ─> derive_operator_address
//! 64-byte raw x || y  ┘
//! ```
//!
//! Parsing checks that the bytes are a point on the curve. The raw
//! [`derive_operator_address`] function does none of this.

use crate::config::{COMPRESSED_KEY_LENGTH, RAW_XY_KEY_LENGTH, UNCOMPRESSED_KEY_LENGTH};
use crate::crypto::address::{derive_operator_address, Address};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// SEC1 tag byte for an uncompressed point.
const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// Errors that can occur while parsing an operator key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid public key length: got {got} bytes, expected 33, 64 or 65")]
    InvalidLength { got: usize },

    #[error("invalid public key bytes: not a valid secp256k1 point")]
    InvalidPoint,

    #[error("invalid public key hex: {0}")]
    InvalidHex(String),
}

/// A validated secp256k1 operator public key.
///
/// # Examples
///
/// ```
/// use dfns_protocol::crypto::OperatorPublicKey;
///
/// let compressed = hex::decode(
///     "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
/// ).unwrap();
/// let key = OperatorPublicKey::parse(&compressed).unwrap();
/// assert_eq!(
///     key.derive_address().to_hex(),
///     "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf",
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OperatorPublicKey {
    inner: PublicKey,
}

impl OperatorPublicKey {
    /// Parse a SEC1-encoded key (33-byte compressed or 65-byte uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != COMPRESSED_KEY_LENGTH && bytes.len() != UNCOMPRESSED_KEY_LENGTH {
            return Err(KeyError::InvalidLength { got: bytes.len() });
        }
        let inner = PublicKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPoint)?;
        Ok(Self { inner })
    }

    /// Parse a 64-byte `x || y` key, the form with the SEC1 tag stripped.
    pub fn from_raw_xy(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != RAW_XY_KEY_LENGTH {
            return Err(KeyError::InvalidLength { got: bytes.len() });
        }
        let mut sec1 = [0u8; UNCOMPRESSED_KEY_LENGTH];
        sec1[0] = SEC1_UNCOMPRESSED_TAG;
        sec1[1..].copy_from_slice(bytes);
        Self::from_sec1_bytes(&sec1)
    }

    /// Parse any of the accepted encodings, dispatching on length.
    pub fn parse(bytes: &[u8]) -> Result<Self, KeyError> {
        match bytes.len() {
            RAW_XY_KEY_LENGTH => Self::from_raw_xy(bytes),
            _ => Self::from_sec1_bytes(bytes),
        }
    }

    /// Parse a hex-encoded key in any accepted encoding. A `0x` prefix is optional.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|e| KeyError::InvalidHex(e.to_string()))?;
        Self::parse(&bytes)
    }

    /// The 33-byte SEC1 compressed encoding.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_KEY_LENGTH] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_KEY_LENGTH];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// The 64-byte `x || y` encoding, without the SEC1 tag.
    pub fn to_uncompressed_xy(&self) -> [u8; RAW_XY_KEY_LENGTH] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; RAW_XY_KEY_LENGTH];
        out.copy_from_slice(&point.as_bytes()[1..]);
        out
    }

    /// The Ethereum-compatible operator address for this key.
    pub fn derive_address(&self) -> Address {
        derive_operator_address(&self.to_uncompressed_xy())
    }

    /// Compressed hex, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// Borrow the underlying `k256` key.
    pub fn as_k256(&self) -> &PublicKey {
        &self.inner
    }
}

impl From<PublicKey> for OperatorPublicKey {
    fn from(inner: PublicKey) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for OperatorPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OperatorPublicKey({})", self.to_hex())
    }
}

impl fmt::Display for OperatorPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for OperatorPublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for OperatorPublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        OperatorPublicKey::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
