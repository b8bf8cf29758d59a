//! # DFNS Blueprint
//!
//! The service manager for the DFNS-CGGMP21 threshold-ECDSA blueprint. It
//! keeps every default hook and adds one utility: turning an operator's
//! public key into the address the chain knows the operator by.
//!
//! ## Public key handling
//!
//! [`operator_address_from_public_key`](DfnsBlueprint::operator_address_from_public_key)
//! hashes exactly the bytes it is given. It does not check that they are a
//! curve point, and it does not re-encode compressed keys. Callers that hold
//! a key in an unknown SEC1 form and want the Ethereum-compatible address
//! should go through
//! [`operator_address_from_sec1`](DfnsBlueprint::operator_address_from_sec1).

use crate::hooks::BlueprintServiceManager;
use dfns_protocol::crypto::{derive_operator_address, Address, KeyError, OperatorPublicKey};

/// The DFNS-CGGMP21 blueprint service manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DfnsBlueprint;

impl DfnsBlueprint {
    pub fn new() -> Self {
        Self
    }

    /// The low-order 20 bytes of `keccak256(public_key)`.
    ///
    /// Never fails. Empty or malformed input still yields a deterministic
    /// address.
    pub fn operator_address_from_public_key(&self, public_key: &[u8]) -> Address {
        derive_operator_address(public_key)
    }

    /// Parse `public_key` as a secp256k1 key (33, 64 or 65 bytes) and derive
    /// the address of its uncompressed `x || y` form.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError`] if the bytes are not a valid key encoding.
    pub fn operator_address_from_sec1(&self, public_key: &[u8]) -> Result<Address, KeyError> {
        let key = OperatorPublicKey::parse(public_key)?;
        let address = key.derive_address();
        tracing::trace!(key = %key, %address, "derived operator address");
        Ok(address)
    }
}

impl BlueprintServiceManager for DfnsBlueprint {}

#[cfg(test)]
mod tests {
    use super::*;

    const G_COMPRESSED: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_raw_derivation_matches_protocol() {
        let blueprint = DfnsBlueprint::new();
        for input in [&b""[..], b"key", &[0xFF; 64]] {
            assert_eq!(
                blueprint.operator_address_from_public_key(input),
                derive_operator_address(input)
            );
        }
    }

    #[test]
    fn test_sec1_derivation_decompresses() {
        let blueprint = DfnsBlueprint::new();
        let compressed = hex::decode(G_COMPRESSED).unwrap();
        let address = blueprint.operator_address_from_sec1(&compressed).unwrap();
        assert_eq!(
            address.to_hex(),
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
        assert_ne!(
            address,
            blueprint.operator_address_from_public_key(&compressed)
        );
    }

    #[test]
    fn test_sec1_derivation_rejects_garbage() {
        let blueprint = DfnsBlueprint::new();
        assert_eq!(
            blueprint.operator_address_from_sec1(&[1, 2, 3]),
            Err(KeyError::InvalidLength { got: 3 })
        );
    }
}
