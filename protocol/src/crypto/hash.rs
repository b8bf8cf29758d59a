//! # Hashing Utilities
//!
//! Two hash functions, each with a single job:
//!
//! - **Keccak-256** — the pre-standardisation Keccak with the original
//!   `0x01` padding, as used by the EVM. This is *not* NIST SHA3-256; the two
//!   produce different digests for the same input. Used for operator
//!   addresses.
//!
//! - **SHA-256** — used for the deterministic hashes that name MPC
//!   executions and local store entries. Every operator in a service has to
//!   compute the same bytes here, so the layout is fixed.

use sha2::Sha256;
use sha3::{Digest, Keccak256};

/// Compute the Keccak-256 hash of the input data.
///
/// # Example
///
/// ```
/// use dfns_protocol::crypto::keccak256;
///
/// let hash = keccak256(b"");
/// assert_eq!(
///     hex::encode(hash),
///     "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
/// );
/// ```
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    to_array(&Keccak256::digest(data))
}

/// Compute the SHA-256 hash of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    to_array(&Sha256::digest(data))
}

/// Hash multiple byte slices together without concatenation overhead.
///
/// Parts are fed sequentially into one hasher, so the result equals
/// `sha256` of their concatenation. The execution id layouts are written in
/// terms of this function.
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    to_array(&hasher.finalize())
}

fn to_array(digest: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    output.copy_from_slice(digest);
    output
}
