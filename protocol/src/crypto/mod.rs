//! # Cryptographic Primitives for the DFNS Blueprint
//!
//! Everything that turns key material into identifiers flows through here.
//!
//! - **Keccak-256** for operator addresses — the hash the on-chain side uses.
//! - **SHA-256** for execution ids and store keys — the hash the MPC side uses.
//! - **secp256k1** for operator keys — the curve CGGMP21 runs on.
//!
//! Nothing here is hand-rolled. The hashes come from the RustCrypto `sha2` /
//! `sha3` crates and the curve arithmetic from `k256`.

pub mod address;
pub mod hash;
pub mod keys;

pub use address::{derive_operator_address, Address, AddressError};
pub use hash::{keccak256, sha256, sha256_multi};
pub use keys::{KeyError, OperatorPublicKey};
