//! # Protocol Configuration & Constants
//!
//! Every magic number the blueprint relies on lives here. The salts and job
//! ids in particular are shared with every other operator in a service: if
//! two operators disagree on one of them, their MPC sessions will never meet.

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// The blueprint protocol version string.
pub const PROTOCOL_VERSION: &str = "0.1.0";

/// The libp2p protocol id operators gossip on.
pub const NETWORK_PROTOCOL: &str = "/dfns/cggmp21/1.0.0";

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Length of an operator address in bytes. The low-order 160 bits of a
/// Keccak-256 digest.
pub const ADDRESS_LENGTH: usize = 20;

/// Hash output length in bytes. Both Keccak-256 and SHA-256 produce 32-byte digests.
pub const HASH_OUTPUT_LENGTH: usize = 32;

/// SEC1 compressed secp256k1 public key: `0x02 | 0x03` prefix plus `x`.
pub const COMPRESSED_KEY_LENGTH: usize = 33;

/// SEC1 uncompressed secp256k1 public key: `0x04` prefix plus `x || y`.
pub const UNCOMPRESSED_KEY_LENGTH: usize = 65;

/// Raw `x || y` coordinates without the SEC1 tag. This is the form that gets
/// hashed into an Ethereum-compatible address.
pub const RAW_XY_KEY_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

/// Distributed key generation.
pub const KEYGEN_JOB_ID: u8 = 0;

/// Refresh of an existing key share.
pub const KEY_REFRESH_JOB_ID: u8 = 1;

/// Threshold signing with a refreshed key share.
pub const SIGN_JOB_ID: u8 = 2;

/// Salt mixed into the meta hash that keys the local store.
pub const META_SALT: &str = "dfns";

/// Salt for the keygen execution id.
pub const KEYGEN_SALT: &str = "dfns-keygen";

/// Salt for the key-refresh execution id.
pub const KEY_REFRESH_SALT: &str = "dfns-key-refresh";

/// Salt for the signing execution id.
pub const SIGNING_SALT: &str = "dfns-signing";

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

/// Party indices are `u16` on the wire, which caps the operator set.
pub const MAX_OPERATORS: usize = u16::MAX as usize + 1;
