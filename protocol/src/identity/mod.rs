//! # Identity Module
//!
//! Operator identity inside a running service. Each operator is known by the
//! address derived from its secp256k1 key; the service's operators, ordered
//! by that address, define the party indices the MPC protocols run with.
//!
//! ## Design Decisions
//!
//! - The set is keyed by [`Address`](crate::crypto::Address), so ordering is
//!   byte order of the derived address and identical on every operator.
//! - Party indices are `u16`, matching the CGGMP21 wire types.

pub mod operators;

pub use operators::{OperatorSet, OperatorSetError};
