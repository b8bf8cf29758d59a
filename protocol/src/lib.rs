// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # DFNS Blueprint Protocol — Core Library
//!
//! The pure, stateless half of the DFNS-CGGMP21 blueprint. Everything in
//! here is a deterministic function of its inputs: no I/O, no clocks, no
//! shared mutable state. The blueprint contracts and the operator tooling
//! both build on top of it.
//!
//! ## Architecture
//!
//! - **crypto** — Keccak-256 / SHA-256 hashing, operator address derivation,
//!   and secp256k1 operator key handling.
//! - **identity** — The ordered operator set a service runs with, and the
//!   party index each operator holds inside it.
//! - **execution** — Deterministic storage keys and MPC execution ids for
//!   keygen, key refresh, and signing jobs.
//! - **config** — Protocol constants.
//!
//! ## Design Philosophy
//!
//! 1. Address derivation is total. It never fails and never validates.
//! 2. Validation is opt-in and lives in its own types (`OperatorPublicKey`).
//! 3. Every hash layout that other parties must reproduce is pinned by a test.

pub mod config;
pub mod crypto;
pub mod execution;
pub mod identity;
