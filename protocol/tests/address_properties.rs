//! Property tests for operator address derivation.
//!
//! These pin the algorithm from the outside: known vectors, the truncation
//! direction, behaviour on a large random corpus, and thread safety.

use dfns_protocol::crypto::{derive_operator_address, keccak256, Address, OperatorPublicKey};
use k256::SecretKey;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use std::collections::HashSet;

/// Known secp256k1 points (64-byte `x || y`) and the addresses of their
/// private keys 1 and 2.
const KNOWN_VECTORS: &[(&str, &str)] = &[
    (
        concat!(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        ),
        "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf",
    ),
    (
        concat!(
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        ),
        "0x2b5ad5c4795c026514f8317c7a215e218dccd6cf",
    ),
];

// ---------------------------------------------------------------------------
// Known vectors
// ---------------------------------------------------------------------------

#[test]
fn known_points_derive_known_addresses() {
    for (public_key, expected) in KNOWN_VECTORS {
        let bytes = hex::decode(public_key).unwrap();
        assert_eq!(bytes.len(), 64);
        assert_eq!(derive_operator_address(&bytes).to_hex(), *expected);
    }
}

#[test]
fn validated_path_agrees_with_raw_path() {
    for (public_key, expected) in KNOWN_VECTORS {
        let key = OperatorPublicKey::from_hex(public_key).unwrap();
        assert_eq!(key.derive_address(), expected.parse::<Address>().unwrap());

        // Same key, compressed on the wire.
        let compressed = OperatorPublicKey::parse(&key.to_compressed()).unwrap();
        assert_eq!(compressed.derive_address(), key.derive_address());
    }
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

#[test]
fn output_is_low_order_twenty_bytes_of_digest() {
    let mut rng = rand::thread_rng();
    for _ in 0..64 {
        let len = rng.gen_range(0..512);
        let mut input = vec![0u8; len];
        rng.fill_bytes(&mut input);

        let digest = keccak256(&input);
        let address = derive_operator_address(&input);
        assert_eq!(address.as_bytes().as_slice(), &digest[12..]);
    }
}

#[test]
fn deterministic_across_calls() {
    let mut input = [0u8; 64];
    OsRng.fill_bytes(&mut input);
    assert_eq!(
        derive_operator_address(&input),
        derive_operator_address(&input)
    );
    assert_eq!(
        derive_operator_address(&input),
        derive_operator_address(&input.to_vec())
    );
}

#[test]
fn empty_input_is_accepted() {
    assert_eq!(
        derive_operator_address(&[]).to_hex(),
        "0xdcc703c0e500b653ca82273b7bfad8045d85a470"
    );
}

// ---------------------------------------------------------------------------
// Sensitivity
// ---------------------------------------------------------------------------

#[test]
fn no_collisions_in_random_corpus() {
    let mut rng = rand::thread_rng();
    let mut inputs = HashSet::new();
    while inputs.len() < 10_000 {
        let mut input = vec![0u8; 64];
        rng.fill_bytes(&mut input);
        inputs.insert(input);
    }

    let addresses: HashSet<Address> = inputs
        .iter()
        .map(|input| derive_operator_address(input))
        .collect();
    assert_eq!(addresses.len(), inputs.len());
}

#[test]
fn single_bit_flips_change_the_address() {
    let mut input = [0u8; 64];
    OsRng.fill_bytes(&mut input);
    let original = derive_operator_address(&input);

    for byte in 0..input.len() {
        for bit in 0..8 {
            let mut flipped = input;
            flipped[byte] ^= 1 << bit;
            assert_ne!(derive_operator_address(&flipped), original);
        }
    }
}

#[test]
fn random_operator_keys_get_distinct_addresses() {
    let addresses: HashSet<Address> = (0..200)
        .map(|_| OperatorPublicKey::from(SecretKey::random(&mut OsRng).public_key()))
        .map(|key| key.derive_address())
        .collect();
    assert_eq!(addresses.len(), 200);
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn concurrent_callers_agree() {
    let input = hex::decode(KNOWN_VECTORS[0].0).unwrap();
    let expected = derive_operator_address(&input);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (0..1_000)
                        .map(|_| derive_operator_address(&input))
                        .all(|address| address == expected)
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
