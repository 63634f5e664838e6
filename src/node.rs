//! Domain node derivation.
//!
//! A name maps to a 32-byte lookup node by the registry contract's
//! keccak-256 scheme; the node is the key the `record` function is
//! queried with. Must match the on-chain hashing bit for bit.

use sha3::{Digest, Keccak256};

/// Top-level domain suffix baked into every node.
const TLD: &[u8] = b"xlm";

fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

fn keccak256_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(a);
    hasher.update(b);
    hasher.finalize().into()
}

/// Derive the lookup node for a domain, as 64 lowercase hex characters.
///
/// Pure and deterministic; no I/O. The raw bytes of `domain` and
/// `sub_domain` are hashed verbatim, so callers must pre-normalize case
/// to match what was registered on chain.
pub fn parse_domain(domain: &str, sub_domain: Option<&str>) -> String {
    hex::encode(node_bytes(domain, sub_domain))
}

/// Raw 32-byte form of [`parse_domain`], used to build call arguments.
pub(crate) fn node_bytes(domain: &str, sub_domain: Option<&str>) -> [u8; 32] {
    let record = keccak256_pair(&keccak256(TLD), &keccak256(domain.as_bytes()));
    match sub_domain {
        Some(sub) => keccak256_pair(&keccak256(&record), &keccak256(sub.as_bytes())),
        None => record,
    }
}
