//! Hash functions used by key encodings.
//!
//! SHA-256d backs the base58check checksum; Hash160 turns a public key
//! into the 20-byte payload of an address.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 (SHA-256d): SHA-256(SHA-256(data)).
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute RIPEMD-160 hash of the input data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    let mut output = [0u8; 20];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Compute Hash160: RIPEMD-160(SHA-256(data)).
///
/// # Arguments
/// * `data` - Serialized SEC1 public key.
///
/// # Returns
/// The 20-byte digest carried inside a P2PKH address.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}
