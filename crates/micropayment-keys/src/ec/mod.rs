//! Elliptic curve key material on secp256k1.
//!
//! Provides the private key (secret exponent) with its DER, PEM, WIF and hex
//! encodings, the SEC1 public key with address derivation, and detached
//! ECDSA signatures.

pub mod private_key;
pub mod public_key;
pub mod signature;

pub use private_key::{PrivateKey, WifKey};
pub use public_key::PublicKey;
pub use signature::Signature;
