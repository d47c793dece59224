#![deny(missing_docs)]

//! secp256k1 key material conversions for micropayment channels.
//!
//! This crate converts between the encodings a private key can arrive in and
//! derives the public material callers hand to counterparties:
//! - DER (SEC1 `ECPrivateKey`) and its PEM armor
//! - Wallet Import Format (WIF) with a network prefix
//! - Raw 32-byte secret exponent as hex
//! - Compressed and uncompressed SEC1 public keys
//! - P2PKH addresses for any network in a [`NetworkTable`]
//!
//! It also produces and checks detached ECDSA signatures over arbitrary bytes.
//! Every operation is a pure function; the only shared input is the network
//! table, which callers own and pass in explicitly.

pub mod hash;
pub mod base58;
pub mod network;
pub mod ec;
pub mod format;
pub mod keys;

mod error;
pub use error::KeyError;
pub use format::{KeyFormat, PrivateKeyEncoding};
pub use network::{Network, NetworkTable};
