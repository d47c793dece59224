//! secp256k1 public key.
//!
//! Supports compressed/uncompressed SEC1 serialization, Hash160, P2PKH
//! address derivation and ECDSA verification.

use k256::ecdsa::VerifyingKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use std::fmt;

use crate::base58;
use crate::ec::signature::Signature;
use crate::hash::hash160;
use crate::KeyError;

/// Length of a compressed public key in bytes (prefix + 32 byte x-coordinate).
const COMPRESSED_LEN: usize = 33;

/// Length of an uncompressed public key in bytes (prefix + 32 byte x + 32 byte y).
const UNCOMPRESSED_LEN: usize = 65;

/// Length of a decoded address payload (version byte + Hash160).
const ADDRESS_PAYLOAD_LEN: usize = 21;

/// A point on secp256k1 other than the identity.
#[derive(Clone, Debug)]
pub struct PublicKey {
    /// The underlying k256 verifying key.
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create a PublicKey from SEC1 encoded bytes.
    ///
    /// Accepts both compressed (33-byte) and uncompressed (65-byte) formats.
    ///
    /// # Returns
    /// `Ok(PublicKey)`, or `KeyError::InvalidPoint` if the bytes do not
    /// decode to a point on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.is_empty() {
            return Err(KeyError::InvalidPoint("public key is empty".to_string()));
        }
        let vk = VerifyingKey::from_sec1_bytes(bytes).map_err(|_| {
            KeyError::InvalidPoint(format!(
                "{} bytes do not encode a secp256k1 point",
                bytes.len()
            ))
        })?;
        Ok(PublicKey { inner: vk })
    }

    /// Create a PublicKey from a hex-encoded SEC1 string (66 or 130 characters).
    ///
    /// # Returns
    /// `KeyError::Decoding` for bad hex, `KeyError::InvalidPoint` for a bad point.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize in compressed SEC1 format: 0x02/0x03 followed by x.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize in uncompressed SEC1 format: 0x04 followed by x and y.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Compressed form as 66 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// Uncompressed form as 130 lowercase hex characters.
    pub fn to_uncompressed_hex(&self) -> String {
        hex::encode(self.to_uncompressed())
    }

    /// Compute the Hash160 of the chosen SEC1 serialization.
    pub fn hash160(&self, compressed: bool) -> [u8; 20] {
        if compressed {
            hash160(&self.to_compressed())
        } else {
            hash160(&self.to_uncompressed())
        }
    }

    /// Derive a P2PKH address.
    ///
    /// Computes Hash160 of the chosen serialization, prepends the version
    /// byte and encodes with Base58Check.
    ///
    /// # Arguments
    /// * `prefix` - The network's address version byte.
    /// * `compressed` - Hash the compressed (`true`) or uncompressed key.
    pub fn to_address(&self, prefix: u8, compressed: bool) -> String {
        let mut payload = Vec::with_capacity(ADDRESS_PAYLOAD_LEN);
        payload.push(prefix);
        payload.extend_from_slice(&self.hash160(compressed));
        base58::check_encode(&payload)
    }

    /// Verify an ECDSA signature over `message` (hashed with SHA-256).
    pub fn verify(&self, message: &[u8], sig: &Signature) -> bool {
        sig.verify(message, self)
    }

    /// Construct a PublicKey from a k256 `VerifyingKey`.
    pub(crate) fn from_k256_verifying_key(vk: &VerifyingKey) -> Self {
        PublicKey { inner: *vk }
    }

    /// Access the underlying k256 `VerifyingKey`.
    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.inner
    }
}

/// Split a P2PKH address into its version byte and Hash160.
///
/// # Returns
/// `KeyError::Decoding` if the string is not base58check or the payload is
/// not 21 bytes.
pub fn decode_address(address: &str) -> Result<(u8, [u8; 20]), KeyError> {
    let payload = base58::check_decode(address)?;
    if payload.len() != ADDRESS_PAYLOAD_LEN {
        return Err(KeyError::Decoding(format!(
            "invalid address payload length {}",
            payload.len()
        )));
    }
    let mut pkh = [0u8; 20];
    pkh.copy_from_slice(&payload[1..]);
    Ok((payload[0], pkh))
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_compressed() == other.to_compressed()
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
