//! secp256k1 private key (secret exponent) and its encodings.
//!
//! Wraps a k256 signing key and adds SEC1 DER / PEM serialization with an
//! explicit curve check, WIF encoding with a caller-chosen network prefix,
//! and raw hex.

use k256::ecdsa::SigningKey;
use k256::SecretKey;
use sec1::der::asn1::ObjectIdentifier;
use sec1::der::Encode;
use sec1::{EcParameters, EcPrivateKey, LineEnding};
use zeroize::Zeroizing;

use crate::base58;
use crate::ec::public_key::PublicKey;
use crate::KeyError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// Compression flag byte appended to WIF for compressed public keys.
const COMPRESS_MAGIC: u8 = 0x01;

/// Named curve OID for secp256k1 (`1.3.132.0.10`).
const SECP256K1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.10");

/// PEM label of a SEC1 `ECPrivateKey` document.
const PEM_LABEL: &str = "EC PRIVATE KEY";

/// A secp256k1 private key.
///
/// The secret exponent is always in `[1, n-1]`; every constructor rejects
/// anything else.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    /// The underlying k256 signing key.
    inner: SigningKey,
}

/// A private key decoded from WIF together with its metadata.
#[derive(Clone, Debug)]
pub struct WifKey {
    /// The decoded key.
    pub key: PrivateKey,
    /// The WIF version byte, selecting the network.
    pub prefix: u8,
    /// Whether the WIF carried the compressed-public-key flag.
    pub compressed: bool,
}

impl PrivateKey {
    /// Create a private key from a raw 32-byte big-endian scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)`, or `KeyError::Decoding` if the slice is not 32 bytes
    /// or the scalar is zero or not below the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(KeyError::Decoding(format!(
                "private key must be {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|_| KeyError::Decoding("secret exponent out of range".to_string()))?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a 64-character hex string (either case).
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        if hex_str.is_empty() {
            return Err(KeyError::Decoding("private key hex is empty".to_string()));
        }
        let bytes = Zeroizing::new(hex::decode(hex_str)?);
        Self::from_bytes(&bytes)
    }

    /// Parse a SEC1 `ECPrivateKey` DER blob.
    ///
    /// The blob must name secp256k1 in its `parameters` field. Keys for
    /// other curves, and keys without curve parameters, are rejected rather
    /// than reinterpreted as secp256k1 scalars.
    ///
    /// # Returns
    /// `Ok(PrivateKey)`, or `KeyError::Decoding` for malformed DER, a wrong
    /// or missing curve, or a public key field that does not match the secret.
    pub fn from_der(der: &[u8]) -> Result<Self, KeyError> {
        let ec_key = EcPrivateKey::try_from(der)
            .map_err(|e| KeyError::Decoding(format!("malformed DER private key: {}", e)))?;

        match ec_key.parameters.and_then(|params| params.named_curve()) {
            Some(oid) if oid == SECP256K1_OID => {}
            Some(oid) => {
                return Err(KeyError::Decoding(format!(
                    "DER private key is for curve {}, not secp256k1",
                    oid
                )));
            }
            None => {
                return Err(KeyError::Decoding(
                    "DER private key does not name its curve".to_string(),
                ));
            }
        }

        let secret_key = SecretKey::from_sec1_der(der)
            .map_err(|e| KeyError::Decoding(format!("invalid DER private key: {}", e)))?;
        Ok(PrivateKey {
            inner: SigningKey::from(&secret_key),
        })
    }

    /// Serialize as a SEC1 `ECPrivateKey` DER blob.
    ///
    /// The output carries the secp256k1 curve OID and the uncompressed
    /// public key.
    pub fn to_der(&self) -> Result<Vec<u8>, KeyError> {
        let secret = self.to_bytes();
        let public = self.pub_key().to_uncompressed();
        let ec_key = EcPrivateKey {
            private_key: &secret[..],
            parameters: Some(EcParameters::NamedCurve(SECP256K1_OID)),
            public_key: Some(&public[..]),
        };
        ec_key
            .to_der()
            .map_err(|e| KeyError::Encoding(format!("DER encoding failed: {}", e)))
    }

    /// Parse a PEM `EC PRIVATE KEY` document.
    pub fn from_pem(pem: &str) -> Result<Self, KeyError> {
        let der = Zeroizing::new(pem_to_der(pem)?);
        Self::from_der(&der)
    }

    /// Serialize as a PEM `EC PRIVATE KEY` document with LF line endings.
    pub fn to_pem(&self) -> Result<String, KeyError> {
        let der = Zeroizing::new(self.to_der()?);
        der_to_pem(&der)
    }

    /// Decode a WIF string, keeping its version byte and compression flag.
    ///
    /// Accepts both the 37-byte (uncompressed) and 38-byte (compressed)
    /// payload layouts. The version byte is returned as-is; mapping it to a
    /// network is the caller's concern.
    ///
    /// # Returns
    /// The decoded key and metadata, or `KeyError::Decoding` on a bad
    /// checksum, length, compression flag or secret exponent.
    pub fn decode_wif(wif: &str) -> Result<WifKey, KeyError> {
        let payload = Zeroizing::new(base58::check_decode(wif)?);

        // prefix + key (+ compress flag)
        let compressed = match payload.len() {
            34 => {
                if payload[33] != COMPRESS_MAGIC {
                    return Err(KeyError::Decoding(
                        "malformed WIF: invalid compression flag".to_string(),
                    ));
                }
                true
            }
            33 => false,
            len => {
                return Err(KeyError::Decoding(format!(
                    "malformed WIF: invalid payload length {}",
                    len
                )));
            }
        };

        let key = Self::from_bytes(&payload[1..1 + PRIVATE_KEY_BYTES_LEN])?;
        Ok(WifKey {
            key,
            prefix: payload[0],
            compressed,
        })
    }

    /// Decode a WIF string, discarding its network and compression metadata.
    pub fn from_wif(wif: &str) -> Result<Self, KeyError> {
        Ok(Self::decode_wif(wif)?.key)
    }

    /// Encode as a compressed-flag WIF string with the given version byte.
    ///
    /// # Arguments
    /// * `prefix` - The network's WIF version byte (0x80 for Bitcoin mainnet).
    pub fn to_wif(&self, prefix: u8) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(2 + PRIVATE_KEY_BYTES_LEN));
        payload.push(prefix);
        payload.extend_from_slice(&self.to_bytes()[..]);
        payload.push(COMPRESS_MAGIC);
        base58::check_encode(&payload)
    }

    /// Serialize the secret exponent as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        let mut out = Zeroizing::new([0u8; 32]);
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the secret exponent as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(*self.to_bytes())
    }

    /// Derive the public key: the secret exponent times the generator.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_k256_verifying_key(self.inner.verifying_key())
    }

    /// Access the underlying k256 `SigningKey`.
    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        *self.to_bytes() == *other.to_bytes()
    }
}

impl Eq for PrivateKey {}

/// Strip the PEM armor from an `EC PRIVATE KEY` document.
///
/// # Returns
/// The DER bytes, or `KeyError::Decoding` for malformed armor or a
/// different label (e.g. a PKCS#8 `PRIVATE KEY`).
pub fn pem_to_der(pem: &str) -> Result<Vec<u8>, KeyError> {
    let (label, der) = sec1::pem::decode_vec(pem.trim().as_bytes())
        .map_err(|e| KeyError::Decoding(format!("malformed PEM: {}", e)))?;
    if label != PEM_LABEL {
        return Err(KeyError::Decoding(format!(
            "unexpected PEM label {:?}, expected {:?}",
            label, PEM_LABEL
        )));
    }
    Ok(der)
}

/// Wrap DER bytes in `EC PRIVATE KEY` PEM armor.
///
/// The DER is not interpreted; callers that need validation decode it first.
pub fn der_to_pem(der: &[u8]) -> Result<String, KeyError> {
    sec1::pem::encode_string(PEM_LABEL, LineEnding::LF, der)
        .map_err(|e| KeyError::Encoding(format!("PEM encoding failed: {}", e)))
}
