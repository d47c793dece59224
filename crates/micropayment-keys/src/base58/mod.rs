//! Base58 and Base58Check codecs for WIF keys and addresses.
//!
//! The alphabet is Bitcoin's; the checksum is the first four bytes of
//! SHA-256d over the payload.

use crate::hash::sha256d;
use crate::KeyError;

/// Length of the trailing base58check checksum.
const CHECKSUM_LEN: usize = 4;

/// Encode a byte slice to a Base58 string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or `KeyError::Decoding` for characters outside
/// the alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>, KeyError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| KeyError::Decoding(format!("invalid base58: {}", e)))
}

/// Encode `data` with a 4-byte SHA-256d checksum appended (Base58Check).
///
/// # Arguments
/// * `data` - Version byte followed by the payload.
pub fn check_encode(data: &[u8]) -> String {
    let checksum = sha256d(data);
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&payload)
}

/// Decode a Base58Check string and verify its checksum.
///
/// # Returns
/// The payload without the checksum, or `KeyError::Decoding` when the
/// string is not base58, is too short, or the checksum does not match.
pub fn check_decode(s: &str) -> Result<Vec<u8>, KeyError> {
    let decoded = decode(s)?;
    if decoded.len() <= CHECKSUM_LEN {
        return Err(KeyError::Decoding(
            "base58check data too short for checksum".to_string(),
        ));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = sha256d(payload);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(KeyError::Decoding("base58check checksum mismatch".to_string()));
    }
    Ok(payload.to_vec())
}
