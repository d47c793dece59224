//! Function-per-edge conversions between key encodings.
//!
//! Formats, from most to least informative:
//! - DER: binary SEC1 `ECPrivateKey`
//! - PEM: base64 armor around the DER
//! - WIF: base58check private key with a network prefix
//! - privkey: hex encoded 32-byte secret exponent
//! - pubkey: hex encoded 33-byte compressed SEC1 point
//! - address: base58check P2PKH address
//!
//! Multi-hop conversions are compositions of the single-hop ones. Anything
//! that produces or inspects a WIF or an address takes the caller's
//! [`NetworkTable`] and a network code explicitly.

use crate::ec::private_key;
use crate::ec::public_key::decode_address;
use crate::ec::{PrivateKey, PublicKey, Signature};
use crate::{KeyError, NetworkTable};

/// Secret exponent (hex) of a DER encoded private key.
pub fn der_to_privkey(der: &[u8]) -> Result<String, KeyError> {
    Ok(PrivateKey::from_der(der)?.to_hex())
}

/// DER encoding of a hex secret exponent.
pub fn privkey_to_der(privkey: &str) -> Result<Vec<u8>, KeyError> {
    PrivateKey::from_hex(privkey)?.to_der()
}

/// DER bytes inside an `EC PRIVATE KEY` PEM document.
///
/// The DER is validated as a secp256k1 key before it is returned.
pub fn pem_to_der(pem: &str) -> Result<Vec<u8>, KeyError> {
    let der = private_key::pem_to_der(pem)?;
    PrivateKey::from_der(&der)?;
    Ok(der)
}

/// PEM armor around a DER private key, validated first.
pub fn der_to_pem(der: &[u8]) -> Result<String, KeyError> {
    PrivateKey::from_der(der)?;
    private_key::der_to_pem(der)
}

/// Secret exponent (hex) of a PEM encoded private key.
pub fn pem_to_privkey(pem: &str) -> Result<String, KeyError> {
    Ok(PrivateKey::from_pem(pem)?.to_hex())
}

/// PEM encoding of a hex secret exponent.
pub fn privkey_to_pem(privkey: &str) -> Result<String, KeyError> {
    PrivateKey::from_hex(privkey)?.to_pem()
}

/// Secret exponent (hex) of a WIF, ignoring its network and compression flag.
pub fn wif_to_privkey(wif: &str) -> Result<String, KeyError> {
    Ok(PrivateKey::from_wif(wif)?.to_hex())
}

/// WIF of a hex secret exponent for `netcode`.
///
/// # Returns
/// A compressed-flag WIF, `KeyError::UnknownNetwork` if `netcode` is not in
/// `networks`, or `KeyError::Decoding` for a bad secret exponent.
pub fn privkey_to_wif(
    privkey: &str,
    networks: &NetworkTable,
    netcode: &str,
) -> Result<String, KeyError> {
    let prefix = networks.wif_prefix(netcode)?;
    Ok(PrivateKey::from_hex(privkey)?.to_wif(prefix))
}

/// DER encoding of the key in a WIF.
pub fn wif_to_der(wif: &str) -> Result<Vec<u8>, KeyError> {
    privkey_to_der(&wif_to_privkey(wif)?)
}

/// WIF for `netcode` of a DER encoded private key.
pub fn der_to_wif(der: &[u8], networks: &NetworkTable, netcode: &str) -> Result<String, KeyError> {
    privkey_to_wif(&der_to_privkey(der)?, networks, netcode)
}

/// PEM encoding of the key in a WIF.
pub fn wif_to_pem(wif: &str) -> Result<String, KeyError> {
    privkey_to_pem(&wif_to_privkey(wif)?)
}

/// WIF for `netcode` of a PEM encoded private key.
pub fn pem_to_wif(pem: &str, networks: &NetworkTable, netcode: &str) -> Result<String, KeyError> {
    privkey_to_wif(&pem_to_privkey(pem)?, networks, netcode)
}

/// Compressed public key (hex) of a hex secret exponent.
pub fn pubkey_from_privkey(privkey: &str) -> Result<String, KeyError> {
    Ok(PrivateKey::from_hex(privkey)?.pub_key().to_hex())
}

/// Compressed public key (hex) of a DER encoded private key.
pub fn pubkey_from_der(der: &[u8]) -> Result<String, KeyError> {
    pubkey_from_privkey(&der_to_privkey(der)?)
}

/// Compressed public key (hex) of a PEM encoded private key.
pub fn pubkey_from_pem(pem: &str) -> Result<String, KeyError> {
    pubkey_from_privkey(&pem_to_privkey(pem)?)
}

/// Compressed public key (hex) of a WIF.
///
/// Always the compressed form, whatever the WIF's compression flag says.
pub fn pubkey_from_wif(wif: &str) -> Result<String, KeyError> {
    pubkey_from_privkey(&wif_to_privkey(wif)?)
}

/// Uncompressed (65-byte, `04 || x || y`) hex form of a public key.
pub fn uncompress_pubkey(pubkey: &str) -> Result<String, KeyError> {
    Ok(PublicKey::from_hex(pubkey)?.to_uncompressed_hex())
}

/// Compressed (33-byte) hex form of a public key.
pub fn compress_pubkey(pubkey: &str) -> Result<String, KeyError> {
    Ok(PublicKey::from_hex(pubkey)?.to_hex())
}

/// P2PKH address on `netcode` for a public key in either SEC1 form.
///
/// The address always commits to the compressed serialization.
pub fn address_from_pubkey(
    pubkey: &str,
    networks: &NetworkTable,
    netcode: &str,
) -> Result<String, KeyError> {
    let prefix = networks.address_prefix(netcode)?;
    Ok(PublicKey::from_hex(pubkey)?.to_address(prefix, true))
}

/// P2PKH address on `netcode` for a hex secret exponent.
pub fn address_from_privkey(
    privkey: &str,
    networks: &NetworkTable,
    netcode: &str,
) -> Result<String, KeyError> {
    address_from_pubkey(&pubkey_from_privkey(privkey)?, networks, netcode)
}

/// P2PKH address on `netcode` for a DER encoded private key.
pub fn address_from_der(
    der: &[u8],
    networks: &NetworkTable,
    netcode: &str,
) -> Result<String, KeyError> {
    address_from_pubkey(&pubkey_from_der(der)?, networks, netcode)
}

/// P2PKH address on `netcode` for a PEM encoded private key.
pub fn address_from_pem(
    pem: &str,
    networks: &NetworkTable,
    netcode: &str,
) -> Result<String, KeyError> {
    address_from_pubkey(&pubkey_from_pem(pem)?, networks, netcode)
}

/// P2PKH address for a WIF on the WIF's own network.
///
/// The network comes from the WIF prefix; the public key is hashed
/// compressed or uncompressed according to the WIF's compression flag.
pub fn address_from_wif(wif: &str, networks: &NetworkTable) -> Result<String, KeyError> {
    let decoded = PrivateKey::decode_wif(wif)?;
    let netcode = networks.code_for_wif_prefix(decoded.prefix)?;
    let prefix = networks.address_prefix(netcode)?;
    Ok(decoded.key.pub_key().to_address(prefix, decoded.compressed))
}

/// Network code a WIF was encoded for.
pub fn netcode_from_wif(wif: &str, networks: &NetworkTable) -> Result<String, KeyError> {
    let decoded = PrivateKey::decode_wif(wif)?;
    let netcode = networks.code_for_wif_prefix(decoded.prefix)?;
    tracing::trace!(prefix = decoded.prefix, netcode, "resolved wif network");
    Ok(netcode.to_string())
}

/// Network code an address was encoded for.
pub fn netcode_from_address(address: &str, networks: &NetworkTable) -> Result<String, KeyError> {
    let (version, _) = decode_address(address)?;
    let netcode = networks.code_for_address_prefix(version)?;
    tracing::trace!(prefix = version, netcode, "resolved address network");
    Ok(netcode.to_string())
}

/// Sign `message` with the key in `wif`.
///
/// # Returns
/// Hex of the DER encoded low-S signature, or `KeyError::Decoding` if the
/// WIF is malformed.
pub fn sign(wif: &str, message: &[u8]) -> Result<String, KeyError> {
    let key = PrivateKey::from_wif(wif)?;
    let signature = Signature::sign(message, &key)?;
    tracing::debug!(
        pubkey = %key.pub_key(),
        message_len = message.len(),
        "signed message"
    );
    Ok(signature.to_hex())
}

/// Verify a hex DER `signature` over `message` against a hex `pubkey`.
///
/// # Returns
/// `Ok(())` when the signature is valid. Any failure, including a public
/// key or signature that does not decode, is
/// `KeyError::InvalidSignature` carrying the three inputs.
pub fn verify(pubkey: &str, signature: &str, message: &[u8]) -> Result<(), KeyError> {
    let valid = match (PublicKey::from_hex(pubkey), Signature::from_hex(signature)) {
        (Ok(key), Ok(sig)) => sig.verify(message, &key),
        _ => false,
    };
    tracing::debug!(pubkey, message_len = message.len(), valid, "verified signature");
    if valid {
        Ok(())
    } else {
        Err(KeyError::InvalidSignature {
            pubkey: pubkey.to_string(),
            signature: signature.to_string(),
            message: hex::encode(message),
        })
    }
}
