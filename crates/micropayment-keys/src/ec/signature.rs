//! Detached ECDSA signatures over arbitrary messages.
//!
//! Messages are hashed with SHA-256 and signed with RFC6979 deterministic
//! nonces. Signatures are always produced in low-S form, and verification
//! rejects the high-S twin of a valid signature, so each (key, message)
//! pair has exactly one accepted encoding.

use k256::ecdsa::signature::{Signer, Verifier};
use k256::ecdsa;

use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::KeyError;

/// A DER-serializable ECDSA signature on secp256k1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    inner: ecdsa::Signature,
}

impl Signature {
    /// Sign `message` with `priv_key`.
    ///
    /// # Returns
    /// A low-S signature, or `KeyError::Signing` in the negligible case
    /// that the nonce derivation yields an unusable scalar.
    pub fn sign(message: &[u8], priv_key: &PrivateKey) -> Result<Self, KeyError> {
        let sig: ecdsa::Signature = priv_key
            .signing_key()
            .try_sign(message)
            .map_err(|e| KeyError::Signing(e.to_string()))?;
        // low-S form
        let inner = sig.normalize_s().unwrap_or(sig);
        Ok(Signature { inner })
    }

    /// Check this signature over `message` against `pub_key`.
    ///
    /// # Returns
    /// `true` only for a low-S signature made by the matching private key.
    pub fn verify(&self, message: &[u8], pub_key: &PublicKey) -> bool {
        pub_key.verifying_key().verify(message, &self.inner).is_ok()
    }

    /// Parse a DER-encoded `(r, s)` sequence.
    pub fn from_der(bytes: &[u8]) -> Result<Self, KeyError> {
        let inner = ecdsa::Signature::from_der(bytes)
            .map_err(|_| KeyError::Decoding("malformed DER signature".to_string()))?;
        Ok(Signature { inner })
    }

    /// Parse a hex string of a DER-encoded signature.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_der(&bytes)
    }

    /// Serialize as a DER `(r, s)` sequence.
    pub fn to_der(&self) -> Vec<u8> {
        self.inner.to_der().as_bytes().to_vec()
    }

    /// Serialize as lowercase hex of the DER encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_der())
    }
}
