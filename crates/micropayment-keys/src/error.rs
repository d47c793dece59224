/// Unified error type for key conversion, signing and verification.
///
/// Every conversion either fully succeeds or returns one of these kinds.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// Malformed or checksum-invalid input to a decode step (hex, DER, PEM, WIF, address).
    #[error("decoding error: {0}")]
    Decoding(String),

    /// The network code is not present in the prefix table.
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    /// Bytes that do not describe a point on secp256k1.
    #[error("invalid point: {0}")]
    InvalidPoint(String),

    /// A signature did not verify for the given public key and message.
    #[error("invalid signature for pubkey {pubkey}, signature {signature}, message {message}")]
    InvalidSignature {
        /// Hex public key the signature was checked against.
        pubkey: String,
        /// Hex DER signature as supplied by the caller.
        signature: String,
        /// Hex of the signed message bytes.
        message: String,
    },

    /// Key material could not be serialized (DER or PEM).
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The ECDSA signer failed to produce a signature.
    #[error("signing failed: {0}")]
    Signing(String),

    /// A network table could not be loaded.
    #[error("invalid network configuration: {0}")]
    Config(String),
}

impl From<hex::FromHexError> for KeyError {
    fn from(e: hex::FromHexError) -> Self {
        KeyError::Decoding(format!("invalid hex: {}", e))
    }
}

impl From<serde_json::Error> for KeyError {
    fn from(e: serde_json::Error) -> Self {
        KeyError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            KeyError::Signing("bad nonce".into()).to_string(),
            "signing failed: bad nonce"
        );
        assert_eq!(
            KeyError::Encoding("too long".into()).to_string(),
            "encoding error: too long"
        );
        let err: KeyError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, KeyError::Decoding(_)));
    }
}
