//! Explicitly tagged private key encodings.
//!
//! Callers that accept "a private key in any encoding" hold a
//! [`PrivateKeyEncoding`], whose variant names the format. Nothing here
//! guesses a format from the shape of a string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ec::PrivateKey;
use crate::{KeyError, NetworkTable};

/// Private key encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    /// Binary SEC1 `ECPrivateKey`.
    Der,
    /// PEM armored SEC1 `ECPrivateKey`.
    Pem,
    /// Wallet Import Format.
    Wif,
    /// Hex encoded 32-byte secret exponent.
    Hex,
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyFormat::Der => "der",
            KeyFormat::Pem => "pem",
            KeyFormat::Wif => "wif",
            KeyFormat::Hex => "hex",
        };
        f.write_str(name)
    }
}

impl FromStr for KeyFormat {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "der" => Ok(KeyFormat::Der),
            "pem" => Ok(KeyFormat::Pem),
            "wif" => Ok(KeyFormat::Wif),
            "hex" | "privkey" => Ok(KeyFormat::Hex),
            other => Err(KeyError::Decoding(format!("unknown key format {:?}", other))),
        }
    }
}

/// A private key value tagged with its encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrivateKeyEncoding {
    /// Binary SEC1 DER.
    Der(Vec<u8>),
    /// PEM document.
    Pem(String),
    /// WIF string.
    Wif(String),
    /// Hex secret exponent.
    Hex(String),
}

impl PrivateKeyEncoding {
    /// The format of this value.
    pub fn format(&self) -> KeyFormat {
        match self {
            PrivateKeyEncoding::Der(_) => KeyFormat::Der,
            PrivateKeyEncoding::Pem(_) => KeyFormat::Pem,
            PrivateKeyEncoding::Wif(_) => KeyFormat::Wif,
            PrivateKeyEncoding::Hex(_) => KeyFormat::Hex,
        }
    }

    /// Decode into a [`PrivateKey`].
    pub fn to_private_key(&self) -> Result<PrivateKey, KeyError> {
        match self {
            PrivateKeyEncoding::Der(der) => PrivateKey::from_der(der),
            PrivateKeyEncoding::Pem(pem) => PrivateKey::from_pem(pem),
            PrivateKeyEncoding::Wif(wif) => PrivateKey::from_wif(wif),
            PrivateKeyEncoding::Hex(hex_str) => PrivateKey::from_hex(hex_str),
        }
    }

    /// Re-encode as `target`.
    ///
    /// `netcode` selects the WIF prefix and is only consulted when `target`
    /// is [`KeyFormat::Wif`].
    pub fn convert(
        &self,
        target: KeyFormat,
        networks: &NetworkTable,
        netcode: &str,
    ) -> Result<PrivateKeyEncoding, KeyError> {
        let key = self.to_private_key()?;
        Ok(match target {
            KeyFormat::Der => PrivateKeyEncoding::Der(key.to_der()?),
            KeyFormat::Pem => PrivateKeyEncoding::Pem(key.to_pem()?),
            KeyFormat::Wif => PrivateKeyEncoding::Wif(key.to_wif(networks.wif_prefix(netcode)?)),
            KeyFormat::Hex => PrivateKeyEncoding::Hex(key.to_hex()),
        })
    }

    /// Hex secret exponent.
    pub fn to_privkey(&self) -> Result<String, KeyError> {
        Ok(self.to_private_key()?.to_hex())
    }

    /// Compressed public key as hex.
    pub fn to_pubkey(&self) -> Result<String, KeyError> {
        Ok(self.to_private_key()?.pub_key().to_hex())
    }

    /// P2PKH address on `netcode`, committing to the compressed public key.
    pub fn to_address(&self, networks: &NetworkTable, netcode: &str) -> Result<String, KeyError> {
        let prefix = networks.address_prefix(netcode)?;
        Ok(self.to_private_key()?.pub_key().to_address(prefix, true))
    }
}
