//! Network codes and their WIF / address version bytes.
//!
//! The mapping is data, not code: a [`NetworkTable`] is built by the caller
//! (from the built-in defaults, from JSON, or entry by entry) and passed to
//! every function that produces or inspects a WIF or an address.

use serde::{Deserialize, Serialize};

use crate::KeyError;

/// A network selectable by its symbolic code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Symbolic code such as `"BTC"` or `"XTN"`.
    pub code: String,
    /// Human readable name.
    #[serde(default)]
    pub name: String,
    /// Version byte prepended to WIF private keys.
    pub wif_prefix: u8,
    /// Version byte prepended to P2PKH addresses.
    pub address_prefix: u8,
}

impl Network {
    /// Create a network entry.
    pub fn new(code: &str, name: &str, wif_prefix: u8, address_prefix: u8) -> Self {
        Network {
            code: code.to_string(),
            name: name.to_string(),
            wif_prefix,
            address_prefix,
        }
    }
}

/// Built-in networks as (code, name, WIF prefix, address prefix).
const BUILTIN_NETWORKS: &[(&str, &str, u8, u8)] = &[
    ("BTC", "Bitcoin", 0x80, 0x00),
    ("XTN", "Bitcoin testnet3", 0xef, 0x6f),
    ("LTC", "Litecoin", 0xb0, 0x30),
    ("XLT", "Litecoin testnet", 0xef, 0x6f),
    ("DOGE", "Dogecoin", 0x9e, 0x1e),
    ("XDT", "Dogecoin testnet", 0xf1, 0x71),
    ("DASH", "Dash", 0xcc, 0x4c),
    ("tDASH", "Dash testnet", 0xef, 0x8c),
    ("VIA", "Viacoin", 0xc7, 0x47),
    ("TVI", "Viacoin testnet", 0xff, 0x7f),
];

/// Ordered, caller-owned table of recognized networks.
///
/// Lookups by code are exact. Reverse lookups by prefix return the first
/// entry in table order, so when two networks share a prefix the one
/// registered earlier wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkTable {
    networks: Vec<Network>,
}

impl NetworkTable {
    /// Create an empty table.
    pub fn new() -> Self {
        NetworkTable { networks: Vec::new() }
    }

    /// Load a table from a JSON array of network entries.
    ///
    /// # Arguments
    /// * `json` - e.g. `[{"code":"BTC","wif_prefix":128,"address_prefix":0}]`
    ///
    /// # Returns
    /// The table, or `KeyError::Config` if the JSON is malformed or a code
    /// appears twice.
    pub fn from_json(json: &str) -> Result<Self, KeyError> {
        let networks: Vec<Network> = serde_json::from_str(json)?;
        let mut table = NetworkTable::new();
        for network in networks {
            if table.contains(&network.code) {
                return Err(KeyError::Config(format!(
                    "duplicate network code {}",
                    network.code
                )));
            }
            table.register(network);
        }
        Ok(table)
    }

    /// Serialize the table as a JSON array.
    pub fn to_json(&self) -> Result<String, KeyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a network, replacing any existing entry with the same code in place.
    pub fn register(&mut self, network: Network) {
        tracing::debug!(
            code = %network.code,
            wif_prefix = network.wif_prefix,
            address_prefix = network.address_prefix,
            "registering network"
        );
        match self.networks.iter_mut().find(|n| n.code == network.code) {
            Some(existing) => *existing = network,
            None => self.networks.push(network),
        }
    }

    /// Whether `code` is a recognized network.
    pub fn contains(&self, code: &str) -> bool {
        self.networks.iter().any(|n| n.code == code)
    }

    /// Look up a network by code.
    ///
    /// # Returns
    /// The entry, or `KeyError::UnknownNetwork`.
    pub fn get(&self, code: &str) -> Result<&Network, KeyError> {
        self.networks
            .iter()
            .find(|n| n.code == code)
            .ok_or_else(|| KeyError::UnknownNetwork(code.to_string()))
    }

    /// WIF version byte for `code`.
    pub fn wif_prefix(&self, code: &str) -> Result<u8, KeyError> {
        Ok(self.get(code)?.wif_prefix)
    }

    /// Address version byte for `code`.
    pub fn address_prefix(&self, code: &str) -> Result<u8, KeyError> {
        Ok(self.get(code)?.address_prefix)
    }

    /// Network code whose WIF prefix is `prefix`.
    pub fn code_for_wif_prefix(&self, prefix: u8) -> Result<&str, KeyError> {
        self.networks
            .iter()
            .find(|n| n.wif_prefix == prefix)
            .map(|n| n.code.as_str())
            .ok_or_else(|| KeyError::UnknownNetwork(format!("wif prefix 0x{:02x}", prefix)))
    }

    /// Network code whose address prefix is `prefix`.
    pub fn code_for_address_prefix(&self, prefix: u8) -> Result<&str, KeyError> {
        self.networks
            .iter()
            .find(|n| n.address_prefix == prefix)
            .map(|n| n.code.as_str())
            .ok_or_else(|| {
                KeyError::UnknownNetwork(format!("address prefix 0x{:02x}", prefix))
            })
    }

    /// Iterate over the networks in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Network> {
        self.networks.iter()
    }

    /// Number of networks in the table.
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Whether the table has no networks.
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl Default for NetworkTable {
    /// The built-in networks.
    fn default() -> Self {
        let mut table = NetworkTable::new();
        for (code, name, wif_prefix, address_prefix) in BUILTIN_NETWORKS {
            table.register(Network::new(code, name, *wif_prefix, *address_prefix));
        }
        table
    }
}
